//! Errors reported by register operations.  Every fallible call returns its own `Error`; nothing
//! is recorded anywhere else.
use alloc::string::String;

use thiserror::Error;

pub type Result<T> = core::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Registers hold at least one bit
    #[error("invalid register length {0}")]
    InvalidLength(usize),
    #[error("allocation of {bits} bits failed")]
    OutOfMemory { bits: usize },
    /// Text is neither `0x` followed by hex digits nor a string of `0`s and `1`s
    #[error("invalid bit string {text:?}")]
    Syntax { text: String },
    #[error("bit string length {found} does not match register width {expected}")]
    LengthMismatch { expected: usize, found: usize },
    #[error("bit range {msb}:{lsb} will not fit in {len} bits")]
    OutOfBounds { msb: usize, lsb: usize, len: usize },
    /// A range read wider than 64 bits had bits set above the 64th
    #[error("{width}-bit range does not fit in a u64")]
    ValueOverflow { width: usize },
    #[error("transport failure: {0}")]
    Transport(String),
}
