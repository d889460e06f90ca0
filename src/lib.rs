//! This crate provides the registers that get shifted through a JTAG scan chain.  A `Register`
//! is a fixed-width bit vector, bit 0 being the least significant bit and the first one to be
//! clocked in or out.  The same bits can be viewed in several ways:
//!
//! - as a bit string, most significant bit first (`Display`, `set_from_str`)
//! - as a number, either in full or over any `msb..=lsb` range (`get_value_range`,
//!   `set_value_range`), or as a hex numeral (`0x...`, `{:x}`)
//! - as the LSB-first bytes that cable drivers send and receive (`to_bytes`, `set_bytes`)
//!
//! Ranges may be addressed in either direction.  The order of `msb` and `lsb` decides the order
//! in which a bit string is consumed or produced, while a number always puts its least
//! significant bit at the `lsb` end.
//!
//! Registers also behave like the hardware they model: they can be incremented, decremented and
//! shifted, compared against each other, and matched against patterns containing don't-care
//! (`?`) bits, which is how expected boundary-scan values are usually written.
//!
//! Actually clocking a register through the hardware is up to an implementation of the `Chain`
//! trait.  `Loopback` is a software TAP that can stand in for real hardware.
//!
//! # Example
//! ```
//! use tap_register::{Chain, Loopback, Register, RegisterKind};
//!
//! let mut tap = Loopback::new(4, 8).unwrap();
//! let mut reg = Register::new(8).unwrap();
//! reg.set_from_str("0xa5").unwrap();
//! tap.shift(RegisterKind::Data, &mut reg).unwrap();
//!
//! assert_eq!(tap.data().to_string(), "10100101");
//! assert!(reg.matches("0000????"));
//! ```

#![no_std]

extern crate alloc;

pub mod chain;
pub mod error;
pub mod range;
pub mod register;

mod algebra;
mod codec;
mod pack;
mod serdes;

pub use chain::{Chain, Loopback, RegisterKind};
pub use error::{Error, Result};
pub use range::BitRange;
pub use register::Register;
