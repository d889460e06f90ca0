//! The seam between registers and whatever actually clocks them through a scan chain.  A
//! hardware adapter (or a simulator) implements the `Chain` trait; callers build a `Register`,
//! hand it to `Chain::shift`, and read the captured bits back out of the same register.
use alloc::boxed::Box;

use crate::error::Result;
use crate::register::Register;

pub mod loopback;

pub use loopback::Loopback;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterKind {
    Data,
    Instruction,
}

pub trait Chain {
    /// Shift `reg` into the instruction or data register, bit 0 first.  On return `reg` holds
    /// the bits that came out of TDO in the same order, so the first bit read lands in bit 0.
    /// Implementations report hardware failures as `Error::Transport`.
    fn shift(&mut self, kind: RegisterKind, reg: &mut Register) -> Result<()>;
}

impl<C: Chain + ?Sized> Chain for &mut C {
    fn shift(&mut self, kind: RegisterKind, reg: &mut Register) -> Result<()> {
        (**self).shift(kind, reg)
    }
}

impl<C: Chain + ?Sized> Chain for Box<C> {
    fn shift(&mut self, kind: RegisterKind, reg: &mut Register) -> Result<()> {
        (**self).shift(kind, reg)
    }
}
