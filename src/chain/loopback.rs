//! A software TAP.  It holds an instruction register, a data register and the one-bit bypass
//! register, and clocks bits through them exactly like the hardware would: every clock the bit
//! at index 0 leaves on TDO, the rest move one place toward it, and the TDI bit enters at the top.
//!
//! Loading the instruction register with all ones selects BYPASS, after which data shifts go
//! through the bypass register instead of the data register.
use crate::chain::{Chain, RegisterKind};
use crate::error::Result;
use crate::register::Register;

pub struct Loopback {
    ir: Register,
    dr: Register,
    bypass: Register,
}

impl Loopback {
    /// Create a TAP with an `ir_len`-bit instruction register and a `dr_len`-bit data register,
    /// both cleared
    pub fn new(ir_len: usize, dr_len: usize) -> Result<Self> {
        Ok(Self {
            ir: Register::new(ir_len)?,
            dr: Register::new(dr_len)?,
            bypass: Register::new(1)?,
        })
    }

    pub fn instruction(&self) -> &Register {
        &self.ir
    }

    pub fn data(&self) -> &Register {
        &self.dr
    }

    /// True when the instruction register holds the BYPASS opcode
    pub fn in_bypass(&self) -> bool {
        self.ir.all_bits_equal() == Some(true)
    }

    fn selected(&mut self, kind: RegisterKind) -> &mut Register {
        match kind {
            RegisterKind::Instruction => &mut self.ir,
            RegisterKind::Data if self.in_bypass() => &mut self.bypass,
            RegisterKind::Data => &mut self.dr,
        }
    }
}

fn clock(device: &mut Register, tdi: bool) -> bool {
    let tdo = device.get(0);
    device.shift_right(1);
    device.put(device.len() - 1, tdi);
    tdo
}

impl Chain for Loopback {
    fn shift(&mut self, kind: RegisterKind, reg: &mut Register) -> Result<()> {
        let device = self.selected(kind);
        log::debug!(
            "shifting {} bits through {:?} register of {} bits",
            reg.len(),
            kind,
            device.len()
        );

        for i in 0..reg.len() {
            let tdo = clock(device, reg.get(i));
            reg.put(i, tdo);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;

    #[test]
    fn full_width_shift_swaps_contents() {
        let mut tap = Loopback::new(4, 8).unwrap();
        let mut reg: Register = "10100101".parse().unwrap();
        tap.shift(RegisterKind::Data, &mut reg).unwrap();
        assert_eq!(reg.to_string(), "00000000");
        assert_eq!(tap.data().to_string(), "10100101");

        let mut reg: Register = "11110000".parse().unwrap();
        tap.shift(RegisterKind::Data, &mut reg).unwrap();
        assert_eq!(reg.to_string(), "10100101");
        assert_eq!(tap.data().to_string(), "11110000");
    }

    #[test]
    fn short_shift_moves_partially() {
        let mut tap = Loopback::new(2, 4).unwrap();
        let mut reg: Register = "11".parse().unwrap();
        tap.shift(RegisterKind::Data, &mut reg).unwrap();
        assert_eq!(tap.data().to_string(), "1100");
        assert_eq!(reg.to_string(), "00");

        let mut reg: Register = "01".parse().unwrap();
        tap.shift(RegisterKind::Data, &mut reg).unwrap();
        assert_eq!(tap.data().to_string(), "0111");
        assert_eq!(reg.to_string(), "00");
    }

    #[test]
    fn bypass_delays_by_one_bit() {
        let mut tap = Loopback::new(3, 8).unwrap();
        let mut ir: Register = "111".parse().unwrap();
        tap.shift(RegisterKind::Instruction, &mut ir).unwrap();
        assert!(tap.in_bypass());

        let mut reg: Register = "0011".parse().unwrap();
        tap.shift(RegisterKind::Data, &mut reg).unwrap();
        assert_eq!(reg.to_string(), "0110");
        assert_eq!(tap.data().to_string(), "00000000");
    }
}
