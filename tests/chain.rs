use tap_register::{Chain, Loopback, Register, RegisterKind};

/// Two TAPs daisy-chained: TDO of the first feeds TDI of the second
struct Daisy {
    first: Loopback,
    second: Loopback,
}

impl Chain for Daisy {
    fn shift(&mut self, kind: RegisterKind, reg: &mut Register) -> tap_register::Result<()> {
        self.first.shift(kind, reg)?;
        self.second.shift(kind, reg)
    }
}

#[test]
fn write_then_read_back() {
    let mut tap = Loopback::new(5, 16).unwrap();
    let mut dr = Register::new(16).unwrap();
    dr.set_from_str("0xcafe").unwrap();
    tap.shift(RegisterKind::Data, &mut dr).unwrap();
    assert_eq!(dr.get_value().unwrap(), 0);

    let mut readback = Register::new(16).unwrap();
    tap.shift(RegisterKind::Data, &mut readback).unwrap();
    assert_eq!(readback.get_value().unwrap(), 0xcafe);
    assert_eq!(readback.to_bytes(), (vec![0xfe, 0xca], 8));
}

#[test]
fn instruction_and_data_are_separate() {
    let mut tap = Loopback::new(4, 4).unwrap();
    let mut ir: Register = "0110".parse().unwrap();
    tap.shift(RegisterKind::Instruction, &mut ir).unwrap();
    assert_eq!(tap.instruction().to_string(), "0110");
    assert_eq!(tap.data().to_string(), "0000");
    assert!(!tap.in_bypass());
}

#[test]
fn bypass_selects_one_bit_register() {
    let mut tap = Loopback::new(4, 32).unwrap();
    let mut ir = Register::new(4).unwrap();
    ir.fill(true);
    tap.shift(RegisterKind::Instruction, &mut ir).unwrap();
    assert!(tap.in_bypass());

    // Each bit comes back one clock late
    let mut dr: Register = "101".parse().unwrap();
    tap.shift(RegisterKind::Data, &mut dr).unwrap();
    assert_eq!(dr.to_string(), "010");
}

#[test]
fn daisy_chain_through_trait_objects() {
    let mut chain: Box<dyn Chain> = Box::new(Daisy {
        first: Loopback::new(2, 3).unwrap(),
        second: Loopback::new(2, 5).unwrap(),
    });

    // 8 bits fill both data registers; the first five bits end up in the second TAP
    let mut dr: Register = "11001101".parse().unwrap();
    chain.shift(RegisterKind::Data, &mut dr).unwrap();
    assert_eq!(dr.all_bits_equal(), Some(false));

    let mut readback = Register::new(8).unwrap();
    chain.shift(RegisterKind::Data, &mut readback).unwrap();
    assert!(readback.matches("11001101"));
}
