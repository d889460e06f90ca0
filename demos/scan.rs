use tap_register::{Chain, Loopback, Register, RegisterKind};

fn main() -> tap_register::Result<()> {
    let mut tap = Loopback::new(8, 32)?;

    let mut ir = Register::new(8)?;
    ir.set_from_str("0xeb")?;
    tap.shift(RegisterKind::Instruction, &mut ir)?;
    println!("ir: {:#x} (captured {})", tap.instruction(), ir);

    let mut dr = Register::new(32)?;
    dr.set_value(0x8877_6655)?;
    tap.shift(RegisterKind::Data, &mut dr)?;

    let mut readback = Register::new(32)?;
    tap.shift(RegisterKind::Data, &mut readback)?;
    print!("dr: ");
    for x in readback.to_bytes().0 {
        print!("{:x} ", x);
    }
    println!();
    println!("dr[15:8] = {:#x}", readback.get_value_range(15, 8)?);

    let expected = "10001000011101110110011001010101";
    println!("matches {}: {}", expected, readback.matches(expected));

    // Put the TAP in BYPASS; the data register now delays the stream by one bit
    ir.fill(true);
    tap.shift(RegisterKind::Instruction, &mut ir)?;
    let mut probe: Register = "0001".parse()?;
    tap.shift(RegisterKind::Data, &mut probe)?;
    println!("bypass: {} -> {}", "0001", probe);

    Ok(())
}
