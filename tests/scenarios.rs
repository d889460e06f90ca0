use tap_register::{Error, Register};

#[test]
fn new_registers_are_zero() {
    for w in [1, 7, 8, 63, 64, 65, 200] {
        let r = Register::new(w).unwrap();
        assert_eq!(r.to_string(), "0".repeat(w));
    }
}

#[test]
fn load_then_increment() {
    let mut r = Register::new(8).unwrap();
    r.set_from_str("00000101").unwrap();
    assert_eq!(r.get_value().unwrap(), 5);
    r.increment();
    assert_eq!(r.to_string(), "00000110");
}

#[test]
fn value_into_top_bits() {
    let mut r = Register::new(4).unwrap();
    r.set_value_range(0b11, 3, 2).unwrap();
    assert_eq!(r.to_string(), "1100");
}

#[test]
fn uniform_bits() {
    let parse = |s: &str| s.parse::<Register>().unwrap();
    assert_eq!(parse("0000").all_bits_equal(), Some(false));
    assert_eq!(parse("1111").all_bits_equal(), Some(true));
    assert_eq!(parse("0101").all_bits_equal(), None);
}

#[test]
fn wildcard_patterns() {
    let r: Register = "1101".parse().unwrap();
    assert!(r.matches("1?01"));
    let r: Register = "1111".parse().unwrap();
    assert!(!r.matches("1?01"));
}

#[test]
fn expected_versus_observed() {
    // A boundary-scan capture compared against an expectation loaded from hex
    let mut expected = Register::new(16).unwrap();
    expected.set_from_str("0xbeef").unwrap();
    let mut observed = expected.duplicate().unwrap();
    assert_eq!(observed, expected);

    observed.set_bit(3, false).unwrap();
    assert_ne!(observed, expected);
    assert!(observed.matches("101111101110?111"));
    assert!(expected.matches("101111101110?111"));
}

#[test]
fn zero_range_read_is_distinct_from_bad_bounds() {
    let r = Register::new(8).unwrap();
    assert_eq!(r.get_value_range(3, 0), Ok(0));
    assert_eq!(
        r.get_value_range(3, 9),
        Err(Error::OutOfBounds { msb: 3, lsb: 9, len: 8 })
    );
}

#[test]
fn resize_between_scans() {
    let mut r: Register = "1011".parse().unwrap();
    r.resize(6).unwrap();
    assert_eq!(r.to_string(), "001011");
    r.resize(2).unwrap();
    assert_eq!(r.to_string(), "11");
    assert_eq!(r.resize(0), Err(Error::InvalidLength(0)));
    assert_eq!(r.to_string(), "11");
}
