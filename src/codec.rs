//! Text forms of a register.  Two grammars are accepted when loading a register:
//!
//! - `0x` followed by one or more hex digits, stored as a number over the addressed bits.  High
//!   order digits that don't fit are dropped, just like `set_value_range` drops value bits.
//! - A string of `0`s and `1`s of exactly the addressed width, most significant bit first.
//!
//! Rendering always produces one character per bit, most significant first, so a register's
//! `Display` output can be fed straight back into `set_from_str`.
use alloc::string::{String, ToString};
use core::fmt;
use core::str::FromStr;

use crate::error::{Error, Result};
use crate::range::BitRange;
use crate::register::Register;

const HEX_PREFIX: &str = "0x";

fn syntax_error(text: &str) -> Error {
    Error::Syntax {
        text: text.to_string(),
    }
}

/// Bits of a hex numeral, least significant first
fn hex_bits<'a>(text: &str, digits: &'a str) -> Result<impl Iterator<Item = bool> + 'a> {
    if digits.is_empty() || !digits.bytes().all(|c| c.is_ascii_hexdigit()) {
        return Err(syntax_error(text));
    }
    Ok(digits
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(16))
        .flat_map(|nibble| (0..4).map(move |b| (nibble >> b) & 1 == 1)))
}

fn check_binary(text: &str, width: usize) -> Result<()> {
    if !text.bytes().all(|c| c == b'0' || c == b'1') {
        return Err(syntax_error(text));
    }
    if text.len() != width {
        return Err(Error::LengthMismatch {
            expected: width,
            found: text.len(),
        });
    }
    Ok(())
}

impl Register {
    /// Load the whole register from a hex numeral (`0x...`) or a bit string
    pub fn set_from_str(&mut self, text: &str) -> Result<()> {
        self.load_str(text, BitRange::full(self.len))
    }

    /// Load the bits `msb..=lsb` from a hex numeral or a bit string.  A bit string is consumed
    /// left to right while walking from `msb` to `lsb`.
    pub fn set_from_str_range(&mut self, text: &str, msb: usize, lsb: usize) -> Result<()> {
        let range = BitRange::new(msb, lsb);
        range.check(self.len)?;
        self.load_str(text, range)
    }

    /// Render the bits `msb..=lsb` in the order they are visited, from `msb` to `lsb`
    pub fn to_string_range(&self, msb: usize, lsb: usize) -> Result<String> {
        let range = BitRange::new(msb, lsb);
        range.check(self.len)?;
        Ok(self.render(range))
    }

    fn load_str(&mut self, text: &str, range: BitRange) -> Result<()> {
        if let Some(digits) = text.strip_prefix(HEX_PREFIX) {
            let bits = hex_bits(text, digits)?;
            self.store_lsb_first(range, bits);
            return Ok(());
        }

        check_binary(text, range.width())?;
        for (index, c) in range.indices().zip(text.bytes()) {
            self.put(index, c == b'1');
        }
        Ok(())
    }

    /// Load the register from text aligned to bit 0, the way a captured value is read back from
    /// a log.  The last character lands on bit 0; bits left over once the text runs out are
    /// cleared and surplus leading characters are ignored.  Any character other than `0` sets
    /// its bit.
    pub fn init(&mut self, text: &str) {
        let mut chars = text.bytes().rev();
        for index in 0..self.len {
            let bit = chars.next().map_or(false, |c| c != b'0');
            self.put(index, bit);
        }
    }

    fn render(&self, range: BitRange) -> String {
        range
            .indices()
            .map(|index| if self.get(index) { '1' } else { '0' })
            .collect()
    }

    /// One hex digit per four bits, zero padded to the register width
    fn render_hex(&self, upper: bool) -> Option<String> {
        let digits = self.len.div_ceil(4);
        (0..digits)
            .rev()
            .map(|d| {
                let low = d * 4;
                let high = low.saturating_add(3).min(self.len - 1);
                let nibble = BitRange::new(high, low)
                    .indices()
                    .fold(0u32, |acc, index| (acc << 1) | self.get(index) as u32);
                let c = char::from_digit(nibble, 16)?;
                Some(if upper { c.to_ascii_uppercase() } else { c })
            })
            .collect()
    }

    fn write_hex(&self, f: &mut fmt::Formatter<'_>, upper: bool) -> fmt::Result {
        let digits = self.render_hex(upper).ok_or(fmt::Error)?;
        f.pad_integral(true, HEX_PREFIX, &digits)
    }
}

impl fmt::Display for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.render(BitRange::full(self.len)))
    }
}

impl fmt::Binary for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad_integral(true, "0b", &self.render(BitRange::full(self.len)))
    }
}

impl fmt::LowerHex for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_hex(f, false)
    }
}

impl fmt::UpperHex for Register {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_hex(f, true)
    }
}

/// Parse a bit string into a register of the same width.  Hex numerals are rejected since they
/// don't say how wide the register is.
impl FromStr for Register {
    type Err = Error;

    fn from_str(text: &str) -> Result<Self> {
        check_binary(text, text.len())?;
        let mut reg = Register::new(text.len())?;
        reg.load_str(text, BitRange::full(text.len()))?;
        Ok(reg)
    }
}
