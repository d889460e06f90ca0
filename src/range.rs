//! Addressing of contiguous bit ranges.  A range is given as an `(msb, lsb)` pair in either order.
//! It always covers `min..=max`, but the order of the pair decides the direction in which the bits
//! are visited: from `msb` toward `lsb`.  Text is read and written in that order, while numeric
//! values put their least significant bit at the `lsb` end.
use crate::error::{Error, Result};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct BitRange {
    pub msb: usize,
    pub lsb: usize,
}

impl BitRange {
    pub fn new(msb: usize, lsb: usize) -> Self {
        Self { msb, lsb }
    }

    /// The range covering a whole register of `len` bits, most significant bit first
    pub fn full(len: usize) -> Self {
        Self::new(len.saturating_sub(1), 0)
    }

    pub fn low(&self) -> usize {
        self.msb.min(self.lsb)
    }

    pub fn high(&self) -> usize {
        self.msb.max(self.lsb)
    }

    /// Number of bits covered by the range
    pub fn width(&self) -> usize {
        self.high() - self.low() + 1
    }

    /// True when the range is visited from high indices to low ones
    pub fn is_descending(&self) -> bool {
        self.msb >= self.lsb
    }

    /// Check that both ends of the range address a bit of a `len`-bit register
    pub fn check(&self, len: usize) -> Result<()> {
        if self.msb >= len || self.lsb >= len {
            return Err(Error::OutOfBounds {
                msb: self.msb,
                lsb: self.lsb,
                len,
            });
        }
        Ok(())
    }

    /// Bit indices from `msb` to `lsb`.  Reverse the iterator to get them in value order.
    pub fn indices(&self) -> Indices {
        Indices {
            low: self.low(),
            high: self.high(),
            remaining: self.width(),
            descending: self.is_descending(),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Indices {
    low: usize,
    high: usize,
    remaining: usize,
    descending: bool,
}

impl Indices {
    fn take_low(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let index = self.low;
        if self.remaining > 0 {
            self.low += 1;
        }
        Some(index)
    }

    fn take_high(&mut self) -> Option<usize> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;
        let index = self.high;
        if self.remaining > 0 {
            self.high -= 1;
        }
        Some(index)
    }
}

impl Iterator for Indices {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        if self.descending {
            self.take_high()
        } else {
            self.take_low()
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl DoubleEndedIterator for Indices {
    fn next_back(&mut self) -> Option<usize> {
        if self.descending {
            self.take_low()
        } else {
            self.take_high()
        }
    }
}

impl ExactSizeIterator for Indices {}
