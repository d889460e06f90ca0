//! Storage for a fixed-width shift register.  Bit 0 is the least significant bit, which is also
//! the first bit clocked out of the chain on TDO and the first one clocked in on TDI.
use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::range::BitRange;

pub(crate) const WORD_BITS: usize = u64::BITS as usize;

fn words_for(bits: usize) -> usize {
    bits.div_ceil(WORD_BITS)
}

fn alloc_words(words: &mut Vec<u64>, count: usize, bits: usize) -> Result<()> {
    words
        .try_reserve_exact(count.saturating_sub(words.len()))
        .map_err(|_| Error::OutOfMemory { bits })
}

#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Register {
    // Bits above `len` in the last word are always zero
    pub(crate) words: Vec<u64>,
    pub(crate) len: usize,
}

impl Register {
    /// Create a register of `len` bits, all cleared
    pub fn new(len: usize) -> Result<Self> {
        if len == 0 {
            return Err(Error::InvalidLength(len));
        }
        let count = words_for(len);
        let mut words = Vec::new();
        alloc_words(&mut words, count, len)?;
        words.resize(count, 0);
        Ok(Self { words, len })
    }

    /// Change the width of the register.  The low `min(len, new_len)` bits are kept and any new
    /// high bits are cleared.  On error the register is left untouched.
    pub fn resize(&mut self, new_len: usize) -> Result<()> {
        if new_len == 0 {
            return Err(Error::InvalidLength(new_len));
        }
        let count = words_for(new_len);
        alloc_words(&mut self.words, count, new_len)?;
        log::debug!("resizing register from {} to {} bits", self.len, new_len);

        self.words.resize(count, 0);
        self.len = new_len;
        self.mask_tail();
        Ok(())
    }

    /// Copy the register into independently allocated storage
    pub fn duplicate(&self) -> Result<Self> {
        let mut words = Vec::new();
        alloc_words(&mut words, self.words.len(), self.len)?;
        words.extend_from_slice(&self.words);
        Ok(Self { words, len: self.len })
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn bit(&self, index: usize) -> Option<bool> {
        if index >= self.len {
            return None;
        }
        Some(self.get(index))
    }

    pub fn set_bit(&mut self, index: usize, value: bool) -> Result<()> {
        BitRange::new(index, index).check(self.len)?;
        self.put(index, value);
        Ok(())
    }

    pub fn count_ones(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Write `value` into the bits `msb..=lsb`.  Bit 0 of `value` lands on `lsb`; value bits that
    /// don't fit in the range are dropped.
    pub fn set_value_range(&mut self, value: u64, msb: usize, lsb: usize) -> Result<()> {
        let range = BitRange::new(msb, lsb);
        range.check(self.len)?;
        self.store_lsb_first(range, (0..WORD_BITS).map(|b| (value >> b) & 1 == 1));
        Ok(())
    }

    /// Read the bits `msb..=lsb` as an unsigned value with `lsb` as its least significant bit
    pub fn get_value_range(&self, msb: usize, lsb: usize) -> Result<u64> {
        let range = BitRange::new(msb, lsb);
        range.check(self.len)?;

        let mut value = 0;
        for (b, index) in range.indices().rev().enumerate() {
            if !self.get(index) {
                continue;
            }
            if b >= WORD_BITS {
                return Err(Error::ValueOverflow {
                    width: range.width(),
                });
            }
            value |= 1 << b;
        }
        Ok(value)
    }

    pub fn set_value(&mut self, value: u64) -> Result<()> {
        self.set_value_range(value, self.len - 1, 0)
    }

    pub fn get_value(&self) -> Result<u64> {
        self.get_value_range(self.len - 1, 0)
    }

    pub(crate) fn get(&self, index: usize) -> bool {
        (self.words[index / WORD_BITS] >> (index % WORD_BITS)) & 1 == 1
    }

    pub(crate) fn put(&mut self, index: usize, value: bool) {
        let word = &mut self.words[index / WORD_BITS];
        let mask = 1 << (index % WORD_BITS);
        if value {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    }

    /// Store `bits` into an already checked range starting from its `lsb` end.  The range is
    /// zero-filled if `bits` runs out and surplus bits are ignored.
    pub(crate) fn store_lsb_first<I>(&mut self, range: BitRange, bits: I)
    where
        I: IntoIterator<Item = bool>,
    {
        let mut bits = bits.into_iter();
        for index in range.indices().rev() {
            self.put(index, bits.next().unwrap_or(false));
        }
    }

    /// Clear the unused bits of the last word
    pub(crate) fn mask_tail(&mut self) {
        let used = self.len % WORD_BITS;
        if used != 0 {
            if let Some(last) = self.words.last_mut() {
                *last &= (1 << used) - 1;
            }
        }
    }
}
