//! Whole-register operations: comparison, pattern matching, counting and shifting.  These mirror
//! what happens to a hardware shift register when it is clocked, so none of them report overflow.
use core::ops::{ShlAssign, ShrAssign};

use crate::register::{Register, WORD_BITS};

impl Register {
    /// Set every bit to `bit`
    pub fn fill(&mut self, bit: bool) {
        let word = if bit { u64::MAX } else { 0 };
        self.words.iter_mut().for_each(|w| *w = word);
        self.mask_tail();
    }

    /// Compare two optional registers.  Two missing registers are equal; a missing register is
    /// never equal to a present one.
    pub fn equal(a: Option<&Register>, b: Option<&Register>) -> bool {
        match (a, b) {
            (None, None) => true,
            (Some(a), Some(b)) => a == b,
            _ => false,
        }
    }

    /// Match against a pattern of `0`, `1` and `?` (don't care), most significant bit first
    pub fn matches(&self, pattern: &str) -> bool {
        if pattern.len() != self.len {
            return false;
        }
        pattern
            .bytes()
            .zip((0..self.len).rev())
            .all(|(c, index)| match c {
                b'?' => true,
                b'0' => !self.get(index),
                b'1' => self.get(index),
                _ => false,
            })
    }

    /// The value shared by every bit, or `None` if the register holds both zeros and ones
    pub fn all_bits_equal(&self) -> Option<bool> {
        match self.count_ones() {
            0 => Some(false),
            n if n == self.len => Some(true),
            _ => None,
        }
    }

    /// Add one, wrapping to all zeros after all ones
    pub fn increment(&mut self) {
        for w in self.words.iter_mut() {
            *w = w.wrapping_add(1);
            if *w != 0 {
                break;
            }
        }
        self.mask_tail();
    }

    /// Subtract one, wrapping to all ones after all zeros
    pub fn decrement(&mut self) {
        for w in self.words.iter_mut() {
            let borrow = *w == 0;
            *w = w.wrapping_sub(1);
            if !borrow {
                break;
            }
        }
        self.mask_tail();
    }

    /// Move every bit `n` places toward bit 0.  The top `n` bits are cleared.
    pub fn shift_right(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        if n >= self.len {
            self.fill(false);
            return;
        }

        let skip = n / WORD_BITS;
        let offset = n % WORD_BITS;
        let count = self.words.len();
        for i in 0..count {
            let lo = self.words.get(i + skip).copied().unwrap_or(0);
            let hi = self.words.get(i + skip + 1).copied().unwrap_or(0);
            self.words[i] = if offset == 0 {
                lo
            } else {
                (lo >> offset) | (hi << (WORD_BITS - offset))
            };
        }
    }

    /// Move every bit `n` places away from bit 0.  The low `n` bits are cleared and the top `n`
    /// bits are lost.
    pub fn shift_left(&mut self, n: usize) {
        if n == 0 {
            return;
        }
        if n >= self.len {
            self.fill(false);
            return;
        }

        let skip = n / WORD_BITS;
        let offset = n % WORD_BITS;
        for i in (0..self.words.len()).rev() {
            let word = if i < skip {
                0
            } else {
                let hi = self.words[i - skip];
                let lo = if i > skip { self.words[i - skip - 1] } else { 0 };
                if offset == 0 {
                    hi
                } else {
                    (hi << offset) | (lo >> (WORD_BITS - offset))
                }
            };
            self.words[i] = word;
        }
        self.mask_tail();
    }
}

impl ShrAssign<usize> for Register {
    fn shr_assign(&mut self, n: usize) {
        self.shift_right(n);
    }
}

impl ShlAssign<usize> for Register {
    fn shl_assign(&mut self, n: usize) {
        self.shift_left(n);
    }
}
