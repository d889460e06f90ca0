//! Conversion between a register and the byte buffers that cable drivers shift.  Drivers take the
//! data as bytes clocked least significant bit first, together with the number of bits to send
//! from the final byte, so a register of `len` bits becomes `ceil(len / 8)` bytes and a count in
//! `1..=8`.
use alloc::vec::Vec;

use crate::error::{Error, Result};
use crate::register::Register;

impl Register {
    /// Pack the register LSB first.  Returns the bytes and the number of valid bits in the last
    /// byte.
    pub fn to_bytes(&self) -> (Vec<u8>, u8) {
        let bytes = self.len.div_ceil(8);
        let out = self
            .words
            .iter()
            .flat_map(|w| w.to_le_bytes())
            .take(bytes)
            .collect();

        let mut bits = (self.len % 8) as u8;
        if bits == 0 {
            bits = 8;
        }
        (out, bits)
    }

    /// Load the register from bytes packed LSB first, as returned by a cable read.  Bits of the
    /// last byte beyond the register width are ignored.
    pub fn set_bytes(&mut self, data: &[u8]) -> Result<()> {
        let bytes = self.len.div_ceil(8);
        if data.len() != bytes {
            return Err(Error::LengthMismatch {
                expected: bytes,
                found: data.len(),
            });
        }

        for (word, chunk) in self.words.iter_mut().zip(data.chunks(8)) {
            let mut buf = [0; 8];
            buf[..chunk.len()].copy_from_slice(chunk);
            *word = u64::from_le_bytes(buf);
        }
        self.mask_tail();
        Ok(())
    }
}
