use bitvec::prelude::*;

use crate::huffman::{Code, MAX_CODE_LEN};

/// Concatenates codes most-significant-bit first with no padding between them.
///
/// A code that does not fit in the free bits of the current byte is split: its
/// high bits finish that byte and the rest open the next one. Only the final
/// byte is padded, with zero bits at the low end.
#[derive(Default)]
pub struct BitPacker {
    bits: BitVec<u8, Msb0>,
}

impl BitPacker {
    pub fn with_capacity(bits: usize) -> Self {
        Self {
            bits: BitVec::with_capacity(bits),
        }
    }

    /// Appends `code`, whose length must be in `1..=8`.
    pub(crate) fn push(&mut self, code: Code) {
        debug_assert!(
            (1..=MAX_CODE_LEN).contains(&code.len),
            "code length {} out of range",
            code.len
        );
        let skip = usize::from(MAX_CODE_LEN - code.len);
        self.bits
            .extend_from_bitslice(&code.bits.view_bits::<Msb0>()[skip..]);
    }

    /// Bits written so far.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    pub fn finish(self) -> Vec<u8> {
        let used = self.bits.len() % 8;
        let mut bytes = self.bits.into_vec();
        if used != 0 {
            if let Some(last) = bytes.last_mut() {
                *last &= u8::MAX << (8 - used);
            }
        }
        bytes
    }
}

/// Cursor over a packed payload, read most-significant-bit first.
pub struct BitUnpacker<'a> {
    bits: &'a BitSlice<u8, Msb0>,
    pos: usize,
}

impl<'a> BitUnpacker<'a> {
    pub fn new(bytes: &'a [u8]) -> Self {
        Self {
            bits: bytes.view_bits::<Msb0>(),
            pos: 0,
        }
    }

    /// Bit offset of the next unread bit.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.bits.len() - self.pos
    }

    /// The next 8 bits without consuming them, zero-filled past the end.
    pub fn peek_byte(&self) -> u8 {
        let end = (self.pos + 8).min(self.bits.len());
        let window = &self.bits[self.pos..end];
        if window.is_empty() {
            return 0;
        }
        window.load_be::<u8>() << (8 - window.len())
    }

    /// Advances past `n` bits, clamped to the end of the payload.
    pub fn consume(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.bits.len());
    }
}
