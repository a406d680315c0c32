use crate::bits::BitUnpacker;
use crate::error::FormatError;
use crate::huffman::{CodeTable, HuffmanTable};

pub struct HuffmanDecoder {
    pub table: HuffmanTable,
}

impl HuffmanDecoder {
    pub fn new(codes: &CodeTable) -> Result<Self, FormatError> {
        Ok(Self {
            table: HuffmanTable::new(codes)?,
        })
    }

    /// Decodes exactly `count` symbols from `packed`.
    ///
    /// Padding bits after the last symbol are never decoded, but every payload
    /// byte must hold at least one bit of a symbol.
    pub fn unpack(&self, packed: &[u8], count: usize) -> Result<Vec<u8>, FormatError> {
        // Every code is at least one bit long.
        if packed.len().saturating_mul(8) < count {
            return Err(FormatError::TruncatedPayload {
                decoded: 0,
                expected: count,
            });
        }

        let mut reader = BitUnpacker::new(packed);
        let mut unpacked = Vec::with_capacity(count);

        while unpacked.len() < count {
            if reader.remaining() == 0 {
                return Err(FormatError::TruncatedPayload {
                    decoded: unpacked.len(),
                    expected: count,
                });
            }

            let (symbol, code) = self
                .table
                .lookup(reader.peek_byte())
                .ok_or(FormatError::NoMatchingCode(reader.position()))?;

            if usize::from(code.len) > reader.remaining() {
                return Err(FormatError::TruncatedPayload {
                    decoded: unpacked.len(),
                    expected: count,
                });
            }

            reader.consume(usize::from(code.len));
            unpacked.push(symbol);
        }

        let used = reader.position().div_ceil(8);
        if packed.len() > used {
            return Err(FormatError::TrailingBytes(packed.len() - used));
        }

        log::trace!("unpacked {} symbols from {} bits", count, reader.position());

        Ok(unpacked)
    }
}
