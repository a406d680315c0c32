//! Container layout, all integers big-endian:
//!
//! | offset  | size   | field                                   |
//! |---------|--------|-----------------------------------------|
//! | 0       | 4      | original symbol count                   |
//! | 4       | 1      | dictionary entry count `D`              |
//! | 5       | 3 * D  | entries: code byte, symbol byte, length |
//! | 5 + 3D  | rest   | packed payload                          |
//!
//! The count field is a full `u32`; no smaller ceiling is imposed.

use std::io::Cursor;

use byteorder::{BigEndian, ByteOrder, ReadBytesExt};
use itertools::Itertools;

use crate::error::{CapacityError, FormatError};
use crate::huffman::{Code, CodeTable};

pub const HEADER_LEN: usize = 5;
pub const DICTIONARY_ENTRY_LEN: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Container<'a> {
    pub original_len: u32,
    pub codes: CodeTable,
    pub payload: &'a [u8],
}

impl<'a> Container<'a> {
    pub fn encoded_len(&self) -> usize {
        HEADER_LEN + self.codes.len() * DICTIONARY_ENTRY_LEN + self.payload.len()
    }

    pub fn to_bytes(&self) -> Result<Vec<u8>, CapacityError> {
        let mut out = Vec::with_capacity(self.encoded_len());
        self.write_to(&mut out)?;
        Ok(out)
    }

    pub fn write_to(&self, out: &mut Vec<u8>) -> Result<(), CapacityError> {
        let entries = u8::try_from(self.codes.len())
            .map_err(|_| CapacityError::TooManySymbols(self.codes.len()))?;

        let mut header = [0u8; HEADER_LEN];
        BigEndian::write_u32(&mut header[..4], self.original_len);
        header[4] = entries;
        out.extend_from_slice(&header);

        for (symbol, code) in self.codes.iter() {
            out.extend_from_slice(&[code.bits, symbol, code.len]);
        }

        out.extend_from_slice(self.payload);
        Ok(())
    }

    /// Splits `bytes` into header, dictionary and payload.
    ///
    /// Each dictionary entry is checked on its own here; prefix conflicts
    /// between entries surface when a decoder table is built from `codes`.
    pub fn parse(bytes: &'a [u8]) -> Result<Self, FormatError> {
        let mut cursor = Cursor::new(bytes);
        let original_len = cursor
            .read_u32::<BigEndian>()
            .map_err(|_| FormatError::TruncatedHeader(HEADER_LEN))?;
        let entries = cursor
            .read_u8()
            .map_err(|_| FormatError::TruncatedHeader(HEADER_LEN))? as usize;

        let rest = &bytes[HEADER_LEN..];
        let expected = entries * DICTIONARY_ENTRY_LEN;
        if rest.len() < expected {
            return Err(FormatError::TruncatedDictionary {
                expected,
                available: rest.len(),
            });
        }

        let (dictionary, payload) = rest.split_at(expected);
        let codes = CodeTable::from_entries(
            dictionary
                .iter()
                .copied()
                .tuples()
                .map(|(bits, symbol, len)| (symbol, Code::new(bits, len))),
        )?;

        if original_len > 0 && codes.is_empty() {
            return Err(FormatError::MissingDictionary(original_len));
        }

        Ok(Self {
            original_len,
            codes,
            payload,
        })
    }
}
