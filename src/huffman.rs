use std::fmt;

use crate::error::FormatError;

/// Longest code a dictionary entry can describe.
pub const MAX_CODE_LEN: u8 = 8;
/// The dictionary count is a single byte.
pub const MAX_DICTIONARY_ENTRIES: usize = 255;

type SymbolIndex = [Option<Code>; 256];
type CodeDictionary = [Option<(u8, Code)>; 256];

/// A prefix code: `len` bits, right-aligned in `bits`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Code {
    pub bits: u8,
    pub len: u8,
}

impl Code {
    pub const fn new(bits: u8, len: u8) -> Self {
        Self { bits, len }
    }

    /// The code moved to the top of a byte, as a decoder's 8-bit window sees it.
    pub fn left_aligned(self) -> u8 {
        self.bits << (MAX_CODE_LEN - self.len)
    }

    pub fn is_prefix_of(self, other: Code) -> bool {
        self.len <= other.len && other.bits >> (other.len - self.len) == self.bits
    }

    fn validate(self, symbol: u8) -> Result<(), FormatError> {
        if self.len == 0 || self.len > MAX_CODE_LEN {
            return Err(FormatError::InvalidCodeLength {
                symbol,
                len: self.len,
            });
        }
        if self.len < MAX_CODE_LEN && self.bits >> self.len != 0 {
            return Err(FormatError::CodeOutOfRange {
                symbol,
                code: self.bits,
                len: self.len,
            });
        }
        Ok(())
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:0width$b}", self.bits, width = self.len as usize)
    }
}

/// Symbol to code mapping, kept in dictionary order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeTable {
    entries: Vec<(u8, Code)>,
    by_symbol: SymbolIndex,
}

impl Default for CodeTable {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            by_symbol: [None; 256],
        }
    }
}

impl CodeTable {
    /// Checks each entry on its own: code length, code range, repeated symbols.
    ///
    /// Prefix conflicts between entries are caught by [`HuffmanTable::new`].
    pub fn from_entries<I>(entries: I) -> Result<Self, FormatError>
    where
        I: IntoIterator<Item = (u8, Code)>,
    {
        let mut table = Self::default();
        for (symbol, code) in entries {
            code.validate(symbol)?;
            let slot = &mut table.by_symbol[symbol as usize];
            if slot.is_some() {
                return Err(FormatError::DuplicateSymbol(symbol));
            }
            *slot = Some(code);
            table.entries.push((symbol, code));
        }
        Ok(table)
    }

    /// Entries read off a Huffman tree, distinct leaves by construction.
    pub(crate) fn from_derived(entries: Vec<(u8, Code)>) -> Self {
        let mut by_symbol = [None; 256];
        for &(symbol, code) in &entries {
            by_symbol[symbol as usize] = Some(code);
        }
        let table = Self { entries, by_symbol };
        debug_assert!(table.is_prefix_free());
        table
    }

    pub fn get(&self, symbol: u8) -> Option<Code> {
        self.by_symbol[symbol as usize]
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (u8, Code)> + '_ {
        self.entries.iter().copied()
    }

    pub fn is_prefix_free(&self) -> bool {
        self.entries.iter().enumerate().all(|(i, &(_, a))| {
            self.entries[i + 1..]
                .iter()
                .all(|&(_, b)| !a.is_prefix_of(b) && !b.is_prefix_of(a))
        })
    }
}

/// Decode lookup indexed by the next 8 bits of the stream.
///
/// A code of length `n` owns the `2^(8-n)` windows that start with it, so every
/// window resolves to at most one symbol.
pub struct HuffmanTable {
    pub code_dict: CodeDictionary,
}

impl Default for HuffmanTable {
    fn default() -> Self {
        Self {
            code_dict: [None; 256],
        }
    }
}

impl HuffmanTable {
    pub fn new(codes: &CodeTable) -> Result<Self, FormatError> {
        let mut table = Self::default();

        for (symbol, code) in codes.iter() {
            let start = code.left_aligned() as usize;
            let span = 1usize << (MAX_CODE_LEN - code.len);

            for slot in &mut table.code_dict[start..start + span] {
                if let Some((first, _)) = *slot {
                    return Err(FormatError::AmbiguousCode {
                        first,
                        second: symbol,
                    });
                }
                *slot = Some((symbol, code));
            }
        }

        Ok(table)
    }

    pub fn lookup(&self, window: u8) -> Option<(u8, Code)> {
        self.code_dict[window as usize]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_display_keeps_leading_zeros() {
        assert_eq!(Code::new(0b01, 2).to_string(), "01");
        assert_eq!(Code::new(0, 1).to_string(), "0");
        assert_eq!(Code::new(0b1010_0101, 8).to_string(), "10100101");
    }

    #[test]
    fn test_prefix_relation() {
        assert!(Code::new(0b1, 1).is_prefix_of(Code::new(0b10, 2)));
        assert!(!Code::new(0b0, 1).is_prefix_of(Code::new(0b10, 2)));
        assert!(!Code::new(0b10, 2).is_prefix_of(Code::new(0b1, 1)));
        // Same bits, different lengths.
        assert!(Code::new(0b01, 2).is_prefix_of(Code::new(0b010, 3)));
        assert!(!Code::new(0b01, 2).is_prefix_of(Code::new(0b001, 3)));
    }

    #[test]
    fn test_rejects_bad_entries() {
        assert_eq!(
            CodeTable::from_entries([(7, Code::new(0, 0))]),
            Err(FormatError::InvalidCodeLength { symbol: 7, len: 0 })
        );
        assert_eq!(
            CodeTable::from_entries([(7, Code::new(0, 9))]),
            Err(FormatError::InvalidCodeLength { symbol: 7, len: 9 })
        );
        assert_eq!(
            CodeTable::from_entries([(7, Code::new(0b100, 2))]),
            Err(FormatError::CodeOutOfRange {
                symbol: 7,
                code: 0b100,
                len: 2
            })
        );
        assert_eq!(
            CodeTable::from_entries([(7, Code::new(0, 1)), (7, Code::new(1, 1))]),
            Err(FormatError::DuplicateSymbol(7))
        );
    }

    #[test]
    fn test_lookup_covers_every_window_of_a_complete_code() {
        let codes = CodeTable::from_entries([
            (b'a', Code::new(0b0, 1)),
            (b'b', Code::new(0b10, 2)),
            (b'c', Code::new(0b110, 3)),
            (b'd', Code::new(0b111, 3)),
        ])
        .unwrap();
        assert!(codes.is_prefix_free());

        let table = HuffmanTable::new(&codes).unwrap();
        assert!(table.code_dict.iter().all(Option::is_some));
        assert_eq!(table.lookup(0b0111_1111).unwrap().0, b'a');
        assert_eq!(table.lookup(0b1000_0000).unwrap().0, b'b');
        assert_eq!(table.lookup(0b1101_0101).unwrap().0, b'c');
        assert_eq!(table.lookup(0b1110_0000).unwrap().0, b'd');
    }

    #[test]
    fn test_lookup_leaves_gaps_for_incomplete_code() {
        let codes = CodeTable::from_entries([(5, Code::new(0, 1))]).unwrap();
        let table = HuffmanTable::new(&codes).unwrap();
        assert_eq!(table.lookup(0x7f), Some((5, Code::new(0, 1))));
        assert_eq!(table.lookup(0x80), None);
    }

    #[test]
    fn test_prefix_conflict_is_rejected() {
        let codes = CodeTable::from_entries([
            (1, Code::new(0b1, 1)),
            (2, Code::new(0b10, 2)),
        ])
        .unwrap();
        assert!(!codes.is_prefix_free());
        assert!(matches!(
            HuffmanTable::new(&codes),
            Err(FormatError::AmbiguousCode { first: 1, second: 2 })
        ));
    }

    #[test]
    fn test_duplicate_code_is_rejected() {
        let codes = CodeTable::from_entries([
            (1, Code::new(0b01, 2)),
            (2, Code::new(0b01, 2)),
        ])
        .unwrap();
        assert!(HuffmanTable::new(&codes).is_err());
    }
}
