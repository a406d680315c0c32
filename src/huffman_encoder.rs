use crate::bits::BitPacker;
use crate::config::CodecConfig;
use crate::error::{CapacityError, HuffmanError};
use crate::frequency::FrequencyTable;
use crate::huffman::{CodeTable, MAX_DICTIONARY_ENTRIES};
use crate::tree::HuffmanTree;

#[derive(Default)]
pub struct HuffmanEncoder {
    config: CodecConfig,
    codes: CodeTable,
    compressed: BitPacker,
}

impl HuffmanEncoder {
    pub fn new(config: CodecConfig) -> Self {
        Self {
            config,
            ..Default::default()
        }
    }

    /// Builds a code for `data` and packs every symbol with it.
    ///
    /// Replaces whatever an earlier call produced.
    pub fn pack(&mut self, data: &[u8]) -> Result<(), HuffmanError> {
        let frequencies = FrequencyTable::of(data);
        log::trace!("frequencies: {:?}", frequencies);

        for (symbol, _) in frequencies.iter() {
            self.config.alphabet.check(symbol)?;
        }

        if frequencies.len() > MAX_DICTIONARY_ENTRIES {
            return Err(CapacityError::TooManySymbols(frequencies.len()).into());
        }

        let Some(tree) = HuffmanTree::build(&frequencies) else {
            self.codes = CodeTable::default();
            self.compressed = BitPacker::default();
            return Ok(());
        };

        let codes = tree.codes()?;
        for (symbol, code) in codes.iter() {
            log::trace!("symbol {:#04x} x{}: {}", symbol, frequencies.get(symbol), code);
        }

        let compressed = pack_symbols(&codes, data, tree.weighted_path_length() as usize)?;

        log::debug!(
            "packed {} symbols ({} distinct) into {} bits",
            data.len(),
            codes.len(),
            compressed.len()
        );

        self.codes = codes;
        self.compressed = compressed;
        Ok(())
    }

    pub fn codes(&self) -> &CodeTable {
        &self.codes
    }

    pub fn payload_bits(&self) -> usize {
        self.compressed.len()
    }

    pub fn finish(self) -> (CodeTable, Vec<u8>) {
        (self.codes, self.compressed.finish())
    }
}

/// Packs `data` with `codes`, failing on the first symbol the table lacks.
fn pack_symbols(
    codes: &CodeTable,
    data: &[u8],
    bits: usize,
) -> Result<BitPacker, CapacityError> {
    let mut compressed = BitPacker::with_capacity(bits);
    for &byte in data {
        let code = codes.get(byte).ok_or(CapacityError::MissingCode(byte))?;
        compressed.push(code);
    }
    Ok(compressed)
}

#[cfg(test)]
mod tests {
    use crate::huffman::Code;
    use crate::huffman_decoder::HuffmanDecoder;

    use super::*;

    #[test]
    fn test_huffman_encoder() {
        let mut encoder = HuffmanEncoder::default();
        let data = b"hey";
        encoder.pack(data).unwrap();
        let (table, packed) = encoder.finish();
        assert_eq!(table.len(), 3);

        let decoder = HuffmanDecoder::new(&table).unwrap();
        let unpacked = decoder.unpack(&packed, data.len()).unwrap();
        assert_eq!(unpacked, data);
    }

    #[test]
    fn test_reference_buffer() {
        let mut encoder = HuffmanEncoder::default();
        encoder
            .pack(&[110, 110, 111, 112, 112, 112, 112, 113])
            .unwrap();
        assert_eq!(encoder.payload_bits(), 14);

        let (_, packed) = encoder.finish();
        assert_eq!(packed, vec![0b1010_1100, 0b0001_1100]);
    }

    #[test]
    fn test_empty_input_packs_nothing() {
        let mut encoder = HuffmanEncoder::default();
        encoder.pack(&[]).unwrap();
        let (table, packed) = encoder.finish();
        assert!(table.is_empty());
        assert!(packed.is_empty());
    }

    #[test]
    fn test_repack_replaces_previous_state() {
        let mut encoder = HuffmanEncoder::default();
        encoder.pack(b"abcabc").unwrap();
        encoder.pack(b"zz").unwrap();
        assert_eq!(encoder.codes().len(), 1);
        assert_eq!(encoder.payload_bits(), 2);
    }

    #[test]
    fn test_symbol_without_code_is_an_error() {
        let codes = CodeTable::from_entries([(b'a', Code::new(0, 1))]).unwrap();
        assert_eq!(pack_symbols(&codes, b"aa", 2).unwrap().len(), 2);
        assert!(matches!(
            pack_symbols(&codes, b"ab", 2),
            Err(CapacityError::MissingCode(b'b'))
        ));
    }

    #[test]
    fn test_too_many_symbols() {
        let data = (0..=255u8).collect::<Vec<_>>();
        let mut encoder = HuffmanEncoder::default();
        assert_eq!(
            encoder.pack(&data),
            Err(HuffmanError::Capacity(CapacityError::TooManySymbols(256)))
        );
    }

    #[test]
    fn test_seven_bit_alphabet() {
        let mut encoder = HuffmanEncoder::new(CodecConfig::seven_bit());
        assert!(encoder.pack(b"plain ascii").is_ok());
        assert_eq!(
            encoder.pack(&[0x41, 0x80]),
            Err(HuffmanError::Capacity(CapacityError::SymbolOutOfRange(0x80)))
        );
    }
}
