use crate::error::CapacityError;

/// Range of symbol values a codec accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alphabet {
    /// 0x00..=0x7f, the top bit of every symbol must be clear.
    SevenBit,
    /// Any byte value.
    #[default]
    Byte,
}

impl Alphabet {
    pub fn contains(self, symbol: u8) -> bool {
        match self {
            Alphabet::SevenBit => symbol < 0x80,
            Alphabet::Byte => true,
        }
    }

    pub(crate) fn check(self, symbol: u8) -> Result<(), CapacityError> {
        if self.contains(symbol) {
            Ok(())
        } else {
            Err(CapacityError::SymbolOutOfRange(symbol))
        }
    }
}

/// Knobs shared by compression and decompression.
///
/// The container layout itself is fixed; only the accepted alphabet varies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CodecConfig {
    pub alphabet: Alphabet,
}

impl CodecConfig {
    pub fn seven_bit() -> Self {
        Self {
            alphabet: Alphabet::SevenBit,
        }
    }

    pub fn with_alphabet(mut self, alphabet: Alphabet) -> Self {
        self.alphabet = alphabet;
        self
    }
}
