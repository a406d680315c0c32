use thiserror::Error;

/// The input cannot be represented by the container format.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CapacityError {
    #[error("input has {0} distinct symbols, the dictionary holds at most 255")]
    TooManySymbols(usize),
    #[error("code for symbol {symbol:#04x} would need more than {max} bits")]
    CodeTooLong { symbol: u8, max: u8 },
    #[error("input of {0} symbols does not fit the 32-bit length field")]
    InputTooLong(usize),
    #[error("symbol {0:#04x} is outside the 7-bit alphabet")]
    SymbolOutOfRange(u8),
    #[error("symbol {0:#04x} has no code in the table")]
    MissingCode(u8),
}

/// The bytes handed to the decoder are not a well-formed container.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("container is shorter than the {0}-byte header")]
    TruncatedHeader(usize),
    #[error("dictionary needs {expected} bytes but only {available} remain")]
    TruncatedDictionary { expected: usize, available: usize },
    #[error("symbol {symbol:#04x} has code length {len}, expected 1..=8")]
    InvalidCodeLength { symbol: u8, len: u8 },
    #[error("code {code:#010b} for symbol {symbol:#04x} does not fit in {len} bits")]
    CodeOutOfRange { symbol: u8, code: u8, len: u8 },
    #[error("symbol {0:#04x} appears twice in the dictionary")]
    DuplicateSymbol(u8),
    #[error("codes for symbols {first:#04x} and {second:#04x} are not prefix-free")]
    AmbiguousCode { first: u8, second: u8 },
    #[error("no code matches the bits at offset {0}")]
    NoMatchingCode(usize),
    #[error("payload ended after {decoded} of {expected} symbols")]
    TruncatedPayload { decoded: usize, expected: usize },
    #[error("{0} unused bytes follow the payload")]
    TrailingBytes(usize),
    #[error("message of {0} symbols has an empty dictionary")]
    MissingDictionary(u32),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum HuffmanError {
    #[error("capacity exceeded: {0}")]
    Capacity(#[from] CapacityError),
    #[error("malformed container: {0}")]
    Format(#[from] FormatError),
}

pub type Result<T> = std::result::Result<T, HuffmanError>;
