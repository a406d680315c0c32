//! Static Huffman compression for byte buffers.
//!
//! [`compress`] counts symbol frequencies, builds a Huffman tree, and writes a
//! self-describing container: the original length, the code dictionary, and
//! the packed bitstream. [`decompress`] reverses it and rejects malformed
//! containers instead of guessing.
//!
//! Every code must fit in 8 bits. Inputs of up to 88 symbols always do; longer
//! inputs with very rare symbols (a few kilobytes of prose, say) can need
//! deeper codes and fail with [`CapacityError::CodeTooLong`]. Split such data
//! into shorter records.
//!
//! ```
//! let data = [110, 110, 111, 112, 112, 112, 112, 113];
//! let packed = huffpack::compress(&data)?;
//! assert_eq!(packed.len(), 19);
//! assert_eq!(huffpack::decompress(&packed)?, data);
//! # Ok::<(), huffpack::HuffmanError>(())
//! ```

pub mod bits;
pub mod config;
pub mod container;
pub mod error;
pub mod frequency;
pub mod huffman;
pub mod huffman_decoder;
pub mod huffman_encoder;
pub mod tree;

pub use config::{Alphabet, CodecConfig};
pub use container::Container;
pub use error::{CapacityError, FormatError, HuffmanError, Result};
pub use huffman::{Code, CodeTable};
pub use huffman_decoder::HuffmanDecoder;
pub use huffman_encoder::HuffmanEncoder;

/// Sizes observed while compressing one buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressStats {
    pub original_len: usize,
    pub dictionary_entries: usize,
    pub payload_bits: usize,
    pub container_len: usize,
}

/// Compresses `data` with the default (8-bit) alphabet.
///
/// Fails with [`CapacityError::TooManySymbols`] when more than 255 distinct
/// byte values occur, and with [`CapacityError::CodeTooLong`] when the symbol
/// frequencies are skewed enough that some code would exceed 8 bits:
///
/// ```
/// use huffpack::{compress, CapacityError, HuffmanError};
///
/// // Fibonacci counts: each new symbol sits one level deeper in the tree.
/// let mut data = Vec::new();
/// let (mut a, mut b) = (1usize, 1usize);
/// for symbol in 0..12u8 {
///     data.extend(std::iter::repeat(symbol).take(a));
///     (a, b) = (b, a + b);
/// }
/// assert!(matches!(
///     compress(&data),
///     Err(HuffmanError::Capacity(CapacityError::CodeTooLong { max: 8, .. }))
/// ));
/// assert!(compress(&data[..88]).is_ok());
/// ```
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    compress_with(&CodecConfig::default(), data)
}

pub fn compress_with(config: &CodecConfig, data: &[u8]) -> Result<Vec<u8>> {
    compress_with_stats(config, data).map(|(bytes, _)| bytes)
}

pub fn compress_with_stats(
    config: &CodecConfig,
    data: &[u8],
) -> Result<(Vec<u8>, CompressStats)> {
    let original_len =
        u32::try_from(data.len()).map_err(|_| CapacityError::InputTooLong(data.len()))?;

    let mut encoder = HuffmanEncoder::new(*config);
    encoder.pack(data)?;
    let payload_bits = encoder.payload_bits();
    let (codes, payload) = encoder.finish();

    let container = Container {
        original_len,
        codes,
        payload: &payload,
    };
    let bytes = container.to_bytes()?;

    let stats = CompressStats {
        original_len: data.len(),
        dictionary_entries: container.codes.len(),
        payload_bits,
        container_len: bytes.len(),
    };
    log::debug!("compressed: {:?}", stats);

    Ok((bytes, stats))
}

/// Replaces `buffer` with its compressed container and returns the new size.
///
/// The buffer is only overwritten once compression has succeeded.
pub fn compress_in_place(buffer: &mut Vec<u8>) -> Result<usize> {
    let compressed = compress(buffer)?;
    *buffer = compressed;
    Ok(buffer.len())
}

pub fn decompress(bytes: &[u8]) -> Result<Vec<u8>> {
    decompress_with(&CodecConfig::default(), bytes)
}

pub fn decompress_with(config: &CodecConfig, bytes: &[u8]) -> Result<Vec<u8>> {
    let container = Container::parse(bytes)?;
    for (symbol, _) in container.codes.iter() {
        config.alphabet.check(symbol)?;
    }

    let decoder = HuffmanDecoder::new(&container.codes)?;
    let data = decoder.unpack(container.payload, container.original_len as usize)?;

    log::debug!(
        "decompressed {} bytes into {} symbols",
        bytes.len(),
        data.len()
    );
    Ok(data)
}
