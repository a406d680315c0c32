#![no_main]

use huffpack::{compress, decompress, HuffmanError};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    match compress(data) {
        Ok(compressed) => assert_eq!(data, decompress(&compressed).unwrap()),
        // Too many symbols or too skewed for 8-bit codes.
        Err(HuffmanError::Capacity(_)) => {}
        Err(err) => panic!("unexpected error: {err}"),
    }
});
