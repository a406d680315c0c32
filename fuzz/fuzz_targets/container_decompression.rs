#![no_main]

use huffpack::decompress;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(decompressed) = decompress(data) {
        let declared = u32::from_be_bytes([data[0], data[1], data[2], data[3]]);
        assert_eq!(decompressed.len(), declared as usize);
    }
});
