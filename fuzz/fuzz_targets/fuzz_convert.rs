#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(source) = std::str::from_utf8(data) {
        let html = betternotes::convert(source);
        assert!(html.starts_with("<!DOCTYPE html>"));
    }
});
