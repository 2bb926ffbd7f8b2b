#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Manifest parsing must reject bad input without panicking
    let _ = sxi::manifest::parse_manifest(data);
});
