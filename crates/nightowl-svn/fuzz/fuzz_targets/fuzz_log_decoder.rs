#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // The decoder must never panic: arbitrary input either decodes or
    // surfaces a diagnostic
    let raw = String::from_utf8_lossy(data);
    let decoded = nightowl_svn::decode_log(&raw);
    let _ = std::hint::black_box((decoded.commits.len(), decoded.diagnostic));
});
