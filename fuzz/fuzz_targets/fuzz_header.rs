#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // Arbitrary document text must parse or fail, never panic
    for collection in bookindex::record::Collection::ALL {
        let _ = bookindex::record::parse_header(data, collection);
    }
});
