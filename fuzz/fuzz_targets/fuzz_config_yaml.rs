#![no_main]
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Interpret the input as a YAML configuration document
    if let Ok(text) = std::str::from_utf8(data) {
        // Parsing and validation must never panic on arbitrary input
        if let Ok(cfg) = serde_yaml::from_str::<chargecap::Config>(text) {
            let _ = cfg.validate();
        }
    }
});
