//! Fuzz target for the TOML configuration parser.
//!
//! Run with: cargo +nightly fuzz run fuzz_config_parser
//!
//! Feeds arbitrary text through `AppConfig::parse()` and, when it validates,
//! through the conversion into engine options.

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        if let Ok(config) = taskest_config::AppConfig::parse(s) {
            let options = config.estimate_options();
            assert!(options.buffers.core_buffer > 0.0);
            assert!(options.buffers.qa_buffer > 0.0);
        }
    }
});
