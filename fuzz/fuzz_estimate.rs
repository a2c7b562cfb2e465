//! Fuzz target for segmentation and estimation.
//!
//! Run with: cargo +nightly fuzz run fuzz_estimate
//!
//! The first byte selects the option combination; the rest is the input
//! text. Estimation must never panic, every task must be a trimmed non-empty
//! substring of the input, and totals must be non-negative.

#![no_main]

use libfuzzer_sys::fuzz_target;
use taskest_core::{BufferConfig, EstimateOptions, Profile, estimate};

fuzz_target!(|data: &[u8]| {
    let Some((&flags, rest)) = data.split_first() else {
        return;
    };
    let Ok(text) = std::str::from_utf8(rest) else {
        return;
    };

    let profile = match flags % 3 {
        0 => Profile::General,
        1 => Profile::Conservative,
        _ => Profile::Fast,
    };
    let options = EstimateOptions::new()
        .profile(profile)
        .with_qa(flags & 0x04 != 0)
        .qa_include(flags & 0x08 != 0)
        .buffers(BufferConfig::new(
            1.0 + f64::from(flags >> 6) * 0.1,
            (flags & 0x10 != 0).then_some(1.5),
            flags & 0x20 != 0,
        ));

    let result = estimate(text, &options);

    for item in &result.items {
        assert!(!item.task.is_empty());
        assert_eq!(item.task.trim(), item.task);
        assert!(text.contains(item.task.as_str()));
    }
    assert!(result.totals.core_hours >= 0.0);
    assert!(result.totals.qa_hours >= 0.0);
    assert!(result.totals.grand_total_hours >= result.totals.core_hours);
});
