//! Fuzz target for policy document loading and evaluation.
//!
//! Goal: loading and evaluating **never panics** on any input.
//! It may return errors, but panics are unacceptable.
//!
//! Run with:
//! ```bash
//! cargo +nightly fuzz run fuzz_policy_document
//! ```

#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(text) = std::str::from_utf8(data) {
        if let Ok(policy) = lintpolicy_settings::load_policy_toml(text, Default::default()) {
            let _ = lintpolicy_domain::evaluate(&policy);
        }
        let _ = lintpolicy_settings::parse_policy_json(text);
    }
});
