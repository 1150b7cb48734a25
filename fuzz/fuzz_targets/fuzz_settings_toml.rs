//! Fuzz target for settings TOML parsing.
//!
//! Tests `EngineSettings::from_toml_str()` with arbitrary input to find
//! panics in parsing or validation.

#![no_main]
use libfuzzer_sys::fuzz_target;
use peerlens_settings::EngineSettings;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Accepted settings must survive re-validation.
        if let Ok(settings) = EngineSettings::from_toml_str(s) {
            assert!(settings.validate().is_ok());
        }
    }
});
