//! Fuzz target for the `run_json` entrypoint.
//!
//! The first byte picks a mode; the rest is the argument JSON. Output must
//! always be a JSON envelope with a boolean `ok`.

#![no_main]

use libfuzzer_sys::fuzz_target;
use peerlens_core::ffi::run_json;
use serde_json::Value;

const MODES: &[&str] = &[
    "analyze",
    "similarity",
    "feedback",
    "submission",
    "batch",
    "version",
    "bogus",
];
const MAX_INPUT_SIZE: usize = 16 * 1024;

fuzz_target!(|data: &[u8]| {
    let Some((&selector, rest)) = data.split_first() else {
        return;
    };
    if rest.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(args) = std::str::from_utf8(rest) else {
        return;
    };
    let mode = MODES[selector as usize % MODES.len()];

    let out = run_json(mode, args);
    let envelope: Value = serde_json::from_str(&out).expect("run_json must emit JSON");
    assert!(envelope.get("ok").and_then(Value::as_bool).is_some());
});
