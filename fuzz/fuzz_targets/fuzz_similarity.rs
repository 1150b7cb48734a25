//! Fuzz target for the plagiarism scan.
//!
//! The input is split on NUL bytes: the first piece is the candidate, the
//! rest form the corpus.
//!
//! Validates:
//! - Score stays in 0..=100
//! - Sources are ranked by non-increasing similarity
//! - Every reported similarity is in 0..=1

#![no_main]

use libfuzzer_sys::fuzz_target;
use peerlens_settings::SimilaritySettings;
use peerlens_similarity::detect_similarity;
use peerlens_types::DocumentRef;

const MAX_INPUT_SIZE: usize = 8 * 1024;

fuzz_target!(|data: &[u8]| {
    if data.len() > MAX_INPUT_SIZE {
        return;
    }
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    let mut parts = input.split('\0');
    let candidate = parts.next().unwrap_or_default();
    let corpus: Vec<DocumentRef> = parts
        .enumerate()
        .map(|(i, c)| DocumentRef::new(format!("d{i}"), "", "", c))
        .collect();

    let report = detect_similarity(candidate, &corpus, &SimilaritySettings::default());
    assert!(report.score <= 100);
    assert_eq!(report.total_sources, corpus.len());
    for pair in report.sources.windows(2) {
        assert!(pair[0].similarity >= pair[1].similarity);
    }
    for source in &report.sources {
        assert!((0.0..=1.0).contains(&source.similarity));
    }
});
