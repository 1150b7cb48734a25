use std::path::Path;

use anyhow::{Context, Result};
use peerlens_types::{BatchItem, DocumentRef};
use serde::Serialize;
use serde::de::DeserializeOwned;

/// Read a whole input file, or stdin when the path is `-`.
pub(crate) fn read_content(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        return std::io::read_to_string(std::io::stdin()).context("reading stdin");
    }
    std::fs::read_to_string(path).with_context(|| format!("reading input {}", path.display()))
}

fn read_json<T: DeserializeOwned>(path: &Path, what: &str) -> Result<T> {
    let raw = read_content(path)?;
    serde_json::from_str(&raw).with_context(|| format!("parsing {what} {}", path.display()))
}

/// Load a corpus file: a JSON array of documents.
pub(crate) fn load_corpus(path: &Path) -> Result<Vec<DocumentRef>> {
    let corpus: Vec<DocumentRef> = read_json(path, "corpus file")?;
    tracing::info!(documents = corpus.len(), path = %path.display(), "loaded corpus");
    Ok(corpus)
}

pub(crate) fn load_batch(path: &Path) -> Result<Vec<BatchItem>> {
    read_json(path, "batch file")
}

/// Print `value` as JSON on stdout.
pub(crate) fn emit<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
