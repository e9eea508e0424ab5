//! Loading of keyword dictionary snapshots.
//!
//! The core treats the dictionary as a plain read-only value; fetching,
//! caching and freshness are the caller's concern. This module only turns a
//! local JSON snapshot into `Vec<Keyword>` and surfaces malformed data as a
//! typed error instead of swallowing it.

use crate::models::Keyword;
use std::path::Path;

#[derive(Debug, thiserror::Error)]
pub enum DictionaryError {
    #[error("failed to read dictionary file: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed dictionary data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Parse a dictionary snapshot from a JSON array of keyword records.
pub fn parse_dictionary(json: &str) -> Result<Vec<Keyword>, DictionaryError> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a dictionary snapshot from disk.
pub fn load_dictionary(path: &Path) -> Result<Vec<Keyword>, DictionaryError> {
    let contents = std::fs::read_to_string(path)?;
    parse_dictionary(&contents)
}
