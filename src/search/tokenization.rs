//! Text normalization, tokenization and stemming for the search pipeline.
//!
//! All functions here are pure and deterministic; `normalize` is idempotent
//! on already-normalized input.

use rust_stemmers::{Algorithm, Stemmer};
use std::sync::OnceLock;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Returns a reference to the English stemmer.
pub fn get_stemmer() -> &'static Stemmer {
    static STEMMER: OnceLock<Stemmer> = OnceLock::new();
    STEMMER.get_or_init(|| Stemmer::create(Algorithm::English))
}

/// Reduces a word to its linguistic stem.
pub fn stem(word: &str) -> String {
    get_stemmer().stem(word).to_string()
}

/// Normalizes a string for matching: Unicode canonical decomposition,
/// separator characters (`-`, `_`, `,`) replaced with spaces, a space
/// inserted at every lower-to-upper camelCase boundary, combining
/// diacritical marks stripped, then trimmed and lowercased.
pub fn normalize(input: &str) -> String {
    let decomposed: String = input
        .nfd()
        .map(|c| if matches!(c, '-' | '_' | ',') { ' ' } else { c })
        .collect();

    // Split camelCase boundaries before lowercasing destroys them.
    let mut spaced = String::with_capacity(decomposed.len() + 8);
    let mut prev_is_lower = false;
    for c in decomposed.chars() {
        if prev_is_lower && c.is_ascii_uppercase() {
            spaced.push(' ');
        }
        prev_is_lower = c.is_ascii_lowercase();
        spaced.push(c);
    }

    let stripped: String = spaced.chars().filter(|c| !is_combining_mark(*c)).collect();
    stripped.trim().to_lowercase()
}

/// Splits a string into lowercase tokens on whitespace runs, dropping
/// empty tokens.
pub fn tokenize(input: &str) -> Vec<String> {
    input
        .split_whitespace()
        .map(|w| w.to_lowercase())
        .filter(|w| !w.is_empty())
        .collect()
}
