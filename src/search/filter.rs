//! The keyword search filter: a staged pipeline over the dictionary.
//!
//! Stage order is fixed: normalize/tokenize, spell expansion, stem
//! expansion, exact match, fuzzy match. An exact match on any entry is a
//! hard cutover — the fuzzy phase never runs. Search never mutates the
//! dictionary and returns an empty vec when nothing matches.

use crate::models::Keyword;
use crate::search::query::expand_query_tokens;
use crate::search::result_ranking::rank_keywords;
use crate::search::spell::{default_checker, SpellChecker};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::debug;

/// Toggles for the optional pipeline stages. Everything defaults to on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchOptions {
    pub use_fuzzy: bool,
    pub use_spell_check: bool,
    pub use_stemming: bool,
}

impl Default for SearchOptions {
    fn default() -> Self {
        SearchOptions {
            use_fuzzy: true,
            use_spell_check: true,
            use_stemming: true,
        }
    }
}

/// Fuzzy acceptance threshold: 0 is a perfect match, lower is stricter.
const FUZZY_SCORE_THRESHOLD: f64 = 0.4;
const ABBR_NAME_WEIGHT: f64 = 1.0;
const LONG_NAME_EN_WEIGHT: f64 = 0.1;

/// Search the dictionary with the full pipeline and the process-wide spell
/// checker. Returns a ranked, deduplicated result list.
pub fn filter_data(dictionary: &[Keyword], query: &str, options: &SearchOptions) -> Vec<Keyword> {
    filter_data_with_checker(dictionary, query, options, default_checker())
}

/// Same as [`filter_data`] but with an explicitly injected spell checker.
pub fn filter_data_with_checker(
    dictionary: &[Keyword],
    query: &str,
    options: &SearchOptions,
    checker: &SpellChecker,
) -> Vec<Keyword> {
    let tokens = expand_query_tokens(query, options, checker);

    // Exact phase: alnum-stripped, case-insensitive equality against the
    // short code and both long names. Any hit here preempts fuzzy search.
    let mut exact: Vec<Keyword> = dictionary
        .iter()
        .filter(|entry| {
            tokens.iter().any(|token| {
                let key = exact_key(token);
                !key.is_empty()
                    && (key == exact_key(&entry.abbr_name)
                        || key == exact_key(&entry.long_name_en)
                        || key == exact_key(&entry.long_name_de))
            })
        })
        .cloned()
        .collect();
    if !exact.is_empty() {
        debug!(count = exact.len(), "exact phase matched");
        rank_keywords(&mut exact, &tokens);
        return exact;
    }

    if options.use_fuzzy {
        let mut seen: HashSet<String> = HashSet::new();
        let mut results: Vec<Keyword> = Vec::new();
        for token in &tokens {
            for entry in dictionary {
                if fuzzy_score(token, entry) <= FUZZY_SCORE_THRESHOLD
                    && seen.insert(dedup_key(entry))
                {
                    results.push(entry.clone());
                }
            }
        }
        if !results.is_empty() {
            debug!(count = results.len(), "fuzzy phase matched");
            rank_keywords(&mut results, &tokens);
            return results;
        }
    }

    Vec::new()
}

/// Case-sensitive exact match of `abbrName` only, with no normalization.
/// This is the lookup the label validator uses; it is intentionally stricter
/// than the free-text search.
pub fn filter_exact(dictionary: &[Keyword], query: &str) -> Vec<Keyword> {
    if query.is_empty() {
        return Vec::new();
    }
    dictionary
        .iter()
        .filter(|entry| entry.abbr_name == query)
        .cloned()
        .collect()
}

/// Outcome of checking a raw search input before running the pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchValidation {
    pub is_valid: bool,
    pub message: Option<String>,
}

static INVALID_SEARCH_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_\-\s]").expect("search charset pattern"));

/// Pre-check a raw search input: non-empty, restricted charset, bounded
/// length. A data-level outcome, not an error.
pub fn validate_search(search: &str) -> SearchValidation {
    if search.trim().is_empty() {
        return SearchValidation {
            is_valid: false,
            message: Some("Enter a search term to begin.".to_string()),
        };
    }
    if INVALID_SEARCH_CHARS.is_match(search) {
        return SearchValidation {
            is_valid: false,
            message: Some("Search contains invalid characters.".to_string()),
        };
    }
    if search.chars().count() > 50 {
        return SearchValidation {
            is_valid: false,
            message: Some("Search term is too long (max 50 characters).".to_string()),
        };
    }
    SearchValidation {
        is_valid: true,
        message: None,
    }
}

/// Lowercase with everything but ASCII alphanumerics stripped.
fn exact_key(s: &str) -> String {
    s.to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Dedup identity: the short code, falling back to the serialized record for
/// entries without one.
fn dedup_key(entry: &Keyword) -> String {
    if entry.abbr_name.is_empty() {
        serde_json::to_string(entry).unwrap_or_default()
    } else {
        entry.abbr_name.clone()
    }
}

/// Distance score of one token against one entry, 0 = perfect. Per-field
/// scores are combined as a normalized-weight geometric mean, so the lightly
/// weighted long name only carries an entry on its own when it matches the
/// token outright; otherwise the short code decides.
fn fuzzy_score(token: &str, entry: &Keyword) -> f64 {
    let total = ABBR_NAME_WEIGHT + LONG_NAME_EN_WEIGHT;
    let abbr = field_score(token, &entry.abbr_name);
    let long = field_score(token, &entry.long_name_en);
    abbr.powf(ABBR_NAME_WEIGHT / total) * long.powf(LONG_NAME_EN_WEIGHT / total)
}

fn field_score(token: &str, field: &str) -> f64 {
    if field.is_empty() {
        return 1.0;
    }
    let field = field.to_lowercase();
    if field == token {
        return 0.0;
    }
    if field.contains(token) {
        // Containment is a strong signal; longer fields dilute it slightly.
        return 0.1 * (1.0 - token.len() as f64 / field.len() as f64);
    }
    1.0 - strsim::jaro_winkler(token, &field)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kw(abbr: &str, long_en: &str) -> Keyword {
        Keyword {
            abbr_name: abbr.to_string(),
            long_name_en: long_en.to_string(),
            life_cycle_state: "valid".to_string(),
            ..Keyword::default()
        }
    }

    #[test]
    fn filter_exact_is_case_sensitive() {
        let dict = vec![kw("Max", "maximum"), kw("max", "lowercase maximum")];
        let hits = filter_exact(&dict, "Max");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].long_name_en, "maximum");
    }

    #[test]
    fn filter_exact_empty_query_matches_nothing() {
        let dict = vec![kw("Max", "maximum")];
        assert!(filter_exact(&dict, "").is_empty());
    }

    #[test]
    fn exact_key_strips_punctuation_and_case() {
        assert_eq!(exact_key("t-Max_Lim"), "tmaxlim");
        assert_eq!(exact_key("Maximum"), "maximum");
    }

    #[test]
    fn fuzzy_score_is_zero_for_identical_abbr() {
        let entry = kw("press", "pressure");
        assert_eq!(fuzzy_score("press", &entry), 0.0);
    }

    #[test]
    fn fuzzy_score_accepts_near_misses_on_abbr() {
        let entry = kw("pressr", "");
        assert!(fuzzy_score("press", &entry) <= FUZZY_SCORE_THRESHOLD);
    }

    #[test]
    fn fuzzy_score_rejects_unrelated_entries() {
        let entry = kw("Whl", "wheel");
        assert!(fuzzy_score("voltage", &entry) > FUZZY_SCORE_THRESHOLD);
    }

    #[test]
    fn long_name_similarity_alone_does_not_carry_an_entry() {
        // With a 10:1 weight ratio the long name only decides when it
        // matches the token outright; near misses on it stay rejected.
        let near = kw("Zz", "pressure");
        assert!(fuzzy_score("presur", &near) > FUZZY_SCORE_THRESHOLD);
        let containing = kw("Zz", "oil pressure sensor");
        assert!(fuzzy_score("pressure", &containing) > FUZZY_SCORE_THRESHOLD);
        let outright = kw("Zz", "pressure");
        assert_eq!(fuzzy_score("pressure", &outright), 0.0);
    }

    #[test]
    fn validate_search_rejects_empty_and_long_and_bad_chars() {
        assert!(!validate_search("   ").is_valid);
        assert!(!validate_search("max!").is_valid);
        assert!(!validate_search(&"a".repeat(51)).is_valid);
        assert!(validate_search("t Max-Lim_2").is_valid);
    }
}
