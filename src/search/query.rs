//! Query preprocessing: turns a raw free-text query into the expanded token
//! set the match phases run against.

use crate::search::filter::SearchOptions;
use crate::search::spell::SpellChecker;
use crate::search::tokenization::{normalize, stem, tokenize};
use tracing::debug;

/// Normalize and tokenize a query, then expand the token set: misspelled
/// words are swapped for their top suggestions (when spell checking is on)
/// and each surviving token additionally contributes its stem when that
/// differs (when stemming is on). Expansion only ever adds or substitutes
/// whole tokens; it never merges them.
pub fn expand_query_tokens(
    query: &str,
    options: &SearchOptions,
    checker: &SpellChecker,
) -> Vec<String> {
    let tokens = tokenize(&normalize(query));
    debug!(?tokens, "separated query tokens");

    let corrected = if options.use_spell_check {
        checker.correct_words(&tokens)
    } else {
        tokens
    };

    let expanded: Vec<String> = if options.use_stemming {
        corrected
            .into_iter()
            .flat_map(|token| {
                let stemmed = stem(&token);
                if stemmed == token {
                    vec![token]
                } else {
                    vec![token, stemmed]
                }
            })
            .collect()
    } else {
        corrected
    };

    debug!(?expanded, "expanded query tokens");
    expanded
}
