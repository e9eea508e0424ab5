//! Ordering of search results.
//!
//! The comparator is the contract between "found something" and "found the
//! useful thing first"; its priority order is fixed and must not drift.

use crate::models::Keyword;
use std::cmp::Ordering;

/// Sort results in place: entries with a valid lifecycle first, then entries
/// whose short code exactly equals a query token, then shorter short codes,
/// then alphabetically. The sort is stable.
pub fn rank_keywords(results: &mut [Keyword], query_tokens: &[String]) {
    results.sort_by(|a, b| {
        let a_valid = a.is_valid();
        let b_valid = b.is_valid();
        if a_valid != b_valid {
            return if a_valid { Ordering::Less } else { Ordering::Greater };
        }

        let a_exact = matches_any_token(a, query_tokens);
        let b_exact = matches_any_token(b, query_tokens);
        if a_exact != b_exact {
            return if a_exact { Ordering::Less } else { Ordering::Greater };
        }

        a.abbr_name
            .len()
            .cmp(&b.abbr_name.len())
            .then_with(|| a.abbr_name.to_lowercase().cmp(&b.abbr_name.to_lowercase()))
            .then_with(|| a.abbr_name.cmp(&b.abbr_name))
    });
}

fn matches_any_token(entry: &Keyword, tokens: &[String]) -> bool {
    !entry.abbr_name.is_empty()
        && tokens
            .iter()
            .any(|token| entry.abbr_name.eq_ignore_ascii_case(token))
}
