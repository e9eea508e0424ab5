//! Structural parsing of label strings.
//!
//! A label has the shape `Id_ppDescriptiveName_Ex`: a leading identifier, an
//! underscore, a lowercase-initial prefix, a run of CamelCase descriptive
//! words, and an optional trailing extension after a second underscore. The
//! lowercase first letter of the prefix is load-bearing: it is what
//! separates the prefix from the first descriptive word.

use once_cell::sync::Lazy;
use regex::Regex;
use tracing::debug;

/// Structural split grammar, anchored over the whole string. The prefix
/// group stops at the first uppercase letter; the descriptive run starts
/// there.
static LABEL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([A-Za-z0-9]+)_([a-z][a-z0-9]*)([A-Za-z0-9]*)(?:_([A-Za-z0-9]+))?$")
        .expect("label pattern")
});

/// One CamelCase word inside the descriptive run.
static CAMEL_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Z][a-z0-9]*").expect("word pattern"));

/// Parse result of one label string. `keywords` holds the prefix followed by
/// the descriptive words, in label order; the validator tracks which index is
/// the prefix to apply the right rule set. The `Default` value is the empty
/// sentinel the validator substitutes when parsing fails.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSplit {
    pub id: String,
    pub pp: String,
    pub keywords: Vec<String>,
    pub ex: String,
}

/// Split a label into its semantic parts. Returns `None` when the string
/// does not match the grammar — the caller must treat that as "cannot
/// analyze further", not as an empty match. Never panics.
pub fn split_label(label: &str) -> Option<LabelSplit> {
    let caps = match LABEL_PATTERN.captures(label) {
        Some(caps) => caps,
        None => {
            debug!(label, "no grammar match");
            return None;
        }
    };

    let id = caps[1].to_string();
    let pp = caps[2].to_string();
    let descriptive = caps.get(3).map_or("", |m| m.as_str());
    let ex = caps.get(4).map_or_else(String::new, |m| m.as_str().to_string());

    let mut keywords = vec![pp.clone()];
    keywords.extend(CAMEL_WORD.find_iter(descriptive).map(|m| m.as_str().to_string()));

    debug!(label, %id, %pp, ?keywords, %ex, "label split");
    Some(LabelSplit { id, pp, keywords, ex })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_full_label_into_four_parts() {
        let split = split_label("RB_tMaxLim_C").unwrap();
        assert_eq!(split.id, "RB");
        assert_eq!(split.pp, "t");
        assert_eq!(split.keywords, vec!["t", "Max", "Lim"]);
        assert_eq!(split.ex, "C");
    }

    #[test]
    fn extension_is_optional() {
        let split = split_label("RB_tMaxLim").unwrap();
        assert_eq!(split.ex, "");
        assert_eq!(split.keywords, vec!["t", "Max", "Lim"]);
    }

    #[test]
    fn prefix_may_contain_digits() {
        let split = split_label("RB_n2Avg").unwrap();
        assert_eq!(split.pp, "n2");
        assert_eq!(split.keywords, vec!["n2", "Avg"]);
    }

    #[test]
    fn descriptive_words_keep_trailing_digits() {
        let split = split_label("RB_uBatt2Raw").unwrap();
        assert_eq!(split.keywords, vec!["u", "Batt2", "Raw"]);
    }

    #[test]
    fn uppercase_prefix_start_does_not_parse() {
        // The prefix must start lowercase; this is how it is told apart from
        // the first descriptive word.
        assert_eq!(split_label("RB_TMax_C"), None);
    }

    #[test]
    fn missing_underscore_does_not_parse() {
        assert_eq!(split_label("RBtMaxLim"), None);
        assert_eq!(split_label(""), None);
    }

    #[test]
    fn consecutive_uppercase_splits_into_single_letter_words() {
        let split = split_label("RB_tMAXLim").unwrap();
        assert_eq!(split.keywords, vec!["t", "M", "A", "X", "Lim"]);
    }

    #[test]
    fn stray_characters_do_not_parse() {
        assert_eq!(split_label("RB_tMax Lim_C"), None);
        assert_eq!(split_label("RB_tMax-Lim"), None);
        assert_eq!(split_label("RB_tMax_Lim_C"), None);
    }
}
