//! Label validation: naming-convention rules per label part, with one
//! highest-priority message chosen from a fixed total order.
//!
//! Validation outcomes are values, never errors: an unparseable or
//! rule-breaking label yields a populated [`ValidationResult`], and the
//! function itself cannot fail.

use crate::label::splitter::{split_label, LabelSplit};
use crate::models::{
    ConsolidatedMessage, Keyword, LabelRow, MessageColor, ValidationResult,
};
use crate::search::filter::filter_exact;
use std::collections::{BTreeSet, HashSet};
use tracing::debug;

/// Maximum allowed label length in characters.
pub const MAX_LABEL_LENGTH: usize = 27;

/// Everything that can be wrong with a label. Declaration order is the
/// display priority: when several rules fire, the first variant in this list
/// becomes the single displayed message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum LabelError {
    NoLabel,
    PpNotAvailable,
    PpNotPhysical,
    DdMissing,
    DuplicateKeywords,
    DdNotAvailable,
    DdInvalid,
    ExNotAvailable,
    ExInvalid,
    TooLong,
}

impl LabelError {
    pub fn message(&self) -> &'static str {
        match self {
            LabelError::NoLabel => "No Label",
            LabelError::PpNotAvailable => "Abbreviation of <pp> not available",
            LabelError::PpNotPhysical => "Physical part <pp> is missing",
            LabelError::DdMissing => "DescriptiveName part <dd> is missing",
            LabelError::DuplicateKeywords => "Duplicate keywords used",
            LabelError::DdNotAvailable => "Abbreviation of <dd> not available",
            LabelError::DdInvalid => "DescriptiveName part <dd> is invalid",
            LabelError::ExNotAvailable => "Extension <Ex> not available",
            LabelError::ExInvalid => "Extension part <Ex> is invalid",
            LabelError::TooLong => "Label exceeds 27 characters",
        }
    }
}

/// Coarse eligibility check, independent of the structural grammar: no
/// leading or trailing junk, no characters beyond alphanumerics and
/// underscores, at most three underscore-delimited segments, uppercase first
/// letter. Both this gate and the grammar must pass.
fn passes_pre_gate(label: &str) -> bool {
    let trimmed = label.trim_matches(|c: char| !c.is_ascii_alphanumeric());
    if trimmed.chars().count() != label.chars().count() {
        return false;
    }
    let cleaned_len = trimmed
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_')
        .count();
    if cleaned_len != trimmed.chars().count() {
        return false;
    }
    if label.split('_').count() > 3 {
        return false;
    }
    label.chars().next().is_some_and(|c| c.is_ascii_uppercase())
}

/// Analyze a label against the dictionary: one row per recognized part plus
/// a prioritized message. The dictionary is read-only for the duration of
/// the call.
pub fn get_label_rows(label_input: &str, dictionary: &[Keyword]) -> ValidationResult {
    if !passes_pre_gate(label_input) {
        debug!(label = label_input, "rejected by pre-gate");
        let message = LabelError::NoLabel.message().to_string();
        return ValidationResult {
            rows: Vec::new(),
            message: message.clone(),
            color: MessageColor::Red,
            consolidated_messages: vec![ConsolidatedMessage {
                text: message,
                color: MessageColor::Red,
            }],
            life_cycle_state: None,
            use_instead: None,
            use_instead_abbr_name: None,
        };
    }

    // A pre-gate pass does not imply a grammar match ("RB" alone gets here).
    // The empty sentinel keeps one control path: every part then reads as
    // absent and the per-part rules report what is missing.
    let LabelSplit { id, pp, keywords, ex } = split_label(label_input).unwrap_or_default();

    let mut errors: BTreeSet<LabelError> = BTreeSet::new();
    let mut rows: Vec<LabelRow> = Vec::new();

    if !id.is_empty() {
        rows.push(LabelRow::id_row(&id));
    }

    // Prefix: must exist in the dictionary and be classified Physical or
    // Logical.
    let pp_matches = filter_exact(dictionary, &pp);
    let pp_kw = pp_matches
        .iter()
        .find(|k| k.has_classification("Physical") || k.has_classification("Logical"));
    if pp_matches.is_empty() {
        errors.insert(LabelError::PpNotAvailable);
    } else if pp_kw.is_none() {
        errors.insert(LabelError::PpNotPhysical);
    }
    if !pp.is_empty() {
        rows.push(LabelRow::from_match(&pp, pp_kw.or_else(|| pp_matches.first())));
    }

    // Descriptive parts: everything after the prefix. Each part must exist
    // in the dictionary, must not be reserved for another label position,
    // and must not repeat. First occurrence wins; repeats are flagged but
    // emit no row.
    let desc_parts: &[String] = if pp.is_empty() { &keywords } else { &keywords[1..] };
    let mut seen: HashSet<&str> = HashSet::new();
    if !pp.is_empty() {
        seen.insert(pp.as_str());
    }
    if desc_parts.is_empty() {
        errors.insert(LabelError::DdMissing);
    } else {
        for part in desc_parts {
            if !seen.insert(part.as_str()) {
                errors.insert(LabelError::DuplicateKeywords);
                continue;
            }
            // Entries classified solely as Extension are invisible here;
            // multi-classified entries are found and then rejected below.
            let matches = filter_exact(dictionary, part);
            match matches.iter().find(|k| !k.is_extension_only()) {
                None => {
                    errors.insert(LabelError::DdNotAvailable);
                }
                Some(k)
                    if k.has_classification("Extension") || k.has_classification("Physical") =>
                {
                    errors.insert(LabelError::DdInvalid);
                }
                Some(_) => {}
            }
        }

        let mut emitted: HashSet<&str> = HashSet::new();
        for part in desc_parts {
            if !emitted.insert(part.as_str()) {
                continue;
            }
            let matches = filter_exact(dictionary, part);
            rows.push(LabelRow::from_match(part, matches.first()));
        }
    }

    // Extension: only evaluated when present; must be Extension-classified.
    if !ex.is_empty() {
        let matches = filter_exact(dictionary, &ex);
        let ex_kw = matches.iter().find(|k| k.has_classification("Extension"));
        if matches.is_empty() {
            errors.insert(LabelError::ExNotAvailable);
        } else if ex_kw.is_none() {
            errors.insert(LabelError::ExInvalid);
        }
        rows.push(LabelRow::from_match(&ex, ex_kw.or_else(|| matches.first())));
    }

    // Length is additive: it never suppresses the other checks.
    if label_input.chars().count() > MAX_LABEL_LENGTH {
        errors.insert(LabelError::TooLong);
    }

    annotate_obsolete_rows(&mut rows, dictionary);
    let obsolete_row = rows
        .iter()
        .find(|r| r.life_cycle_state.eq_ignore_ascii_case("obsolete"));
    let life_cycle_state = obsolete_row
        .map(|r| r.life_cycle_state.clone())
        .or_else(|| rows.first().map(|r| r.life_cycle_state.clone()));
    let use_instead = obsolete_row.and_then(|r| r.use_instead.clone());
    let use_instead_abbr_name = obsolete_row.and_then(|r| r.use_instead_abbr_name.clone());

    // BTreeSet iteration order is the priority order; the head is the one
    // message shown to the user.
    let consolidated_messages: Vec<ConsolidatedMessage> = errors
        .iter()
        .map(|e| ConsolidatedMessage {
            text: e.message().to_string(),
            color: MessageColor::Red,
        })
        .collect();
    let (message, color) = match consolidated_messages.first() {
        Some(first) => (first.text.clone(), MessageColor::Red),
        None => (String::new(), MessageColor::None),
    };

    ValidationResult {
        rows,
        message,
        color,
        consolidated_messages,
        life_cycle_state,
        use_instead,
        use_instead_abbr_name,
    }
}

/// Attach replacement hints to every row whose matched keyword is obsolete.
fn annotate_obsolete_rows(rows: &mut [LabelRow], dictionary: &[Keyword]) {
    for row in rows {
        if !row.life_cycle_state.eq_ignore_ascii_case("obsolete") {
            continue;
        }
        if let Some(kw) = dictionary
            .iter()
            .find(|k| k.abbr_name == row.abbr_name && k.is_obsolete())
        {
            row.use_instead = kw.use_instead.clone();
            row.use_instead_abbr_name = kw.use_instead_abbr_name.clone();
        }
    }
}
