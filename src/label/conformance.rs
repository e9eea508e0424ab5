//! AUTOSAR conformance classification of labels.

use crate::label::splitter::split_label;
use crate::models::Keyword;
use std::fmt;

/// The three discrete conformance outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AutosarConformance {
    AutosarLabel,
    NoAutosarLabel,
    AbbreviationNotAvailable,
}

impl AutosarConformance {
    pub fn as_str(&self) -> &'static str {
        match self {
            AutosarConformance::AutosarLabel => "AUTOSAR Label",
            AutosarConformance::NoAutosarLabel => "No AUTOSAR Label",
            AutosarConformance::AbbreviationNotAvailable => "Abbreviation not Available",
        }
    }
}

impl fmt::Display for AutosarConformance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Classify a label: every keyword (prefix and descriptive parts) must
/// resolve case-sensitively to a valid, released dictionary entry — the
/// first failure short-circuits. When all resolve, the label is AUTOSAR
/// conformant iff every matched entry carries the "AUTOSAR" classification.
pub fn is_autosar_conformant_label(label: &str, dictionary: &[Keyword]) -> AutosarConformance {
    let split = match split_label(label) {
        Some(split) => split,
        None => return AutosarConformance::AbbreviationNotAvailable,
    };

    let mut all_autosar = true;
    for keyword in &split.keywords {
        let found = dictionary.iter().find(|k| k.abbr_name == *keyword);
        let found = match found {
            Some(k) if k.is_valid() && k.state.eq_ignore_ascii_case("released") => k,
            _ => return AutosarConformance::AbbreviationNotAvailable,
        };
        if !found.has_classification("AUTOSAR") {
            all_autosar = false;
        }
    }

    if all_autosar {
        AutosarConformance::AutosarLabel
    } else {
        AutosarConformance::NoAutosarLabel
    }
}
