use serde::{Deserialize, Serialize};
use std::fmt;

/// Display placeholder used when a label part has no dictionary match.
pub const PLACEHOLDER: &str = "-";

/// A dictionary entry: the unit of truth labels are validated and searched
/// against. Field names serialize in camelCase so existing dictionary JSON
/// snapshots load unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Keyword {
    /// Short code, the case-sensitive identity key within the dictionary.
    /// Two entries may differ only by case and are distinct.
    pub abbr_name: String,
    pub long_name_en: String,
    pub long_name_de: String,
    /// Categorical grouping, display-only.
    pub domain_name: String,
    /// Tags gating which label position the keyword may occupy
    /// ("Physical", "Logical", "Extension", "AUTOSAR", ...).
    pub rb_classifications: Vec<String>,
    /// "valid" | "obsolete" | ... (compared case-insensitively).
    pub life_cycle_state: String,
    /// Release status, e.g. "Released".
    pub state: String,
    /// Suggested replacement, present only on obsolete entries.
    pub use_instead: Option<String>,
    pub use_instead_abbr_name: Option<String>,
}

impl Keyword {
    pub fn is_valid(&self) -> bool {
        self.life_cycle_state.eq_ignore_ascii_case("valid")
    }

    pub fn is_obsolete(&self) -> bool {
        self.life_cycle_state.eq_ignore_ascii_case("obsolete")
    }

    pub fn has_classification(&self, tag: &str) -> bool {
        self.rb_classifications.iter().any(|c| c == tag)
    }

    /// True when the entry carries exactly one classification and it is
    /// "Extension" (case-insensitive). Such entries are reserved for the
    /// trailing label position and are invisible to descriptive-part lookup.
    pub fn is_extension_only(&self) -> bool {
        self.rb_classifications.len() == 1
            && self.rb_classifications[0].eq_ignore_ascii_case("extension")
    }
}

/// Severity color attached to a validation message.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MessageColor {
    #[serde(rename = "red")]
    Red,
    #[serde(rename = "orange")]
    Orange,
    #[serde(rename = "navy")]
    Navy,
    #[default]
    #[serde(rename = "")]
    None,
}

impl MessageColor {
    pub fn as_str(&self) -> &'static str {
        match self {
            MessageColor::Red => "red",
            MessageColor::Orange => "orange",
            MessageColor::Navy => "navy",
            MessageColor::None => "",
        }
    }
}

impl fmt::Display for MessageColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One row of the validation result table, one per recognized label part.
/// Display fields fall back to the `"-"` placeholder when the part has no
/// dictionary match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelRow {
    pub abbr_name: String,
    pub rb_classifications: Vec<String>,
    pub long_name_en: String,
    pub long_name_de: String,
    pub domain_name: String,
    pub life_cycle_state: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_instead: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub use_instead_abbr_name: Option<String>,
}

impl LabelRow {
    /// Row for the leading identifier segment. The Id is never looked up in
    /// the dictionary; it gets the fixed "Id" classification tag.
    pub fn id_row(id: &str) -> Self {
        LabelRow {
            abbr_name: id.to_string(),
            rb_classifications: vec!["Id".to_string()],
            long_name_en: PLACEHOLDER.to_string(),
            long_name_de: PLACEHOLDER.to_string(),
            domain_name: PLACEHOLDER.to_string(),
            life_cycle_state: "valid".to_string(),
            use_instead: None,
            use_instead_abbr_name: None,
        }
    }

    /// Row for a label part, filled from the matched dictionary entry when
    /// one exists, else from the raw part text plus placeholders.
    pub fn from_match(raw: &str, matched: Option<&Keyword>) -> Self {
        match matched {
            Some(k) => LabelRow {
                abbr_name: k.abbr_name.clone(),
                rb_classifications: if k.rb_classifications.is_empty() {
                    vec![PLACEHOLDER.to_string()]
                } else {
                    k.rb_classifications.clone()
                },
                long_name_en: k.long_name_en.clone(),
                long_name_de: k.long_name_de.clone(),
                domain_name: k.domain_name.clone(),
                life_cycle_state: k.life_cycle_state.clone(),
                use_instead: None,
                use_instead_abbr_name: None,
            },
            None => LabelRow {
                abbr_name: raw.to_string(),
                rb_classifications: vec![PLACEHOLDER.to_string()],
                long_name_en: PLACEHOLDER.to_string(),
                long_name_de: PLACEHOLDER.to_string(),
                domain_name: PLACEHOLDER.to_string(),
                life_cycle_state: PLACEHOLDER.to_string(),
                use_instead: None,
                use_instead_abbr_name: None,
            },
        }
    }
}

/// A single entry of the consolidated validation message list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsolidatedMessage {
    pub text: String,
    pub color: MessageColor,
}

/// Result of analyzing one label input: the per-part row table, the single
/// highest-priority message, and the full consolidated message list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    pub rows: Vec<LabelRow>,
    pub message: String,
    pub color: MessageColor,
    pub consolidated_messages: Vec<ConsolidatedMessage>,
    pub life_cycle_state: Option<String>,
    pub use_instead: Option<String>,
    pub use_instead_abbr_name: Option<String>,
}
