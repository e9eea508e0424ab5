//! Labelint validates structured naming labels against a controlled keyword
//! vocabulary and searches that vocabulary with spelling correction,
//! stemming and fuzzy matching.
//!
//! This crate provides a library interface to the labelint functionality,
//! enabling integration with other tools and testing. The dictionary is
//! always passed in as a plain read-only value; no function here performs
//! I/O beyond the snapshot loader in [`dictionary`].

pub mod dictionary;
pub mod label;
pub mod models;
pub mod search;

// Re-export commonly used types for convenience
pub use dictionary::{load_dictionary, parse_dictionary, DictionaryError};
pub use label::{
    get_label_rows, is_autosar_conformant_label, split_label, AutosarConformance, LabelError,
    LabelSplit,
};
pub use models::{ConsolidatedMessage, Keyword, LabelRow, MessageColor, ValidationResult};
pub use search::{
    correct_words, filter_data, filter_exact, normalize, stem, tokenize, Lang, SearchOptions,
};

// Tests are defined in their respective modules with #[cfg(test)]
