pub mod conformance;
pub mod splitter;
pub mod validator;

// Public exports
pub use conformance::{is_autosar_conformant_label, AutosarConformance};
pub use splitter::{split_label, LabelSplit};
pub use validator::{get_label_rows, LabelError, MAX_LABEL_LENGTH};
