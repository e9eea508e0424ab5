//! End-to-end validation scenarios against a small in-memory dictionary.

use labelint::models::PLACEHOLDER;
use labelint::{get_label_rows, Keyword, MessageColor};

fn entry(
    abbr: &str,
    long_en: &str,
    classifications: &[&str],
    life: &str,
) -> Keyword {
    Keyword {
        abbr_name: abbr.to_string(),
        long_name_en: long_en.to_string(),
        long_name_de: format!("{long_en} (de)"),
        domain_name: "Powertrain".to_string(),
        rb_classifications: classifications.iter().map(|c| c.to_string()).collect(),
        life_cycle_state: life.to_string(),
        state: "Released".to_string(),
        ..Keyword::default()
    }
}

fn dictionary() -> Vec<Keyword> {
    vec![
        entry("t", "temperature", &["Physical", "AUTOSAR"], "valid"),
        entry("q", "quantity", &[], "valid"),
        entry("Max", "maximum", &["AUTOSAR"], "valid"),
        entry("Lim", "limit", &["AUTOSAR"], "valid"),
        entry("Mix", "mixture", &["Extension", "AUTOSAR"], "valid"),
        entry("Verylongkeywordxxxx", "very long keyword", &[], "valid"),
        Keyword {
            use_instead: Some("temperature new".to_string()),
            use_instead_abbr_name: Some("TNew".to_string()),
            ..entry("Old", "old quantity", &[], "obsolete")
        },
        entry("C", "continuous", &["Extension"], "valid"),
        entry("K", "kelvin", &["AUTOSAR"], "valid"),
    ]
}

#[test]
fn lowercase_first_letter_is_no_label() {
    let result = get_label_rows("rb_tMaxLim_C", &dictionary());
    assert_eq!(result.message, "No Label");
    assert_eq!(result.color, MessageColor::Red);
    assert!(result.rows.is_empty());
    assert_eq!(result.consolidated_messages.len(), 1);
}

#[test]
fn four_underscore_segments_is_no_label() {
    let result = get_label_rows("RB_tMax_C_X", &dictionary());
    assert_eq!(result.message, "No Label");
    assert!(result.rows.is_empty());
}

#[test]
fn surrounding_junk_is_no_label() {
    for label in [" RB_tMaxLim_C", "RB_tMaxLim_C ", "(RB_tMaxLim_C)"] {
        let result = get_label_rows(label, &dictionary());
        assert_eq!(result.message, "No Label", "label: {label:?}");
    }
}

#[test]
fn embedded_punctuation_is_no_label() {
    let result = get_label_rows("RB_t.Max_C", &dictionary());
    assert_eq!(result.message, "No Label");
}

#[test]
fn fully_valid_label_has_five_rows_and_no_message() {
    let result = get_label_rows("RB_tMaxLim_C", &dictionary());
    assert_eq!(result.message, "");
    assert_eq!(result.color, MessageColor::None);
    assert!(result.consolidated_messages.is_empty());

    let abbrs: Vec<&str> = result.rows.iter().map(|r| r.abbr_name.as_str()).collect();
    assert_eq!(abbrs, vec!["RB", "t", "Max", "Lim", "C"]);
    assert_eq!(result.rows[0].rb_classifications, vec!["Id".to_string()]);
    assert_eq!(result.rows[1].long_name_en, "temperature");
    assert_eq!(result.rows[4].rb_classifications, vec!["Extension".to_string()]);
}

#[test]
fn unknown_descriptive_part_keeps_row_count_with_placeholders() {
    let mut dict = dictionary();
    dict.retain(|k| k.abbr_name != "Lim");

    let result = get_label_rows("RB_tMaxLim_C", &dict);
    assert_eq!(result.message, "Abbreviation of <dd> not available");
    assert_eq!(result.rows.len(), 5);
    let lim_row = &result.rows[3];
    assert_eq!(lim_row.abbr_name, "Lim");
    assert_eq!(lim_row.long_name_en, PLACEHOLDER);
    assert_eq!(lim_row.rb_classifications, vec![PLACEHOLDER.to_string()]);
}

#[test]
fn duplicate_descriptive_part_is_flagged_and_emitted_once() {
    let result = get_label_rows("RB_tMaxMax_C", &dictionary());
    assert_eq!(result.message, "Duplicate keywords used");

    let abbrs: Vec<&str> = result.rows.iter().map(|r| r.abbr_name.as_str()).collect();
    assert_eq!(abbrs, vec!["RB", "t", "Max", "C"]);
}

#[test]
fn unknown_prefix_reports_pp_not_available() {
    let result = get_label_rows("RB_xMax_C", &dictionary());
    assert_eq!(result.message, "Abbreviation of <pp> not available");
    // The prefix row is still emitted so the caller can show what was typed.
    assert_eq!(result.rows[1].abbr_name, "x");
    assert_eq!(result.rows[1].long_name_en, PLACEHOLDER);
}

#[test]
fn unclassified_prefix_reports_physical_part_missing() {
    let result = get_label_rows("RB_qMax_C", &dictionary());
    assert_eq!(result.message, "Physical part <pp> is missing");
    assert_eq!(result.rows[1].abbr_name, "q");
    assert_eq!(result.rows[1].long_name_en, "quantity");
}

#[test]
fn missing_descriptive_part_is_reported() {
    let result = get_label_rows("RB_t_C", &dictionary());
    assert_eq!(result.message, "DescriptiveName part <dd> is missing");
    let abbrs: Vec<&str> = result.rows.iter().map(|r| r.abbr_name.as_str()).collect();
    assert_eq!(abbrs, vec!["RB", "t", "C"]);
}

#[test]
fn extension_classified_descriptive_part_is_invalid() {
    let result = get_label_rows("RB_tMix_C", &dictionary());
    assert_eq!(result.message, "DescriptiveName part <dd> is invalid");
}

#[test]
fn unknown_extension_is_reported() {
    let result = get_label_rows("RB_tMax_Z", &dictionary());
    assert_eq!(result.message, "Extension <Ex> not available");
    let ex_row = result.rows.last().unwrap();
    assert_eq!(ex_row.abbr_name, "Z");
    assert_eq!(ex_row.long_name_en, PLACEHOLDER);
}

#[test]
fn wrongly_classified_extension_is_invalid() {
    let result = get_label_rows("RB_tMax_K", &dictionary());
    assert_eq!(result.message, "Extension part <Ex> is invalid");
}

#[test]
fn overlong_label_is_additive_not_exclusive() {
    let result = get_label_rows("RB_tVerylongkeywordxxxxMax_C", &dictionary());
    assert_eq!(result.message, "Label exceeds 27 characters");
    // Rows for all parts are still produced.
    assert_eq!(result.rows.len(), 5);
}

#[test]
fn errors_are_deduplicated_and_priority_ordered() {
    // q exists but is unclassified; Foo is unknown and duplicated.
    let result = get_label_rows("RB_qFooFoo", &dictionary());
    let texts: Vec<&str> = result
        .consolidated_messages
        .iter()
        .map(|m| m.text.as_str())
        .collect();
    assert_eq!(
        texts,
        vec![
            "Physical part <pp> is missing",
            "Duplicate keywords used",
            "Abbreviation of <dd> not available",
        ]
    );
    assert_eq!(result.message, "Physical part <pp> is missing");
}

#[test]
fn grammar_mismatch_after_pre_gate_reports_missing_parts() {
    // "RB" passes the coarse gate but has no underscore structure at all.
    let result = get_label_rows("RB", &dictionary());
    assert!(result.rows.is_empty());
    assert_eq!(result.message, "Abbreviation of <pp> not available");
    let texts: Vec<&str> = result
        .consolidated_messages
        .iter()
        .map(|m| m.text.as_str())
        .collect();
    assert!(texts.contains(&"DescriptiveName part <dd> is missing"));
}

#[test]
fn obsolete_keyword_rows_carry_replacement_hints() {
    let result = get_label_rows("RB_tOld_C", &dictionary());
    assert_eq!(result.message, "");

    let old_row = &result.rows[2];
    assert_eq!(old_row.abbr_name, "Old");
    assert_eq!(old_row.use_instead_abbr_name.as_deref(), Some("TNew"));

    assert_eq!(result.life_cycle_state.as_deref(), Some("obsolete"));
    assert_eq!(result.use_instead.as_deref(), Some("temperature new"));
    assert_eq!(result.use_instead_abbr_name.as_deref(), Some("TNew"));
}

#[test]
fn lifecycle_of_first_row_is_reported_when_nothing_is_obsolete() {
    let result = get_label_rows("RB_tMaxLim_C", &dictionary());
    // The Id row always reads as valid.
    assert_eq!(result.life_cycle_state.as_deref(), Some("valid"));
    assert_eq!(result.use_instead, None);
}

#[test]
fn validation_is_referentially_stable() {
    let dict = dictionary();
    for label in ["RB_tMaxLim_C", "RB_tMaxMax_C", "rb_bad", "RB_xFoo_Z"] {
        let first = get_label_rows(label, &dict);
        let second = get_label_rows(label, &dict);
        assert_eq!(first, second, "label: {label}");
    }
}
