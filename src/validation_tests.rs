use super::{MAX_FILE_SIZE_BYTES, messages, validate_file, validate_form, validate_rules};
use crate::api::DocumentHandle;

fn pdf_of_size(size: usize) -> DocumentHandle {
    DocumentHandle::from_bytes("report.pdf", vec![0u8; size])
}

fn rules(texts: &[&str]) -> Vec<String> {
    texts.iter().map(ToString::to_string).collect()
}

#[test]
fn validate_file_requires_a_document() {
    assert_eq!(
        validate_file(None),
        Some(messages::FILE_REQUIRED.to_string())
    );
}

#[test]
fn validate_file_accepts_pdf_under_limit() {
    assert_eq!(validate_file(Some(&pdf_of_size(1024))), None);
}

#[test]
fn validate_file_extension_is_case_insensitive() {
    let doc = DocumentHandle::from_bytes("REPORT.PDF", vec![1, 2, 3]);
    assert_eq!(validate_file(Some(&doc)), None);

    let doc = DocumentHandle::from_bytes("Report.Pdf", vec![1, 2, 3]);
    assert_eq!(validate_file(Some(&doc)), None);
}

#[test]
fn validate_file_rejects_non_pdf_extension() {
    let doc = DocumentHandle::from_bytes("notes.txt", vec![1, 2, 3]);
    assert_eq!(
        validate_file(Some(&doc)),
        Some(messages::INVALID_FILE_TYPE.to_string())
    );
}

#[test]
fn validate_file_rejects_oversized_pdf() {
    let doc = pdf_of_size(usize::try_from(MAX_FILE_SIZE_BYTES).unwrap() + 1);
    assert_eq!(
        validate_file(Some(&doc)),
        Some(messages::FILE_TOO_LARGE.to_string())
    );
}

#[test]
fn validate_file_accepts_exactly_ten_mib() {
    let doc = pdf_of_size(usize::try_from(MAX_FILE_SIZE_BYTES).unwrap());
    assert_eq!(validate_file(Some(&doc)), None);
}

#[test]
fn validate_rules_requires_at_least_one() {
    assert_eq!(
        validate_rules(&[]),
        vec![messages::RULES_REQUIRED.to_string()]
    );
}

#[test]
fn validate_rules_rejects_more_than_ten() {
    let eleven = vec!["a rule".to_string(); 11];
    let errors = validate_rules(&eleven);
    assert_eq!(errors, vec![messages::TOO_MANY_RULES.to_string()]);
}

#[test]
fn validate_rules_flags_empty_rule_with_position() {
    let errors = validate_rules(&rules(&["ok", "   ", "also ok"]));
    assert_eq!(errors, vec![format!("Rule 2: {}", messages::RULE_EMPTY)]);
}

#[test]
fn validate_rules_flags_overlong_rule_with_position() {
    let errors = validate_rules(&rules(&[&"a".repeat(501)]));
    assert_eq!(errors, vec![format!("Rule 1: {}", messages::RULE_TOO_LONG)]);
}

#[test]
fn validate_rules_accepts_exactly_five_hundred_chars() {
    let errors = validate_rules(&rules(&[&"a".repeat(500)]));
    assert!(errors.is_empty());
}

#[test]
fn validate_rules_length_counts_chars_not_bytes() {
    // 500 multibyte characters are within the limit even though the byte
    // length is far larger.
    let errors = validate_rules(&rules(&[&"ü".repeat(500)]));
    assert!(errors.is_empty());
}

#[test]
fn validate_rules_reports_multiple_failures_in_order() {
    let long = "a".repeat(501);
    let errors = validate_rules(&rules(&["", &long, "fine"]));
    assert_eq!(
        errors,
        vec![
            format!("Rule 1: {}", messages::RULE_EMPTY),
            format!("Rule 2: {}", messages::RULE_TOO_LONG),
        ]
    );
}

#[test]
fn validate_form_with_nothing_yields_both_required_errors_in_order() {
    let errors = validate_form(None, &[]);
    assert_eq!(
        errors,
        vec![
            messages::FILE_REQUIRED.to_string(),
            messages::RULES_REQUIRED.to_string(),
        ]
    );
}

#[test]
fn validate_form_valid_pdf_with_overlong_rule_yields_one_error() {
    let doc = pdf_of_size(1024);
    let errors = validate_form(Some(&doc), &rules(&[&"a".repeat(501)]));
    assert_eq!(errors, vec![format!("Rule 1: {}", messages::RULE_TOO_LONG)]);
}

#[test]
fn validate_form_passes_clean_input() {
    let doc = pdf_of_size(1024);
    let errors = validate_form(Some(&doc), &rules(&["The document must mention a date"]));
    assert!(errors.is_empty());
}
