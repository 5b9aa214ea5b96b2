//! Client-side validation of the submission form.
//!
//! Everything here is pure and runs before any network activity, so a user
//! can fix their input without a round trip to the service.

use crate::api::DocumentHandle;

/// Maximum accepted file size in bytes (10 MiB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;
/// Only `.pdf` files are accepted, matched case-insensitively.
pub const ALLOWED_FILE_EXTENSION: &str = ".pdf";
pub const MIN_RULES: usize = 1;
pub const MAX_RULES: usize = 10;
/// Maximum rule length in characters.
pub const MAX_RULE_LENGTH: usize = 500;

pub mod messages {
    pub const FILE_REQUIRED: &str = "Please select a PDF file";
    pub const INVALID_FILE_TYPE: &str = "Only PDF files are allowed";
    pub const FILE_TOO_LARGE: &str = "File size must not exceed 10MB";
    pub const RULES_REQUIRED: &str = "Please enter at least one rule";
    pub const RULE_EMPTY: &str = "Rule cannot be empty";
    pub const RULE_TOO_LONG: &str = "Rule must not exceed 500 characters";
    pub const TOO_MANY_RULES: &str = "Maximum 10 rules allowed";
}

/// Validate the selected document, returning the first failing check.
#[must_use]
pub fn validate_file(document: Option<&DocumentHandle>) -> Option<String> {
    let Some(document) = document else {
        return Some(messages::FILE_REQUIRED.to_string());
    };

    if !document
        .name
        .to_lowercase()
        .ends_with(ALLOWED_FILE_EXTENSION)
    {
        return Some(messages::INVALID_FILE_TYPE.to_string());
    }

    if document.size > MAX_FILE_SIZE_BYTES {
        return Some(messages::FILE_TOO_LARGE.to_string());
    }

    None
}

/// Validate the rule list.
///
/// Per-rule messages are prefixed with the rule's 1-based position.
#[must_use]
pub fn validate_rules(rules: &[String]) -> Vec<String> {
    if rules.is_empty() {
        return vec![messages::RULES_REQUIRED.to_string()];
    }

    let mut errors = Vec::new();

    if rules.len() > MAX_RULES {
        errors.push(messages::TOO_MANY_RULES.to_string());
    }

    for (index, rule) in rules.iter().enumerate() {
        if rule.trim().is_empty() {
            errors.push(format!("Rule {}: {}", index + 1, messages::RULE_EMPTY));
        } else if rule.chars().count() > MAX_RULE_LENGTH {
            errors.push(format!("Rule {}: {}", index + 1, messages::RULE_TOO_LONG));
        }
    }

    errors
}

/// Validate the whole form: file error first, then rule errors, in order.
#[must_use]
pub fn validate_form(document: Option<&DocumentHandle>, rules: &[String]) -> Vec<String> {
    let mut errors = Vec::new();
    if let Some(error) = validate_file(document) {
        errors.push(error);
    }
    errors.extend(validate_rules(rules));
    errors
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
