use super::TextFormatter;
use crate::api::{CheckReport, OverallStatus, RuleOutcome, RuleStatus};
use crate::output::ReportFormatter;

fn sample_report() -> CheckReport {
    CheckReport {
        file_name: "contract.pdf".to_string(),
        total_pages: 12,
        overall_status: OverallStatus::PartialPass,
        processing_time_ms: 4523,
        timestamp: "2026-08-23T14:32:05".to_string(),
        results: vec![
            RuleOutcome {
                rule: "The document must have a purpose section".to_string(),
                status: RuleStatus::Pass,
                evidence: "Section 1: Purpose".to_string(),
                reasoning: "A purpose section is present on page 1.".to_string(),
                confidence: 95,
            },
            RuleOutcome {
                rule: "The document must mention at least one date".to_string(),
                status: RuleStatus::Fail,
                evidence: String::new(),
                reasoning: "No date was found.".to_string(),
                confidence: 70,
            },
        ],
    }
}

#[test]
fn text_output_contains_summary_fields() {
    let output = TextFormatter::with_colors(false)
        .format(&sample_report())
        .unwrap();

    assert!(output.contains("contract.pdf"));
    assert!(output.contains("Pages:           12"));
    assert!(output.contains("PARTIAL PASS"));
    assert!(output.contains("4.52s"));
    assert!(output.contains("2 rules checked, 1 passed, 1 failed"));
    assert!(output.contains("Checked on Aug 23, 2026, 02:32 PM"));
}

#[test]
fn text_output_shows_one_line_per_rule_with_icon() {
    let output = TextFormatter::with_colors(false)
        .format(&sample_report())
        .unwrap();

    assert!(output.contains("✓ PASS  The document must have a purpose section"));
    assert!(output.contains("✗ FAIL  The document must mention at least one date"));
    assert!(output.contains("confidence: 95% (Very High)"));
    assert!(output.contains("confidence: 70% (Medium)"));
}

#[test]
fn evidence_and_reasoning_only_appear_when_verbose() {
    let quiet = TextFormatter::with_colors(false)
        .format(&sample_report())
        .unwrap();
    assert!(!quiet.contains("evidence:"));
    assert!(!quiet.contains("reasoning:"));

    let verbose = TextFormatter::with_verbose(super::ColorMode::Never, 1)
        .format(&sample_report())
        .unwrap();
    assert!(verbose.contains("evidence: Section 1: Purpose"));
    assert!(verbose.contains("reasoning: No date was found."));
}

#[test]
fn colored_output_wraps_status_badges() {
    let output = TextFormatter::with_colors(true)
        .format(&sample_report())
        .unwrap();

    // PARTIAL_PASS is a warning badge, PASS is green, FAIL is red.
    assert!(output.contains("\x1b[33mPARTIAL PASS\x1b[0m"));
    assert!(output.contains("\x1b[32mPASS\x1b[0m"));
    assert!(output.contains("\x1b[31mFAIL\x1b[0m"));
}

#[test]
fn error_tally_appears_when_rules_errored() {
    let mut report = sample_report();
    report.results[1].status = RuleStatus::Error;

    let output = TextFormatter::with_colors(false).format(&report).unwrap();
    assert!(output.contains("1 errored"));
    assert!(output.contains("⚠ ERROR"));
}

#[test]
fn empty_timestamp_omits_checked_on_line() {
    let mut report = sample_report();
    report.timestamp = String::new();

    let output = TextFormatter::with_colors(false).format(&report).unwrap();
    assert!(!output.contains("Checked on"));
}
