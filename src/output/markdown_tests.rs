use super::MarkdownFormatter;
use crate::api::{CheckReport, OverallStatus, RuleOutcome, RuleStatus};
use crate::output::ReportFormatter;

fn sample_report() -> CheckReport {
    CheckReport {
        file_name: "contract.pdf".to_string(),
        total_pages: 2,
        overall_status: OverallStatus::AllFail,
        processing_time_ms: 1500,
        timestamp: "2026-08-23T11:30:00".to_string(),
        results: vec![RuleOutcome {
            rule: "Must | contain a signature".to_string(),
            status: RuleStatus::Fail,
            evidence: String::new(),
            reasoning: "No signature block found.".to_string(),
            confidence: 45,
        }],
    }
}

#[test]
fn markdown_has_summary_and_rules_tables() {
    let output = MarkdownFormatter.format(&sample_report()).unwrap();

    assert!(output.contains("## Check Results"));
    assert!(output.contains("| File | `contract.pdf` |"));
    assert!(output.contains("| Pages | 2 |"));
    assert!(output.contains("❌ ALL FAIL"));
    assert!(output.contains("| Processing time | 1.50s |"));
    assert!(output.contains("### Rules"));
    assert!(output.contains("45% (Low)"));
}

#[test]
fn markdown_escapes_pipes_in_rule_text() {
    let output = MarkdownFormatter.format(&sample_report()).unwrap();
    assert!(output.contains("Must \\| contain a signature"));
}

#[test]
fn markdown_renders_empty_cells_as_dash() {
    let output = MarkdownFormatter.format(&sample_report()).unwrap();
    assert!(output.contains("| - |"));
}

#[test]
fn markdown_includes_timestamp_line() {
    let output = MarkdownFormatter.format(&sample_report()).unwrap();
    assert!(output.contains("Checked on Aug 23, 2026, 11:30 AM"));
}
