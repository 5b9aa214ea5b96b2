use serde::Serialize;

use crate::api::{CheckReport, RuleOutcome};
use crate::error::Result;
use crate::format::confidence_level;

use super::ReportFormatter;

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Summary<'a>,
    results: Vec<OutcomeRow<'a>>,
}

#[derive(Serialize)]
struct Summary<'a> {
    file_name: &'a str,
    total_pages: u32,
    overall_status: crate::api::OverallStatus,
    processing_time_ms: u64,
    timestamp: &'a str,
    rules_checked: usize,
    passed: usize,
    failed: usize,
    errored: usize,
}

#[derive(Serialize)]
struct OutcomeRow<'a> {
    rule: &'a str,
    status: crate::api::RuleStatus,
    evidence: &'a str,
    reasoning: &'a str,
    confidence: u8,
    confidence_level: &'static str,
}

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &CheckReport) -> Result<String> {
        let (passed, failed, errored) = report.tally();

        let output = JsonOutput {
            summary: Summary {
                file_name: &report.file_name,
                total_pages: report.total_pages,
                overall_status: report.overall_status,
                processing_time_ms: report.processing_time_ms,
                timestamp: &report.timestamp,
                rules_checked: report.results.len(),
                passed,
                failed,
                errored,
            },
            results: report.results.iter().map(convert_outcome).collect(),
        };

        Ok(serde_json::to_string_pretty(&output)?)
    }
}

fn convert_outcome(outcome: &RuleOutcome) -> OutcomeRow<'_> {
    OutcomeRow {
        rule: &outcome.rule,
        status: outcome.status,
        evidence: &outcome.evidence,
        reasoning: &outcome.reasoning,
        confidence: outcome.confidence,
        confidence_level: confidence_level(outcome.confidence),
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
