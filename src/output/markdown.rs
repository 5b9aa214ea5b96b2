use std::fmt::Write;

use crate::api::CheckReport;
use crate::error::Result;
use crate::format::{
    StatusClass, confidence_level, format_processing_time, format_timestamp,
    overall_status_class, rule_status_class,
};

use super::ReportFormatter;

pub struct MarkdownFormatter;

impl MarkdownFormatter {
    const fn status_icon(class: StatusClass) -> &'static str {
        match class {
            StatusClass::Pass => "✅",
            StatusClass::Fail => "❌",
            StatusClass::Warning => "⚠️",
            StatusClass::Default => "⬜",
        }
    }

    /// Escape pipes so rule text cannot break the table layout.
    fn cell(text: &str) -> String {
        let escaped = text.replace('|', "\\|").replace('\n', " ");
        if escaped.is_empty() {
            "-".to_string()
        } else {
            escaped
        }
    }
}

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &CheckReport) -> Result<String> {
        let mut output = String::new();
        let (passed, failed, errored) = report.tally();
        let overall_icon = Self::status_icon(overall_status_class(report.overall_status));

        writeln!(output, "## Check Results\n").ok();
        writeln!(output, "| Field | Value |").ok();
        writeln!(output, "|-------|-------|").ok();
        writeln!(output, "| File | `{}` |", report.file_name).ok();
        writeln!(output, "| Pages | {} |", report.total_pages).ok();
        writeln!(
            output,
            "| Overall status | {overall_icon} {} |",
            report.overall_status
        )
        .ok();
        writeln!(
            output,
            "| Processing time | {} |",
            format_processing_time(report.processing_time_ms)
        )
        .ok();
        writeln!(
            output,
            "| Rules | {} checked, {passed} passed, {failed} failed, {errored} errored |",
            report.results.len()
        )
        .ok();
        writeln!(output).ok();

        writeln!(output, "### Rules\n").ok();
        writeln!(
            output,
            "| Status | Rule | Evidence | Reasoning | Confidence |"
        )
        .ok();
        writeln!(
            output,
            "|:------:|------|----------|-----------|-----------:|"
        )
        .ok();

        for outcome in &report.results {
            let icon = Self::status_icon(rule_status_class(outcome.status));
            writeln!(
                output,
                "| {icon} {} | {} | {} | {} | {}% ({}) |",
                outcome.status,
                Self::cell(&outcome.rule),
                Self::cell(&outcome.evidence),
                Self::cell(&outcome.reasoning),
                outcome.confidence,
                confidence_level(outcome.confidence)
            )
            .ok();
        }

        if !report.timestamp.is_empty() {
            writeln!(output).ok();
            writeln!(
                output,
                "Checked on {}",
                format_timestamp(&report.timestamp)
            )
            .ok();
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "markdown_tests.rs"]
mod tests;
