use std::fmt::Write;

use crate::api::{CheckReport, RuleOutcome};
use crate::error::Result;
use crate::format::{
    StatusClass, confidence_level, format_processing_time, format_timestamp,
    overall_status_class, rule_status_class,
};

use super::ReportFormatter;

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Auto-detect: use colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

/// ANSI color codes
pub(super) mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const CYAN: &str = "\x1b[36m";
    pub const BOLD: &str = "\x1b[1m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: should_use_colors(mode),
            verbose,
        }
    }

    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self {
            use_colors,
            verbose: 0,
        }
    }

    pub(super) const fn status_icon(class: StatusClass) -> &'static str {
        match class {
            StatusClass::Pass => "✓",
            StatusClass::Fail => "✗",
            StatusClass::Warning => "⚠",
            StatusClass::Default => "•",
        }
    }

    fn colorize(&self, text: &str, class: StatusClass) -> String {
        if !self.use_colors {
            return text.to_string();
        }

        let color = match class {
            StatusClass::Pass => ansi::GREEN,
            StatusClass::Fail => ansi::RED,
            StatusClass::Warning => ansi::YELLOW,
            StatusClass::Default => ansi::CYAN,
        };

        format!("{color}{text}{}", ansi::RESET)
    }

    fn format_outcome(&self, outcome: &RuleOutcome, output: &mut String) {
        let class = rule_status_class(outcome.status);
        let icon = Self::status_icon(class);
        let status = self.colorize(&outcome.status.to_string(), class);

        writeln!(output, "{icon} {status}  {}", outcome.rule).ok();
        writeln!(
            output,
            "    confidence: {}% ({})",
            outcome.confidence,
            confidence_level(outcome.confidence)
        )
        .ok();

        // Evidence and reasoning can be long; only show them at -v and above.
        if self.verbose > 0 {
            if !outcome.evidence.is_empty() {
                writeln!(output, "    evidence: {}", outcome.evidence).ok();
            }
            if !outcome.reasoning.is_empty() {
                writeln!(output, "    reasoning: {}", outcome.reasoning).ok();
            }
        }
    }
}

fn should_use_colors(mode: ColorMode) -> bool {
    match mode {
        ColorMode::Always => true,
        ColorMode::Never => false,
        ColorMode::Auto => {
            // Respect NO_COLOR environment variable
            if std::env::var("NO_COLOR").is_ok() {
                return false;
            }
            std::io::IsTerminal::is_terminal(&std::io::stdout())
        }
    }
}

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &CheckReport) -> Result<String> {
        let mut output = String::new();
        let overall_class = overall_status_class(report.overall_status);
        let badge = self.colorize(&report.overall_status.to_string(), overall_class);
        let (passed, failed, errors) = report.tally();

        writeln!(output, "Check Results").ok();
        writeln!(output, "  File:            {}", report.file_name).ok();
        writeln!(output, "  Pages:           {}", report.total_pages).ok();
        writeln!(output, "  Overall status:  {badge}").ok();
        writeln!(
            output,
            "  Processing time: {}",
            format_processing_time(report.processing_time_ms)
        )
        .ok();
        writeln!(output).ok();

        for outcome in &report.results {
            self.format_outcome(outcome, &mut output);
        }

        writeln!(output).ok();
        write!(
            output,
            "Summary: {} rules checked, {passed} passed, {failed} failed",
            report.results.len()
        )
        .ok();
        if errors > 0 {
            write!(output, ", {errors} errored").ok();
        }
        writeln!(output).ok();

        if !report.timestamp.is_empty() {
            writeln!(output, "Checked on {}", format_timestamp(&report.timestamp)).ok();
        }

        Ok(output)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
