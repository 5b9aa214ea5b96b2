use std::fs;
use std::path::Path;

use crate::api::{ApiClient, CheckReport, DocumentHandle, OverallStatus};
use crate::cli::{CheckArgs, Cli};
use crate::error::{PdfCheckError, Result};
use crate::output::{
    JsonFormatter, MarkdownFormatter, OutputFormat, ReportFormatter, TextFormatter,
    print_envelope,
};
use crate::session::{DEFAULT_RULES, Session, View};
use crate::{EXIT_ERROR, EXIT_RULES_FAILED, EXIT_SUCCESS};

pub fn run(args: &CheckArgs, cli: &Cli) -> i32 {
    match run_impl(args, cli) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            super::report_error(&e);
            EXIT_ERROR
        }
    }
}

fn run_impl(args: &CheckArgs, cli: &Cli) -> Result<i32> {
    // 1. Resolve the endpoint and stage the form
    let endpoint = super::resolve_endpoint(cli)?;
    let client = ApiClient::new(endpoint);
    let document = DocumentHandle::from_path(&args.file)?;
    let rules = collect_rules(args)?;

    // 2. Drive the submission through the session state machine
    let mut session = Session::new();
    session.select_document(document);
    session.replace_rules(rules);
    session.submit(&client);

    // 3. Project the outcome
    match session.view() {
        View::Report(report) => {
            let formatted = format_report(args.format, report, cli)?;
            write_output(args.output.as_deref(), &formatted, cli.quiet)?;
            Ok(exit_code_for(report, args.warn_only))
        }
        View::Failure(envelope) => {
            print_envelope(envelope);
            Ok(EXIT_ERROR)
        }
        // submit always leaves a report or a failure behind
        View::Empty => Ok(EXIT_ERROR),
    }
}

/// Gather rules from `--rule` flags and `--rules-file` lines, in that order.
/// With no rules given at all, fall back to the default seed rules.
pub(crate) fn collect_rules(args: &CheckArgs) -> Result<Vec<String>> {
    let mut rules = args.rules.clone();

    if let Some(path) = &args.rules_file {
        let content = fs::read_to_string(path).map_err(|source| PdfCheckError::FileRead {
            path: path.clone(),
            source,
        })?;
        rules.extend(
            content
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(ToString::to_string),
        );
    }

    if rules.is_empty() {
        rules = DEFAULT_RULES.iter().map(ToString::to_string).collect();
    }

    Ok(rules)
}

pub(crate) fn exit_code_for(report: &CheckReport, warn_only: bool) -> i32 {
    if warn_only || report.overall_status == OverallStatus::AllPass {
        EXIT_SUCCESS
    } else {
        EXIT_RULES_FAILED
    }
}

fn format_report(format: OutputFormat, report: &CheckReport, cli: &Cli) -> Result<String> {
    let color_mode = super::color_choice_to_mode(cli.color);
    match format {
        OutputFormat::Text => {
            TextFormatter::with_verbose(color_mode, cli.verbose).format(report)
        }
        OutputFormat::Json => JsonFormatter.format(report),
        OutputFormat::Markdown => MarkdownFormatter.format(report),
    }
}

fn write_output(path: Option<&Path>, content: &str, quiet: bool) -> Result<()> {
    match path {
        Some(path) => {
            fs::write(path, content)?;
            if !quiet {
                eprintln!("Report written to {}", path.display());
            }
        }
        None => println!("{content}"),
    }
    Ok(())
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
