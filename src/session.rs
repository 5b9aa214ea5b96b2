//! Submission session state machine.
//!
//! The original browser UI kept its state in framework reactivity; here the
//! four state variables are an explicit struct and every user action is a
//! transition method. Rendering is a pure projection of the struct, invoked
//! by the caller after each transition.

use crate::api::{ApiClient, CheckReport, DocumentHandle, HttpTransport};
use crate::error::ErrorEnvelope;
use crate::format::{confidence_level, format_file_size, format_processing_time};
use crate::validation::{MAX_RULES, MIN_RULES, validate_form};

/// Seed rules a fresh session starts with.
pub const DEFAULT_RULES: [&str; 3] = [
    "The document must have a purpose section",
    "The document must mention at least one date",
    "The document must define at least one term",
];

/// What the result area currently shows. Report and failure are mutually
/// exclusive by construction.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum View {
    #[default]
    Empty,
    Report(CheckReport),
    Failure(ErrorEnvelope),
}

/// The four UI state variables: selected document, rule list, in-flight
/// flag, and the result-or-error view.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    document: Option<DocumentHandle>,
    rules: Vec<String>,
    in_flight: bool,
    view: View,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self {
            document: None,
            rules: default_rules(),
            in_flight: false,
            view: View::Empty,
        }
    }

    #[must_use]
    pub const fn document(&self) -> Option<&DocumentHandle> {
        self.document.as_ref()
    }

    #[must_use]
    pub fn rules(&self) -> &[String] {
        &self.rules
    }

    #[must_use]
    pub const fn in_flight(&self) -> bool {
        self.in_flight
    }

    #[must_use]
    pub const fn view(&self) -> &View {
        &self.view
    }

    /// Replace the selected document. Clears any displayed error.
    pub fn select_document(&mut self, document: DocumentHandle) {
        self.document = Some(document);
        if matches!(self.view, View::Failure(_)) {
            self.view = View::Empty;
        }
    }

    /// Deselect the document without touching the rule list.
    pub fn clear_document(&mut self) {
        self.document = None;
    }

    /// Overwrite the rule at `index`. Out-of-range indices are ignored.
    pub fn edit_rule(&mut self, index: usize, text: impl Into<String>) {
        if let Some(slot) = self.rules.get_mut(index) {
            *slot = text.into();
        }
    }

    /// Append an empty rule slot. No-op once the rule limit is reached.
    /// Returns whether a slot was added.
    pub fn add_rule(&mut self) -> bool {
        if self.rules.len() >= MAX_RULES {
            return false;
        }
        self.rules.push(String::new());
        true
    }

    /// Remove the rule at `index`. No-op at the minimum rule count or for
    /// out-of-range indices. Returns whether a rule was removed.
    pub fn remove_rule(&mut self, index: usize) -> bool {
        if self.rules.len() <= MIN_RULES || index >= self.rules.len() {
            return false;
        }
        self.rules.remove(index);
        true
    }

    /// Install a complete rule list (bulk edit, used by the one-shot CLI).
    pub fn replace_rules(&mut self, rules: Vec<String>) {
        self.rules = rules;
    }

    /// Submit the current form.
    ///
    /// Blank rules are filtered out first; validation runs before any network
    /// activity and an invalid form never sets the in-flight flag. A new
    /// submission clears the previous report or error before dispatch. The
    /// in-flight flag gates re-entry: at most one outstanding request.
    pub fn submit<T: HttpTransport>(&mut self, client: &ApiClient<T>) {
        if self.in_flight {
            return;
        }

        let active: Vec<String> = self
            .rules
            .iter()
            .filter(|rule| !rule.trim().is_empty())
            .cloned()
            .collect();

        let errors = validate_form(self.document.as_ref(), &active);
        if !errors.is_empty() {
            self.view = View::Failure(ErrorEnvelope::validation(errors));
            return;
        }
        let Some(document) = self.document.as_ref() else {
            // validate_form already rejected a missing document
            return;
        };

        self.in_flight = true;
        self.view = View::Empty;

        self.view = match client.submit_check(document, &active) {
            Ok(report) => View::Report(report),
            Err(e) => View::Failure(e.into()),
        };
        self.in_flight = false;
    }

    /// Restore the initial state: no document, seed rules, empty view.
    pub fn reset(&mut self) {
        self.document = None;
        self.rules = default_rules();
        self.view = View::Empty;
    }

    #[cfg(test)]
    pub const fn force_in_flight(&mut self, in_flight: bool) {
        self.in_flight = in_flight;
    }
}

fn default_rules() -> Vec<String> {
    DEFAULT_RULES.iter().map(ToString::to_string).collect()
}

/// Pure projection of the session state into a text screen.
#[must_use]
pub fn render(session: &Session) -> String {
    use std::fmt::Write;

    let mut screen = String::new();

    match session.document() {
        Some(doc) => {
            writeln!(screen, "Document: {} ({})", doc.name, format_file_size(doc.size)).ok();
        }
        None => {
            writeln!(screen, "Document: none selected").ok();
        }
    }

    writeln!(screen, "Rules:").ok();
    for (index, rule) in session.rules().iter().enumerate() {
        let text = if rule.trim().is_empty() { "<empty>" } else { rule };
        writeln!(screen, "  {}. {text}", index + 1).ok();
    }

    if session.in_flight() {
        writeln!(screen, "Checking document...").ok();
        return screen;
    }

    match session.view() {
        View::Empty => {}
        View::Report(report) => {
            writeln!(screen).ok();
            writeln!(
                screen,
                "Result: {} ({} pages, {})",
                report.overall_status,
                report.total_pages,
                format_processing_time(report.processing_time_ms)
            )
            .ok();
            for outcome in &report.results {
                writeln!(
                    screen,
                    "  [{}] {} ({}%, {})",
                    outcome.status,
                    outcome.rule,
                    outcome.confidence,
                    confidence_level(outcome.confidence)
                )
                .ok();
            }
        }
        View::Failure(envelope) => {
            writeln!(screen).ok();
            writeln!(screen, "Error: {}", envelope.message).ok();
            if let Some(details) = &envelope.details {
                writeln!(screen, "  {details}").ok();
            }
            for error in &envelope.errors {
                writeln!(screen, "  - {error}").ok();
            }
        }
    }

    screen
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
