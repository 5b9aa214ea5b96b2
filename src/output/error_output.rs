//! Uniform stderr rendering of the error envelope.
//!
//! Validation failures and normalized transport failures share one shape and
//! one renderer: ✖ message / × details / one bullet per field error.

use std::io::{IsTerminal, Write};

use crate::error::ErrorEnvelope;

use super::text::ansi;

/// Error envelope renderer with color support.
pub struct ErrorOutput {
    use_colors: bool,
}

impl ErrorOutput {
    /// Creates a renderer that auto-detects color support on stderr.
    #[must_use]
    pub fn stderr() -> Self {
        Self {
            use_colors: stderr_supports_color(),
        }
    }

    /// Creates a renderer with explicit color control (for testing).
    #[cfg(test)]
    pub const fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }

    /// Renders the envelope to stderr.
    pub fn print(&self, envelope: &ErrorEnvelope) {
        let mut stderr = std::io::stderr().lock();
        self.write(&mut stderr, envelope);
    }

    /// Writes the envelope to a writer (for testing).
    ///
    /// Write errors are discarded: when reporting errors, failing to write
    /// shouldn't cause additional failures.
    pub fn write<W: Write>(&self, w: &mut W, envelope: &ErrorEnvelope) {
        if self.use_colors {
            let _ = writeln!(
                w,
                "{}{}✖ {}{}",
                ansi::BOLD,
                ansi::RED,
                envelope.message,
                ansi::RESET
            );
        } else {
            let _ = writeln!(w, "✖ {}", envelope.message);
        }

        if let Some(details) = &envelope.details {
            if self.use_colors {
                let _ = writeln!(w, "  {}× {details}{}", ansi::DIM, ansi::RESET);
            } else {
                let _ = writeln!(w, "  × {details}");
            }
        }

        for error in &envelope.errors {
            let _ = writeln!(w, "  - {error}");
        }
    }
}

impl Default for ErrorOutput {
    fn default() -> Self {
        Self::stderr()
    }
}

fn stderr_supports_color() -> bool {
    // Respect NO_COLOR (https://no-color.org): presence disables color.
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    std::io::stderr().is_terminal()
}

/// Convenience function: renders an envelope using auto-detected color mode.
pub fn print_envelope(envelope: &ErrorEnvelope) {
    ErrorOutput::stderr().print(envelope);
}

#[cfg(test)]
#[path = "error_output_tests.rs"]
mod tests;
