//! Wire model for the PDF analysis service.
//!
//! Field names follow the service's JSON contract (camelCase). Status enums
//! tolerate values this client does not know about so a newer server cannot
//! break report rendering.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::{PdfCheckError, Result};

/// A user-selected document staged for submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentHandle {
    pub name: String,
    pub size: u64,
    pub content: Vec<u8>,
}

impl DocumentHandle {
    /// Load a document from disk.
    ///
    /// # Errors
    /// Returns [`PdfCheckError::FileRead`] if the file cannot be read.
    pub fn from_path(path: &Path) -> Result<Self> {
        let content = std::fs::read(path).map_err(|source| PdfCheckError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());

        Ok(Self {
            name,
            size: content.len() as u64,
            content,
        })
    }

    /// Construct a handle from in-memory bytes (interactive edits, tests).
    #[must_use]
    pub fn from_bytes(name: impl Into<String>, content: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            size: content.len() as u64,
            content,
        }
    }
}

/// Verdict for a single rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RuleStatus {
    Pass,
    Fail,
    Error,
    #[serde(other)]
    Unknown,
}

/// Aggregate verdict across all rule outcomes for one document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OverallStatus {
    AllPass,
    AllFail,
    PartialPass,
    Error,
    NoResults,
    #[serde(other)]
    Unknown,
}

impl std::fmt::Display for RuleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Pass => "PASS",
            Self::Fail => "FAIL",
            Self::Error => "ERROR",
            Self::Unknown => "UNKNOWN",
        };
        write!(f, "{s}")
    }
}

impl std::fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Underscores become spaces for display, matching the badge text.
        let s = match self {
            Self::AllPass => "ALL PASS",
            Self::AllFail => "ALL FAIL",
            Self::PartialPass => "PARTIAL PASS",
            Self::Error => "ERROR",
            Self::NoResults => "NO RESULTS",
            Self::Unknown => "UNKNOWN",
        };
        write!(f, "{s}")
    }
}

/// Outcome for a single submitted rule.
///
/// Outcomes arrive in submission order; rows are matched to rules by
/// position, not by rule text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleOutcome {
    pub rule: String,
    pub status: RuleStatus,
    #[serde(default)]
    pub evidence: String,
    #[serde(default)]
    pub reasoning: String,
    /// Confidence score in [0, 100].
    pub confidence: u8,
}

/// Parsed response body of a successful check submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckReport {
    pub file_name: String,
    pub total_pages: u32,
    pub overall_status: OverallStatus,
    pub processing_time_ms: u64,
    /// ISO-8601 local date-time string as emitted by the service.
    #[serde(default)]
    pub timestamp: String,
    pub results: Vec<RuleOutcome>,
}

impl CheckReport {
    /// Count outcomes as (passed, failed, errored).
    #[must_use]
    pub fn tally(&self) -> (usize, usize, usize) {
        self.results
            .iter()
            .fold((0, 0, 0), |(p, f, e), r| match r.status {
                RuleStatus::Pass => (p + 1, f, e),
                RuleStatus::Fail => (p, f + 1, e),
                RuleStatus::Error | RuleStatus::Unknown => (p, f, e + 1),
            })
    }
}

/// Error body the service attaches to non-2xx responses.
///
/// All fields are optional; the service may also send `timestamp` and `path`,
/// which this client ignores.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub details: Option<String>,
    #[serde(default)]
    pub errors: Option<Vec<String>>,
}

/// Normalized transport/server failure.
///
/// `status` is the HTTP status for server-rejected requests, or `0` when no
/// response was received or the request could not be constructed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct ApiError {
    pub status: u16,
    pub message: String,
    pub details: String,
    pub errors: Vec<String>,
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
