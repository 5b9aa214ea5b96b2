use std::path::PathBuf;

use thiserror::Error;

use crate::api::ApiError;

#[derive(Error, Debug)]
pub enum PdfCheckError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Validation failed")]
    Validation { errors: Vec<String> },

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, PdfCheckError>;

/// Uniform error shape surfaced to the presentation layer.
///
/// Validation failures and normalized transport failures both collapse into
/// this envelope so rendering code has a single error path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorEnvelope {
    pub message: String,
    pub details: Option<String>,
    pub errors: Vec<String>,
}

impl ErrorEnvelope {
    #[must_use]
    pub fn validation(errors: Vec<String>) -> Self {
        Self {
            message: "Validation failed".to_string(),
            details: None,
            errors,
        }
    }
}

impl From<ApiError> for ErrorEnvelope {
    fn from(e: ApiError) -> Self {
        Self {
            message: e.message,
            details: (!e.details.is_empty()).then_some(e.details),
            errors: e.errors,
        }
    }
}

impl From<&PdfCheckError> for ErrorEnvelope {
    fn from(e: &PdfCheckError) -> Self {
        match e {
            PdfCheckError::Validation { errors } => Self::validation(errors.clone()),
            PdfCheckError::Api(api) => api.clone().into(),
            other => Self {
                message: other.to_string(),
                details: None,
                errors: Vec::new(),
            },
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
