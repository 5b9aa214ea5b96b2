//! Endpoint configuration.
//!
//! Resolution order for the base endpoint: `--endpoint` flag, then the
//! `PDF_CHECK_ENDPOINT` environment variable, then a `.pdf-check.toml` config
//! file, then the local development default. The request timeout is fixed and
//! deliberately not configurable here.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{PdfCheckError, Result};

/// Default base endpoint for local development.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8080/api";
/// Config file discovered in the working directory.
pub const CONFIG_FILENAME: &str = ".pdf-check.toml";
/// Environment variable overriding the config file.
pub const ENDPOINT_ENV_VAR: &str = "PDF_CHECK_ENDPOINT";

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Base URL of the analysis service.
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
        }
    }
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Config {
    /// Parse a config from TOML text.
    ///
    /// # Errors
    /// Returns an error on invalid TOML.
    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize the default config as a commented TOML document.
    #[must_use]
    pub fn default_document() -> String {
        format!(
            "# pdf-check configuration\n\
             \n\
             # Base URL of the PDF analysis service.\n\
             endpoint = \"{DEFAULT_ENDPOINT}\"\n"
        )
    }
}

/// Check if a string is a usable endpoint URL (http:// or https://).
#[must_use]
pub fn is_endpoint_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Load the config file, or defaults when `no_config` is set or no file exists.
///
/// An explicit `path` that does not exist is an error; the implicit
/// `.pdf-check.toml` is optional.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed.
pub fn load(path: Option<&Path>, no_config: bool) -> Result<Config> {
    if no_config {
        return Ok(Config::default());
    }

    if let Some(path) = path {
        let content = std::fs::read_to_string(path).map_err(|source| PdfCheckError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        return Config::from_toml(&content);
    }

    let implicit = Path::new(CONFIG_FILENAME);
    if implicit.is_file() {
        let content = std::fs::read_to_string(implicit)?;
        return Config::from_toml(&content);
    }

    Ok(Config::default())
}

/// Resolve the base endpoint from flag, environment, and config, validating
/// the scheme and trimming a trailing slash.
///
/// # Errors
/// Returns [`PdfCheckError::Config`] if the winning value is not an
/// http(s) URL.
pub fn resolve_endpoint(flag: Option<&str>, config: &Config) -> Result<String> {
    let env_value = std::env::var(ENDPOINT_ENV_VAR).ok();
    resolve_endpoint_from(flag, env_value.as_deref(), config)
}

fn resolve_endpoint_from(
    flag: Option<&str>,
    env_value: Option<&str>,
    config: &Config,
) -> Result<String> {
    let endpoint = flag
        .or(env_value)
        .unwrap_or(config.endpoint.as_str())
        .trim()
        .trim_end_matches('/');

    if !is_endpoint_url(endpoint) {
        return Err(PdfCheckError::Config(format!(
            "Invalid endpoint (must start with http:// or https://): {endpoint}"
        )));
    }

    Ok(endpoint.to_string())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
