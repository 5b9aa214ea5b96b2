pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod output;
pub mod session;
pub mod validation;

pub use error::{ErrorEnvelope, PdfCheckError, Result};

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_RULES_FAILED: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
