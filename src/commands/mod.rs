pub mod check;
pub mod health;
pub mod init;
pub mod interactive;

use crate::cli::{Cli, ColorChoice};
use crate::error::Result;
use crate::output::ColorMode;
use crate::{config, output};

pub(crate) const fn color_choice_to_mode(choice: ColorChoice) -> ColorMode {
    match choice {
        ColorChoice::Auto => ColorMode::Auto,
        ColorChoice::Always => ColorMode::Always,
        ColorChoice::Never => ColorMode::Never,
    }
}

/// Resolve the service endpoint from CLI flags, environment and config file.
pub(crate) fn resolve_endpoint(cli: &Cli) -> Result<String> {
    let config = config::load(cli.config.as_deref(), cli.no_config)?;
    config::resolve_endpoint(cli.endpoint.as_deref(), &config)
}

/// Render a top-level error to stderr as the uniform envelope.
pub(crate) fn report_error(error: &crate::error::PdfCheckError) {
    output::print_envelope(&error.into());
}
