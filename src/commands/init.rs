use std::fs;

use crate::cli::{Cli, InitArgs};
use crate::config::Config;
use crate::error::{PdfCheckError, Result};
use crate::{EXIT_ERROR, EXIT_SUCCESS};

pub fn run(args: &InitArgs, cli: &Cli) -> i32 {
    match run_impl(args) {
        Ok(()) => {
            if !cli.quiet {
                eprintln!("Created {}", args.output.display());
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            super::report_error(&e);
            EXIT_ERROR
        }
    }
}

fn run_impl(args: &InitArgs) -> Result<()> {
    if args.output.exists() && !args.force {
        return Err(PdfCheckError::Config(format!(
            "{} already exists (use --force to overwrite)",
            args.output.display()
        )));
    }

    fs::write(&args.output, Config::default_document())?;
    Ok(())
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
