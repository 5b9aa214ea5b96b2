use crate::EXIT_ERROR;
use crate::EXIT_SUCCESS;
use crate::api::ApiClient;
use crate::cli::Cli;
use crate::error::Result;

pub fn run(cli: &Cli) -> i32 {
    match run_impl(cli) {
        Ok(body) => {
            if !cli.quiet {
                println!("{body}");
            }
            EXIT_SUCCESS
        }
        Err(e) => {
            super::report_error(&e);
            EXIT_ERROR
        }
    }
}

fn run_impl(cli: &Cli) -> Result<String> {
    let endpoint = super::resolve_endpoint(cli)?;
    let client = ApiClient::new(endpoint);
    // The health body is implementation-defined; print it verbatim.
    Ok(client.health_check()?)
}
