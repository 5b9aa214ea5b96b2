use clap::Parser;
use tracing_subscriber::EnvFilter;

use pdf_check::cli::{Cli, Commands};
use pdf_check::commands;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match &cli.command {
        Commands::Check(args) => commands::check::run(args, &cli),
        Commands::Health => commands::health::run(&cli),
        Commands::Interactive => commands::interactive::run(&cli),
        Commands::Init(args) => commands::init::run(args, &cli),
    };

    std::process::exit(exit_code);
}

/// `RUST_LOG` wins over the verbosity flags when set.
fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("pdf_check={default_level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
