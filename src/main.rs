use clap::Parser;
use std::process;
use tracing_subscriber::EnvFilter;

use reminders_import::cli;
use reminders_import::cli::commands::Cli;

fn main() {
    let cli_args = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_env("REMINDERS_IMPORT_LOG").unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let exit_code = if cli_args.from_shortcut {
        cli::batch::run(&cli_args)
    } else {
        cli::interactive::run(&cli_args)
    };

    process::exit(exit_code);
}
