//! Frame Gate CLI - Step-by-step reshoot guidance against a reference photo.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod commands;
mod config;
mod output;

use commands::{Cli, Commands, ExitCode};
use config::AppConfig;

fn main() -> std::process::ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    let config = AppConfig::load();

    let exit_code = match cli.command {
        Some(Commands::Compare(args)) => compare(args, &config),
        Some(Commands::Gates(args)) => match commands::gates::run(&args, &config) {
            Ok(()) => ExitCode::Passed,
            Err(e) => {
                eprintln!("error: {e:#}");
                ExitCode::Error
            }
        },
        None => {
            // Default behavior: compare with flattened args
            if cli.compare.current.is_none() {
                eprintln!("error: No images specified. Use --help for usage information.");
                return ExitCode::Error.into();
            }
            compare(cli.compare, &config)
        }
    };

    exit_code.into()
}

fn compare(args: commands::compare::CompareArgs, config: &AppConfig) -> ExitCode {
    let args = commands::compare::CompareArgs::with_config(args, config);
    match commands::compare::run(&args) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            eprintln!("error: {e:#}");
            ExitCode::Error
        }
    }
}
