//! CLI command definitions and handlers.

pub mod compare;
pub mod gates;

use clap::{Parser, Subcommand};

/// Frame Gate - Match a photo to a reference shot, one gate at a time
#[derive(Parser)]
#[command(name = "frame-gate")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Shared compare arguments (images, thresholds, output).
    #[command(flatten)]
    pub compare: compare::CompareArgs,

    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand)]
pub enum Commands {
    /// Compare a photo against a reference
    Compare(compare::CompareArgs),
    /// Show the gate order and effective thresholds
    Gates(gates::GatesArgs),
}

/// Process exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Every gate passed.
    Passed = 0,
    /// A gate blocked the run.
    Blocked = 1,
    /// The images could not be evaluated.
    Error = 2,
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> Self {
        Self::from(code as u8)
    }
}
