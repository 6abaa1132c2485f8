//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `scan`: Run all configured checks against the cluster and write a report
//! - `init`: Initialize a relscan configuration file

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Configuration file path
    #[arg(long, default_value = crate::config::CONFIG_FILE_NAME)]
    pub config: PathBuf,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ScanCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Write the JSON report to a file instead of stdout
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Upper bound in seconds for each check's cluster query
    #[arg(long, default_value_t = 30)]
    pub timeout_seconds: u64,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Run the configured checks against the cluster and report results
    Scan(ScanCommand),
    /// Initialize a new .relscan.yaml configuration file
    Init(InitCommand),
}

impl Arguments {
    /// Get the verbose flag from the command's common args.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Scan(cmd)) => cmd.common.verbose,
            Some(Command::Init(cmd)) => cmd.common.verbose,
            None => false,
        }
    }
}
