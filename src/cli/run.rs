use std::{fs, time::Duration};

use anyhow::Result;
use tracing::info;

use super::{
    args::{Arguments, Command, InitCommand, ScanCommand},
    exit_status::ExitStatus,
    output::{print_summary, write_report},
};
use crate::{
    checks::annotations::AnnotationsQuerier,
    config::{CheckConfig, default_config_yaml, load_config},
    runner::Runner,
};

/// Main entry point for the relscan CLI.
///
/// Dispatches to the appropriate command handler based on the parsed
/// arguments. Construction-time check errors (credentials, client) abort the
/// scan before any check runs; check execution itself never errors, it only
/// degrades summaries.
pub async fn run(Arguments { command }: Arguments) -> Result<ExitStatus> {
    match command {
        Some(Command::Scan(cmd)) => scan(cmd).await,
        Some(Command::Init(cmd)) => init(cmd),
        None => {
            anyhow::bail!("No command provided. Use --help to see available commands.")
        }
    }
}

async fn scan(cmd: ScanCommand) -> Result<ExitStatus> {
    let loaded = load_config(&cmd.common.config)?;
    if !loaded.from_file {
        info!(
            config = %cmd.common.config.display(),
            "no configuration file found, using defaults"
        );
    }

    let mut runner = Runner::new();
    for check in loaded.config.checks {
        match check {
            CheckConfig::ServiceAnnotations { spec } => {
                AnnotationsQuerier::new(spec)?.add_to_runner(&mut runner);
            }
        }
    }

    let timeout = (cmd.timeout_seconds > 0).then(|| Duration::from_secs(cmd.timeout_seconds));
    let summaries = runner.run(timeout).await;

    write_report(&summaries, cmd.output.as_deref())?;
    print_summary(&summaries);

    Ok(ExitStatus::from_summaries(&summaries))
}

fn init(cmd: InitCommand) -> Result<ExitStatus> {
    let config_path = &cmd.common.config;
    if config_path.exists() {
        anyhow::bail!("{} already exists", config_path.display());
    }

    fs::write(config_path, default_config_yaml())?;
    eprintln!("Created {}", config_path.display());
    Ok(ExitStatus::Success)
}
