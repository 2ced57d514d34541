//! `salesdigest` - daily regional sales digest.
//!
//! Exit code 0 when every attempted delivery (or, for `check`, every
//! connectivity probe) succeeded; 1 otherwise.

#![allow(clippy::print_stderr)]

mod cli;
mod context;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use salesdigest_domain::{Config, ReportDate};
use salesdigest_infra::{config, init_logging, with_startup_logging};
use tracing::{error, info, warn};

use crate::cli::{Cli, Command};
use crate::context::AppContext;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => return usage_exit(&e),
    };
    let command = match cli.selected_command() {
        Ok(command) => command,
        Err(e) => return usage_exit(&e),
    };

    match run(cli, command).await {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::FAILURE,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

/// Help and version requests exit cleanly; usage errors fail with 1.
fn usage_exit(e: &clap::Error) -> ExitCode {
    let _ = e.print();
    if e.use_stderr() {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

async fn run(cli: Cli, command: Command) -> anyhow::Result<bool> {
    let config = with_startup_logging(|| config::load(cli.config))
        .context("Failed to load configuration")?;
    let _log_guard = init_logging(&config.logging).context("Failed to initialise logging")?;

    let outcome = execute(command, cli.date, config).await;
    if let Err(e) = &outcome {
        error!(error = %format!("{e:#}"), "Run aborted");
    }
    outcome
}

async fn execute(command: Command, date: Option<ReportDate>, config: Config) -> anyhow::Result<bool> {
    let date = date.unwrap_or_else(ReportDate::today);
    let context = AppContext::new(&config).context("Failed to initialise application")?;

    match command {
        Command::Run => {
            info!(%date, "Sales digest started");
            let summary = context.digest.run(&date).await.context("Digest run failed")?;
            info!(
                delivered = summary.sent_count(),
                attempted = summary.deliveries.len(),
                "Sales digest finished"
            );
            Ok(summary.is_success())
        }
        Command::Check => {
            info!(%date, "Connectivity check started");
            let report = context.digest.check_connectivity(&date).await;
            if report.is_healthy() {
                info!("All connectivity checks passed");
            } else {
                warn!(?report, "Connectivity check found problems");
            }
            Ok(report.is_healthy())
        }
    }
}
