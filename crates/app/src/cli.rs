//! Argument parsing for the `salesdigest` binary.

use std::path::PathBuf;
use std::str::FromStr;

use clap::error::ErrorKind;
use clap::{CommandFactory, Parser, Subcommand};
use salesdigest_domain::ReportDate;

const ENV_HELP: &str = "\
Environment:
  SALESDIGEST_API_BASE_URL, SALESDIGEST_API_AUTHORIZATION,
  SALESDIGEST_API_USERNAME, SALESDIGEST_API_PASSWORD,
  SALESDIGEST_MESSAGING_URL, SALESDIGEST_MESSAGING_TOKEN,
  SALESDIGEST_LOG_FILE, RUST_LOG";

#[derive(Debug, Parser)]
#[command(name = "salesdigest", version)]
#[command(about = "Daily regional sales digest")]
#[command(after_help = ENV_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Same as `check`
    #[arg(long)]
    pub test: bool,

    /// Config file (JSON or TOML); probed when omitted
    #[arg(short, long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Report date; defaults to today
    #[arg(short, long, global = true, value_name = "DD/MM/YYYY")]
    #[arg(value_parser = ReportDate::from_str)]
    pub date: Option<ReportDate>,
}

/// What the binary should do.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Subcommand)]
pub enum Command {
    /// Fetch the day's sales and deliver one report per region (default)
    Run,
    /// Test ERP and messaging connectivity without sending anything
    Check,
}

impl Cli {
    /// The command to execute once `--test` and the default are applied.
    ///
    /// # Errors
    /// `--test` combined with `run`.
    pub fn selected_command(&self) -> Result<Command, clap::Error> {
        match (self.command, self.test) {
            (Some(Command::Run), true) => Err(<Self as CommandFactory>::command()
                .error(ErrorKind::ArgumentConflict, "--test cannot be combined with `run`")),
            (_, true) => Ok(Command::Check),
            (command, false) => Ok(command.unwrap_or(Command::Run)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("salesdigest").chain(args.iter().copied()))
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_run_without_arguments() {
        let cli = parse(&[]).unwrap();

        assert_eq!(cli.selected_command().unwrap(), Command::Run);
        assert_eq!(cli.config, None);
        assert_eq!(cli.date, None);
    }

    #[test]
    fn test_flag_selects_connectivity_check() {
        assert_eq!(parse(&["--test"]).unwrap().selected_command().unwrap(), Command::Check);
        assert_eq!(parse(&["check"]).unwrap().selected_command().unwrap(), Command::Check);
        assert_eq!(parse(&["--test", "check"]).unwrap().selected_command().unwrap(), Command::Check);
    }

    #[test]
    fn parses_config_and_date() {
        let cli = parse(&["run", "--config", "/etc/salesdigest.toml", "-d", "05/03/2026"]).unwrap();

        assert_eq!(cli.selected_command().unwrap(), Command::Run);
        assert_eq!(cli.config, Some(PathBuf::from("/etc/salesdigest.toml")));
        assert_eq!(cli.date.map(|d| d.to_string()).as_deref(), Some("05/03/2026"));
    }

    #[test]
    fn options_are_accepted_before_the_subcommand() {
        let cli = parse(&["-c", "salesdigest.json", "check"]).unwrap();

        assert_eq!(cli.selected_command().unwrap(), Command::Check);
        assert_eq!(cli.config, Some(PathBuf::from("salesdigest.json")));
    }

    #[test]
    fn rejects_malformed_date() {
        let err = parse(&["--date", "2026-03-05"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::ValueValidation);
        assert!(err.to_string().contains("2026-03-05"));
    }

    #[test]
    fn rejects_missing_option_value() {
        assert!(parse(&["--config"]).is_err());
    }

    #[test]
    fn rejects_unknown_and_conflicting_commands() {
        assert!(parse(&["send"]).is_err());
        assert!(parse(&["run", "check"]).is_err());

        let err = parse(&["--test", "run"]).unwrap().selected_command().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ArgumentConflict);
    }

    #[test]
    fn help_is_rendered_by_clap() {
        let err = parse(&["--help"]).unwrap_err();

        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
        assert!(err.to_string().contains("SALESDIGEST_MESSAGING_TOKEN"));
    }
}
