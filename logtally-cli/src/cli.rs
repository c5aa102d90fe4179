//! CLI argument parsing using clap derive API
//!
//! This module defines the command-line interface structure using clap's derive macros.
//! It is purely declarative with no side effects or I/O.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use logtally_core::config::ReportKind;

/// Logtally -- frequency reports over application log files.
///
/// Use `logtally <COMMAND> --help` for subcommand details.
#[derive(Parser, Debug)]
#[command(name = "logtally", version, about, long_about = None)]
pub struct Cli {
    /// Path to a logtally.toml configuration file (default: built-in settings).
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Override log level (trace, debug, info, warn, error).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Output format.
    #[arg(long, global = true, default_value = "text")]
    pub output: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

/// Supported output formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable table / text output.
    Text,
    /// Machine-readable JSON.
    Json,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Build a report from one or more log files.
    Report(ReportArgs),

    /// Manage configuration.
    Config(ConfigArgs),
}

// ---- report ----

/// Build a report from one or more log files.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Report to generate.
    #[arg(short, long, value_parser = parse_report_kind)]
    pub report: ReportKind,

    /// Paths to log files.
    #[arg(required = true, num_args = 1..)]
    pub files: Vec<PathBuf>,
}

fn parse_report_kind(value: &str) -> Result<ReportKind, String> {
    value.parse().map_err(|e: logtally_core::ReportError| e.to_string())
}

// ---- config ----

/// Manage logtally configuration.
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub action: ConfigAction,
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Validate the configuration and report errors.
    Validate,
    /// Show the effective configuration (file + env overrides + defaults).
    Show {
        /// Show only a specific section (general, handlers).
        #[arg(long)]
        section: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parse_report_single_file() {
        let args = Cli::try_parse_from(["logtally", "report", "--report", "handlers", "app.log"]);
        assert!(args.is_ok(), "should parse 'report' subcommand");
        let cli = args.expect("parse succeeded");
        match cli.command {
            Commands::Report(report_args) => {
                assert_eq!(report_args.report, ReportKind::Handlers);
                assert_eq!(report_args.files, vec![PathBuf::from("app.log")]);
            }
            _ => panic!("expected Report command"),
        }
    }

    #[test]
    fn test_cli_parse_report_multiple_files() {
        let args = Cli::try_parse_from([
            "logtally", "report", "-r", "handlers", "a.log", "b.log", "c.log",
        ]);
        let cli = args.expect("parse succeeded");
        match cli.command {
            Commands::Report(report_args) => {
                assert_eq!(report_args.files.len(), 3, "all files should be collected");
                assert_eq!(report_args.files[2], PathBuf::from("c.log"));
            }
            _ => panic!("expected Report command"),
        }
    }

    #[test]
    fn test_cli_parse_report_requires_files() {
        let args = Cli::try_parse_from(["logtally", "report", "--report", "handlers"]);
        assert!(args.is_err(), "report without files should fail");
    }

    #[test]
    fn test_cli_parse_report_requires_kind() {
        let args = Cli::try_parse_from(["logtally", "report", "app.log"]);
        assert!(args.is_err(), "report without --report should fail");
    }

    #[test]
    fn test_cli_parse_unknown_report_kind_fails() {
        let err = Cli::try_parse_from(["logtally", "report", "--report", "users", "app.log"])
            .expect_err("unknown report should fail");
        let msg = err.to_string();
        assert!(msg.contains("users"), "error should name the bad value");
        assert!(msg.contains("handlers"), "error should list valid reports");
    }

    #[test]
    fn test_cli_parse_config_validate() {
        let args = Cli::try_parse_from(["logtally", "config", "validate"]);
        assert!(args.is_ok(), "should parse 'config validate' subcommand");
        let cli = args.expect("parse succeeded");
        match cli.command {
            Commands::Config(config_args) => match config_args.action {
                ConfigAction::Validate => {}
                _ => panic!("expected Validate action"),
            },
            _ => panic!("expected Config command"),
        }
    }

    #[test]
    fn test_cli_parse_config_show_section() {
        let args = Cli::try_parse_from(["logtally", "config", "show", "--section", "handlers"]);
        let cli = args.expect("parse succeeded");
        match cli.command {
            Commands::Config(config_args) => match config_args.action {
                ConfigAction::Show { section } => {
                    assert_eq!(section, Some("handlers".to_owned()));
                }
                _ => panic!("expected Show action"),
            },
            _ => panic!("expected Config command"),
        }
    }

    #[test]
    fn test_cli_parse_config_path_defaults_to_none() {
        let cli = Cli::try_parse_from(["logtally", "config", "validate"]).expect("parse succeeded");
        assert!(cli.config.is_none(), "config path should be optional");
    }

    #[test]
    fn test_cli_parse_custom_config_path() {
        let args = Cli::try_parse_from(["logtally", "-c", "/custom/logtally.toml", "config", "show"]);
        let cli = args.expect("parse succeeded");
        assert_eq!(cli.config, Some(PathBuf::from("/custom/logtally.toml")));
    }

    #[test]
    fn test_cli_parse_global_flags_after_subcommand() {
        let args = Cli::try_parse_from([
            "logtally",
            "report",
            "--report",
            "handlers",
            "app.log",
            "--output",
            "json",
            "--log-level",
            "debug",
        ]);
        let cli = args.expect("parse succeeded");
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.log_level, Some("debug".to_owned()));
    }

    #[test]
    fn test_cli_parse_output_defaults_to_text() {
        let cli = Cli::try_parse_from(["logtally", "config", "validate"]).expect("parse succeeded");
        assert_eq!(cli.output, OutputFormat::Text);
    }

    #[test]
    fn test_cli_parse_missing_command_fails() {
        let args = Cli::try_parse_from(["logtally"]);
        assert!(args.is_err(), "should fail when no command provided");
    }

    #[test]
    fn test_cli_verify_command_structure() {
        let cmd = Cli::command();
        assert_eq!(cmd.get_name(), "logtally");

        let subcommands: Vec<_> = cmd.get_subcommands().map(|s| s.get_name()).collect();
        assert!(subcommands.contains(&"report"), "should have 'report' subcommand");
        assert!(subcommands.contains(&"config"), "should have 'config' subcommand");
        cmd.debug_assert();
    }
}
