//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for mapexport using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// mapexport - annual land-cover export orchestrator
#[derive(Parser, Debug)]
#[command(name = "mapexport")]
#[command(version, about, long_about = None)]
#[command(author = "Mapexport Contributors")]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "mapexport.toml", env = "MAPEXPORT_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "MAPEXPORT_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Submit one export task per configured year
    Export(commands::export::ExportArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),

    /// Count land-cover classes in downloaded exports
    Stats(commands::stats::StatsArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_export() {
        let cli = Cli::parse_from(["mapexport", "export"]);
        assert_eq!(cli.config, "mapexport.toml");
        assert!(matches!(cli.command, Commands::Export(_)));
    }

    #[test]
    fn test_cli_parse_export_overrides() {
        let cli = Cli::parse_from([
            "mapexport",
            "export",
            "--yes",
            "--dry-run",
            "--years",
            "1985-1990",
            "--folder",
            "OUT",
        ]);
        match cli.command {
            Commands::Export(args) => {
                assert!(args.yes);
                assert!(args.dry_run);
                assert_eq!(args.years.as_deref(), Some("1985-1990"));
                assert_eq!(args.folder.as_deref(), Some("OUT"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["mapexport", "--config", "custom.toml", "export"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["mapexport", "--log-level", "debug", "export"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["mapexport", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["mapexport", "init"]);
        assert!(matches!(cli.command, Commands::Init(_)));
    }

    #[test]
    fn test_cli_parse_stats() {
        let cli = Cli::parse_from([
            "mapexport",
            "stats",
            "--input-dir",
            "rasters",
            "--legend",
            "legend.json",
        ]);
        match cli.command {
            Commands::Stats(args) => {
                assert_eq!(args.input_dir.as_deref(), Some("rasters"));
                assert_eq!(args.legend.as_deref(), Some("legend.json"));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
