//! CLI interface and argument parsing
//!
//! This module provides the command-line interface for the harvester using clap.

pub mod commands;

use clap::{Parser, Subcommand};

/// MIMU GeoNode to HDX harvester
#[derive(Parser, Debug)]
#[command(name = "mimu-harvester")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, default_value = "mimu.toml", env = "MIMU_CONFIG")]
    pub config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, env = "MIMU_LOG_LEVEL")]
    pub log_level: Option<String>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Harvest GeoNode layers into HDX datasets and showcases
    Harvest(commands::harvest::HarvestArgs),

    /// Validate configuration file
    ValidateConfig(commands::validate::ValidateArgs),

    /// Initialize a new configuration file
    Init(commands::init::InitArgs),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_harvest() {
        let cli = Cli::parse_from(["mimu-harvester", "harvest"]);
        assert_eq!(cli.config, "mimu.toml");
        assert!(matches!(cli.command, Commands::Harvest(_)));
    }

    #[test]
    fn test_cli_parse_harvest_flags() {
        let cli = Cli::parse_from([
            "mimu-harvester",
            "harvest",
            "--dry-run",
            "--output",
            "out",
            "--limit",
            "5",
        ]);
        match cli.command {
            Commands::Harvest(args) => {
                assert!(args.dry_run);
                assert_eq!(args.output.as_deref(), Some("out"));
                assert_eq!(args.limit, Some(5));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn test_cli_parse_with_config() {
        let cli = Cli::parse_from(["mimu-harvester", "--config", "custom.toml", "harvest"]);
        assert_eq!(cli.config, "custom.toml");
    }

    #[test]
    fn test_cli_parse_with_log_level() {
        let cli = Cli::parse_from(["mimu-harvester", "--log-level", "debug", "harvest"]);
        assert_eq!(cli.log_level, Some("debug".to_string()));
    }

    #[test]
    fn test_cli_parse_validate_config() {
        let cli = Cli::parse_from(["mimu-harvester", "validate-config"]);
        assert!(matches!(cli.command, Commands::ValidateConfig(_)));
    }

    #[test]
    fn test_cli_parse_init() {
        let cli = Cli::parse_from(["mimu-harvester", "init", "--force"]);
        match cli.command {
            Commands::Init(args) => {
                assert!(args.force);
                assert_eq!(args.output, "mimu.toml");
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }
}
