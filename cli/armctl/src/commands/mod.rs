//! CLI commands.

mod config;
mod kinds;
mod parse;
mod recase;
mod validate;

use std::path::PathBuf;

use anyhow::Result;
use armid::{Casing, Registry, SegmentTemplate};
use clap::{Parser, Subcommand};
use tracing::debug;

use crate::config::{default_config_path, Config};
use crate::error::CliError;
use crate::logging;
use crate::output::OutputFormat;

/// armctl - Parse, validate and recase resource IDs.
#[derive(Debug, Parser)]
#[command(name = "armctl")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Output format (table or json).
    #[arg(long, global = true, value_enum, env = "ARMCTL_FORMAT")]
    format: Option<OutputFormat>,

    /// Casing discipline (strict or insensitive).
    #[arg(long, global = true, env = "ARMCTL_CASING", conflicts_with = "insensitive")]
    casing: Option<Casing>,

    /// Shorthand for `--casing insensitive`.
    #[arg(long, global = true)]
    insensitive: bool,

    /// Path to the config file.
    #[arg(long, global = true, env = "ARMCTL_CONFIG")]
    config: Option<PathBuf>,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, global = true, env = "ARMCTL_LOG")]
    log_level: Option<String>,

    /// Enable debug logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Parse a resource ID into its segments.
    Parse(parse::ParseCommand),

    /// Validate resource IDs against a resource kind.
    Validate(validate::ValidateCommand),

    /// Rewrite resource IDs in canonical casing.
    Recase(recase::RecaseCommand),

    /// List the known resource kinds.
    Kinds(kinds::KindsCommand),

    /// Show or change CLI configuration.
    Config(config::ConfigCommand),

    /// Show CLI version.
    Version,
}

impl Cli {
    /// Run the CLI command.
    pub fn run(self) -> Result<()> {
        let config_path = match self.config {
            Some(path) => path,
            None => default_config_path()?,
        };
        let config = Config::load_from(&config_path)?;

        let level = if self.verbose {
            "debug".to_string()
        } else {
            self.log_level
                .clone()
                .unwrap_or_else(|| config.log_level.clone())
        };
        logging::init(&level);
        debug!(path = ?config_path, "loaded config");

        // Flags win over config
        let casing = if self.insensitive {
            Casing::Insensitive
        } else {
            self.casing.unwrap_or(config.casing)
        };
        let format = self.format.unwrap_or(config.format);

        let ctx = CommandContext {
            config,
            config_path,
            format,
            casing,
            registry: Registry::builtin(),
        };

        match self.command {
            Commands::Parse(cmd) => cmd.run(ctx),
            Commands::Validate(cmd) => cmd.run(ctx),
            Commands::Recase(cmd) => cmd.run(ctx),
            Commands::Kinds(cmd) => cmd.run(ctx),
            Commands::Config(cmd) => cmd.run(ctx),
            Commands::Version => {
                println!("armctl {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

/// Shared command context.
pub struct CommandContext {
    pub config: Config,
    pub config_path: PathBuf,
    pub format: OutputFormat,
    pub casing: Casing,
    pub registry: Registry,
}

impl CommandContext {
    /// Look up a resource kind by name.
    pub fn template(&self, kind: &str) -> Result<&'static SegmentTemplate, CliError> {
        self.registry
            .get(kind)
            .ok_or_else(|| CliError::UnknownKind(kind.to_string()))
    }
}

#[cfg(test)]
pub(crate) fn test_context(casing: Casing) -> CommandContext {
    CommandContext {
        config: Config::default(),
        config_path: PathBuf::from("config.json"),
        format: OutputFormat::Json,
        casing,
        registry: Registry::builtin(),
    }
}
