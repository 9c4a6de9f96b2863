//! Config commands.

use anyhow::{bail, Result};
use armid::Casing;
use clap::{Args, Subcommand, ValueEnum};

use crate::config::Config;
use crate::output::{print_json, print_success, OutputFormat};

use super::CommandContext;

/// Show or change CLI configuration.
#[derive(Debug, Args)]
pub struct ConfigCommand {
    #[command(subcommand)]
    command: ConfigSubcommand,
}

#[derive(Debug, Subcommand)]
enum ConfigSubcommand {
    /// Show the saved configuration.
    Show,

    /// Set a configuration value (format, casing or log_level).
    Set {
        /// Configuration key.
        key: String,
        /// New value.
        value: String,
    },

    /// Print the config file path.
    Path,
}

impl ConfigCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        match self.command {
            ConfigSubcommand::Show => show(ctx),
            ConfigSubcommand::Set { key, value } => set(ctx, &key, &value),
            ConfigSubcommand::Path => {
                println!("{}", ctx.config_path.display());
                Ok(())
            }
        }
    }
}

fn show(ctx: CommandContext) -> Result<()> {
    match ctx.format {
        OutputFormat::Json => print_json(&ctx.config),
        OutputFormat::Table => {
            println!("format: {:?}", ctx.config.format);
            println!("casing: {}", ctx.config.casing);
            println!("log_level: {}", ctx.config.log_level);
        }
    }
    Ok(())
}

fn set(mut ctx: CommandContext, key: &str, value: &str) -> Result<()> {
    apply(&mut ctx.config, key, value)?;
    ctx.config.save_to(&ctx.config_path)?;
    print_success(&format!("Set {key} = {value}"));
    Ok(())
}

fn apply(config: &mut Config, key: &str, value: &str) -> Result<()> {
    match key {
        "format" => {
            config.format = OutputFormat::from_str(value, true).map_err(anyhow::Error::msg)?;
        }
        "casing" => {
            config.casing = value.parse::<Casing>().map_err(anyhow::Error::msg)?;
        }
        "log_level" => {
            config.log_level = value.to_string();
        }
        other => bail!("unknown config key '{other}': expected format, casing or log_level"),
    }
    Ok(())
}
