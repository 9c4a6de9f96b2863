//! Kinds command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::print_output;

use super::CommandContext;

/// List the known resource kinds.
#[derive(Debug, Args)]
pub struct KindsCommand {
    /// Only show kinds whose name contains this text (case-insensitive).
    #[arg(long)]
    filter: Option<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct KindRow {
    #[tabled(rename = "Kind")]
    name: &'static str,
    #[tabled(rename = "Pattern")]
    pattern: String,
    #[tabled(skip)]
    example: String,
    #[tabled(skip)]
    trailing_slash: bool,
}

impl KindsCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows = list_kinds(&ctx, self.filter.as_deref());
        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn list_kinds(ctx: &CommandContext, filter: Option<&str>) -> Vec<KindRow> {
    let filter = filter.map(str::to_ascii_lowercase);
    ctx.registry
        .templates()
        .filter(|template| match &filter {
            Some(text) => template.name().to_ascii_lowercase().contains(text.as_str()),
            None => true,
        })
        .map(|template| KindRow {
            name: template.name(),
            pattern: template.pattern(),
            example: template.example(),
            trailing_slash: template.allows_trailing_slash(),
        })
        .collect()
}
