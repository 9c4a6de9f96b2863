//! Recase command.

use anyhow::Result;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::output::{print_output, print_warning};

use super::CommandContext;

/// Rewrite resource IDs with every fixed segment in canonical casing.
///
/// IDs that match no known kind are printed unchanged.
#[derive(Debug, Args)]
pub struct RecaseCommand {
    /// Resource IDs to recase.
    #[arg(required = true)]
    ids: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct RecaseRow {
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "ID")]
    id: String,
    #[tabled(skip)]
    input: String,
    #[tabled(skip)]
    changed: bool,
}

impl RecaseCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let rows = recase_all(&ctx, &self.ids);
        for row in rows.iter().filter(|row| row.kind == "-") {
            print_warning(&format!("'{}' does not match any known resource ID", row.input));
        }
        print_output(&rows, ctx.format);
        Ok(())
    }
}

fn recase_all(ctx: &CommandContext, ids: &[String]) -> Vec<RecaseRow> {
    ids.iter()
        .map(|input| match ctx.registry.identify(input) {
            Some(found) => {
                let id = found.canonical();
                RecaseRow {
                    kind: found.template.name().to_string(),
                    changed: id != *input,
                    input: input.clone(),
                    id,
                }
            }
            None => RecaseRow {
                kind: "-".to_string(),
                id: input.clone(),
                input: input.clone(),
                changed: false,
            },
        })
        .collect()
}
