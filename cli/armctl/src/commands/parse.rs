//! Parse command.

use anyhow::Result;
use armid::{Casing, ParseResult, SegmentTemplate};
use clap::Args;
use serde::Serialize;
use tabled::Tabled;
use tracing::debug;

use crate::error::CliError;
use crate::output::{print_json, print_output, OutputFormat};

use super::CommandContext;

/// Parse a resource ID and show its segments.
#[derive(Debug, Args)]
pub struct ParseCommand {
    /// The resource ID to parse.
    id: String,

    /// Resource kind to parse as (see `armctl kinds`). Identified automatically if omitted.
    #[arg(long)]
    kind: Option<String>,
}

/// A parsed resource ID.
#[derive(Debug, Serialize)]
struct ParsedView {
    kind: &'static str,
    id: String,
    segments: ParseResult,
}

#[derive(Debug, Serialize, Tabled)]
struct SegmentRow {
    #[tabled(rename = "Segment")]
    segment: String,
    #[tabled(rename = "Value")]
    value: String,
}

impl ParseCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let view = parse_id(&ctx, &self.id, self.kind.as_deref())?;

        match ctx.format {
            OutputFormat::Json => print_json(&view),
            OutputFormat::Table => {
                println!("{} ({})", view.kind, view.id);
                let rows: Vec<SegmentRow> = view
                    .segments
                    .iter()
                    .map(|(segment, value)| SegmentRow {
                        segment: segment.to_string(),
                        value: value.to_string(),
                    })
                    .collect();
                print_output(&rows, ctx.format);
            }
        }

        Ok(())
    }
}

fn parse_id(ctx: &CommandContext, id: &str, kind: Option<&str>) -> Result<ParsedView, CliError> {
    let (template, segments): (&'static SegmentTemplate, ParseResult) = match kind {
        Some(kind) => {
            let template = ctx.template(kind)?;
            (template, template.parse(id, ctx.casing)?)
        }
        None => {
            let found = ctx
                .registry
                .identify(id)
                .ok_or_else(|| CliError::Unrecognized(id.to_string()))?;
            if found.casing == Casing::Insensitive && ctx.casing == Casing::Strict {
                return Err(CliError::CasingMismatch {
                    input: id.to_string(),
                    kind: found.template.name(),
                });
            }
            (found.template, found.result)
        }
    };
    debug!(kind = template.name(), "parsed resource ID");

    Ok(ParsedView {
        kind: template.name(),
        id: armid::format_parse_result(template, &segments)?,
        segments,
    })
}
