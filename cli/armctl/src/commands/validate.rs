//! Validate command.

use anyhow::Result;
use armid::Diagnostics;
use clap::Args;
use serde::Serialize;
use tabled::Tabled;

use crate::error::CliError;
use crate::output::{print_json, print_output, print_success, print_warning, OutputFormat};

use super::CommandContext;

/// Validate resource IDs against a resource kind, reporting every problem at once.
#[derive(Debug, Args)]
pub struct ValidateCommand {
    /// Resource IDs to validate.
    #[arg(required = true)]
    ids: Vec<String>,

    /// Resource kind the IDs must match (see `armctl kinds`). Any known kind if omitted.
    #[arg(long)]
    kind: Option<String>,

    /// Configuration key used in messages.
    #[arg(long, default_value = "id")]
    key: String,
}

#[derive(Debug, Serialize)]
struct Report {
    kind: Option<&'static str>,
    checked: usize,
    warnings: Vec<String>,
    errors: Vec<String>,
}

#[derive(Debug, Serialize, Tabled)]
struct ErrorRow {
    #[tabled(rename = "Error")]
    error: String,
}

impl ValidateCommand {
    pub fn run(self, ctx: CommandContext) -> Result<()> {
        let report = self.check(&ctx)?;

        match ctx.format {
            OutputFormat::Json => print_json(&report),
            OutputFormat::Table => {
                for warning in &report.warnings {
                    print_warning(warning);
                }
                if report.errors.is_empty() {
                    print_success(&format!(
                        "{} resource ID(s) are valid {} IDs",
                        report.checked,
                        report.kind.unwrap_or("resource")
                    ));
                } else {
                    let rows: Vec<ErrorRow> = report
                        .errors
                        .iter()
                        .map(|error| ErrorRow {
                            error: error.clone(),
                        })
                        .collect();
                    print_output(&rows, ctx.format);
                }
            }
        }

        if report.errors.is_empty() {
            Ok(())
        } else {
            Err(CliError::ValidationFailed {
                count: report.errors.len(),
                total: report.checked,
            }
            .into())
        }
    }

    fn check(&self, ctx: &CommandContext) -> Result<Report, CliError> {
        let template = match &self.kind {
            Some(kind) => Some(ctx.template(kind)?),
            None => None,
        };
        let mut diagnostics = Diagnostics::with_casing(ctx.casing);

        for (index, id) in self.ids.iter().enumerate() {
            let key = if self.ids.len() == 1 {
                self.key.clone()
            } else {
                format!("{}[{}]", self.key, index)
            };
            match template {
                Some(template) => diagnostics.check_template(template, id, &key),
                None => diagnostics.check_known(&ctx.registry, id, &key),
            };
        }

        let (warnings, errors) = diagnostics.into_parts();
        Ok(Report {
            kind: template.map(|template| template.name()),
            checked: self.ids.len(),
            warnings,
            errors: errors.iter().map(ToString::to_string).collect(),
        })
    }
}
