//! Error handling and display for the CLI.

use armid::IdError;
use colored::Colorize;
use thiserror::Error;

/// CLI-specific errors.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("unknown resource kind '{0}'")]
    UnknownKind(String),

    #[error("'{0}' does not match any known resource ID")]
    Unrecognized(String),

    #[error("'{input}' only matches {kind} when ignoring case")]
    CasingMismatch { input: String, kind: &'static str },

    #[error("invalid resource ID: {0}")]
    Parse(#[from] IdError),

    #[error("{count} of {total} resource IDs failed validation")]
    ValidationFailed { count: usize, total: usize },
}

/// Print an error in a user-friendly format.
pub fn print_error(err: &anyhow::Error) {
    eprintln!("{} {}", "Error:".red().bold(), err);

    // Check for specific error types and provide hints
    if let Some(cli_err) = err.downcast_ref::<CliError>() {
        match cli_err {
            CliError::UnknownKind(_) => {
                eprintln!(
                    "\n{}",
                    "Hint: Run `armctl kinds` to list supported resource kinds.".yellow()
                );
            }
            CliError::CasingMismatch { .. } => {
                eprintln!(
                    "\n{}",
                    "Hint: Pass `--casing insensitive` to accept IDs returned by the API."
                        .yellow()
                );
            }
            CliError::Parse(id_err) if id_err.is_defect() => {
                eprintln!(
                    "\n{}",
                    "Hint: This is a bug in the resource type definition, not in your input."
                        .yellow()
                );
            }
            _ => {}
        }
    }
}
