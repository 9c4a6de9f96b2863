//! # armid
//!
//! Declarative resource ID templates for the management API: parsing,
//! formatting, recasing, and validation.
//!
//! ## Design Principles
//!
//! - One engine, parameterised by template data; resource types are declarative
//! - Templates are immutable `static` values that fully determine parse and format
//! - IDs round-trip (format → parse → format) under either casing discipline
//! - Failures are returned, never panicked, and never expose partial results
//!
//! ## ID Format
//!
//! Resource IDs are `/`-delimited paths:
//!
//! ```text
//! /subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}/providers/{Namespace}/{type}/{name}
//! ```
//!
//! Fixed segments (`subscriptions`, `providers`, `Microsoft.Compute`, ...) are
//! matched exactly in [`Casing::Strict`] mode, used for user configuration,
//! and ignoring case in [`Casing::Insensitive`] mode, used for API responses.
//! Either way, formatting always emits the declared casing.
//!
//! ```
//! use armid::DatabricksWorkspaceId;
//!
//! let id = DatabricksWorkspaceId::parse_insensitively(
//!     "/subscriptions/sub/resourcegroups/rg/providers/Microsoft.Databricks/Workspaces/ws1",
//! )
//! .unwrap();
//! assert_eq!(id.workspace_name, "ws1");
//! assert_eq!(
//!     id.to_string(),
//!     "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.Databricks/workspaces/ws1"
//! );
//! ```

mod error;
mod macros;
mod parser;
mod registry;
mod resource;
mod segment;
mod template;
mod types;
mod validate;

pub use error::IdError;
pub use parser::{parse, ParseResult};
pub use registry::{Match, Registry};
pub use resource::{format, format_parse_result, parse_as, ResourceId};
pub use segment::{Casing, Segment, SegmentKind, EXAMPLE_RESOURCE_GROUP, EXAMPLE_SUBSCRIPTION_ID};
pub use template::SegmentTemplate;
pub use types::*;
pub use validate::{
    validate, validate_or_empty, validate_template, validate_value, Diagnostics, ValidationError,
};

#[doc(hidden)]
pub use serde as __serde;
