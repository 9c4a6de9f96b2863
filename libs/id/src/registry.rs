//! Template registry used to identify and recase arbitrary resource IDs.
//!
//! A registry is an ordinary value built by the caller and passed to whoever
//! needs it; there is no process-wide table.

use tracing::{debug, trace};

use crate::parser::ParseResult;
use crate::resource::ResourceId;
use crate::segment::Casing;
use crate::template::SegmentTemplate;
use crate::types::ALL_TEMPLATES;
use crate::validate::{Diagnostics, ValidationError};

/// A template that matched an input, with the values it captured.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Match {
    pub template: &'static SegmentTemplate,
    pub result: ParseResult,
    /// The casing discipline the input satisfied.
    pub casing: Casing,
}

impl Match {
    /// The canonical string for the matched ID.
    pub fn canonical(&self) -> String {
        self.template
            .render_lossy(|segment| self.result.get(segment.name()))
    }
}

/// An ordered set of templates.
#[derive(Debug, Clone, Default)]
pub struct Registry {
    templates: Vec<&'static SegmentTemplate>,
}

impl Registry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry containing every built-in resource type.
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        for template in ALL_TEMPLATES.iter().copied() {
            registry.register(template);
        }
        registry
    }

    /// Adds a template. Registering the same template twice has no effect.
    pub fn register(&mut self, template: &'static SegmentTemplate) -> &mut Self {
        if !self.templates.iter().any(|known| *known == template) {
            self.templates.push(template);
        }
        self
    }

    /// Adds the template of a typed ID.
    pub fn register_type<T: ResourceId>(&mut self) -> &mut Self {
        self.register(T::template())
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Iterate over templates in registration order.
    pub fn templates(&self) -> impl Iterator<Item = &'static SegmentTemplate> + '_ {
        self.templates.iter().copied()
    }

    /// Looks up a template by its display name, ignoring case.
    pub fn get(&self, name: &str) -> Option<&'static SegmentTemplate> {
        self.templates()
            .find(|template| template.name().eq_ignore_ascii_case(name))
    }

    /// Finds the template matching `input`.
    ///
    /// An exact-case match wins over a case-insensitive one; within each pass
    /// the first registered template wins.
    pub fn identify(&self, input: &str) -> Option<Match> {
        for casing in [Casing::Strict, Casing::Insensitive] {
            for template in self.templates() {
                match template.parse(input, casing) {
                    Ok(result) => {
                        debug!(template = template.name(), %casing, "identified resource ID");
                        return Some(Match {
                            template,
                            result,
                            casing,
                        });
                    }
                    Err(err) => {
                        trace!(template = template.name(), %casing, error = %err, "template did not match");
                    }
                }
            }
        }
        debug!(input, "no template matched resource ID");
        None
    }

    /// Returns `input` with every fixed segment in its canonical casing.
    ///
    /// Inputs that match no registered template are returned unchanged.
    pub fn recase(&self, input: &str) -> String {
        match self.identify(input) {
            Some(found) => found.canonical(),
            None => input.to_string(),
        }
    }

    /// Validates that `input` is an ID of any registered kind.
    pub fn validate(&self, input: &str, key: &str) -> (Vec<String>, Vec<ValidationError>) {
        let mut diagnostics = Diagnostics::new();
        diagnostics.check_known(self, input, key);
        diagnostics.into_parts()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DatabricksWorkspaceId, KeyVaultId, DATABRICKS_WORKSPACE, KEY_VAULT};

    const WORKSPACE_ID: &str = "/subscriptions/00000000-0000-0000-0000-000000000000/resourceGroups/resGroup1/providers/Microsoft.Databricks/workspaces/Workspace1";

    #[test]
    fn test_register_deduplicates() {
        let mut registry = Registry::new();
        registry
            .register(&KEY_VAULT)
            .register_type::<KeyVaultId>()
            .register_type::<DatabricksWorkspaceId>();
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_builtin_contains_all() {
        let registry = Registry::builtin();
        assert_eq!(registry.len(), ALL_TEMPLATES.len());
        assert_eq!(registry.get("key vault"), Some(&KEY_VAULT));
        assert!(registry.get("Nope").is_none());
    }

    #[test]
    fn test_identify_strict() {
        let registry = Registry::builtin();
        let found = registry.identify(WORKSPACE_ID).unwrap();
        assert_eq!(found.template, &DATABRICKS_WORKSPACE);
        assert_eq!(found.casing, Casing::Strict);
        assert_eq!(found.result.get("workspaceName"), Some("Workspace1"));
    }

    #[test]
    fn test_recase() {
        let registry = Registry::builtin();
        let input = "/SUBSCRIPTIONS/00000000-0000-0000-0000-000000000000/resourcegroups/resGroup1/providers/microsoft.databricks/Workspaces/Workspace1";
        let found = registry.identify(input).unwrap();
        assert_eq!(found.casing, Casing::Insensitive);
        assert_eq!(registry.recase(input), WORKSPACE_ID);
    }

    #[test]
    fn test_recase_unknown_is_unchanged() {
        let registry = Registry::builtin();
        let input = "/subscriptions/sub/resourceGroups/rg/providers/Contoso.Widgets/widgets/w1";
        assert!(registry.identify(input).is_none());
        assert_eq!(registry.recase(input), input);
    }

    #[test]
    fn test_empty_registry_identifies_nothing() {
        let registry = Registry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.recase(WORKSPACE_ID), WORKSPACE_ID);
    }

    #[test]
    fn test_validate_any_known_kind() {
        let registry = Registry::builtin();
        let (warnings, errors) = registry.validate(WORKSPACE_ID, "scope");
        assert!(warnings.is_empty());
        assert!(errors.is_empty());

        let (_, errors) = registry.validate(
            "/subscriptions/sub/resourceGroups/rg/providers/Contoso.Widgets/widgets/w1",
            "scope",
        );
        assert!(matches!(&errors[..], [ValidationError::Unrecognized { key, .. }] if key == "scope"));

        let (_, errors) = Registry::new().validate(WORKSPACE_ID, "scope");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_shared_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Registry>();
        assert_send_sync::<SegmentTemplate>();
        assert_send_sync::<ParseResult>();
        assert_send_sync::<Match>();

        let registry = Registry::builtin();
        std::thread::scope(|scope| {
            let handle = scope.spawn(|| registry.identify(WORKSPACE_ID));
            let found = handle.join().unwrap().unwrap();
            assert_eq!(found.template, &DATABRICKS_WORKSPACE);
        });
    }
}
