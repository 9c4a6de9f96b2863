//! Validation facade for configuration-time checks.
//!
//! Validation runs the same parse and mapping as [`parse_as`](crate::parse_as)
//! but reports problems as a `(warnings, errors)` pair instead of returning
//! the parsed value. It never panics, whatever the input.

use thiserror::Error;

use crate::error::IdError;
use crate::registry::Registry;
use crate::resource::{parse_as, ResourceId};
use crate::segment::Casing;
use crate::template::SegmentTemplate;

/// A problem found while validating a configuration value.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// The configuration value is not a string.
    #[error("expected {key} to be a string")]
    NotAString { key: String },

    /// The value is a string but not a valid ID of the expected kind.
    #[error("parsing {key} as a {kind} ID: {source}\n\nexpected an ID like: {example}")]
    Invalid {
        key: String,
        kind: &'static str,
        example: String,
        #[source]
        source: IdError,
    },

    /// The value matches none of the known resource ID shapes.
    #[error("expected {key} to be a resource ID of a known kind, got {value:?}")]
    Unrecognized { key: String, value: String },
}

impl ValidationError {
    fn invalid(template: &SegmentTemplate, key: &str, source: IdError) -> Self {
        ValidationError::Invalid {
            key: key.to_string(),
            kind: template.name(),
            example: template.example(),
            source,
        }
    }

    /// The underlying parse error, if any.
    pub fn id_error(&self) -> Option<&IdError> {
        match self {
            ValidationError::Invalid { source, .. } => Some(source),
            ValidationError::NotAString { .. } | ValidationError::Unrecognized { .. } => None,
        }
    }
}

/// Accumulates warnings and errors across any number of checks.
///
/// Configuration-time callers use this to report every problem at once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Diagnostics {
    casing: Casing,
    warnings: Vec<String>,
    errors: Vec<ValidationError>,
}

impl Diagnostics {
    /// Creates an empty set of diagnostics using strict casing.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty set of diagnostics using the given casing.
    pub fn with_casing(casing: Casing) -> Self {
        Self {
            casing,
            ..Self::default()
        }
    }

    /// Checks that `input` is a valid `T`. Returns true if it is.
    pub fn check<T: ResourceId>(&mut self, input: &str, key: &str) -> bool {
        match parse_as::<T>(input, self.casing) {
            Ok(_) => {
                self.warn_style(input, key);
                true
            }
            Err(err) => {
                self.errors
                    .push(ValidationError::invalid(T::template(), key, err));
                false
            }
        }
    }

    /// Checks that `input` matches `template`. Returns true if it does.
    pub fn check_template(&mut self, template: &SegmentTemplate, input: &str, key: &str) -> bool {
        match template.parse(input, self.casing) {
            Ok(_) => {
                self.warn_style(input, key);
                true
            }
            Err(err) => {
                self.errors.push(ValidationError::invalid(template, key, err));
                false
            }
        }
    }

    /// Like [`check`](Self::check), but an empty string is accepted.
    ///
    /// Use this for optional ID fields.
    pub fn check_or_empty<T: ResourceId>(&mut self, input: &str, key: &str) -> bool {
        input.is_empty() || self.check::<T>(input, key)
    }

    /// Checks that `input` is an ID of any kind known to `registry`.
    ///
    /// In strict mode an ID that only matches ignoring case is accepted with a
    /// warning naming its canonical form.
    pub fn check_known(&mut self, registry: &Registry, input: &str, key: &str) -> bool {
        let Some(found) = registry.identify(input) else {
            self.errors.push(ValidationError::Unrecognized {
                key: key.to_string(),
                value: input.to_string(),
            });
            return false;
        };
        if found.casing == Casing::Insensitive && self.casing == Casing::Strict {
            self.warnings.push(format!(
                "{key}: {} ID should be written as {:?}",
                found.template.name(),
                found.canonical()
            ));
        }
        self.warn_style(input, key);
        true
    }

    /// Checks that a raw configuration value is a string holding a valid `T`.
    pub fn check_value<T: ResourceId>(&mut self, value: &serde_json::Value, key: &str) -> bool {
        match value.as_str() {
            Some(input) => self.check::<T>(input, key),
            None => {
                self.errors.push(ValidationError::NotAString {
                    key: key.to_string(),
                });
                false
            }
        }
    }

    fn warn_style(&mut self, input: &str, key: &str) {
        if !input.starts_with('/') {
            self.warnings
                .push(format!("{key}: resource ID should start with '/'"));
        }
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Returns true if no errors were recorded. Warnings do not count.
    pub fn is_ok(&self) -> bool {
        self.errors.is_empty()
    }

    /// Appends everything recorded by `other`.
    pub fn extend(&mut self, other: Diagnostics) {
        self.warnings.extend(other.warnings);
        self.errors.extend(other.errors);
    }

    pub fn into_parts(self) -> (Vec<String>, Vec<ValidationError>) {
        (self.warnings, self.errors)
    }
}

/// Validates that `input` is a valid `T`.
pub fn validate<T: ResourceId>(input: &str, key: &str) -> (Vec<String>, Vec<ValidationError>) {
    let mut diagnostics = Diagnostics::new();
    diagnostics.check::<T>(input, key);
    diagnostics.into_parts()
}

/// Validates that `input` is a valid `T`, or empty.
pub fn validate_or_empty<T: ResourceId>(
    input: &str,
    key: &str,
) -> (Vec<String>, Vec<ValidationError>) {
    let mut diagnostics = Diagnostics::new();
    diagnostics.check_or_empty::<T>(input, key);
    diagnostics.into_parts()
}

/// Validates that `input` matches `template`.
pub fn validate_template(
    template: &SegmentTemplate,
    input: &str,
    key: &str,
) -> (Vec<String>, Vec<ValidationError>) {
    let mut diagnostics = Diagnostics::new();
    diagnostics.check_template(template, input, key);
    diagnostics.into_parts()
}

/// Validates that a raw configuration value is a string holding a valid `T`.
pub fn validate_value<T: ResourceId>(
    value: &serde_json::Value,
    key: &str,
) -> (Vec<String>, Vec<ValidationError>) {
    let mut diagnostics = Diagnostics::new();
    diagnostics.check_value::<T>(value, key);
    diagnostics.into_parts()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{KeyVaultId, StorageAccountId, KEY_VAULT};

    const VAULT_ID: &str =
        "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.KeyVault/vaults/kv1";

    #[test]
    fn test_valid_id_has_no_errors() {
        let (warnings, errors) = validate::<KeyVaultId>(VAULT_ID, "key_vault_id");
        assert!(warnings.is_empty());
        assert!(errors.is_empty());
    }

    #[test]
    fn test_invalid_id_message() {
        let (_, errors) = validate::<KeyVaultId>(
            "/subscriptions/sub/resourceGroups/rg/providers/Microsoft.KeyVault/Vaults/kv1",
            "key_vault_id",
        );
        assert_eq!(errors.len(), 1);
        let message = errors[0].to_string();
        assert!(message.starts_with("parsing key_vault_id as a Key Vault ID: segment 'staticVaults' mismatch: expected 'vaults', got 'Vaults'"));
        assert!(message.contains("vaultValue"));
    }

    #[test]
    fn test_empty_input_is_error() {
        let (_, errors) = validate::<KeyVaultId>("", "key_vault_id");
        assert_eq!(errors[0].id_error(), Some(&IdError::EmptyInput));
    }

    #[test]
    fn test_missing_leading_slash_warns() {
        let (warnings, errors) = validate::<KeyVaultId>(&VAULT_ID[1..], "key_vault_id");
        assert!(errors.is_empty());
        assert_eq!(warnings, ["key_vault_id: resource ID should start with '/'"]);
    }

    #[test]
    fn test_validate_value_not_a_string() {
        let (_, errors) = validate_value::<KeyVaultId>(&serde_json::json!(42), "key_vault_id");
        assert_eq!(
            errors,
            [ValidationError::NotAString {
                key: "key_vault_id".to_string()
            }]
        );
        assert_eq!(errors[0].to_string(), "expected key_vault_id to be a string");
    }

    #[test]
    fn test_validate_value_string() {
        let (_, errors) = validate_value::<KeyVaultId>(&serde_json::json!(VAULT_ID), "id");
        assert!(errors.is_empty());
    }

    #[test]
    fn test_validate_template() {
        let (_, errors) = validate_template(&KEY_VAULT, VAULT_ID, "id");
        assert!(errors.is_empty());
        let (_, errors) = validate_template(&KEY_VAULT, "/subscriptions/sub", "id");
        assert_eq!(errors.len(), 1);
    }

    #[test]
    fn test_diagnostics_accumulate() {
        let mut diagnostics = Diagnostics::new();
        assert!(diagnostics.check::<KeyVaultId>(VAULT_ID, "vault"));
        assert!(!diagnostics.check::<StorageAccountId>(VAULT_ID, "storage"));
        assert!(!diagnostics.check::<KeyVaultId>("", "other_vault"));
        assert!(!diagnostics.is_ok());
        assert_eq!(diagnostics.errors().len(), 2);

        let mut combined = Diagnostics::new();
        combined.extend(diagnostics);
        let (_, errors) = combined.into_parts();
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn test_diagnostics_insensitive() {
        let input = VAULT_ID.replace("Microsoft.KeyVault", "microsoft.keyvault");
        assert!(!Diagnostics::new().check::<KeyVaultId>(&input, "id"));
        assert!(Diagnostics::with_casing(Casing::Insensitive).check::<KeyVaultId>(&input, "id"));
    }

    #[test]
    fn test_optional_field_accepts_empty() {
        let (warnings, errors) = validate_or_empty::<KeyVaultId>("", "key_vault_id");
        assert!(warnings.is_empty());
        assert!(errors.is_empty());

        let (_, errors) = validate_or_empty::<KeyVaultId>("/subscriptions/sub", "key_vault_id");
        assert_eq!(errors.len(), 1);

        let mut diagnostics = Diagnostics::new();
        assert!(diagnostics.check_or_empty::<KeyVaultId>(VAULT_ID, "key_vault_id"));
        assert!(diagnostics.is_ok());
    }

    #[test]
    fn test_check_known() {
        let registry = Registry::builtin();
        let mut diagnostics = Diagnostics::new();
        assert!(diagnostics.check_known(&registry, VAULT_ID, "target_id"));
        assert!(diagnostics.warnings().is_empty());

        let lowered = VAULT_ID.to_ascii_lowercase();
        assert!(diagnostics.check_known(&registry, &lowered, "target_id"));
        assert_eq!(
            diagnostics.warnings(),
            [format!("target_id: Key Vault ID should be written as {VAULT_ID:?}")]
        );

        assert!(!diagnostics.check_known(&registry, "/foo/bar", "target_id"));
        assert!(!diagnostics.check_known(&registry, "", "target_id"));
        assert_eq!(
            diagnostics.errors()[0],
            ValidationError::Unrecognized {
                key: "target_id".to_string(),
                value: "/foo/bar".to_string()
            }
        );
        assert_eq!(diagnostics.errors()[1].id_error(), None);
    }

    #[test]
    fn test_check_known_insensitive_does_not_warn() {
        let registry = Registry::builtin();
        let mut diagnostics = Diagnostics::with_casing(Casing::Insensitive);
        assert!(diagnostics.check_known(&registry, &VAULT_ID.to_ascii_uppercase(), "id"));
        assert!(diagnostics.warnings().is_empty());
    }
}
