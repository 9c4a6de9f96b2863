//! Macros for defining typed resource ID types.

/// Macro to define a typed resource ID backed by a static segment template.
///
/// Each field is bound to the template segment whose value it carries. This
/// generates a struct of `String` fields with:
/// - `new()` from component values
/// - `parse()` (strict casing) and `parse_insensitively()`
/// - `id()` returning the canonical string
/// - a [`ResourceId`](crate::ResourceId) implementation
/// - `Display` and `FromStr` implementations
/// - `Serialize` and `Deserialize` as the canonical string
/// - `Ord`, `Hash`, and other standard traits
///
/// # Example
///
/// ```ignore
/// define_resource_id!(
///     /// A Key Vault.
///     KeyVaultId, KEY_VAULT, {
///         subscription_id => "subscriptionId",
///         resource_group_name => "resourceGroupName",
///         vault_name => "vaultName",
///     }
/// );
///
/// let id = KeyVaultId::parse("/subscriptions/.../providers/Microsoft.KeyVault/vaults/kv1")?;
/// ```
#[macro_export]
macro_rules! define_resource_id {
    (
        $(#[$meta:meta])*
        $name:ident, $template:path, {
            $($field:ident => $segment:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name {
            $(pub $field: String,)+
        }

        impl $name {
            /// Creates an ID from its component values.
            #[must_use]
            pub fn new($($field: impl Into<String>),+) -> Self {
                Self {
                    $($field: $field.into(),)+
                }
            }

            /// Parses an ID, requiring fixed segments to match their declared casing.
            pub fn parse(input: &str) -> Result<Self, $crate::IdError> {
                $crate::parse_as(input, $crate::Casing::Strict)
            }

            /// Parses an ID, accepting fixed segments in any casing.
            ///
            /// Use this for IDs returned by the remote API.
            pub fn parse_insensitively(input: &str) -> Result<Self, $crate::IdError> {
                $crate::parse_as(input, $crate::Casing::Insensitive)
            }

            /// Formats the ID as its canonical string.
            #[must_use]
            pub fn id(&self) -> String {
                $crate::format(self)
            }
        }

        impl $crate::ResourceId for $name {
            fn template() -> &'static $crate::SegmentTemplate {
                &$template
            }

            fn from_parse_result(
                result: &$crate::ParseResult,
            ) -> Result<Self, $crate::IdError> {
                Ok(Self {
                    $($field: result.require($segment)?.to_string(),)+
                })
            }

            fn segment_value(&self, segment: &str) -> Option<&str> {
                match segment {
                    $($segment => Some(self.$field.as_str()),)+
                    _ => None,
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(&$crate::format(self))
            }
        }

        impl std::str::FromStr for $name {
            type Err = $crate::IdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse(s)
            }
        }

        impl $crate::__serde::Serialize for $name {
            fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
            where
                S: $crate::__serde::Serializer,
            {
                serializer.serialize_str(&self.id())
            }
        }

        impl<'de> $crate::__serde::Deserialize<'de> for $name {
            fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
            where
                D: $crate::__serde::Deserializer<'de>,
            {
                let s = <String as $crate::__serde::Deserialize>::deserialize(deserializer)?;
                Self::parse(&s).map_err($crate::__serde::de::Error::custom)
            }
        }
    };
}
