//! Segment definitions: the atomic components of a resource ID template.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Example subscription used when rendering example IDs.
pub const EXAMPLE_SUBSCRIPTION_ID: &str = "12345678-1234-9876-4563-123456789012";

/// Example resource group used when rendering example IDs.
pub const EXAMPLE_RESOURCE_GROUP: &str = "example-resource-group";

/// How literal segments are compared against input tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Casing {
    /// Literal segments must match exactly. Used for user-supplied configuration.
    #[default]
    Strict,
    /// Literal segments match ignoring ASCII case. Used for API responses.
    Insensitive,
}

impl Casing {
    /// Returns true if `token` matches `literal` under this casing discipline.
    pub fn matches(self, literal: &str, token: &str) -> bool {
        match self {
            Casing::Strict => literal == token,
            Casing::Insensitive => literal.eq_ignore_ascii_case(token),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Casing::Strict => "strict",
            Casing::Insensitive => "insensitive",
        }
    }
}

impl fmt::Display for Casing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Casing {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(Casing::Strict),
            "insensitive" => Ok(Casing::Insensitive),
            other => Err(format!(
                "unknown casing '{other}': expected 'strict' or 'insensitive'"
            )),
        }
    }
}

/// What a segment matches and how it is reconstructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SegmentKind {
    /// A fixed literal such as `resourceGroups`.
    Static(&'static str),
    /// The subscription placeholder.
    SubscriptionId,
    /// The resource group placeholder.
    ResourceGroupName,
    /// A known provider namespace such as `Microsoft.Compute`.
    ResourceProvider(&'static str),
    /// A caller-controlled name.
    UserSpecified,
    /// One of an enumerated set of values. The set must not be empty.
    Constant(&'static [&'static str]),
}

/// One `/`-delimited component of a resource ID template.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Segment {
    name: &'static str,
    kind: SegmentKind,
}

impl Segment {
    pub const fn static_segment(name: &'static str, literal: &'static str) -> Self {
        Self {
            name,
            kind: SegmentKind::Static(literal),
        }
    }

    pub const fn subscription_id(name: &'static str) -> Self {
        Self {
            name,
            kind: SegmentKind::SubscriptionId,
        }
    }

    pub const fn resource_group_name(name: &'static str) -> Self {
        Self {
            name,
            kind: SegmentKind::ResourceGroupName,
        }
    }

    pub const fn resource_provider(name: &'static str, namespace: &'static str) -> Self {
        Self {
            name,
            kind: SegmentKind::ResourceProvider(namespace),
        }
    }

    pub const fn user_specified(name: &'static str) -> Self {
        Self {
            name,
            kind: SegmentKind::UserSpecified,
        }
    }

    pub const fn constant(name: &'static str, values: &'static [&'static str]) -> Self {
        Self {
            name,
            kind: SegmentKind::Constant(values),
        }
    }

    /// The logical name, used as the key in a parse result.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn kind(&self) -> SegmentKind {
        self.kind
    }

    /// Returns true for segments whose value is fixed by the template.
    pub const fn is_fixed(&self) -> bool {
        matches!(
            self.kind,
            SegmentKind::Static(_) | SegmentKind::ResourceProvider(_) | SegmentKind::Constant(_)
        )
    }

    /// Returns true for static and provider segments, which render from the
    /// template alone.
    pub const fn is_literal(&self) -> bool {
        matches!(
            self.kind,
            SegmentKind::Static(_) | SegmentKind::ResourceProvider(_)
        )
    }

    /// Returns true for segments whose value is captured from the input.
    pub const fn is_placeholder(&self) -> bool {
        !self.is_fixed()
    }

    /// The canonical literal for static and provider segments.
    ///
    /// For constants this is the first declared value.
    pub fn literal(&self) -> Option<&'static str> {
        match self.kind {
            SegmentKind::Static(literal) | SegmentKind::ResourceProvider(literal) => Some(literal),
            SegmentKind::Constant(values) => values.first().copied(),
            _ => None,
        }
    }

    /// The case-folded token used for insensitive matching.
    pub fn folded_literal(&self) -> Option<String> {
        self.literal().map(str::to_ascii_lowercase)
    }

    /// Resolves `token` to the canonical literal it matches, if any.
    ///
    /// Always `None` for placeholder segments.
    pub fn canonicalize(&self, token: &str, casing: Casing) -> Option<&'static str> {
        match self.kind {
            SegmentKind::Static(literal) | SegmentKind::ResourceProvider(literal) => {
                casing.matches(literal, token).then_some(literal)
            }
            SegmentKind::Constant(values) => values
                .iter()
                .copied()
                .find(|value| casing.matches(value, token)),
            _ => None,
        }
    }

    /// Human-readable rendering of what a fixed segment accepts.
    pub fn expected(&self) -> String {
        match self.kind {
            SegmentKind::Constant(values) => values.join("|"),
            _ => self.literal().unwrap_or_default().to_string(),
        }
    }

    /// A representative value for this segment in example IDs.
    pub fn example_value(&self) -> String {
        match self.kind {
            SegmentKind::SubscriptionId => EXAMPLE_SUBSCRIPTION_ID.to_string(),
            SegmentKind::ResourceGroupName => EXAMPLE_RESOURCE_GROUP.to_string(),
            SegmentKind::UserSpecified => {
                let stem = self.name.strip_suffix("Name").unwrap_or(self.name);
                format!("{stem}Value")
            }
            _ => self.literal().unwrap_or_default().to_string(),
        }
    }

    /// Label used in human-readable descriptions, e.g. `Resource Group Name`.
    pub fn display_name(&self) -> String {
        if matches!(self.kind, SegmentKind::SubscriptionId) {
            return "Subscription".to_string();
        }
        humanize(self.name)
    }
}

/// Splits a camelCase name into capitalised words.
fn humanize(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for (i, c) in name.chars().enumerate() {
        if i == 0 {
            out.push(c.to_ascii_uppercase());
        } else if c.is_ascii_uppercase() {
            out.push(' ');
            out.push(c);
        } else {
            out.push(c);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const RECORD_TYPES: &[&str] = &["A", "AAAA", "CNAME"];

    #[test]
    fn test_casing_matches() {
        assert!(Casing::Strict.matches("workspaces", "workspaces"));
        assert!(!Casing::Strict.matches("workspaces", "Workspaces"));
        assert!(Casing::Insensitive.matches("workspaces", "WORKSPACES"));
        assert!(!Casing::Insensitive.matches("workspaces", "workspace"));
    }

    #[test]
    fn test_casing_from_str() {
        assert_eq!("strict".parse::<Casing>(), Ok(Casing::Strict));
        assert_eq!(" Insensitive ".parse::<Casing>(), Ok(Casing::Insensitive));
        assert!("loose".parse::<Casing>().is_err());
    }

    #[test]
    fn test_static_canonicalize_recases() {
        let segment = Segment::resource_provider("staticMicrosoftCompute", "Microsoft.Compute");
        assert_eq!(
            segment.canonicalize("microsoft.compute", Casing::Insensitive),
            Some("Microsoft.Compute")
        );
        assert_eq!(segment.canonicalize("microsoft.compute", Casing::Strict), None);
        assert_eq!(segment.folded_literal().as_deref(), Some("microsoft.compute"));
    }

    #[test]
    fn test_constant_canonicalize() {
        let segment = Segment::constant("recordType", RECORD_TYPES);
        assert_eq!(segment.canonicalize("AAAA", Casing::Strict), Some("AAAA"));
        assert_eq!(segment.canonicalize("cname", Casing::Insensitive), Some("CNAME"));
        assert_eq!(segment.canonicalize("MX", Casing::Insensitive), None);
        assert_eq!(segment.expected(), "A|AAAA|CNAME");
        assert!(segment.is_fixed());
    }

    #[test]
    fn test_placeholders_never_canonicalize() {
        let segment = Segment::user_specified("workspaceName");
        assert!(segment.is_placeholder());
        assert_eq!(segment.canonicalize("anything", Casing::Insensitive), None);
        assert_eq!(segment.literal(), None);
    }

    #[test]
    fn test_example_values() {
        assert_eq!(
            Segment::user_specified("workspaceName").example_value(),
            "workspaceValue"
        );
        assert_eq!(
            Segment::subscription_id("subscriptionId").example_value(),
            EXAMPLE_SUBSCRIPTION_ID
        );
        assert_eq!(
            Segment::static_segment("staticProviders", "providers").example_value(),
            "providers"
        );
    }

    #[test]
    fn test_display_names() {
        assert_eq!(
            Segment::subscription_id("subscriptionId").display_name(),
            "Subscription"
        );
        assert_eq!(
            Segment::resource_group_name("resourceGroupName").display_name(),
            "Resource Group Name"
        );
        assert_eq!(
            Segment::user_specified("workspaceName").display_name(),
            "Workspace Name"
        );
    }
}
