//! Segment templates: the declared shape of one resource ID type.

use crate::error::IdError;
use crate::parser::{self, ParseResult};
use crate::segment::{Casing, Segment, SegmentKind};

/// An ordered, immutable sequence of segments describing one resource ID shape.
///
/// Templates are declared as `static` data and fully determine both parsing
/// and formatting.
///
/// ```
/// use armid::{Casing, Segment, SegmentTemplate};
///
/// static VAULT: SegmentTemplate = SegmentTemplate::new(
///     "Key Vault",
///     &[
///         Segment::static_segment("staticSubscriptions", "subscriptions"),
///         Segment::subscription_id("subscriptionId"),
///         Segment::static_segment("staticResourceGroups", "resourceGroups"),
///         Segment::resource_group_name("resourceGroupName"),
///         Segment::static_segment("staticProviders", "providers"),
///         Segment::resource_provider("staticMicrosoftKeyVault", "Microsoft.KeyVault"),
///         Segment::static_segment("staticVaults", "vaults"),
///         Segment::user_specified("vaultName"),
///     ],
/// );
///
/// let parsed = VAULT.parse(&VAULT.example(), Casing::Strict).unwrap();
/// assert_eq!(parsed.get("vaultName"), Some("vaultValue"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SegmentTemplate {
    name: &'static str,
    segments: &'static [Segment],
    trailing_slash: bool,
}

impl SegmentTemplate {
    /// Creates a template. Trailing slashes are rejected unless
    /// [`SegmentTemplate::allow_trailing_slash`] is applied.
    pub const fn new(name: &'static str, segments: &'static [Segment]) -> Self {
        Self {
            name,
            segments,
            trailing_slash: false,
        }
    }

    /// Accept (and drop) a single trailing `/` when parsing.
    pub const fn allow_trailing_slash(self) -> Self {
        Self {
            trailing_slash: true,
            ..self
        }
    }

    /// Display name of the resource type, e.g. `Databricks Workspace`.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    pub const fn segments(&self) -> &'static [Segment] {
        self.segments
    }

    pub const fn len(&self) -> usize {
        self.segments.len()
    }

    pub const fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub const fn allows_trailing_slash(&self) -> bool {
        self.trailing_slash
    }

    /// Looks up a segment by its logical name.
    pub fn segment(&self, name: &str) -> Option<&'static Segment> {
        self.segments.iter().find(|segment| segment.name() == name)
    }

    /// Segments whose value a typed ID carries: placeholders and constants.
    pub fn value_segments(&self) -> impl Iterator<Item = &'static Segment> {
        self.segments.iter().filter(|segment| !segment.is_literal())
    }

    /// Parses `input` against this template.
    pub fn parse(&self, input: &str, casing: Casing) -> Result<ParseResult, IdError> {
        parser::parse(input, self, casing)
    }

    /// Renders an ID by walking the segments in order.
    ///
    /// Static and provider segments always emit their canonical literal.
    /// Every other segment takes its value from `value_of`; a constant with no
    /// supplied value falls back to its first declared value. Fails with
    /// [`IdError::SegmentNotSpecified`] for the first value segment `value_of`
    /// has nothing for.
    pub fn render<'a, F>(&self, value_of: F) -> Result<String, IdError>
    where
        F: FnMut(&Segment) -> Option<&'a str>,
    {
        self.render_with(value_of, |segment| {
            Err(IdError::SegmentNotSpecified {
                segment: segment.name(),
            })
        })
    }

    /// Like [`render`](Self::render), but writes `{name}` for missing values.
    pub(crate) fn render_lossy<'a, F>(&self, value_of: F) -> String
    where
        F: FnMut(&Segment) -> Option<&'a str>,
    {
        let rendered = self.render_with(value_of, |segment| {
            Ok::<_, IdError>(format!("{{{}}}", segment.name()))
        });
        rendered.unwrap_or_default()
    }

    fn render_with<'a, F, M>(&self, mut value_of: F, mut missing: M) -> Result<String, IdError>
    where
        F: FnMut(&Segment) -> Option<&'a str>,
        M: FnMut(&Segment) -> Result<String, IdError>,
    {
        let mut out = String::new();
        for segment in self.segments {
            out.push('/');
            match segment.kind() {
                SegmentKind::Static(literal) | SegmentKind::ResourceProvider(literal) => {
                    out.push_str(literal)
                }
                _ => match value_of(segment).or_else(|| segment.literal()) {
                    Some(value) => out.push_str(value),
                    None => out.push_str(&missing(segment)?),
                },
            }
        }
        Ok(out)
    }

    /// The placeholder form of this template, e.g.
    /// `/subscriptions/{subscriptionId}/resourceGroups/{resourceGroupName}`.
    pub fn pattern(&self) -> String {
        let mut out = String::new();
        for segment in self.segments {
            out.push('/');
            match segment.kind() {
                SegmentKind::Static(literal) | SegmentKind::ResourceProvider(literal) => {
                    out.push_str(literal)
                }
                _ => {
                    out.push('{');
                    out.push_str(segment.name());
                    out.push('}');
                }
            }
        }
        out
    }

    /// A concrete example ID matching this template.
    pub fn example(&self) -> String {
        self.segments
            .iter()
            .map(|segment| format!("/{}", segment.example_value()))
            .collect()
    }
}
