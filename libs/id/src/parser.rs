//! The parser engine: matches an input string against a segment template.

use serde::ser::SerializeMap;

use crate::error::IdError;
use crate::segment::{Casing, SegmentKind};
use crate::template::SegmentTemplate;

/// The name-keyed values captured by a successful parse, in template order.
///
/// Every template segment has exactly one non-empty entry. Fixed segments hold
/// their canonical literal; placeholders hold the input token verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParseResult {
    entries: Vec<(&'static str, String)>,
}

impl ParseResult {
    /// Returns the value captured for `segment`.
    pub fn get(&self, segment: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(name, _)| *name == segment)
            .map(|(_, value)| value.as_str())
    }

    /// Returns the value captured for `segment`, or `SegmentNotSpecified`.
    pub fn require(&self, segment: &'static str) -> Result<&str, IdError> {
        self.get(segment)
            .ok_or(IdError::SegmentNotSpecified { segment })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(segment name, value)` pairs in template order.
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (*name, value.as_str()))
    }
}

impl serde::Serialize for ParseResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (name, value) in &self.entries {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

/// Parses `input` against `template`.
///
/// Fails on the first problem found; no partial result is ever returned.
/// The token count is checked before any segment, so a trailing slash after a
/// complete ID is `TooManySegments` while one in place of the last value is
/// `EmptySegmentValue`.
pub fn parse(
    input: &str,
    template: &SegmentTemplate,
    casing: Casing,
) -> Result<ParseResult, IdError> {
    if input.is_empty() {
        return Err(IdError::EmptyInput);
    }

    let path = input.strip_prefix('/').unwrap_or(input);
    let mut tokens: Vec<&str> = path.split('/').collect();
    if template.allows_trailing_slash() && tokens.len() > 1 && tokens.last() == Some(&"") {
        tokens.pop();
    }

    let segments = template.segments();
    if tokens.len() < segments.len() {
        return Err(IdError::TooFewSegments {
            expected: segments.len(),
            actual: tokens.len(),
        });
    }

    let mut entries = Vec::with_capacity(segments.len());
    for (segment, token) in segments.iter().zip(tokens.iter().copied()) {
        let value = match segment.kind() {
            SegmentKind::Static(_) | SegmentKind::ResourceProvider(_) | SegmentKind::Constant(_) => {
                let Some(canonical) = segment.canonicalize(token, casing) else {
                    return Err(IdError::StaticSegmentMismatch {
                        segment: segment.name(),
                        expected: segment.expected(),
                        actual: token.to_string(),
                    });
                };
                canonical.to_string()
            }
            SegmentKind::SubscriptionId
            | SegmentKind::ResourceGroupName
            | SegmentKind::UserSpecified => {
                if token.is_empty() {
                    return Err(IdError::EmptySegmentValue {
                        segment: segment.name(),
                    });
                }
                token.to_string()
            }
        };
        entries.push((segment.name(), value));
    }

    if tokens.len() > segments.len() {
        return Err(IdError::TooManySegments {
            expected: segments.len(),
            actual: tokens.len(),
        });
    }

    Ok(ParseResult { entries })
}
