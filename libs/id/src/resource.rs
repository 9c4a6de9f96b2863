//! Typed IDs: projecting parse results onto named structs and formatting them back.

use crate::error::IdError;
use crate::parser::ParseResult;
use crate::segment::Casing;
use crate::template::SegmentTemplate;

/// A concrete resource ID type backed by a segment template.
///
/// Implementations are normally generated by [`define_resource_id!`](crate::define_resource_id).
pub trait ResourceId: Sized {
    /// The template describing this type's shape.
    fn template() -> &'static SegmentTemplate;

    /// Builds the typed ID from a parse result produced with [`Self::template`].
    ///
    /// Fails with [`IdError::SegmentNotSpecified`] if a field has no value.
    fn from_parse_result(result: &ParseResult) -> Result<Self, IdError>;

    /// The value of the field bound to `segment`, if this type has one.
    fn segment_value(&self, segment: &str) -> Option<&str>;

    /// Human-readable, multi-line description of the ID's components.
    fn describe(&self) -> String {
        let template = Self::template();
        let components: Vec<String> = template
            .value_segments()
            .filter_map(|segment| {
                self.segment_value(segment.name())
                    .map(|value| format!("{}: {:?}", segment.display_name(), value))
            })
            .collect();
        format!("{} ({})", template.name(), components.join("\n"))
    }
}

/// Parses `input` as a `T` under the given casing discipline.
pub fn parse_as<T: ResourceId>(input: &str, casing: Casing) -> Result<T, IdError> {
    let result = T::template().parse(input, casing)?;
    T::from_parse_result(&result)
}

/// Renders `id` as its canonical string.
///
/// Types generated by [`define_resource_id!`](crate::define_resource_id) bind
/// every value segment. A hand-written type that leaves one unbound renders it
/// as its `{name}` placeholder.
pub fn format<T: ResourceId>(id: &T) -> String {
    T::template().render_lossy(|segment| id.segment_value(segment.name()))
}

/// Renders a parse result back into its canonical string.
///
/// Fails with [`IdError::SegmentNotSpecified`] if `result` was not produced by
/// `template` and lacks one of its values.
pub fn format_parse_result(
    template: &SegmentTemplate,
    result: &ParseResult,
) -> Result<String, IdError> {
    template.render(|segment| result.get(segment.name()))
}
