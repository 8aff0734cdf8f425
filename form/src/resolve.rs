use pickfill_protocol::FieldDescriptor;
use pickfill_protocol::FieldKind;

/// How well a field suits free-form handoff text. Lower sorts first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldMatch {
    /// A multi-line text field.
    LongText,
    /// A single-line text field, or any field whose name mentions "text".
    TextLike,
    /// Anything else; only chosen when nothing better exists.
    Fallback,
}

pub fn rank_field(field: &FieldDescriptor) -> FieldMatch {
    match field.kind {
        FieldKind::LongText => FieldMatch::LongText,
        kind if kind.is_text() => FieldMatch::TextLike,
        _ if field.name.to_lowercase().contains("text") => FieldMatch::TextLike,
        _ => FieldMatch::Fallback,
    }
}

/// Picks the field that should receive handoff text: the first long-text
/// field, else the first text-like field, else the first field. `None` only
/// for an empty schema.
pub fn resolve_target_field(fields: &[FieldDescriptor]) -> Option<&FieldDescriptor> {
    fields
        .iter()
        .enumerate()
        .min_by_key(|(position, field)| (rank_field(field), *position))
        .map(|(_, field)| field)
}
