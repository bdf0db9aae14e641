//! Primary and foreign key markers on attribute lines.

use erdot_core::entity::Attribute;

/// Annotate a raw attribute line.
///
/// | prefix        | primary | foreign |
/// |---------------|---------|---------|
/// | `*+` or `+*`  | yes     | yes     |
/// | `*`           | yes     | no      |
/// | `+`           | no      | yes     |
/// | none          | no      | no      |
///
/// Only these prefixes are markers; they are removed from the display name,
/// which is then trimmed. `**id` is therefore primary with the name `*id`.
///
/// # Example
///
/// ```
/// use erdot_parser::annotate_attribute;
///
/// let attr = annotate_attribute("+*user_id");
/// assert_eq!(attr.display_name(), "user_id");
/// assert!(attr.is_primary() && attr.is_foreign());
/// ```
pub fn annotate_attribute(raw: &str) -> Attribute {
    let raw = raw.trim();

    if let Some(name) = raw.strip_prefix("*+").or_else(|| raw.strip_prefix("+*")) {
        Attribute::new(name, true, true)
    } else if let Some(name) = raw.strip_prefix('*') {
        Attribute::new(name, true, false)
    } else if let Some(name) = raw.strip_prefix('+') {
        Attribute::new(name, false, true)
    } else {
        Attribute::plain(raw)
    }
}
