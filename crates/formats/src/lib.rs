//! Formats - Visual format variants for printed documents
//!
//! A format id selects typography, borders, header arrangement and title
//! treatment. Resolution is a table lookup layered over a fixed base style;
//! unknown ids quietly fall back to that base.

mod descriptor;
mod table;

pub use descriptor::*;
pub use table::{FormatVariant, StyleOverride, BASE, FORMATS};

/// Resolve a format id to its style descriptor.
///
/// Total and pure: every id yields a descriptor, unknown ids yield [`BASE`].
pub fn resolve(format_id: u32) -> StyleDescriptor {
    let mut style = BASE;
    if let Some(variant) = lookup(format_id) {
        variant.overrides.apply(&mut style);
    }
    style
}

/// The table entry for an id, if it is a known format
pub fn lookup(format_id: u32) -> Option<&'static FormatVariant> {
    FORMATS.iter().find(|v| v.id == format_id)
}

/// Display name of a known format
pub fn format_name(format_id: u32) -> Option<&'static str> {
    lookup(format_id).map(|v| v.name)
}

/// All known formats as `(id, name)` pairs, in id order
pub fn known_formats() -> impl Iterator<Item = (u32, &'static str)> {
    FORMATS.iter().map(|v| (v.id, v.name))
}
