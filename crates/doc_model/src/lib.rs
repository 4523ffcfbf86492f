//! Document Model - Record and document-type catalogue
//!
//! This crate holds the single source of truth for rendering: the
//! [`DocumentRecord`] filled in by the editing form, and the closed set of
//! [`DocumentType`]s that decide which content layout gets drawn.

mod dates;
mod document_type;
mod error;
mod record;

pub use dates::*;
pub use document_type::*;
pub use error::*;
pub use record::*;
