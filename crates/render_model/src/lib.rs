//! Render Model - Document rendering and page layout
//!
//! This crate turns a document record into a visual tree, lays the tree out
//! as a positioned A4 page, and holds the preview surface that exports are
//! captured from.

mod content;
mod error;
mod layout;
mod preview;
mod render_item;
mod renderer;
pub mod signature;
pub mod text;
mod tree;

pub use content::content_for;
pub use error::*;
pub use layout::*;
pub use preview::*;
pub use render_item::*;
pub use renderer::*;
pub use signature::signature_for;
pub use tree::*;
