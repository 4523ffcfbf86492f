//! Export of the document preview
//!
//! This crate turns the page on a [`render_model::PreviewSurface`] into files:
//! - PNG, rasterized at a supersampling scale onto an opaque background
//! - PDF, a single A4 portrait page holding the same raster
//!
//! Exports go through an [`ExportPipeline`], which allows one export at a
//! time and waits for fonts before the first capture.

mod error;
mod fonts;
mod options;
pub mod pdf;
mod pipeline;
mod placement;
pub mod raster;

pub use error::*;
pub use fonts::FontAssets;
pub use options::*;
pub use pipeline::*;
pub use placement::PagePlacement;
