//! PDF Export Module
//!
//! Writes a captured page raster into a single-page PDF.
//!
//! # Architecture
//!
//! - `objects`: PDF object model (Dictionary, Array, Stream, Reference)
//! - `writer`: file structure, object offsets and the xref table
//! - `document`: catalog, page tree, info dictionary, image page assembly
//! - `content`: content stream operators
//! - `images`: image XObjects
//! - `options`: PDF export configuration

mod content;
mod document;
mod images;
mod objects;
mod options;
mod writer;

pub use content::ContentStream;
pub use document::{pdf_date, write_image_page, DocumentInfo, ImagePage, PageSize, PdfVersion, IMAGE_NAME};
pub use images::ImageData;
pub use objects::{PdfDictionary, PdfObject, PdfStream, PdfString};
pub use options::PdfExportOptions;
pub use writer::{PdfError, PdfWriter};
