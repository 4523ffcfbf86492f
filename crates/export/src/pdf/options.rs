//! PDF Export Options

use super::document::{PageSize, PdfVersion};
use serde::{Deserialize, Serialize};

/// Options for the PDF half of an export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PdfExportOptions {
    /// `/Title`; the printed document title is used when unset
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    /// Flate-compress the content and image streams
    #[serde(default = "default_compress")]
    pub compress: bool,
    #[serde(default)]
    pub pdf_version: PdfVersion,
    #[serde(default)]
    pub page_size: PageSize,
}

fn default_compress() -> bool {
    true
}

impl Default for PdfExportOptions {
    fn default() -> Self {
        Self {
            title: None,
            author: None,
            subject: None,
            compress: default_compress(),
            pdf_version: PdfVersion::default(),
            page_size: PageSize::default(),
        }
    }
}

impl PdfExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }
}
