//! PDF Document Structure
//!
//! Catalog, page tree, info dictionary and the single-page image document
//! the exporter produces.

use super::content::ContentStream;
use super::images::ImageData;
use super::objects::{PdfDictionary, PdfObject, PdfStream};
use super::options::PdfExportOptions;
use super::writer::{PdfError, PdfWriter, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Resource name of the page image
pub const IMAGE_NAME: &str = "Im0";

/// Header version; images and Flate streams need nothing newer than 1.4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PdfVersion {
    #[default]
    #[serde(rename = "1.4")]
    V1_4,
    #[serde(rename = "1.7")]
    V1_7,
}

impl PdfVersion {
    pub fn as_str(&self) -> &'static str {
        match self {
            PdfVersion::V1_4 => "1.4",
            PdfVersion::V1_7 => "1.7",
        }
    }
}

/// Page size in points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageSize {
    /// 210 × 297 mm, portrait
    #[default]
    A4,
}

impl PageSize {
    pub fn dimensions(&self) -> (f64, f64) {
        match self {
            PageSize::A4 => (595.28, 841.89),
        }
    }
}

/// PDF document information
#[derive(Debug, Clone, Default)]
pub struct DocumentInfo {
    pub title: Option<String>,
    pub author: Option<String>,
    pub subject: Option<String>,
    pub creator: Option<String>,
    pub producer: Option<String>,
    /// PDF date string, `D:YYYYMMDDHHmmSS+00'00'`
    pub creation_date: Option<String>,
}

impl DocumentInfo {
    pub fn new() -> Self {
        Self {
            creator: Some("Giay To".to_string()),
            producer: Some(format!("Giay To PDF Export {}", env!("CARGO_PKG_VERSION"))),
            ..Default::default()
        }
    }

    pub fn with_creation_date(mut self, at: DateTime<Utc>) -> Self {
        self.creation_date = Some(pdf_date(at));
        self
    }

    /// Fill title, author and subject from export options
    pub fn with_options(mut self, options: &PdfExportOptions) -> Self {
        if options.title.is_some() {
            self.title = options.title.clone();
        }
        if options.author.is_some() {
            self.author = options.author.clone();
        }
        if options.subject.is_some() {
            self.subject = options.subject.clone();
        }
        self
    }

    pub fn to_dictionary(&self) -> PdfDictionary {
        let mut dict = PdfDictionary::new();
        let fields = [
            ("Title", &self.title),
            ("Author", &self.author),
            ("Subject", &self.subject),
            ("Creator", &self.creator),
            ("Producer", &self.producer),
            ("CreationDate", &self.creation_date),
        ];
        for (key, value) in fields {
            if let Some(value) = value {
                dict.insert(key, PdfObject::text(value));
            }
        }
        dict
    }
}

/// Format a timestamp as a PDF date string
pub fn pdf_date(at: DateTime<Utc>) -> String {
    format!("D:{}+00'00'", at.format("%Y%m%d%H%M%S"))
}

/// One image placed on one page, in PDF user space (origin bottom-left)
#[derive(Debug, Clone, Copy)]
pub struct ImagePage<'a> {
    pub image: &'a ImageData,
    pub page_size: (f64, f64),
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Write a one-page document showing a single image
pub fn write_image_page(
    page: &ImagePage<'_>,
    info: &DocumentInfo,
    options: &PdfExportOptions,
) -> Result<Vec<u8>> {
    if !(page.width > 0.0 && page.height > 0.0) {
        return Err(PdfError::InvalidDocument(format!(
            "image placement has zero extent ({}x{})",
            page.width, page.height
        )));
    }

    let mut pdf = PdfWriter::new(Vec::new(), options.pdf_version);
    pdf.set_compression(options.compress);
    pdf.write_header()?;

    let catalog_ref = pdf.allocate_object();
    let pages_ref = pdf.allocate_object();
    let page_ref = pdf.allocate_object();
    let content_ref = pdf.allocate_object();
    let image_ref = pdf.allocate_object();
    let info_ref = pdf.allocate_object();

    let mut catalog = PdfDictionary::typed("Catalog");
    catalog.insert("Pages", PdfObject::Reference(pages_ref));
    pdf.write_object(catalog_ref, catalog.into())?;

    let mut pages = PdfDictionary::typed("Pages");
    pages.insert("Kids", PdfObject::Array(vec![PdfObject::Reference(page_ref)]));
    pages.insert("Count", PdfObject::Integer(1));
    pdf.write_object(pages_ref, pages.into())?;

    let (page_width, page_height) = page.page_size;
    let mut xobjects = PdfDictionary::new();
    xobjects.insert(IMAGE_NAME, PdfObject::Reference(image_ref));
    let mut resources = PdfDictionary::new();
    resources.insert("XObject", xobjects.into());
    resources.insert(
        "ProcSet",
        PdfObject::Array(vec![PdfObject::name("PDF"), PdfObject::name("ImageC")]),
    );

    let mut page_dict = PdfDictionary::typed("Page");
    page_dict.insert("Parent", PdfObject::Reference(pages_ref));
    page_dict.insert("MediaBox", PdfObject::rect([0.0, 0.0, page_width, page_height]));
    page_dict.insert("Resources", resources.into());
    page_dict.insert("Contents", PdfObject::Reference(content_ref));
    pdf.write_object(page_ref, page_dict.into())?;

    let mut content = ContentStream::new();
    content.draw_image(IMAGE_NAME, page.x, page.y, page.width, page.height);
    pdf.write_stream_object(content_ref, PdfStream::new(content.into_bytes()))?;

    pdf.write_stream_object(image_ref, page.image.to_xobject())?;
    pdf.write_object(info_ref, info.to_dictionary().into())?;

    pdf.write_xref_and_trailer(catalog_ref, Some(info_ref))?;
    pdf.finish()
}
