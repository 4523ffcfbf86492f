//! The export pipeline
//!
//! Captures the page shown on a [`PreviewSurface`] and hands it back as a PNG
//! or a single-page PDF. One export runs at a time; a second request while
//! one is in flight is rejected rather than queued.

use crate::fonts::FontAssets;
use crate::pdf::{write_image_page, DocumentInfo, ImageData, ImagePage, PdfExportOptions};
use crate::placement::PagePlacement;
use crate::raster::{rasterize, Raster};
use crate::{ExportError, ExportOptions, Result};
use chrono::Utc;
use render_model::PreviewSurface;
use serde::Serialize;
use std::sync::atomic::{AtomicBool, Ordering};

/// Output file kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FileKind {
    Png,
    Pdf,
}

impl FileKind {
    pub fn extension(&self) -> &'static str {
        match self {
            FileKind::Png => "png",
            FileKind::Pdf => "pdf",
        }
    }

    pub fn mime_type(&self) -> &'static str {
        match self {
            FileKind::Png => "image/png",
            FileKind::Pdf => "application/pdf",
        }
    }
}

/// A finished export, ready to be handed to whoever saves or downloads it
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportedFile {
    pub file_name: String,
    pub mime_type: &'static str,
    #[serde(skip)]
    pub bytes: Vec<u8>,
}

impl ExportedFile {
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

/// `{tag}-{timestamp_ms}.{ext}`
pub fn file_name(tag: &str, timestamp_ms: i64, kind: FileKind) -> String {
    format!("{}-{}.{}", tag, timestamp_ms, kind.extension())
}

/// Exports the preview as PNG or PDF
#[derive(Debug)]
pub struct ExportPipeline {
    busy: AtomicBool,
    options: ExportOptions,
    fonts: FontAssets,
}

impl Default for ExportPipeline {
    fn default() -> Self {
        Self::new(ExportOptions::default())
    }
}

impl ExportPipeline {
    pub fn new(options: ExportOptions) -> Self {
        let fonts = FontAssets::new(&options.capture);
        Self {
            busy: AtomicBool::new(false),
            options,
            fonts,
        }
    }

    pub fn options(&self) -> &ExportOptions {
        &self.options
    }

    /// Whether an export is in flight
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Capture the page and encode it as PNG
    pub async fn export_image(&self, surface: &PreviewSurface) -> Result<ExportedFile> {
        self.run(surface, FileKind::Png).await
    }

    /// Capture the page and place it on a single A4 PDF page
    pub async fn export_pdf(&self, surface: &PreviewSurface) -> Result<ExportedFile> {
        self.run(surface, FileKind::Pdf).await
    }

    async fn run(&self, surface: &PreviewSurface, kind: FileKind) -> Result<ExportedFile> {
        let result = self.capture_and_encode(surface, kind).await;
        match &result {
            Ok(file) => {
                tracing::info!(file = %file.file_name, bytes = file.len(), "export complete");
            }
            Err(ExportError::Busy) => {
                tracing::warn!("{} export rejected: another export is in progress", kind.extension());
            }
            Err(e) => {
                tracing::error!("{} export failed: {}", kind.extension(), e);
            }
        }
        result
    }

    async fn capture_and_encode(&self, surface: &PreviewSurface, kind: FileKind) -> Result<ExportedFile> {
        let _busy = BusyGuard::acquire(&self.busy)?;

        let fonts = self.fonts.ready().await?;

        let tree = surface
            .tree()
            .ok_or_else(|| ExportError::Capture("nothing is rendered on the preview".to_string()))?;
        let tag = tree.doc_type.as_tag();
        let title = tree.title.text;

        let mode = surface.enter_export_mode()?;
        let page = mode.surface().snapshot()?;
        tracing::debug!(
            "captured {} page at {}x{} px, scale {}",
            tag,
            page.width,
            page.height,
            self.options.capture.scale
        );

        let capture = self.options.capture.clone();
        let pdf_options = self.options.pdf.clone();
        let encoded = tokio::task::spawn_blocking(move || {
            let raster = rasterize(&page, &fonts, &capture)?;
            match kind {
                FileKind::Png => raster.encode_png(),
                FileKind::Pdf => encode_pdf(&raster, title, &pdf_options),
            }
        })
        .await
        .map_err(|e| ExportError::Capture(format!("capture task failed: {e}")))?;
        drop(mode);

        Ok(ExportedFile {
            file_name: file_name(tag, Utc::now().timestamp_millis(), kind),
            mime_type: kind.mime_type(),
            bytes: encoded?,
        })
    }
}

fn encode_pdf(raster: &Raster, title: &str, options: &PdfExportOptions) -> Result<Vec<u8>> {
    let (page_width, page_height) = options.page_size.dimensions();
    let placement = PagePlacement::fit(raster.width(), raster.height(), page_width, page_height);
    tracing::debug!(
        "placing {}x{} raster at y={} as {}x{} pt{}",
        raster.width(),
        raster.height(),
        placement.top,
        placement.width,
        placement.height,
        if placement.is_cropped(raster.height()) {
            ", cropped"
        } else {
            ""
        }
    );

    let image = ImageData::from_opaque_rgba(raster.data(), raster.width(), raster.height())?
        .crop_rows(placement.source_rows);
    let mut info = DocumentInfo::new()
        .with_creation_date(Utc::now())
        .with_options(options);
    if info.title.is_none() {
        info.title = Some(title.to_string());
    }

    let page = ImagePage {
        image: &image,
        page_size: (page_width, page_height),
        x: placement.x,
        y: placement.pdf_y(page_height),
        width: placement.width,
        height: placement.height,
    };
    Ok(write_image_page(&page, &info, options)?)
}

/// Holds the pipeline's busy flag; dropping it frees the pipeline
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Result<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| ExportError::Busy)?;
        Ok(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
