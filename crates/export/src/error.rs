//! Error types for export

use crate::pdf::PdfError;
use render_model::RenderError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ExportError {
    /// The page could not be captured
    #[error("Capture failed: {0}")]
    Capture(String),

    /// The captured page could not be written as PNG or PDF
    #[error("Encoding failed: {0}")]
    Encoding(String),

    /// Another export is still running
    #[error("An export is already in progress")]
    Busy,

    #[error("Invalid export options: {0}")]
    InvalidOptions(String),
}

impl From<PdfError> for ExportError {
    fn from(e: PdfError) -> Self {
        ExportError::Encoding(e.to_string())
    }
}

impl From<RenderError> for ExportError {
    fn from(e: RenderError) -> Self {
        match e {
            RenderError::ExportModeActive => ExportError::Busy,
            other => ExportError::Capture(other.to_string()),
        }
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_surface_errors_are_capture_failures() {
        assert!(matches!(
            ExportError::from(RenderError::EmptySurface),
            ExportError::Capture(_)
        ));
        assert!(matches!(
            ExportError::from(RenderError::ExportModeActive),
            ExportError::Busy
        ));
    }

    #[test]
    fn test_pdf_errors_are_encoding_failures() {
        let e = ExportError::from(PdfError::InvalidDocument("empty".to_string()));
        assert_eq!(e.to_string(), "Encoding failed: Invalid document: empty");
    }
}
