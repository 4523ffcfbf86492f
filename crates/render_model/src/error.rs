//! Error types for render model

use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("No document is mounted on the preview surface")]
    EmptySurface,

    #[error("Preview surface has zero extent ({width}x{height})")]
    ZeroExtent { width: f64, height: f64 },

    #[error("Preview surface is already in export mode")]
    ExportModeActive,
}

pub type Result<T> = std::result::Result<T, RenderError>;
