//! Export configuration

use crate::pdf::PdfExportOptions;
use crate::{ExportError, Result};
use render_model::Color;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How the preview surface is captured
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CaptureOptions {
    /// Supersampling factor from CSS px to raster px
    #[serde(default = "default_scale")]
    pub scale: f32,
    /// Canvas color under the page; always drawn opaque
    #[serde(default = "default_background")]
    pub background: Color,
    /// Extra directories to load fonts from
    #[serde(default)]
    pub font_dirs: Vec<PathBuf>,
    /// Whether to load the fonts installed on the system
    #[serde(default = "default_load_system_fonts")]
    pub load_system_fonts: bool,
}

fn default_scale() -> f32 {
    2.0
}

fn default_background() -> Color {
    Color::WHITE
}

fn default_load_system_fonts() -> bool {
    true
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            scale: default_scale(),
            background: default_background(),
            font_dirs: Vec::new(),
            load_system_fonts: default_load_system_fonts(),
        }
    }
}

impl CaptureOptions {
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }

    pub fn with_font_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.font_dirs.push(dir.into());
        self
    }

    pub fn with_system_fonts(mut self, load: bool) -> Self {
        self.load_system_fonts = load;
        self
    }
}

/// Everything an export pipeline is configured with
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportOptions {
    #[serde(default)]
    pub capture: CaptureOptions,
    #[serde(default)]
    pub pdf: PdfExportOptions,
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse options from JSON; absent fields take their defaults
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| ExportError::InvalidOptions(e.to_string()))
    }

    pub fn with_capture(mut self, capture: CaptureOptions) -> Self {
        self.capture = capture;
        self
    }

    pub fn with_pdf(mut self, pdf: PdfExportOptions) -> Self {
        self.pdf = pdf;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = ExportOptions::default();
        assert_eq!(options.capture.scale, 2.0);
        assert_eq!(options.capture.background, Color::WHITE);
        assert!(options.capture.load_system_fonts);
        assert!(options.pdf.compress);
    }

    #[test]
    fn test_from_json_partial() {
        let options = ExportOptions::from_json(
            r#"{"capture": {"scale": 3.0, "fontDirs": ["/usr/share/fonts/truetype"]}, "pdf": {"author": "Phòng Hành chính"}}"#,
        )
        .unwrap();
        assert_eq!(options.capture.scale, 3.0);
        assert_eq!(options.capture.font_dirs, vec![PathBuf::from("/usr/share/fonts/truetype")]);
        assert!(options.capture.load_system_fonts);
        assert_eq!(options.pdf.author.as_deref(), Some("Phòng Hành chính"));
    }

    #[test]
    fn test_from_json_empty_object() {
        assert_eq!(ExportOptions::from_json("{}").unwrap(), ExportOptions::default());
    }

    #[test]
    fn test_from_json_rejects_garbage() {
        assert!(matches!(
            ExportOptions::from_json("not json"),
            Err(ExportError::InvalidOptions(_))
        ));
    }
}
