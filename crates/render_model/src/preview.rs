//! Preview surface
//!
//! Holds the currently rendered document and the scale it is shown at. The
//! export pipeline captures from here, switching the surface into export mode
//! for the duration of a capture.

use crate::{layout_page, render_record, LayoutConfig, PageRender, RenderError, Result, VisualTree};
use doc_model::{DocumentRecord, DocumentType};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};

/// Default on-screen scale of the preview
pub const DEFAULT_DISPLAY_SCALE: f64 = 0.75;

/// A width and height in CSS px
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// The live preview of a document
#[derive(Debug)]
pub struct PreviewSurface {
    tree: Option<VisualTree>,
    display_scale: f64,
    config: LayoutConfig,
    export_mode: AtomicBool,
}

impl Default for PreviewSurface {
    fn default() -> Self {
        Self::new(LayoutConfig::default())
    }
}

impl PreviewSurface {
    pub fn new(config: LayoutConfig) -> Self {
        Self {
            tree: None,
            display_scale: DEFAULT_DISPLAY_SCALE,
            config,
            export_mode: AtomicBool::new(false),
        }
    }

    /// A surface already showing `record`
    pub fn from_record(record: &DocumentRecord) -> Self {
        let mut surface = Self::default();
        surface.render_record(record);
        surface
    }

    /// Replace the displayed tree
    pub fn update(&mut self, tree: VisualTree) {
        self.tree = Some(tree);
    }

    /// Render `record` and display it
    pub fn render_record(&mut self, record: &DocumentRecord) {
        self.update(render_record(record));
    }

    /// Unmount the current document
    pub fn clear(&mut self) {
        self.tree = None;
    }

    pub fn tree(&self) -> Option<&VisualTree> {
        self.tree.as_ref()
    }

    /// Type of the displayed document
    pub fn doc_type(&self) -> Option<DocumentType> {
        self.tree.as_ref().map(|t| t.doc_type)
    }

    pub fn display_scale(&self) -> f64 {
        self.display_scale
    }

    /// Non-positive scales are ignored
    pub fn set_display_scale(&mut self, scale: f64) {
        if scale > 0.0 && scale.is_finite() {
            self.display_scale = scale;
        }
    }

    pub fn config(&self) -> &LayoutConfig {
        &self.config
    }

    /// Unscaled page extent, the size a capture sees
    pub fn native_size(&self) -> Size {
        match &self.tree {
            Some(tree) => {
                let page = layout_page(tree, &self.config);
                Size {
                    width: page.width,
                    height: page.height,
                }
            }
            None => Size::default(),
        }
    }

    /// On-screen size at the current display scale
    pub fn display_size(&self) -> Size {
        let native = self.native_size();
        Size {
            width: native.width * self.display_scale,
            height: native.height * self.display_scale,
        }
    }

    /// Switch to export mode until the returned guard is dropped
    pub fn enter_export_mode(&self) -> Result<ExportModeGuard<'_>> {
        self.export_mode
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map_err(|_| RenderError::ExportModeActive)?;
        Ok(ExportModeGuard { surface: self })
    }

    pub fn is_export_mode(&self) -> bool {
        self.export_mode.load(Ordering::Acquire)
    }

    /// Lay out the current page as it looks right now.
    ///
    /// In export mode the page has no chrome. The display scale is never
    /// applied.
    pub fn snapshot(&self) -> Result<PageRender> {
        let tree = self.tree.as_ref().ok_or(RenderError::EmptySurface)?;
        let config = self.config.clone().with_chrome(self.config.draw_chrome && !self.is_export_mode());
        let page = layout_page(tree, &config);
        if !(page.width > 0.0 && page.height > 0.0) {
            return Err(RenderError::ZeroExtent {
                width: page.width,
                height: page.height,
            });
        }
        Ok(page)
    }
}

/// Keeps a surface in export mode; leaving scope restores normal mode
#[derive(Debug)]
pub struct ExportModeGuard<'a> {
    surface: &'a PreviewSurface,
}

impl ExportModeGuard<'_> {
    pub fn surface(&self) -> &PreviewSurface {
        self.surface
    }
}

impl Drop for ExportModeGuard<'_> {
    fn drop(&mut self) {
        self.surface.export_mode.store(false, Ordering::Release);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{RenderItem, A4_HEIGHT_PX, A4_WIDTH_PX};

    fn surface() -> PreviewSurface {
        PreviewSurface::from_record(&DocumentRecord::default())
    }

    fn has_chrome(page: &PageRender) -> bool {
        matches!(page.items.first(), Some(RenderItem::Rectangle { stroke: Some(_), .. }))
    }

    #[test]
    fn test_empty_surface_cannot_snapshot() {
        let surface = PreviewSurface::default();
        assert!(matches!(surface.snapshot(), Err(RenderError::EmptySurface)));
        assert!(surface.native_size().is_empty());
    }

    #[test]
    fn test_display_scale_does_not_change_native_size() {
        let mut surface = surface();
        let native = surface.native_size();
        assert_eq!(native.width, A4_WIDTH_PX);
        assert!(native.height >= A4_HEIGHT_PX);

        surface.set_display_scale(0.5);
        assert_eq!(surface.native_size(), native);
        assert!((surface.display_size().width - native.width * 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_default_display_scale() {
        assert_eq!(surface().display_scale(), 0.75);
    }

    #[test]
    fn test_invalid_scale_is_ignored() {
        let mut surface = surface();
        surface.set_display_scale(0.0);
        surface.set_display_scale(f64::NAN);
        assert_eq!(surface.display_scale(), DEFAULT_DISPLAY_SCALE);
    }

    #[test]
    fn test_export_mode_hides_chrome_and_reverts() {
        let surface = surface();
        assert!(has_chrome(&surface.snapshot().unwrap()));
        {
            let _guard = surface.enter_export_mode().unwrap();
            assert!(surface.is_export_mode());
            assert!(!has_chrome(&surface.snapshot().unwrap()));
        }
        assert!(!surface.is_export_mode());
        assert!(has_chrome(&surface.snapshot().unwrap()));
    }

    #[test]
    fn test_export_mode_is_exclusive() {
        let surface = surface();
        let guard = surface.enter_export_mode().unwrap();
        assert!(matches!(
            surface.enter_export_mode(),
            Err(RenderError::ExportModeActive)
        ));
        drop(guard);
        assert!(surface.enter_export_mode().is_ok());
    }

    #[test]
    fn test_export_mode_reverts_on_early_return() {
        fn capture(surface: &PreviewSurface) -> Result<()> {
            let _guard = surface.enter_export_mode()?;
            Err(RenderError::EmptySurface)
        }
        let surface = surface();
        assert!(capture(&surface).is_err());
        assert!(!surface.is_export_mode());
    }

    #[test]
    fn test_update_replaces_tree() {
        let mut surface = surface();
        let record = DocumentRecord::default().with_type(DocumentType::LeaveRequest);
        surface.render_record(&record);
        assert_eq!(surface.doc_type(), Some(DocumentType::LeaveRequest));
        surface.clear();
        assert!(surface.tree().is_none());
    }

    #[test]
    fn test_zero_width_surface_fails() {
        let config = LayoutConfig {
            page_width: 0.0,
            min_page_height: 0.0,
            ..LayoutConfig::default()
        };
        let mut surface = PreviewSurface::new(config);
        surface.render_record(&DocumentRecord::default());
        assert!(matches!(
            surface.snapshot(),
            Err(RenderError::ZeroExtent { .. })
        ));
    }
}
