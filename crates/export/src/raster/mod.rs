//! Page rasterization
//!
//! A page is written out as SVG and drawn with resvg onto an opaque pixmap,
//! supersampled by the capture scale.

mod scene;

pub use scene::{escape_xml, page_to_svg};

use crate::{CaptureOptions, ExportError, Result};
use render_model::PageRender;
use resvg::tiny_skia::{self, Pixmap};
use resvg::usvg::{fontdb, Options, Tree};

/// A captured page, composited onto an opaque background
pub struct Raster {
    pixmap: Pixmap,
}

impl Raster {
    pub fn width(&self) -> u32 {
        self.pixmap.width()
    }

    pub fn height(&self) -> u32 {
        self.pixmap.height()
    }

    /// RGBA8 samples, row-major. Every pixel is opaque.
    pub fn data(&self) -> &[u8] {
        self.pixmap.data()
    }

    /// Encode as PNG
    pub fn encode_png(&self) -> Result<Vec<u8>> {
        self.pixmap
            .encode_png()
            .map_err(|e| ExportError::Encoding(format!("PNG encoding failed: {e}")))
    }
}

/// Pixel size of a page captured at `scale`
pub fn raster_size(page: &PageRender, scale: f32) -> (u32, u32) {
    let w = (page.width * scale as f64).ceil();
    let h = (page.height * scale as f64).ceil();
    (w.max(0.0) as u32, h.max(0.0) as u32)
}

/// Draw a page onto a fresh pixmap
pub fn rasterize(page: &PageRender, fonts: &fontdb::Database, options: &CaptureOptions) -> Result<Raster> {
    let scale = options.scale;
    if !(scale > 0.0 && scale.is_finite()) {
        return Err(ExportError::Capture(format!("invalid capture scale {scale}")));
    }

    let (width, height) = raster_size(page, scale);
    let mut pixmap = Pixmap::new(width, height).ok_or_else(|| {
        ExportError::Capture(format!("cannot allocate a {width}x{height} raster"))
    })?;

    let bg = options.background;
    pixmap.fill(tiny_skia::Color::from_rgba8(bg.r, bg.g, bg.b, 255));

    let svg = page_to_svg(page);
    let tree = Tree::from_str(&svg, &Options::default(), fonts)
        .map_err(|e| ExportError::Capture(format!("page scene could not be parsed: {e}")))?;

    resvg::render(
        &tree,
        tiny_skia::Transform::from_scale(scale, scale),
        &mut pixmap.as_mut(),
    );

    Ok(Raster { pixmap })
}
