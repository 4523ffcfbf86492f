//! Placement of a captured raster on a PDF page

use serde::Serialize;

/// Where a raster lands on the page, in points with the origin at the
/// top-left corner of the page
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PagePlacement {
    pub x: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
    /// Raster rows that make it onto the page, counted from the top
    pub source_rows: u32,
}

impl PagePlacement {
    /// Fit an image to the page width, preserving its aspect ratio.
    ///
    /// Images shorter than the page are centered vertically. Taller ones are
    /// top-aligned and cut off at the page bottom: the rows that would fall
    /// off the page are dropped rather than squeezed.
    pub fn fit(image_width: u32, image_height: u32, page_width: f64, page_height: f64) -> Self {
        if image_width == 0 || image_height == 0 {
            return Self {
                x: 0.0,
                top: 0.0,
                width: 0.0,
                height: 0.0,
                source_rows: 0,
            };
        }

        let scale = page_width / image_width as f64;
        let scaled_height = image_height as f64 * scale;

        if scaled_height <= page_height {
            Self {
                x: 0.0,
                top: (page_height - scaled_height) / 2.0,
                width: page_width,
                height: scaled_height,
                source_rows: image_height,
            }
        } else {
            let rows = ((page_height / scale).ceil() as u32).clamp(1, image_height);
            Self {
                x: 0.0,
                top: 0.0,
                width: page_width,
                height: page_height,
                source_rows: rows,
            }
        }
    }

    /// Whether part of the image falls off the page
    pub fn is_cropped(&self, image_height: u32) -> bool {
        self.source_rows < image_height
    }

    /// Bottom edge in PDF user space (origin bottom-left)
    pub fn pdf_y(&self, page_height: f64) -> f64 {
        page_height - self.top - self.height
    }
}
