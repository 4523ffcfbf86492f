//! PDF Content Stream Generation
//!
//! Builder for the page content stream. Only the operators an image page
//! uses are provided:
//! - q/Q: save and restore graphics state
//! - cm: concatenate transformation matrix
//! - Do: paint an XObject

use super::objects::format_real;
use std::fmt::Write as _;

/// Content stream builder
#[derive(Debug, Default)]
pub struct ContentStream {
    data: String,
}

impl ContentStream {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data.into_bytes()
    }

    pub fn as_str(&self) -> &str {
        &self.data
    }

    /// Save the current graphics state (q)
    pub fn save_state(&mut self) -> &mut Self {
        self.data.push_str("q\n");
        self
    }

    /// Restore the graphics state (Q)
    pub fn restore_state(&mut self) -> &mut Self {
        self.data.push_str("Q\n");
        self
    }

    /// Concatenate a transformation matrix (cm)
    pub fn transform(&mut self, a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> &mut Self {
        let _ = writeln!(
            self.data,
            "{} {} {} {} {} {} cm",
            format_real(a),
            format_real(b),
            format_real(c),
            format_real(d),
            format_real(e),
            format_real(f)
        );
        self
    }

    /// Paint a named XObject (Do)
    pub fn paint_xobject(&mut self, name: &str) -> &mut Self {
        let _ = writeln!(self.data, "/{} Do", name);
        self
    }

    /// Draw an image so it fills the given rectangle, in user space
    /// (origin bottom-left)
    pub fn draw_image(&mut self, name: &str, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        self.save_state()
            .transform(width, 0.0, 0.0, height, x, y)
            .paint_xobject(name)
            .restore_state()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draw_image() {
        let mut content = ContentStream::new();
        content.draw_image("Im0", 0.0, 120.5, 595.28, 600.0);
        assert_eq!(content.as_str(), "q\n595.28 0.0 0.0 600.0 0.0 120.5 cm\n/Im0 Do\nQ\n");
    }
}
