//! Render item types
//!
//! A page's flat display list, in CSS pixels with the origin at the top-left
//! corner. Items are painted in order.

use formats::Rgb;
use serde::{Deserialize, Serialize};

/// A rectangle in render coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }
}

/// Color representation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    /// Stamp ink
    pub const SEAL_RED: Color = Color::rgb(0xdc, 0x26, 0x26);
    /// Pen ink
    pub const INK_BLUE: Color = Color::rgb(0x1e, 0x3a, 0x8a);

    /// `#rrggbb`, alpha ignored
    pub fn to_hex(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Self {
        Color::rgb(c.r, c.g, c.b)
    }
}

/// Horizontal anchoring of a glyph run at its x position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAnchor {
    #[default]
    Start,
    Middle,
    End,
}

/// Which point of the glyphs sits on the text position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum DominantBaseline {
    #[default]
    Alphabetic,
    /// Glyphs are vertically centered on the position or path
    Middle,
}

/// A glyph run for rendering text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GlyphRun {
    /// The text to render
    pub text: String,
    /// CSS font family list
    pub font_family: String,
    /// Font size in px
    pub font_size: f64,
    /// CSS weight (400, 600, 700, 900)
    pub weight: u16,
    pub italic: bool,
    pub color: Color,
    /// Extra space after each glyph, in px
    pub letter_spacing: f64,
    pub anchor: TextAnchor,
    #[serde(default)]
    pub dominant_baseline: DominantBaseline,
    /// Position (baseline)
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum LineStyle {
    #[default]
    Solid,
    Dotted,
}

/// An elliptical arc with equal radii, as in an SVG `A` command
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArcPath {
    pub start: (f64, f64),
    pub end: (f64, f64),
    pub radius: f64,
    pub large_arc: bool,
    pub sweep: bool,
}

/// Text laid along an arc, centered on the arc's midpoint
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArcText {
    pub path: ArcPath,
    pub text: String,
    pub font_family: String,
    pub font_size: f64,
    pub weight: u16,
    pub letter_spacing: f64,
    pub color: Color,
    #[serde(default)]
    pub dominant_baseline: DominantBaseline,
}

/// Translation followed by a rotation about a local origin
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Transform {
    pub translate_x: f64,
    pub translate_y: f64,
    /// Degrees, positive is clockwise
    pub rotate_deg: f64,
    pub origin_x: f64,
    pub origin_y: f64,
}

impl Transform {
    pub fn translate(x: f64, y: f64) -> Self {
        Self {
            translate_x: x,
            translate_y: y,
            ..Default::default()
        }
    }

    pub fn with_rotation(mut self, degrees: f64, origin_x: f64, origin_y: f64) -> Self {
        self.rotate_deg = degrees;
        self.origin_x = origin_x;
        self.origin_y = origin_y;
        self
    }
}

/// Render item types
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum RenderItem {
    /// A glyph run (text)
    GlyphRun(GlyphRun),
    /// A filled and/or stroked rectangle
    Rectangle {
        bounds: Rect,
        fill: Option<Color>,
        stroke: Option<Color>,
        stroke_width: f64,
    },
    /// A line
    Line {
        x1: f64,
        y1: f64,
        x2: f64,
        y2: f64,
        color: Color,
        width: f64,
        style: LineStyle,
    },
    /// A stroked circle
    Circle {
        cx: f64,
        cy: f64,
        r: f64,
        color: Color,
        stroke_width: f64,
    },
    /// Text following an arc
    ArcText(ArcText),
    /// Items drawn in a local coordinate space
    Group {
        transform: Transform,
        opacity: f64,
        items: Vec<RenderItem>,
    },
}

impl RenderItem {
    pub fn horizontal_line(x: f64, y: f64, length: f64, color: Color, width: f64) -> Self {
        RenderItem::Line {
            x1: x,
            y1: y,
            x2: x + length,
            y2: y,
            color,
            width,
            style: LineStyle::Solid,
        }
    }

    /// Visit this item and every nested item, depth first
    pub fn walk<'a>(&'a self, visit: &mut dyn FnMut(&'a RenderItem)) {
        visit(self);
        if let RenderItem::Group { items, .. } = self {
            for item in items {
                item.walk(visit);
            }
        }
    }
}

/// A rendered page
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PageRender {
    pub width: f64,
    pub height: f64,
    pub items: Vec<RenderItem>,
}

impl PageRender {
    /// Every glyph run on the page, including those nested in groups
    pub fn glyph_runs(&self) -> Vec<&GlyphRun> {
        let mut runs = Vec::new();
        for item in &self.items {
            item.walk(&mut |i| {
                if let RenderItem::GlyphRun(run) = i {
                    runs.push(run);
                }
            });
        }
        runs
    }

    /// Whether any glyph run contains `needle`
    pub fn contains_text(&self, needle: &str) -> bool {
        self.glyph_runs().iter().any(|r| r.text.contains(needle))
    }
}
