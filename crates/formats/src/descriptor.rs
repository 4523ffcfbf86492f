//! Style descriptor types
//!
//! Every visual parameter a format variant may change lives here as a plain
//! value, so the renderer never needs to know which format it is drawing.

use serde::Serialize;

/// sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    pub const BLACK: Rgb = Rgb::new(0, 0, 0);
    pub const GRAY_200: Rgb = Rgb::new(0xe5, 0xe7, 0xeb);
    pub const GRAY_300: Rgb = Rgb::new(0xd1, 0xd5, 0xdb);
    pub const GRAY_400: Rgb = Rgb::new(0x9c, 0xa3, 0xaf);
    pub const GRAY_500: Rgb = Rgb::new(0x6b, 0x72, 0x80);
    pub const GRAY_700: Rgb = Rgb::new(0x37, 0x41, 0x51);
    pub const GRAY_800: Rgb = Rgb::new(0x1f, 0x29, 0x37);
}

/// Generic font class used when no listed family is installed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum FontClass {
    Serif,
    Sans,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Left,
    Center,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub enum FontWeight {
    Normal,
    Semibold,
    Bold,
    Black,
}

impl FontWeight {
    /// Numeric CSS weight
    pub fn css_value(&self) -> u16 {
        match self {
            FontWeight::Normal => 400,
            FontWeight::Semibold => 600,
            FontWeight::Bold => 700,
            FontWeight::Black => 900,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum LineHeight {
    Snug,
    Relaxed,
    Loose,
}

impl LineHeight {
    pub fn factor(&self) -> f64 {
        match self {
            LineHeight::Snug => 1.375,
            LineHeight::Relaxed => 1.625,
            LineHeight::Loose => 2.0,
        }
    }
}

/// Letter spacing, in em
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Tracking {
    Normal,
    Wide,
    Widest,
}

impl Tracking {
    pub fn em(&self) -> f64 {
        match self {
            Tracking::Normal => 0.0,
            Tracking::Wide => 0.025,
            Tracking::Widest => 0.1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RuleLine {
    Solid,
    Double,
}

/// Which edges of the page container carry the border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BorderSides {
    All,
    TopBottom,
}

/// A border or rule: width in px, line style and color
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rule {
    pub width: f64,
    pub line: RuleLine,
    pub color: Rgb,
}

impl Rule {
    pub const fn solid(width: f64, color: Rgb) -> Self {
        Self { width, line: RuleLine::Solid, color }
    }

    pub const fn double(width: f64, color: Rgb) -> Self {
        Self { width, line: RuleLine::Double, color }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContainerBorder {
    pub rule: Rule,
    pub sides: BorderSides,
}

/// Page container: base typography, padding and optional frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ContainerStyle {
    pub font_class: FontClass,
    pub base_size_pt: f64,
    pub line_height: LineHeight,
    pub padding_px: f64,
    pub border: Option<ContainerBorder>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum HeaderLayout {
    /// Company block left, motto block right
    SideBySide,
    /// Company block above motto block
    Stacked { gap_px: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct HeaderStyle {
    pub layout: HeaderLayout,
    pub margin_bottom_px: f64,
    /// Rule under the whole header, with the padding above it
    pub rule: Option<Rule>,
    pub rule_padding_px: f64,
}

/// Emphasis applied to every line of a header block
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BlockStyle {
    pub align: Align,
    /// Overrides per-line weights when set
    pub weight: Option<FontWeight>,
    pub uppercase: bool,
    pub tracking: Tracking,
    pub color: Rgb,
}

impl BlockStyle {
    pub const fn aligned(align: Align) -> Self {
        Self {
            align,
            weight: None,
            uppercase: false,
            tracking: Tracking::Normal,
            color: Rgb::BLACK,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TextEmphasis {
    pub weight: FontWeight,
    pub size_pt: f64,
}

impl TextEmphasis {
    pub const fn new(weight: FontWeight, size_pt: f64) -> Self {
        Self { weight, size_pt }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TitleStyle {
    pub align: Align,
    pub size_px: f64,
    pub weight: FontWeight,
    pub tracking: Tracking,
}

/// The resolved visual parameters for one format variant
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StyleDescriptor {
    pub container: ContainerStyle,
    pub header: HeaderStyle,
    pub company: BlockStyle,
    pub motto: BlockStyle,
    pub title: TitleStyle,
    /// CSS-style family list, most preferred first
    pub font_family: &'static str,
    pub header_title: TextEmphasis,
    pub header_subtitle: TextEmphasis,
    /// Underline under "Độc lập - Tự do - Hạnh phúc", in px
    pub subtitle_underline_px: f64,
    /// Fractions of the content width
    pub company_width: f64,
    pub motto_width: f64,
}

impl StyleDescriptor {
    /// Base font size in CSS px
    pub fn base_size_px(&self) -> f64 {
        pt_to_px(self.container.base_size_pt)
    }

    /// Distance between consecutive baselines of body text, in px
    pub fn line_advance_px(&self) -> f64 {
        self.base_size_px() * self.container.line_height.factor()
    }
}

/// Convert typographic points to CSS px
pub fn pt_to_px(pt: f64) -> f64 {
    pt * 96.0 / 72.0
}
