//! The format variant table
//!
//! Each entry overrides a subset of [`BASE`]. Ids that are not listed here
//! resolve to [`BASE`] unchanged.

use crate::descriptor::*;

/// Format 1, and the fallback for any id not in [`FORMATS`]
pub const BASE: StyleDescriptor = StyleDescriptor {
    container: container(FontClass::Serif, 11.0, LineHeight::Relaxed, 48.0, None),
    header: header(HeaderLayout::SideBySide, 32.0, None, 0.0),
    company: BlockStyle::aligned(Align::Center),
    motto: BlockStyle::aligned(Align::Center),
    title: title(Align::Center, 24.0, FontWeight::Bold, Tracking::Normal),
    font_family: "\"Times New Roman\", serif",
    header_title: TextEmphasis::new(FontWeight::Bold, 11.0),
    header_subtitle: TextEmphasis::new(FontWeight::Bold, 12.0),
    subtitle_underline_px: 1.0,
    company_width: 5.0 / 12.0,
    motto_width: 6.0 / 12.0,
};

/// A subset of descriptor fields that a format variant replaces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleOverride {
    pub container: Option<ContainerStyle>,
    pub header: Option<HeaderStyle>,
    pub company: Option<BlockStyle>,
    pub motto: Option<BlockStyle>,
    pub title: Option<TitleStyle>,
    pub font_family: Option<&'static str>,
    pub header_title: Option<TextEmphasis>,
    pub header_subtitle: Option<TextEmphasis>,
    pub subtitle_underline_px: Option<f64>,
    pub company_width: Option<f64>,
    pub motto_width: Option<f64>,
}

impl StyleOverride {
    pub const NONE: StyleOverride = StyleOverride {
        container: None,
        header: None,
        company: None,
        motto: None,
        title: None,
        font_family: None,
        header_title: None,
        header_subtitle: None,
        subtitle_underline_px: None,
        company_width: None,
        motto_width: None,
    };

    /// Layer this override on top of `style`
    pub fn apply(&self, style: &mut StyleDescriptor) {
        if let Some(v) = self.container {
            style.container = v;
        }
        if let Some(v) = self.header {
            style.header = v;
        }
        if let Some(v) = self.company {
            style.company = v;
        }
        if let Some(v) = self.motto {
            style.motto = v;
        }
        if let Some(v) = self.title {
            style.title = v;
        }
        if let Some(v) = self.font_family {
            style.font_family = v;
        }
        if let Some(v) = self.header_title {
            style.header_title = v;
        }
        if let Some(v) = self.header_subtitle {
            style.header_subtitle = v;
        }
        if let Some(v) = self.subtitle_underline_px {
            style.subtitle_underline_px = v;
        }
        if let Some(v) = self.company_width {
            style.company_width = v;
        }
        if let Some(v) = self.motto_width {
            style.motto_width = v;
        }
    }
}

/// One named format variant
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FormatVariant {
    pub id: u32,
    pub name: &'static str,
    pub overrides: StyleOverride,
}

const fn container(
    font_class: FontClass,
    base_size_pt: f64,
    line_height: LineHeight,
    padding_px: f64,
    border: Option<ContainerBorder>,
) -> ContainerStyle {
    ContainerStyle { font_class, base_size_pt, line_height, padding_px, border }
}

const fn framed(rule: Rule) -> Option<ContainerBorder> {
    Some(ContainerBorder { rule, sides: BorderSides::All })
}

const fn header(
    layout: HeaderLayout,
    margin_bottom_px: f64,
    rule: Option<Rule>,
    rule_padding_px: f64,
) -> HeaderStyle {
    HeaderStyle { layout, margin_bottom_px, rule, rule_padding_px }
}

const fn header_margin(margin_bottom_px: f64) -> Option<HeaderStyle> {
    Some(header(HeaderLayout::SideBySide, margin_bottom_px, None, 0.0))
}

const fn title(align: Align, size_px: f64, weight: FontWeight, tracking: Tracking) -> TitleStyle {
    TitleStyle { align, size_px, weight, tracking }
}

const fn block(align: Align, weight: Option<FontWeight>, uppercase: bool, tracking: Tracking, color: Rgb) -> BlockStyle {
    BlockStyle { align, weight, uppercase, tracking, color }
}

const LEFT: Option<BlockStyle> = Some(BlockStyle::aligned(Align::Left));
const RIGHT: Option<BlockStyle> = Some(BlockStyle::aligned(Align::Right));
const SEMIBOLD_11: Option<TextEmphasis> = Some(TextEmphasis::new(FontWeight::Semibold, 11.0));
const SEMIBOLD_12: Option<TextEmphasis> = Some(TextEmphasis::new(FontWeight::Semibold, 12.0));
const BOLD_11: Option<TextEmphasis> = Some(TextEmphasis::new(FontWeight::Bold, 11.0));

/// Every known format variant, by id
pub const FORMATS: &[FormatVariant] = &[
    FormatVariant { id: 1, name: "Standard", overrides: StyleOverride::NONE },
    FormatVariant {
        id: 2,
        name: "Bordered",
        overrides: StyleOverride {
            container: Some(container(FontClass::Serif, 11.0, LineHeight::Relaxed, 64.0, framed(Rule::double(4.0, Rgb::BLACK)))),
            ..StyleOverride::NONE
        },
    },
    FormatVariant {
        id: 3,
        name: "Modern Sans",
        overrides: StyleOverride {
            container: Some(container(FontClass::Sans, 10.0, LineHeight::Relaxed, 48.0, None)),
            header: Some(header(HeaderLayout::SideBySide, 40.0, Some(Rule::solid(2.0, Rgb::GRAY_800)), 16.0)),
            company: LEFT,
            motto: RIGHT,
            title: Some(title(Align::Left, 24.0, FontWeight::Bold, Tracking::Normal)),
            font_family: Some("Arial, Helvetica, sans-serif"),
            header_subtitle: BOLD_11,
            ..StyleOverride::NONE
        },
    },
    FormatVariant {
        id: 4,
        name: "Classic Centered",
        overrides: StyleOverride {
            container: Some(container(FontClass::Serif, 12.0, LineHeight::Loose, 48.0, None)),
            header: Some(header(HeaderLayout::Stacked { gap_px: 16.0 }, 32.0, None, 0.0)),
            header_title: Some(TextEmphasis::new(FontWeight::Bold, 13.0)),
            header_subtitle: Some(TextEmphasis::new(FontWeight::Bold, 13.0)),
            company_width: Some(1.0),
            motto_width: Some(1.0),
            ..StyleOverride::NONE
        },
    },
    FormatVariant {
        id: 5,
        name: "Bold / Heavy",
        overrides: StyleOverride {
            company: Some(block(Align::Center, Some(FontWeight::Black), false, Tracking::Normal, Rgb::BLACK)),
            motto: Some(block(Align::Center, Some(FontWeight::Black), false, Tracking::Normal, Rgb::BLACK)),
            title: Some(title(Align::Center, 30.0, FontWeight::Black, Tracking::Widest)),
            header_title: Some(TextEmphasis::new(FontWeight::Black, 12.0)),
            header_subtitle: Some(TextEmphasis::new(FontWeight::Black, 12.0)),
            subtitle_underline_px: Some(2.0),
            ..StyleOverride::NONE
        },
    },
    FormatVariant {
        id: 6,
        name: "Thin Border",
        overrides: StyleOverride {
            container: Some(container(FontClass::Serif, 11.0, LineHeight::Relaxed, 48.0, framed(Rule::solid(1.0, Rgb::GRAY_500)))),
            header: header_margin(28.0),
            header_subtitle: SEMIBOLD_12,
            ..StyleOverride::NONE
        },
    },
    FormatVariant {
        id: 7,
        name: "Wide Margin",
        overrides: StyleOverride {
            container: Some(container(FontClass::Serif, 11.0, LineHeight::Relaxed, 64.0, None)),
            header: header_margin(40.0),
            company: LEFT,
            motto: RIGHT,
            header_title: SEMIBOLD_11,
            ..StyleOverride::NONE
        },
    },
    FormatVariant {
        id: 8,
        name: "Compact",
        overrides: StyleOverride {
            container: Some(container(FontClass::Serif, 10.0, LineHeight::Snug, 40.0, None)),
            header: header_margin(24.0),
            title: Some(title(Align::Center, 20.0, FontWeight::Bold, Tracking::Normal)),
            header_title: Some(TextEmphasis::new(FontWeight::Bold, 10.0)),
            header_subtitle: BOLD_11,
            ..StyleOverride::NONE
        },
    },
    FormatVariant {
        id: 9,
        name: "Large Title",
        overrides: StyleOverride {
            header: header_margin(24.0),
            title: Some(title(Align::Center, 30.0, FontWeight::Bold, Tracking::Normal)),
            ..StyleOverride::NONE
        },
    },
    FormatVariant {
        id: 10,
        name: "Serif Centered Header",
        overrides: StyleOverride {
            container: Some(container(
                FontClass::Serif,
                11.0,
                LineHeight::Relaxed,
                48.0,
                Some(ContainerBorder { rule: Rule::solid(2.0, Rgb::BLACK), sides: BorderSides::TopBottom }),
            )),
            header_title: SEMIBOLD_11,
            ..StyleOverride::NONE
        },
    },
    FormatVariant {
        id: 11,
        name: "Modern Sans Light",
        overrides: StyleOverride {
            container: Some(container(FontClass::Sans, 10.0, LineHeight::Relaxed, 48.0, None)),
            header: Some(header(HeaderLayout::SideBySide, 32.0, Some(Rule::solid(1.0, Rgb::GRAY_700)), 12.0)),
            company: LEFT,
            motto: RIGHT,
            title: Some(title(Align::Left, 24.0, FontWeight::Semibold, Tracking::Normal)),
            font_family: Some("\"Helvetica Neue\", Arial, sans-serif"),
            header_title: SEMIBOLD_11,
            header_subtitle: BOLD_11,
            ..StyleOverride::NONE
        },
    },
    FormatVariant {
        id: 12,
        name: "Modern Sans Bold",
        overrides: StyleOverride {
            container: Some(container(FontClass::Sans, 10.0, LineHeight::Relaxed, 48.0, framed(Rule::solid(1.0, Rgb::GRAY_300)))),
            company: Some(block(Align::Left, Some(FontWeight::Semibold), false, Tracking::Normal, Rgb::BLACK)),
            motto: Some(block(Align::Right, Some(FontWeight::Semibold), false, Tracking::Normal, Rgb::BLACK)),
            title: Some(title(Align::Left, 24.0, FontWeight::Bold, Tracking::Normal)),
            font_family: Some("\"Segoe UI\", Arial, sans-serif"),
            header_subtitle: BOLD_11,
            ..StyleOverride::NONE
        },
    },
    FormatVariant {
        id: 13,
        name: "Tall Header",
        overrides: StyleOverride {
            header: header_margin(40.0),
            header_title: Some(TextEmphasis::new(FontWeight::Bold, 12.0)),
            header_subtitle: Some(TextEmphasis::new(FontWeight::Bold, 13.0)),
            ..StyleOverride::NONE
        },
    },
    FormatVariant {
        id: 14,
        name: "Left Title Emphasis",
        overrides: StyleOverride {
            company: LEFT,
            motto: RIGHT,
            title: Some(title(Align::Left, 24.0, FontWeight::Bold, Tracking::Normal)),
            header_title: SEMIBOLD_11,
            header_subtitle: SEMIBOLD_12,
            ..StyleOverride::NONE
        },
    },
    FormatVariant {
        id: 15,
        name: "Uppercase Header",
        overrides: StyleOverride {
            header: header_margin(28.0),
            company: Some(block(Align::Center, None, true, Tracking::Wide, Rgb::BLACK)),
            motto: Some(block(Align::Center, None, true, Tracking::Wide, Rgb::BLACK)),
            ..StyleOverride::NONE
        },
    },
    FormatVariant {
        id: 16,
        name: "Soft Gray",
        overrides: StyleOverride {
            container: Some(container(FontClass::Serif, 11.0, LineHeight::Relaxed, 48.0, framed(Rule::solid(1.0, Rgb::GRAY_200)))),
            company: Some(block(Align::Center, None, false, Tracking::Normal, Rgb::GRAY_700)),
            motto: Some(block(Align::Center, None, false, Tracking::Normal, Rgb::GRAY_700)),
            header_title: SEMIBOLD_11,
            header_subtitle: SEMIBOLD_12,
            ..StyleOverride::NONE
        },
    },
    FormatVariant {
        id: 17,
        name: "Formal Serif",
        overrides: StyleOverride {
            container: Some(container(FontClass::Serif, 12.0, LineHeight::Relaxed, 48.0, None)),
            font_family: Some("Georgia, \"Times New Roman\", serif"),
            header_title: Some(TextEmphasis::new(FontWeight::Bold, 12.0)),
            header_subtitle: Some(TextEmphasis::new(FontWeight::Bold, 13.0)),
            ..StyleOverride::NONE
        },
    },
    FormatVariant {
        id: 18,
        name: "Classic Border",
        overrides: StyleOverride {
            container: Some(container(FontClass::Serif, 11.0, LineHeight::Relaxed, 48.0, framed(Rule::solid(2.0, Rgb::BLACK)))),
            ..StyleOverride::NONE
        },
    },
    FormatVariant {
        id: 19,
        name: "Double Bottom Header",
        overrides: StyleOverride {
            header: Some(header(HeaderLayout::SideBySide, 32.0, Some(Rule::double(2.0, Rgb::BLACK)), 8.0)),
            header_title: SEMIBOLD_11,
            ..StyleOverride::NONE
        },
    },
    FormatVariant {
        id: 20,
        name: "Tall Spacing",
        overrides: StyleOverride {
            container: Some(container(FontClass::Serif, 11.0, LineHeight::Loose, 48.0, None)),
            header: header_margin(40.0),
            header_title: SEMIBOLD_11,
            header_subtitle: SEMIBOLD_12,
            ..StyleOverride::NONE
        },
    },
    FormatVariant {
        id: 21,
        name: "Compact Sans",
        overrides: StyleOverride {
            container: Some(container(FontClass::Sans, 10.0, LineHeight::Snug, 40.0, None)),
            header: header_margin(24.0),
            company: LEFT,
            motto: RIGHT,
            title: Some(title(Align::Left, 20.0, FontWeight::Semibold, Tracking::Normal)),
            font_family: Some("Tahoma, Verdana, sans-serif"),
            header_title: Some(TextEmphasis::new(FontWeight::Semibold, 10.0)),
            header_subtitle: BOLD_11,
            ..StyleOverride::NONE
        },
    },
    FormatVariant {
        id: 22,
        name: "Formal Outline",
        overrides: StyleOverride {
            container: Some(container(FontClass::Serif, 11.0, LineHeight::Relaxed, 48.0, framed(Rule::solid(1.0, Rgb::BLACK)))),
            company: LEFT,
            motto: RIGHT,
            header_title: SEMIBOLD_11,
            header_subtitle: SEMIBOLD_12,
            ..StyleOverride::NONE
        },
    },
    FormatVariant {
        id: 23,
        name: "Condensed Title",
        overrides: StyleOverride {
            header: header_margin(28.0),
            title: Some(title(Align::Center, 24.0, FontWeight::Bold, Tracking::Wide)),
            header_title: SEMIBOLD_11,
            ..StyleOverride::NONE
        },
    },
    FormatVariant {
        id: 24,
        name: "Left Header, Center Title",
        overrides: StyleOverride {
            company: LEFT,
            motto: RIGHT,
            header_title: SEMIBOLD_11,
            ..StyleOverride::NONE
        },
    },
    FormatVariant {
        id: 25,
        name: "Compact Border",
        overrides: StyleOverride {
            container: Some(container(FontClass::Serif, 10.0, LineHeight::Relaxed, 40.0, framed(Rule::solid(1.0, Rgb::GRAY_400)))),
            header: header_margin(24.0),
            title: Some(title(Align::Center, 20.0, FontWeight::Semibold, Tracking::Normal)),
            header_title: Some(TextEmphasis::new(FontWeight::Semibold, 10.0)),
            header_subtitle: Some(TextEmphasis::new(FontWeight::Semibold, 11.0)),
            ..StyleOverride::NONE
        },
    },
];
