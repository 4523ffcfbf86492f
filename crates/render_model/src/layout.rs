//! Convert a visual tree to a positioned page
//!
//! Pure arithmetic over the tree and its style descriptor: the same tree and
//! config always produce the same [`PageRender`].

use crate::signature::{self, seal};
use crate::text::{estimate_width, wrap_spans, wrap_text, Span, TextStyle, WrappedLine};
use crate::{
    ArcText, Color, ContentNode, DominantBaseline, GlyphRun, LineStyle, Overlay, PageRender,
    PlainColumn, Rect, RenderItem, Row, SealGraphic, SignatureGlyph, SignatureLayout,
    SignerColumn, TextAnchor, Transform, ValueEmphasis, VisualTree,
};
use formats::{
    pt_to_px, Align, BlockStyle, BorderSides, FontClass, FontWeight, HeaderLayout, Rgb, Rule,
    RuleLine, StyleDescriptor, TextEmphasis,
};
use serde::{Deserialize, Serialize};

/// A4 width at 96 dpi
pub const A4_WIDTH_PX: f64 = 793.700_787;
/// A4 height at 96 dpi
pub const A4_HEIGHT_PX: f64 = 1122.519_685;

const NOTE_SIZE_PT: f64 = 11.0;
const TITLE_MARGIN_TOP: f64 = 32.0;
const TITLE_MARGIN_BOTTOM: f64 = 8.0;
const SALUTATION_MARGIN_BOTTOM: f64 = 32.0;
const CONTENT_INSET: f64 = 16.0;
const CONTENT_GAP: f64 = 16.0;
const ROW_LABEL_MIN: f64 = 150.0;
const ROW_VALUE_INSET: f64 = 8.0;
const PARAGRAPH_INDENT: f64 = 32.0;
const BOX_PADDING: f64 = 16.0;
const BOX_MIN_HEIGHT: f64 = 150.0;
const SIGNATURE_MARGIN_TOP: f64 = 64.0;
const PLAIN_HEADING_GAP: f64 = 64.0;
const SIGNER_TITLE_GAP: f64 = 16.0;
const SIGNER_NAME_GAP: f64 = 4.0;
const UNDERLINE_PADDING: f64 = 4.0;
const UNDERLINE_MARGIN: f64 = 4.0;
const SIGNATURE_LINE_BOX: f64 = 40.0;

/// Configuration for page layout
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LayoutConfig {
    /// Page width in px
    #[serde(default = "default_page_width")]
    pub page_width: f64,
    /// Pages never shrink below this height; long content grows them
    #[serde(default = "default_min_page_height")]
    pub min_page_height: f64,
    /// Draw the on-screen page outline
    #[serde(default = "default_draw_chrome")]
    pub draw_chrome: bool,
    #[serde(default = "default_chrome_color")]
    pub chrome_color: Color,
    #[serde(default = "default_background")]
    pub background: Color,
}

fn default_page_width() -> f64 {
    A4_WIDTH_PX
}

fn default_min_page_height() -> f64 {
    A4_HEIGHT_PX
}

fn default_draw_chrome() -> bool {
    true
}

fn default_chrome_color() -> Color {
    Color::rgb(200, 200, 200)
}

fn default_background() -> Color {
    Color::WHITE
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            page_width: default_page_width(),
            min_page_height: default_min_page_height(),
            draw_chrome: default_draw_chrome(),
            chrome_color: default_chrome_color(),
            background: default_background(),
        }
    }
}

impl LayoutConfig {
    pub fn with_chrome(mut self, draw_chrome: bool) -> Self {
        self.draw_chrome = draw_chrome;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }
}

/// Lay out a visual tree as a single page
pub fn layout_page(tree: &VisualTree, config: &LayoutConfig) -> PageRender {
    PageLayouter::new(tree, config).run()
}

/// Inline text placement: a wrapped run of one style, aligned in a box
struct TextBox {
    x: f64,
    width: f64,
    align: Align,
    line_height: f64,
}

struct PageLayouter<'a> {
    tree: &'a VisualTree,
    config: &'a LayoutConfig,
    style: &'a StyleDescriptor,
    items: Vec<RenderItem>,
    /// Content column
    left: f64,
    width: f64,
    /// Top of the next block
    y: f64,
}

impl<'a> PageLayouter<'a> {
    fn new(tree: &'a VisualTree, config: &'a LayoutConfig) -> Self {
        let style = &tree.style;
        let (inset_x, inset_y) = border_insets(style);
        let padding = style.container.padding_px;
        let left = inset_x + padding;
        Self {
            tree,
            config,
            style,
            items: Vec::new(),
            left,
            width: (config.page_width - 2.0 * left).max(0.0),
            y: inset_y + padding,
        }
    }

    fn run(mut self) -> PageRender {
        self.header();
        self.title();
        self.content();
        self.signature();

        let (_, inset_y) = border_insets(self.style);
        let bottom = self.y + self.style.container.padding_px + inset_y;
        let height = bottom.max(self.config.min_page_height);
        let width = self.config.page_width;

        // background and frame go beneath everything laid out so far
        let mut items = vec![RenderItem::Rectangle {
            bounds: Rect::new(0.0, 0.0, width, height),
            fill: Some(self.config.background),
            stroke: self.config.draw_chrome.then_some(self.config.chrome_color),
            stroke_width: if self.config.draw_chrome { 1.0 } else { 0.0 },
        }];
        items.extend(frame_items(self.style, width, height));
        items.append(&mut self.items);

        PageRender { width, height, items }
    }

    fn text_style(&self, size: f64, weight: FontWeight) -> TextStyle {
        TextStyle::new(size, weight.css_value())
            .with_sans(self.style.container.font_class == FontClass::Sans)
    }

    fn glyph(&self, text: &str, x: f64, baseline: f64, style: &TextStyle, color: Color) -> RenderItem {
        RenderItem::GlyphRun(GlyphRun {
            text: text.to_string(),
            font_family: self.style.font_family.to_string(),
            font_size: style.font_size,
            weight: style.weight,
            italic: style.italic,
            color,
            letter_spacing: style.letter_spacing,
            anchor: TextAnchor::Start,
            dominant_baseline: DominantBaseline::Alphabetic,
            x,
            y: baseline,
        })
    }

    /// Wrap and place single-style text. Returns (height, widest line).
    fn text_lines(
        &mut self,
        text: &str,
        style: &TextStyle,
        color: Color,
        area: &TextBox,
        top: f64,
    ) -> (f64, f64) {
        let lines = wrap_text(text, style, area.width);
        let mut widest: f64 = 0.0;
        for (i, line) in lines.iter().enumerate() {
            let x = aligned_x(area.x, area.width, line.width, area.align);
            let line_top = top + i as f64 * area.line_height;
            let item = self.glyph(
                &line.text(),
                x,
                baseline(line_top, area.line_height, style.font_size),
                style,
                color,
            );
            self.items.push(item);
            widest = widest.max(line.width);
        }
        (lines.len().max(1) as f64 * area.line_height, widest.min(area.width))
    }

    // ----- header -----

    fn header(&mut self) {
        let top = self.y;
        let bottom = match self.style.header.layout {
            HeaderLayout::SideBySide => {
                let company_w = self.width * self.style.company_width;
                let motto_w = self.width * self.style.motto_width;
                let company_bottom = self.company_block(self.left, company_w, top);
                let motto_bottom = self.motto_block(self.left + self.width - motto_w, motto_w, top);
                company_bottom.max(motto_bottom)
            }
            HeaderLayout::Stacked { gap_px } => {
                let company_bottom = self.company_block(self.left, self.width, top);
                self.motto_block(self.left, self.width, company_bottom + gap_px)
            }
        };

        self.y = bottom;
        if let Some(rule) = self.style.header.rule {
            self.y += self.style.header.rule_padding_px;
            let items = rule_items(self.left, self.left + self.width, self.y, &rule);
            self.items.extend(items);
            self.y += rule.width;
        }
        self.y += self.style.header.margin_bottom_px;
    }

    /// Style of a header line: the block's case, tracking and color applied
    /// over the line's own emphasis
    fn header_line_style(&self, block: &BlockStyle, size: f64, weight: FontWeight) -> TextStyle {
        self.text_style(size, weight)
            .with_letter_spacing(block.tracking.em() * size)
    }

    fn emphasis_line(
        &mut self,
        text: &str,
        block: &BlockStyle,
        emphasis: TextEmphasis,
        x: f64,
        width: f64,
        top: f64,
    ) -> (f64, f64) {
        let size = pt_to_px(emphasis.size_pt);
        let style = self.header_line_style(block, size, emphasis.weight);
        let area = TextBox {
            x,
            width,
            align: block.align,
            line_height: size * self.style.container.line_height.factor(),
        };
        let text = block_case(text, block);
        self.text_lines(&text, &style, block.color.into(), &area, top)
    }

    /// Italic small print ("Số: ..." and place/date); takes the block weight
    fn small_print(&mut self, text: &str, block: &BlockStyle, x: f64, width: f64, top: f64) -> f64 {
        let size = pt_to_px(NOTE_SIZE_PT);
        let weight = block.weight.unwrap_or(FontWeight::Normal);
        let style = self.header_line_style(block, size, weight).italic();
        let area = TextBox {
            x,
            width,
            align: block.align,
            line_height: size * self.style.container.line_height.factor(),
        };
        let text = block_case(text, block);
        self.text_lines(&text, &style, block.color.into(), &area, top).0
    }

    /// Rule under a header line, as wide as the text above it
    fn underline(&mut self, x: f64, width: f64, align: Align, length: f64, y: f64, stroke: f64) {
        let start = aligned_x(x, width, length, align);
        self.items.push(RenderItem::horizontal_line(
            start,
            y + stroke / 2.0,
            length,
            Color::BLACK,
            stroke,
        ));
    }

    fn company_block(&mut self, x: f64, width: f64, top: f64) -> f64 {
        let block = self.style.company;
        let tree = self.tree;
        let header = &tree.header.company;
        let mut y = top;

        let (h, _) = self.emphasis_line(&header.name, &block, self.style.header_title, x, width, y);
        y += h;

        let (h, text_w) =
            self.emphasis_line(&header.department, &block, self.style.header_title, x, width, y);
        y += h + UNDERLINE_PADDING;
        self.underline(x, width, block.align, text_w, y, 1.0);
        y += 1.0 + UNDERLINE_MARGIN;

        y += self.small_print(&header.number_line, &block, x, width, y);
        y
    }

    fn motto_block(&mut self, x: f64, width: f64, top: f64) -> f64 {
        let block = self.style.motto;
        let tree = self.tree;
        let motto = &tree.header.motto;
        let mut y = top;

        let (h, _) = self.emphasis_line(motto.country, &block, self.style.header_title, x, width, y);
        y += h;

        let (h, text_w) =
            self.emphasis_line(motto.motto, &block, self.style.header_subtitle, x, width, y);
        y += h + UNDERLINE_PADDING;
        let stroke = self.style.subtitle_underline_px;
        self.underline(x, width, block.align, text_w, y, stroke);
        y += stroke + UNDERLINE_MARGIN;

        y += UNDERLINE_MARGIN;
        y += self.small_print(&motto.place_and_date, &block, x, width, y);
        y
    }

    // ----- title -----

    fn title(&mut self) {
        let title = self.style.title;
        self.y += TITLE_MARGIN_TOP;

        let style = self
            .text_style(title.size_px, title.weight)
            .with_letter_spacing(title.tracking.em() * title.size_px);
        let area = TextBox {
            x: self.left,
            width: self.width,
            align: title.align,
            line_height: title_line_height(title.size_px),
        };
        let text = self.tree.title.text.to_uppercase();
        let (h, _) = self.text_lines(&text, &style, Color::BLACK, &area, self.y);
        self.y += h + TITLE_MARGIN_BOTTOM;

        if let Some(salutation) = self.tree.title.salutation {
            let style = self.text_style(self.style.base_size_px(), FontWeight::Normal).italic();
            let area = TextBox {
                line_height: self.style.line_advance_px(),
                ..area
            };
            let (h, _) = self.text_lines(salutation, &style, Color::BLACK, &area, self.y);
            self.y += h;
        }
        self.y += SALUTATION_MARGIN_BOTTOM;
    }

    // ----- content -----

    fn content(&mut self) {
        let x = self.left + CONTENT_INSET;
        let width = (self.width - 2.0 * CONTENT_INSET).max(0.0);

        let tree = self.tree;
        for (i, node) in tree.content.nodes().iter().enumerate() {
            if i > 0 {
                self.y += CONTENT_GAP;
            }
            let h = match node {
                ContentNode::Paragraph { lead, emphasized } => {
                    self.paragraph(lead, emphasized, x, width)
                }
                ContentNode::Row(row) => self.row(row, x, width),
                ContentNode::SectionHeading { text } => {
                    let style = self.text_style(self.style.base_size_px(), FontWeight::Bold);
                    let area = self.body_box(x, width);
                    self.text_lines(text, &style, Color::BLACK, &area, self.y).0
                }
                ContentNode::BoxedText { text } => self.boxed_text(text, x, width),
                ContentNode::Note { text } => {
                    let size = pt_to_px(NOTE_SIZE_PT);
                    let style = self.text_style(size, FontWeight::Normal).italic();
                    let area = TextBox {
                        line_height: size * self.style.container.line_height.factor(),
                        ..self.body_box(x, width)
                    };
                    self.text_lines(text, &style, Color::BLACK, &area, self.y).0
                }
            };
            self.y += h;
        }
    }

    fn body_box(&self, x: f64, width: f64) -> TextBox {
        TextBox {
            x,
            width,
            align: Align::Left,
            line_height: self.style.line_advance_px(),
        }
    }

    fn row(&mut self, row: &Row, x: f64, width: f64) -> f64 {
        let base = self.style.base_size_px();
        let line_height = self.style.line_advance_px();

        let label_style = self.text_style(base, FontWeight::Normal);
        let label_w = estimate_width(row.label, &label_style)
            .max(ROW_LABEL_MIN)
            .min(width * 0.5);
        let (label_h, _) =
            self.text_lines(row.label, &label_style, Color::BLACK, &self.body_box(x, label_w), self.y);

        let value_x = x + label_w;
        let value_w = (width - label_w).max(0.0);
        let (value, value_style) = match row.emphasis {
            ValueEmphasis::Plain => (row.value.clone(), self.text_style(base, FontWeight::Normal)),
            ValueEmphasis::Bold => (row.value.clone(), self.text_style(base, FontWeight::Bold)),
            ValueEmphasis::BoldUpper => {
                (row.value.to_uppercase(), self.text_style(base, FontWeight::Bold))
            }
            ValueEmphasis::Italic => {
                (row.value.clone(), self.text_style(base, FontWeight::Normal).italic())
            }
        };
        let text_box = self.body_box(value_x + ROW_VALUE_INSET, (value_w - ROW_VALUE_INSET).max(0.0));
        let (value_h, _) = self.text_lines(&value, &value_style, Color::BLACK, &text_box, self.y);

        // dotted rule under the value cell
        self.items.push(RenderItem::Line {
            x1: value_x,
            y1: self.y + value_h + 0.5,
            x2: value_x + value_w,
            y2: self.y + value_h + 0.5,
            color: Color::from(Rgb::GRAY_400),
            width: 1.0,
            style: LineStyle::Dotted,
        });

        label_h.max(value_h + 1.0).max(line_height)
    }

    fn paragraph(&mut self, lead: &str, emphasized: &str, x: f64, width: f64) -> f64 {
        let base = self.style.base_size_px();
        let line_height = self.style.line_advance_px();
        let emphasized = emphasized.to_uppercase();
        let spans = [
            Span {
                text: lead,
                style: self.text_style(base, FontWeight::Normal),
            },
            Span {
                text: &emphasized,
                style: self.text_style(base, FontWeight::Bold),
            },
        ];
        let lines = wrap_spans(&spans, (width - PARAGRAPH_INDENT).max(0.0), width);
        self.place_spans(&lines, &spans, x, line_height);
        lines.len().max(1) as f64 * line_height
    }

    fn place_spans(&mut self, lines: &[WrappedLine], spans: &[Span<'_>], x: f64, line_height: f64) {
        for (i, line) in lines.iter().enumerate() {
            let indent = if i == 0 { PARAGRAPH_INDENT } else { 0.0 };
            let line_top = self.y + i as f64 * line_height;
            for segment in &line.segments {
                let style = spans[segment.span].style;
                let item = self.glyph(
                    &segment.text,
                    x + indent + segment.x_offset,
                    baseline(line_top, line_height, style.font_size),
                    &style,
                    Color::BLACK,
                );
                self.items.push(item);
            }
        }
    }

    fn boxed_text(&mut self, text: &str, x: f64, width: f64) -> f64 {
        let style = self.text_style(self.style.base_size_px(), FontWeight::Normal);
        let inner = BOX_PADDING + 1.0;
        let area = self.body_box(x + inner, (width - 2.0 * inner).max(0.0));

        // the frame is sized from the wrapped text, so place the text first
        let text_start = self.items.len();
        let (text_h, _) = self.text_lines(text, &style, Color::BLACK, &area, self.y + inner);
        let height = (text_h + 2.0 * inner).max(BOX_MIN_HEIGHT);
        self.items.insert(
            text_start,
            RenderItem::Rectangle {
                bounds: Rect::new(x + 0.5, self.y + 0.5, width - 1.0, height - 1.0),
                fill: None,
                stroke: Some(Color::BLACK),
                stroke_width: 1.0,
            },
        );
        height
    }

    // ----- signature -----

    fn signature(&mut self) {
        self.y += SIGNATURE_MARGIN_TOP;
        let x = self.left + CONTENT_INSET;
        let width = (self.width - 2.0 * CONTENT_INSET).max(0.0);
        let top = self.y;
        let tree = self.tree;

        let bottom = match &tree.signature.layout {
            SignatureLayout::ThreeColumn {
                traveler,
                department,
                signer,
            } => {
                let col = width / 3.0;
                let a = self.plain_column(traveler, x, col, top);
                let b = self.plain_column(department, x + col, col, top);
                let c = self.signer_column(signer, x + 2.0 * col, col, top);
                a.max(b).max(c)
            }
            SignatureLayout::TwoColumn { signer } => {
                let col = width / 2.0;
                self.signer_column(signer, x + col, col, top)
            }
        };
        self.y = bottom;
    }

    fn centered_bold(&mut self, text: &str, x: f64, width: f64, top: f64) -> f64 {
        let style = self.text_style(self.style.base_size_px(), FontWeight::Bold);
        let area = TextBox {
            align: Align::Center,
            ..self.body_box(x, width)
        };
        self.text_lines(text, &style, Color::BLACK, &area, top).0
    }

    fn plain_column(&mut self, column: &PlainColumn, x: f64, width: f64, top: f64) -> f64 {
        let mut y = top;
        y += self.centered_bold(&column.heading.to_uppercase(), x, width, y);
        y += PLAIN_HEADING_GAP;
        y += self.centered_bold(&column.body, x, width, y);
        y
    }

    fn signer_column(&mut self, column: &SignerColumn, x: f64, width: f64, top: f64) -> f64 {
        let mut y = top;
        y += self.centered_bold(&column.title, x, width, y);
        y += SIGNER_TITLE_GAP;

        let area = Rect::new(x, y, width, signature::OVERLAY_AREA_HEIGHT);
        for overlay in &column.overlays {
            let item = match overlay {
                Overlay::Seal(graphic) => seal_group(graphic, &area),
                Overlay::Signature(glyph) => signature_group(glyph, &area),
            };
            self.items.push(item);
        }

        y = area.bottom() + SIGNER_NAME_GAP;
        y += self.centered_bold(&column.name, x, width, y);
        y
    }
}

/// The company stamp, drawn in its own 170×170 space
fn seal_group(graphic: &SealGraphic, area: &Rect) -> RenderItem {
    let red = Color::SEAL_RED;
    let mut items: Vec<RenderItem> = seal::RINGS
        .iter()
        .map(|&(r, stroke_width)| RenderItem::Circle {
            cx: seal::CENTER,
            cy: seal::CENTER,
            r,
            color: red,
            stroke_width,
        })
        .collect();

    for &(cx, cy) in &seal::STARS {
        items.push(RenderItem::GlyphRun(GlyphRun {
            text: seal::STAR.to_string(),
            font_family: seal::ARC_FONT.to_string(),
            font_size: seal::STAR_SIZE,
            weight: 400,
            italic: false,
            color: red,
            letter_spacing: 0.0,
            anchor: TextAnchor::Middle,
            dominant_baseline: DominantBaseline::Middle,
            x: cx,
            y: cy,
        }));
    }

    for (path, text) in [
        (seal::TOP_ARC, &graphic.top_text),
        (seal::BOTTOM_ARC, &graphic.bottom_text),
    ] {
        items.push(RenderItem::ArcText(ArcText {
            path,
            text: text.clone(),
            font_family: seal::ARC_FONT.to_string(),
            font_size: seal::ARC_FONT_SIZE,
            weight: 700,
            letter_spacing: seal::ARC_LETTER_SPACING,
            color: red,
            dominant_baseline: DominantBaseline::Middle,
        }));
    }

    let (box_x, box_y, box_w, box_h) = seal::NAME_BOX;
    let style = TextStyle::new(seal::NAME_FONT_SIZE, 700);
    let line_height = seal::NAME_FONT_SIZE * seal::NAME_LINE_HEIGHT;
    let lines = wrap_text(&graphic.center_text, &style, box_w - 8.0);
    let block_top = box_y + (box_h - lines.len() as f64 * line_height) / 2.0;
    for (i, line) in lines.iter().enumerate() {
        let line_top = block_top + i as f64 * line_height;
        items.push(RenderItem::GlyphRun(GlyphRun {
            text: line.text(),
            font_family: seal::NAME_FONT.to_string(),
            font_size: seal::NAME_FONT_SIZE,
            weight: 700,
            italic: false,
            color: red,
            letter_spacing: 0.0,
            anchor: TextAnchor::Middle,
            dominant_baseline: DominantBaseline::Alphabetic,
            x: box_x + box_w / 2.0,
            y: baseline(line_top, line_height, seal::NAME_FONT_SIZE),
        }));
    }

    let left = area.x + area.width / 2.0 + seal::OFFSET_FROM_CENTER;
    let top = area.y + seal::OFFSET_TOP;
    RenderItem::Group {
        transform: Transform::translate(left, top).with_rotation(
            seal::ROTATION_DEG,
            seal::CENTER,
            seal::CENTER,
        ),
        opacity: seal::OPACITY,
        items,
    }
}

/// The handwritten signature, rotated about its own center
fn signature_group(glyph: &SignatureGlyph, area: &Rect) -> RenderItem {
    let cx = area.x + area.width / 2.0;
    let box_bottom = area.bottom() - glyph.bottom_offset_px;
    let box_top = box_bottom - SIGNATURE_LINE_BOX;
    let cy = box_top + SIGNATURE_LINE_BOX / 2.0;

    RenderItem::Group {
        transform: Transform::default().with_rotation(glyph.rotation_deg, cx, cy),
        opacity: 1.0,
        items: vec![RenderItem::GlyphRun(GlyphRun {
            text: glyph.text.clone(),
            font_family: glyph.font_family.to_string(),
            font_size: glyph.font_size_px,
            weight: 400,
            italic: false,
            color: glyph.color,
            letter_spacing: 0.0,
            anchor: TextAnchor::Middle,
            dominant_baseline: DominantBaseline::Alphabetic,
            x: cx,
            y: baseline(box_top, SIGNATURE_LINE_BOX, glyph.font_size_px),
        })],
    }
}

/// Border thickness on the (horizontal, vertical) page edges
fn border_insets(style: &StyleDescriptor) -> (f64, f64) {
    match style.container.border {
        Some(border) => match border.sides {
            BorderSides::All => (border.rule.width, border.rule.width),
            BorderSides::TopBottom => (0.0, border.rule.width),
        },
        None => (0.0, 0.0),
    }
}

/// Page frame drawn just inside the page edges
fn frame_items(style: &StyleDescriptor, width: f64, height: f64) -> Vec<RenderItem> {
    let Some(border) = style.container.border else {
        return Vec::new();
    };
    let rule = border.rule;
    let color = Color::from(rule.color);

    match border.sides {
        BorderSides::All => {
            let strokes: Vec<(f64, f64)> = match rule.line {
                RuleLine::Solid => vec![(rule.width / 2.0, rule.width)],
                RuleLine::Double => {
                    let third = rule.width / 3.0;
                    vec![(third / 2.0, third), (rule.width - third / 2.0, third)]
                }
            };
            strokes
                .into_iter()
                .map(|(inset, stroke_width)| RenderItem::Rectangle {
                    bounds: Rect::new(inset, inset, width - 2.0 * inset, height - 2.0 * inset),
                    fill: None,
                    stroke: Some(color),
                    stroke_width,
                })
                .collect()
        }
        BorderSides::TopBottom => {
            let mut items = rule_items(0.0, width, 0.0, &rule);
            items.extend(rule_items(0.0, width, height - rule.width, &rule));
            items
        }
    }
}

/// A horizontal rule occupying `rule.width` px starting at `top`
fn rule_items(x1: f64, x2: f64, top: f64, rule: &Rule) -> Vec<RenderItem> {
    let color = Color::from(rule.color);
    let line = |y: f64, width: f64| RenderItem::horizontal_line(x1, y, x2 - x1, color, width);
    match rule.line {
        RuleLine::Solid => vec![line(top + rule.width / 2.0, rule.width)],
        RuleLine::Double => {
            let third = rule.width / 3.0;
            vec![
                line(top + third / 2.0, third),
                line(top + rule.width - third / 2.0, third),
            ]
        }
    }
}

fn block_case(text: &str, block: &BlockStyle) -> String {
    if block.uppercase {
        text.to_uppercase()
    } else {
        text.to_string()
    }
}

fn aligned_x(x: f64, width: f64, content: f64, align: Align) -> f64 {
    match align {
        Align::Left => x,
        Align::Center => x + (width - content) / 2.0,
        Align::Right => x + width - content,
    }
}

/// Baseline of text vertically centered in a line box
fn baseline(line_top: f64, line_height: f64, font_size: f64) -> f64 {
    line_top + (line_height - font_size) / 2.0 + font_size * 0.8
}

fn title_line_height(size: f64) -> f64 {
    if size <= 20.0 {
        28.0
    } else if size <= 24.0 {
        32.0
    } else {
        36.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::render_record;
    use chrono::NaiveDate;
    use doc_model::{DocumentRecord, DocumentType};

    fn record() -> DocumentRecord {
        DocumentRecord::default().with_date(NaiveDate::from_ymd_opt(2023, 10, 18).unwrap())
    }

    fn page(record: &DocumentRecord) -> PageRender {
        layout_page(&render_record(record), &LayoutConfig::default())
    }

    fn groups(page: &PageRender) -> Vec<&RenderItem> {
        page.items
            .iter()
            .filter(|i| matches!(i, RenderItem::Group { .. }))
            .collect()
    }

    fn run<'p>(page: &'p PageRender, prefix: &str) -> &'p GlyphRun {
        page.glyph_runs()
            .into_iter()
            .find(|r| r.text.starts_with(prefix))
            .unwrap_or_else(|| panic!("no run starting with {prefix}"))
    }

    /// (x1, x2, stroke, color) of the rule drawn just under a single-line run
    fn underline_of(page: &PageRender, run: &GlyphRun) -> (f64, f64, f64, Color) {
        page.items
            .iter()
            .find_map(|item| match *item {
                RenderItem::Line { x1, y1, x2, color, width, .. }
                    if (x1 - run.x).abs() < 1e-6 && y1 > run.y && y1 < run.y + 20.0 =>
                {
                    Some((x1, x2, width, color))
                }
                _ => None,
            })
            .unwrap_or_else(|| panic!("no underline under {}", run.text))
    }

    fn measured_width(run: &GlyphRun, sans: bool) -> f64 {
        let style = TextStyle::new(run.font_size, run.weight)
            .with_letter_spacing(run.letter_spacing)
            .with_sans(sans);
        estimate_width(&run.text, &style)
    }

    #[test]
    fn test_motto_underline_spans_motto() {
        for (format_id, stroke) in [(1, 1.0), (5, 2.0)] {
            let page = page(&record().with_format(format_id));
            let motto = run(&page, "Độc lập");
            let (x1, x2, width, color) = underline_of(&page, motto);
            assert!((x2 - x1 - measured_width(motto, false)).abs() < 1e-6, "format {format_id}");
            assert_eq!(width, stroke, "format {format_id}");
            assert_eq!(color, Color::BLACK);
        }
    }

    #[test]
    fn test_header_underlines_are_black() {
        let page = page(&record().with_format(16));
        let title_y = run(&page, "GIẤY ĐI ĐƯỜNG").y;
        let colors: Vec<Color> = page
            .items
            .iter()
            .filter_map(|item| match *item {
                RenderItem::Line { y1, color, .. } if y1 < title_y => Some(color),
                _ => None,
            })
            .collect();
        assert_eq!(colors, vec![Color::BLACK, Color::BLACK]);
    }

    #[test]
    fn test_left_and_right_header_blocks_touch_column_edges() {
        let page = page(&record().with_format(3));
        let left = 48.0;
        assert_eq!(run(&page, "CÔNG TY").x, left);
        let motto = run(&page, "Độc lập");
        let (_, x2, _, _) = underline_of(&page, motto);
        assert!((x2 - (A4_WIDTH_PX - left)).abs() < 1e-6);
        assert!((motto.x + measured_width(motto, true) - (A4_WIDTH_PX - left)).abs() < 1e-6);
    }

    #[test]
    fn test_stacked_header_puts_motto_below_company() {
        let page = page(&record().with_format(4));
        let number = run(&page, "Số:");
        let country = run(&page, "CỘNG HÒA");
        assert!(country.y > number.y + 16.0);
    }

    #[test]
    fn test_side_by_side_blocks_share_top() {
        let page = page(&record());
        assert_eq!(run(&page, "CÔNG TY").y, run(&page, "CỘNG HÒA").y);
    }

    #[test]
    fn test_seal_stars_are_centered_on_their_points() {
        let page = page(&record());
        let stars: Vec<(f64, f64, DominantBaseline)> = page
            .glyph_runs()
            .into_iter()
            .filter(|r| r.text == signature::seal::STAR)
            .map(|r| (r.x, r.y, r.dominant_baseline))
            .collect();
        let expected: Vec<_> = signature::seal::STARS
            .iter()
            .map(|&(cx, cy)| (cx, cy, DominantBaseline::Middle))
            .collect();
        assert_eq!(stars, expected);
    }

    #[test]
    fn test_page_is_at_least_a4() {
        let page = page(&record());
        assert_eq!(page.width, A4_WIDTH_PX);
        assert!(page.height >= A4_HEIGHT_PX);
    }

    #[test]
    fn test_background_comes_first() {
        let page = page(&record());
        match &page.items[0] {
            RenderItem::Rectangle { fill, stroke, .. } => {
                assert_eq!(*fill, Some(Color::WHITE));
                assert!(stroke.is_some());
            }
            other => panic!("unexpected first item {other:?}"),
        }
    }

    #[test]
    fn test_export_layout_has_no_chrome() {
        let tree = render_record(&record());
        let page = layout_page(&tree, &LayoutConfig::default().with_chrome(false));
        match &page.items[0] {
            RenderItem::Rectangle { stroke, .. } => assert!(stroke.is_none()),
            other => panic!("unexpected first item {other:?}"),
        }
    }

    #[test]
    fn test_fixed_lines_are_present() {
        let page = page(&record());
        assert!(page.contains_text("CỘNG HÒA"));
        assert!(page.contains_text("Số: 123/GCT-CNS"));
        assert!(page.contains_text("GIẤY ĐI ĐƯỜNG"));
    }

    #[test]
    fn test_seal_texts_follow_arcs() {
        let page = page(&record());
        let mut arc_texts = Vec::new();
        for item in &page.items {
            item.walk(&mut |n| {
                if let RenderItem::ArcText(t) = n {
                    arc_texts.push(t.text.clone());
                }
            });
        }
        assert_eq!(arc_texts, vec!["M.S.D.N: 0101234567", "T. HÀ NỘI"]);
    }

    #[test]
    fn test_seal_is_painted_before_signature() {
        let page = page(&record());
        let groups = groups(&page);
        assert_eq!(groups.len(), 2);
        match (groups[0], groups[1]) {
            (
                RenderItem::Group { opacity: seal_opacity, transform: seal_t, .. },
                RenderItem::Group { transform: sig_t, .. },
            ) => {
                assert_eq!(*seal_opacity, seal::OPACITY);
                assert_eq!(seal_t.rotate_deg, -15.0);
                assert_eq!(sig_t.rotate_deg, -5.0);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn test_hidden_overlays_are_not_drawn() {
        let mut r = record();
        r.show_seal = false;
        r.show_signature = false;
        assert!(groups(&page(&r)).is_empty());
    }

    #[test]
    fn test_every_format_lays_out() {
        for id in 0..=26 {
            for doc_type in DocumentType::ALL {
                let page = page(&record().with_type(doc_type).with_format(id));
                assert!(page.height >= A4_HEIGHT_PX, "format {id} {doc_type}");
                assert!(page.glyph_runs().iter().all(|r| r.x.is_finite() && r.y.is_finite()));
            }
        }
    }

    #[test]
    fn test_bordered_format_draws_frame() {
        let formats_with_border: Vec<u32> = (1..=25)
            .filter(|id| formats::resolve(*id).container.border.is_some())
            .collect();
        assert!(!formats_with_border.is_empty());
        let id = formats_with_border[0];
        let page = page(&record().with_format(id));
        let frames = page
            .items
            .iter()
            .skip(1)
            .take_while(|i| !matches!(i, RenderItem::GlyphRun(_)))
            .count();
        assert!(frames >= 1);
    }

    #[test]
    fn test_long_content_grows_page() {
        let mut r = record().with_type(DocumentType::HandoverReport);
        r.reason = "nội dung bàn giao ".repeat(400);
        let page = page(&r);
        assert!(page.height > A4_HEIGHT_PX);
    }

    #[test]
    fn test_layout_is_deterministic() {
        let tree = render_record(&record().with_format(7));
        let config = LayoutConfig::default();
        assert_eq!(layout_page(&tree, &config), layout_page(&tree, &config));
    }

    #[test]
    fn test_config_defaults_from_json() {
        let config: LayoutConfig = serde_json::from_str(r#"{"drawChrome": false}"#).unwrap();
        assert!(!config.draw_chrome);
        assert_eq!(config.page_width, A4_WIDTH_PX);
    }
}
