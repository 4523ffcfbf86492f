//! Page display list to SVG
//!
//! The rasterizer draws SVG, so a captured page is first written out as a
//! self-contained SVG document with the page size as its viewport.

use render_model::{
    ArcText, Color, DominantBaseline, GlyphRun, LineStyle, PageRender, RenderItem, TextAnchor,
    Transform,
};
use std::fmt::Write as _;

/// Serialize a page as an SVG document
pub fn page_to_svg(page: &PageRender) -> String {
    let mut scene = Scene::default();
    let _ = write!(
        scene.out,
        r#"<svg xmlns="http://www.w3.org/2000/svg" xmlns:xlink="http://www.w3.org/1999/xlink" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = page.width,
        h = page.height
    );
    for item in &page.items {
        scene.item(item);
    }
    scene.out.push_str("</svg>");
    scene.out
}

#[derive(Default)]
struct Scene {
    out: String,
    /// Counter for unique path ids
    next_path: usize,
}

impl Scene {
    fn item(&mut self, item: &RenderItem) {
        match item {
            RenderItem::GlyphRun(run) => self.glyph_run(run),
            RenderItem::Rectangle {
                bounds,
                fill,
                stroke,
                stroke_width,
            } => {
                let _ = write!(
                    self.out,
                    r#"<rect x="{}" y="{}" width="{}" height="{}"{}{}/>"#,
                    bounds.x,
                    bounds.y,
                    bounds.width,
                    bounds.height,
                    paint("fill", *fill),
                    stroke_attrs(*stroke, *stroke_width),
                );
            }
            RenderItem::Line {
                x1,
                y1,
                x2,
                y2,
                color,
                width,
                style,
            } => {
                let dash = match style {
                    LineStyle::Solid => "",
                    LineStyle::Dotted => r#" stroke-dasharray="1 2""#,
                };
                let _ = write!(
                    self.out,
                    r#"<line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}"{}{dash}/>"#,
                    stroke_attrs(Some(*color), *width),
                );
            }
            RenderItem::Circle {
                cx,
                cy,
                r,
                color,
                stroke_width,
            } => {
                let _ = write!(
                    self.out,
                    r#"<circle cx="{cx}" cy="{cy}" r="{r}" fill="none"{}/>"#,
                    stroke_attrs(Some(*color), *stroke_width),
                );
            }
            RenderItem::ArcText(arc) => self.arc_text(arc),
            RenderItem::Group {
                transform,
                opacity,
                items,
            } => {
                let _ = write!(self.out, r#"<g transform="{}""#, transform_attr(transform));
                if *opacity < 1.0 {
                    let _ = write!(self.out, r#" opacity="{}""#, opacity);
                }
                self.out.push('>');
                for child in items {
                    self.item(child);
                }
                self.out.push_str("</g>");
            }
        }
    }

    fn glyph_run(&mut self, run: &GlyphRun) {
        let _ = write!(
            self.out,
            r#"<text x="{}" y="{}"{}{}>{}</text>"#,
            run.x,
            run.y,
            font_attrs(
                &run.font_family,
                run.font_size,
                run.weight,
                run.italic,
                run.letter_spacing,
                run.color,
                run.anchor
            ),
            baseline_attr(run.dominant_baseline),
            escape_xml(&run.text)
        );
    }

    fn arc_text(&mut self, arc: &ArcText) {
        let id = format!("arc{}", self.next_path);
        self.next_path += 1;
        let _ = write!(
            self.out,
            r##"<defs><path id="{id}" d="{}"/></defs><text{}{}><textPath xlink:href="#{id}" startOffset="50%">{}</textPath></text>"##,
            arc.path.to_path_data(),
            font_attrs(
                &arc.font_family,
                arc.font_size,
                arc.weight,
                false,
                arc.letter_spacing,
                arc.color,
                TextAnchor::Middle
            ),
            baseline_attr(arc.dominant_baseline),
            escape_xml(&arc.text)
        );
    }
}

fn font_attrs(
    family: &str,
    size: f64,
    weight: u16,
    italic: bool,
    letter_spacing: f64,
    color: Color,
    anchor: TextAnchor,
) -> String {
    let mut attrs = format!(
        r#" font-family="{}" font-size="{}" font-weight="{}"{}"#,
        escape_xml(family),
        size,
        weight,
        paint("fill", Some(color))
    );
    if italic {
        attrs.push_str(r#" font-style="italic""#);
    }
    if letter_spacing != 0.0 {
        let _ = write!(attrs, r#" letter-spacing="{}""#, letter_spacing);
    }
    match anchor {
        TextAnchor::Start => {}
        TextAnchor::Middle => attrs.push_str(r#" text-anchor="middle""#),
        TextAnchor::End => attrs.push_str(r#" text-anchor="end""#),
    }
    attrs
}

fn baseline_attr(baseline: DominantBaseline) -> &'static str {
    match baseline {
        DominantBaseline::Alphabetic => "",
        DominantBaseline::Middle => r#" dominant-baseline="middle""#,
    }
}

fn paint(attr: &str, color: Option<Color>) -> String {
    match color {
        None => format!(r#" {attr}="none""#),
        Some(c) if c.a == 255 => format!(r#" {attr}="{}""#, c.to_hex()),
        Some(c) => format!(
            r#" {attr}="{}" {attr}-opacity="{}""#,
            c.to_hex(),
            c.a as f64 / 255.0
        ),
    }
}

fn stroke_attrs(color: Option<Color>, width: f64) -> String {
    match color {
        Some(_) if width > 0.0 => format!(r#"{} stroke-width="{}""#, paint("stroke", color), width),
        _ => String::new(),
    }
}

fn transform_attr(t: &Transform) -> String {
    let mut attr = format!("translate({} {})", t.translate_x, t.translate_y);
    if t.rotate_deg != 0.0 {
        let _ = write!(attr, " rotate({} {} {})", t.rotate_deg, t.origin_x, t.origin_y);
    }
    attr
}

/// Escape text for XML content and attribute values
pub fn escape_xml(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}
