//! Text measurement and line wrapping
//!
//! Widths are estimated from per-grapheme advance factors rather than real
//! font metrics. That keeps layout deterministic and independent of which
//! fonts happen to be installed; the rasterizer still draws real glyphs.

use unicode_segmentation::UnicodeSegmentation;

/// Everything that affects a run's width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    pub font_size: f64,
    pub weight: u16,
    pub italic: bool,
    pub letter_spacing: f64,
    pub sans: bool,
}

impl TextStyle {
    pub fn new(font_size: f64, weight: u16) -> Self {
        Self {
            font_size,
            weight,
            italic: false,
            letter_spacing: 0.0,
            sans: false,
        }
    }

    pub fn italic(mut self) -> Self {
        self.italic = true;
        self
    }

    pub fn with_letter_spacing(mut self, spacing: f64) -> Self {
        self.letter_spacing = spacing;
        self
    }

    pub fn with_sans(mut self, sans: bool) -> Self {
        self.sans = sans;
        self
    }
}

/// Advance of a grapheme, in em
fn advance_em(grapheme: &str) -> f64 {
    // combining marks ride on the base character
    let base = grapheme.chars().next().unwrap_or(' ');
    match base {
        ' ' => 0.25,
        'i' | 'l' | 'j' | 'I' | '.' | ',' | ':' | ';' | '!' | '\'' | '|' => 0.28,
        'f' | 't' | 'r' | '(' | ')' | '/' | '-' => 0.35,
        'm' | 'w' | 'M' | 'W' => 0.8,
        '★' => 1.0,
        c if c.is_uppercase() => 0.68,
        _ => 0.5,
    }
}

/// Estimated rendered width of `text` in px
pub fn estimate_width(text: &str, style: &TextStyle) -> f64 {
    let weight_factor = match style.weight {
        0..=499 => 1.0,
        500..=649 => 1.03,
        _ => 1.07,
    };
    let class_factor = if style.sans { 1.05 } else { 1.0 };
    text.graphemes(true)
        .map(|g| advance_em(g) * style.font_size * weight_factor * class_factor + style.letter_spacing)
        .sum()
}

/// A piece of styled text to be wrapped
#[derive(Debug, Clone, Copy)]
pub struct Span<'a> {
    pub text: &'a str,
    pub style: TextStyle,
}

/// A run of consecutive words from one span on one line
#[derive(Debug, Clone, PartialEq)]
pub struct LineSegment {
    pub span: usize,
    pub text: String,
    /// Offset from the line's start
    pub x_offset: f64,
    pub width: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WrappedLine {
    pub segments: Vec<LineSegment>,
    pub width: f64,
}

impl WrappedLine {
    fn push_word(&mut self, span: usize, word: &str, word_width: f64, gap: f64) {
        let gap = if self.segments.is_empty() { 0.0 } else { gap };
        match self.segments.last_mut() {
            Some(seg) if seg.span == span => {
                seg.text.push(' ');
                seg.text.push_str(word);
                seg.width += gap + word_width;
            }
            _ => self.segments.push(LineSegment {
                span,
                text: word.to_string(),
                x_offset: self.width + gap,
                width: word_width,
            }),
        }
        self.width += gap + word_width;
    }

    /// Plain text of the whole line
    pub fn text(&self) -> String {
        self.segments
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
    }
}

/// Greedy word wrap over styled spans.
///
/// Whitespace collapses as in HTML. Words wider than a line are broken
/// between graphemes. The first line may be narrower (text indent).
pub fn wrap_spans(spans: &[Span<'_>], first_width: f64, width: f64) -> Vec<WrappedLine> {
    let mut lines: Vec<WrappedLine> = Vec::new();
    let mut current = WrappedLine::default();

    for (index, span) in spans.iter().enumerate() {
        let gap = estimate_width(" ", &span.style);
        for word in span.text.split_whitespace() {
            let max = if lines.is_empty() { first_width } else { width };
            let word_width = estimate_width(word, &span.style);

            if !current.segments.is_empty() && current.width + gap + word_width > max {
                lines.push(std::mem::take(&mut current));
            }

            let max = if lines.is_empty() { first_width } else { width };
            if current.segments.is_empty() && word_width > max {
                let mut pieces = break_word(word, &span.style, max, width);
                let last = pieces.pop();
                for (piece, piece_width) in pieces {
                    let mut line = WrappedLine::default();
                    line.push_word(index, &piece, piece_width, gap);
                    lines.push(line);
                }
                if let Some((piece, piece_width)) = last {
                    current.push_word(index, &piece, piece_width, gap);
                }
                continue;
            }

            current.push_word(index, word, word_width, gap);
        }
    }

    if !current.segments.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap single-style text
pub fn wrap_text(text: &str, style: &TextStyle, width: f64) -> Vec<WrappedLine> {
    wrap_spans(&[Span { text, style: *style }], width, width)
}

fn break_word(word: &str, style: &TextStyle, first_max: f64, max: f64) -> Vec<(String, f64)> {
    let mut pieces = Vec::new();
    let mut piece = String::new();
    let mut piece_width = 0.0;

    for g in word.graphemes(true) {
        let limit = if pieces.is_empty() { first_max } else { max };
        let w = estimate_width(g, style);
        if !piece.is_empty() && piece_width + w > limit {
            pieces.push((std::mem::take(&mut piece), piece_width));
            piece_width = 0.0;
        }
        piece.push_str(g);
        piece_width += w;
    }
    if !piece.is_empty() {
        pieces.push((piece, piece_width));
    }
    pieces
}
