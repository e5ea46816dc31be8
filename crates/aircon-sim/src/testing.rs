use aircon_engine::coords::{Rect, Vec2};
use aircon_engine::paint::Color;
use aircon_engine::render::{Canvas, TextTexture};
use aircon_engine::text::TextMetrics;

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Rect(Rect, Color),
    Circle(Vec2, f32, Color),
    Text { text: String, x: f32, y: f32, scale: f32, color: Color },
    Texture(Rect),
}

/// Canvas that records calls. With `glyph` set, text measures as a fixed
/// advance and height per character at scale 1.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    pub ops: Vec<Op>,
    pub glyph: Option<Vec2>,
}

impl RecordingCanvas {
    pub fn with_font(advance: f32, height: f32) -> Self {
        Self { ops: Vec::new(), glyph: Some(Vec2::new(advance, height)) }
    }

    pub fn rects(&self) -> Vec<(Rect, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Rect(r, c) => Some((*r, *c)),
                _ => None,
            })
            .collect()
    }

    pub fn circles(&self) -> Vec<(Vec2, f32, Color)> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Circle(p, r, c) => Some((*p, *r, *c)),
                _ => None,
            })
            .collect()
    }

    pub fn count_color(&self, color: Color) -> usize {
        self.ops
            .iter()
            .filter(|op| match op {
                Op::Rect(_, c) | Op::Circle(_, _, c) => *c == color,
                Op::Text { color: c, .. } => *c == color,
                Op::Texture(_) => false,
            })
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.ops.push(Op::Rect(rect, color));
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.ops.push(Op::Circle(center, radius, color));
    }

    fn measure_text(&self, text: &str, scale: f32) -> Option<TextMetrics> {
        let glyph = self.glyph?;
        let n = text.chars().count() as f32;
        Some(TextMetrics {
            width: glyph.x * n * scale,
            height: glyph.y * scale,
            ascent: glyph.y * scale,
        })
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, scale: f32, color: Color) {
        self.ops.push(Op::Text { text: text.to_owned(), x, y, scale, color });
    }

    fn draw_texture(&mut self, _texture: &TextTexture, rect: Rect) {
        self.ops.push(Op::Texture(rect));
    }
}
