use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::shape::{frame_strips, CircleShape, RectShape, DEFAULT_CIRCLE_SEGMENTS};
use crate::text::TextMetrics;

use super::ctx::{RenderCtx, RenderTarget};
use super::shapes::{PrimitiveRenderer, TextRenderer, TextTexture};

/// Drawing surface for one frame, in logical pixels.
///
/// Application drawing code is written against this trait so it can run
/// against a recording implementation in tests. Calls paint in order.
pub trait Canvas {
    fn fill_rect(&mut self, rect: Rect, color: Color);

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color);

    /// Hollow rectangle as four overlapping strips.
    fn stroke_frame(&mut self, rect: Rect, thickness: f32, color: Color) {
        for strip in frame_strips(rect, thickness) {
            self.fill_rect(strip, color);
        }
    }

    /// `None` when no font is available.
    fn measure_text(&self, text: &str, scale: f32) -> Option<TextMetrics>;

    /// Text with the top-left of its box at `(x, y)`.
    fn draw_text(&mut self, text: &str, x: f32, y: f32, scale: f32, color: Color);

    fn draw_texture(&mut self, texture: &TextTexture, rect: Rect);

    fn fill_rect_shape(&mut self, shape: &RectShape) {
        self.fill_rect(shape.rect, shape.color);
    }

    fn fill_circle_shape(&mut self, shape: &CircleShape) {
        self.fill_circle(shape.center, shape.radius, shape.color);
    }
}

/// [`Canvas`] over the GPU renderers for the current frame.
pub struct Painter<'p, 'c, 't> {
    ctx: &'p RenderCtx<'c>,
    target: &'p mut RenderTarget<'t>,
    prims: &'p mut PrimitiveRenderer,
    text: &'p mut TextRenderer,
}

impl<'p, 'c, 't> Painter<'p, 'c, 't> {
    pub fn new(
        ctx: &'p RenderCtx<'c>,
        target: &'p mut RenderTarget<'t>,
        prims: &'p mut PrimitiveRenderer,
        text: &'p mut TextRenderer,
    ) -> Self {
        Self {
            ctx,
            target,
            prims,
            text,
        }
    }
}

impl Canvas for Painter<'_, '_, '_> {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.prims.draw_rect(self.ctx, self.target, rect, color);
    }

    fn fill_circle(&mut self, center: Vec2, radius: f32, color: Color) {
        self.prims
            .draw_circle(self.ctx, self.target, center, radius, color, DEFAULT_CIRCLE_SEGMENTS);
    }

    fn stroke_frame(&mut self, rect: Rect, thickness: f32, color: Color) {
        self.prims.draw_frame(self.ctx, self.target, rect, thickness, color);
    }

    fn measure_text(&self, text: &str, scale: f32) -> Option<TextMetrics> {
        self.text.has_font().then(|| self.text.measure(text, scale))
    }

    fn draw_text(&mut self, text: &str, x: f32, y: f32, scale: f32, color: Color) {
        self.text.draw_text(self.ctx, self.target, text, x, y, scale, color);
    }

    fn draw_texture(&mut self, texture: &TextTexture, rect: Rect) {
        self.text.draw_texture(self.ctx, self.target, texture, rect, Color::WHITE);
    }
}
