//! Pixel-space shapes and the CPU geometry the primitive renderer uploads.

mod geometry;

pub use geometry::{
    circle_fan, fan_to_triangle_list, frame_strips, DEFAULT_CIRCLE_SEGMENTS, MIN_CIRCLE_SEGMENTS,
};

use crate::coords::{Rect, Vec2};
use crate::paint::Color;

/// Filled axis-aligned rectangle.
///
/// Recomputed every frame from simulation state or layout constants.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct RectShape {
    pub rect: Rect,
    pub color: Color,
}

impl RectShape {
    #[inline]
    pub const fn new(x: f32, y: f32, w: f32, h: f32, color: Color) -> Self {
        Self { rect: Rect::new(x, y, w, h), color }
    }

    #[inline]
    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }
}

/// Filled circle. `radius` is expected to be positive.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct CircleShape {
    pub center: Vec2,
    pub radius: f32,
    pub color: Color,
}

impl CircleShape {
    #[inline]
    pub const fn new(x: f32, y: f32, radius: f32, color: Color) -> Self {
        Self { center: Vec2::new(x, y), radius, color }
    }

    #[inline]
    pub fn with_color(self, color: Color) -> Self {
        Self { color, ..self }
    }

    /// Closed-disc hit test: `dx² + dy² <= r²`.
    #[inline]
    pub fn contains(&self, p: Vec2) -> bool {
        (p - self.center).length_squared() <= self.radius * self.radius
    }
}
