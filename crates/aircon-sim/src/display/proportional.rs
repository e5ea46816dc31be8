use aircon_engine::coords::Rect;
use aircon_engine::paint::Color;
use aircon_engine::render::Canvas;

use super::{NumericDisplay, SevenSegmentDisplay, display_value};

/// Font-rendered number scaled to a fraction of the screen, aspect kept.
///
/// Falls back to [`SevenSegmentDisplay`] when the canvas has no font.
#[derive(Debug, Copy, Clone)]
pub struct ProportionalDisplay {
    pub fill: f32,
}

impl ProportionalDisplay {
    pub const fn new() -> Self {
        Self { fill: 0.85 }
    }
}

impl Default for ProportionalDisplay {
    fn default() -> Self {
        Self::new()
    }
}

impl NumericDisplay for ProportionalDisplay {
    fn draw_value(&self, canvas: &mut dyn Canvas, value: f32, rect: Rect, color: Color) {
        let text = display_value(value).to_string();
        let metrics = match canvas.measure_text(&text, 1.0) {
            Some(m) if m.width > 0.0 && m.height > 0.0 => m,
            _ => return SevenSegmentDisplay.draw_value(canvas, value, rect, color),
        };

        let scale = (rect.size.x * self.fill / metrics.width)
            .min(rect.size.y * self.fill / metrics.height);
        let x = rect.origin.x + (rect.size.x - metrics.width * scale) * 0.5;
        let y = rect.origin.y + (rect.size.y - metrics.height * scale) * 0.5;
        canvas.draw_text(&text, x, y, scale, color);
    }
}
