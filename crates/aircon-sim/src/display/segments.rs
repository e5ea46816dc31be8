use aircon_engine::coords::{Rect, Vec2};
use aircon_engine::paint::Color;
use aircon_engine::render::Canvas;

use super::{NumericDisplay, display_value};

pub const DIGIT_WIDTH: f32 = 18.0;
pub const DIGIT_HEIGHT: f32 = 32.0;
pub const SEGMENT_THICKNESS: f32 = 3.0;
const DIGIT_SPACING: f32 = 6.0;

/// Lit segments per digit; bit `i` is segment `A + i` (A top, then
/// clockwise, G middle).
pub const DIGIT_MASKS: [u8; 10] = [0x3F, 0x06, 0x5B, 0x4F, 0x66, 0x6D, 0x7D, 0x07, 0x7F, 0x6F];

/// One cell of a seven-segment readout.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Component {
    Minus,
    Digit(u8),
}

/// Cells for `value`, left to right: an optional minus, an optional tens
/// digit and the ones digit.
pub fn plan_components(value: f32) -> Vec<Component> {
    let v = display_value(value);
    let mag = v.unsigned_abs() as u8;

    let mut out = Vec::with_capacity(3);
    if v < 0 {
        out.push(Component::Minus);
    }
    if mag >= 10 {
        out.push(Component::Digit(mag / 10));
    }
    out.push(Component::Digit(mag % 10));
    out
}

/// Top-left corner of each cell with the block centered in `rect`.
pub fn layout_components(components: &[Component], rect: Rect) -> Vec<(Component, Vec2)> {
    let n = components.len() as f32;
    let total = n * DIGIT_WIDTH + (n - 1.0).max(0.0) * DIGIT_SPACING;
    let center = rect.center();
    let y = center.y - DIGIT_HEIGHT * 0.5;
    let mut x = center.x - total * 0.5;

    components
        .iter()
        .map(|&c| {
            let at = Vec2::new(x, y);
            x += DIGIT_WIDTH + DIGIT_SPACING;
            (c, at)
        })
        .collect()
}

/// Rectangles of the lit segments of one cell at `origin`.
pub fn segment_rects(component: Component, origin: Vec2) -> Vec<Rect> {
    const W: f32 = DIGIT_WIDTH;
    const H: f32 = DIGIT_HEIGHT;
    const T: f32 = SEGMENT_THICKNESS;
    const HALF: f32 = H * 0.5;

    let (x, y) = (origin.x, origin.y);
    let mask = match component {
        Component::Minus => return vec![Rect::new(x + T, y + HALF - T * 0.5, W - 2.0 * T, T)],
        Component::Digit(d) => DIGIT_MASKS[usize::from(d % 10)],
    };

    let segments = [
        Rect::new(x + T, y, W - 2.0 * T, T),
        Rect::new(x + W - T, y + T, T, HALF - T),
        Rect::new(x + W - T, y + HALF, T, HALF - T),
        Rect::new(x + T, y + H - T, W - 2.0 * T, T),
        Rect::new(x, y + HALF, T, HALF - T),
        Rect::new(x, y + T, T, HALF - T),
        Rect::new(x + T, y + HALF - T * 0.5, W - 2.0 * T, T),
    ];
    segments
        .into_iter()
        .enumerate()
        .filter(|(i, _)| mask & (1 << i) != 0)
        .map(|(_, r)| r)
        .collect()
}

/// Fixed-size seven-segment digits built from rectangles.
#[derive(Debug, Copy, Clone, Default)]
pub struct SevenSegmentDisplay;

impl NumericDisplay for SevenSegmentDisplay {
    fn draw_value(&self, canvas: &mut dyn Canvas, value: f32, rect: Rect, color: Color) {
        let components = plan_components(value);
        for (component, origin) in layout_components(&components, rect) {
            for seg in segment_rects(component, origin) {
                canvas.fill_rect(seg, color);
            }
        }
    }
}
