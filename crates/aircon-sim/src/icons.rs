//! Status icon for the third screen: heating, cooling or at setpoint.
//!
//! Icons are built from rectangles and circles only, so diagonals are
//! stair-stepped squares.

use aircon_engine::coords::{Rect, Vec2};
use aircon_engine::render::Canvas;

use crate::palette;

/// Setpoint and reading closer than this count as matched.
pub const STATUS_TOLERANCE: f32 = 0.25;

/// Icon size relative to the smaller screen dimension.
const ICON_FRACTION: f32 = 0.35;

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum StatusIcon {
    Heat,
    Snow,
    Check,
}

/// Heat when the room must warm up, snow when it must cool, check otherwise.
pub fn select_status_icon(desired: f32, current: f32) -> StatusIcon {
    let diff = desired - current;
    if diff > STATUS_TOLERANCE {
        StatusIcon::Heat
    } else if diff < -STATUS_TOLERANCE {
        StatusIcon::Snow
    } else {
        StatusIcon::Check
    }
}

impl StatusIcon {
    /// Draws the icon centered in `screen`.
    pub fn draw(self, canvas: &mut dyn Canvas, screen: Rect) {
        let c = screen.center();
        let size = screen.size.x.min(screen.size.y) * ICON_FRACTION;
        match self {
            StatusIcon::Heat => draw_heat(canvas, c, size),
            StatusIcon::Snow => draw_snow(canvas, c, size),
            StatusIcon::Check => draw_check(canvas, c, size),
        }
    }
}

/// Centered band of `w`×`h` at `(cx, y)`.
fn band(cx: f32, y: f32, w: f32, h: f32) -> Rect {
    Rect::from_center(Vec2::new(cx, y), Vec2::new(w, h))
}

fn draw_heat(canvas: &mut dyn Canvas, c: Vec2, r: f32) {
    let base_y = c.y + r * 0.04;

    canvas.fill_circle(Vec2::new(c.x, base_y), r, palette::HEAT_OUTER);
    let h = r * 0.25;
    for i in 0..5 {
        let t = i as f32;
        let w = r * 1.3 * (1.0 - t * 0.18);
        let y = base_y + r * 0.35 - t * h * 0.75;
        canvas.fill_rect(band(c.x, y, w, h), palette::HEAT_OUTER);
    }

    let inner = r * 0.6;
    canvas.fill_circle(Vec2::new(c.x, base_y + inner * 0.05), inner, palette::HEAT_INNER);
    let h = inner * 0.35;
    for i in 0..3 {
        let t = i as f32;
        let w = inner * 1.1 * (1.0 - t * 0.22);
        let y = base_y + inner * 0.4 - t * h * 0.8;
        canvas.fill_rect(band(c.x, y, w, h), palette::HEAT_INNER);
    }
}

fn draw_snow(canvas: &mut dyn Canvas, c: Vec2, size: f32) {
    let color = palette::SNOW;
    let arm = size * 0.48;
    let thick = size * 0.12;

    canvas.fill_rect(band(c.x, c.y, thick, arm * 2.0), color);
    canvas.fill_rect(band(c.x, c.y, arm * 2.0, thick), color);

    let cap = Vec2::new(thick * 1.2, thick * 1.2);
    for end in [
        Vec2::new(0.0, -arm),
        Vec2::new(0.0, arm),
        Vec2::new(-arm, 0.0),
        Vec2::new(arm, 0.0),
    ] {
        canvas.fill_rect(Rect::from_center(c + end, cap), color);
    }

    let step = thick * 0.9;
    let square = Vec2::new(step, step);
    for (sx, sy) in [(1.0, 1.0), (1.0, -1.0), (-1.0, 1.0), (-1.0, -1.0)] {
        for i in 1..=4 {
            let off = step * i as f32;
            let a = Vec2::new(sx * off, sy * off);
            let b = Vec2::new(sx * (off - step * 0.5), sy * (off + step * 0.5));
            canvas.fill_rect(Rect::from_center(c + a, square), color);
            canvas.fill_rect(Rect::from_center(c + b, square), color);
        }
    }
}

fn draw_check(canvas: &mut dyn Canvas, c: Vec2, size: f32) {
    let dot = size * 0.1;
    let pitch = dot * 1.1;
    let start = Vec2::new(c.x - size * 0.35, c.y + size * 0.05);

    for i in 0..4 {
        let d = i as f32 * pitch;
        canvas.fill_rect(Rect::new(start.x + d, start.y + d, dot, dot), palette::CHECK);
    }
    let mid = start + Vec2::new(3.0 * pitch, 3.0 * pitch);
    for i in 0..6 {
        let d = i as f32 * pitch;
        canvas.fill_rect(Rect::new(mid.x + d, mid.y - d, dot, dot), palette::CHECK);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RecordingCanvas;

    const SCREEN: Rect = Rect::new(462.0, 192.0, 94.0, 54.0);

    fn drawn(icon: StatusIcon) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::default();
        icon.draw(&mut canvas, SCREEN);
        canvas
    }

    // ── selection ───────────────────────────────────────────────────────────

    #[test]
    fn warmer_setpoint_selects_heat() {
        assert_eq!(select_status_icon(24.0, 20.0), StatusIcon::Heat);
    }

    #[test]
    fn cooler_setpoint_selects_snow() {
        assert_eq!(select_status_icon(20.0, 24.0), StatusIcon::Snow);
    }

    #[test]
    fn within_tolerance_selects_check() {
        assert_eq!(select_status_icon(24.0, 23.9), StatusIcon::Check);
        assert_eq!(select_status_icon(24.0, 24.25), StatusIcon::Check);
        assert_eq!(select_status_icon(24.0, 24.0), StatusIcon::Check);
    }

    // ── drawing ─────────────────────────────────────────────────────────────

    #[test]
    fn heat_is_two_circles_and_eight_bands() {
        let c = drawn(StatusIcon::Heat);
        assert_eq!(c.circles().len(), 2);
        assert_eq!(c.rects().len(), 8);
        assert_eq!(c.count_color(palette::HEAT_OUTER), 6);
        assert_eq!(c.count_color(palette::HEAT_INNER), 4);
    }

    #[test]
    fn snow_is_cross_caps_and_stepped_diagonals() {
        let c = drawn(StatusIcon::Snow);
        assert!(c.circles().is_empty());
        assert_eq!(c.rects().len(), 2 + 4 + 4 * 4 * 2);
    }

    #[test]
    fn check_is_ten_dots() {
        let c = drawn(StatusIcon::Check);
        assert_eq!(c.rects().len(), 10);
        assert_eq!(c.count_color(palette::CHECK), 10);
    }

    #[test]
    fn icons_stay_inside_the_screen() {
        for icon in [StatusIcon::Heat, StatusIcon::Snow, StatusIcon::Check] {
            let c = drawn(icon);
            for (r, _) in c.rects() {
                assert!(r.origin.x >= SCREEN.origin.x && r.max().x <= SCREEN.max().x, "{icon:?}");
                assert!(r.origin.y >= SCREEN.origin.y && r.max().y <= SCREEN.max().y, "{icon:?}");
            }
            for (p, radius, _) in c.circles() {
                assert!(p.y - radius >= SCREEN.origin.y && p.y + radius <= SCREEN.max().y);
            }
        }
    }
}
