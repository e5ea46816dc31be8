use aircon_engine::coords::{Rect, Vec2, Viewport};
use aircon_engine::shape::{CircleShape, RectShape};

use crate::palette;

const AC_WIDTH: f32 = 480.0;
const AC_HEIGHT: f32 = 200.0;
const AC_TOP: f32 = 140.0;

const VENT_INSET: f32 = 24.0;
const VENT_FROM_BOTTOM: f32 = 64.0;
const VENT_HEIGHT: f32 = 16.0;
const VENT_FLAP_MAX: f32 = 18.0;

const LAMP_FROM_RIGHT: f32 = 44.0;
const LAMP_FROM_BOTTOM: f32 = 26.0;
const LAMP_RADIUS: f32 = 14.0;

const SCREEN_WIDTH: f32 = 94.0;
const SCREEN_HEIGHT: f32 = 54.0;
const SCREEN_SPACING: f32 = 22.0;
const SCREENS_LEFT: f32 = 70.0;
const SCREENS_TOP: f32 = 52.0;

const BUTTON_WIDTH: f32 = 40.0;

const BOWL_WIDTH: f32 = 260.0;
const BOWL_HEIGHT: f32 = 140.0;
const BOWL_THICKNESS: f32 = 10.0;
const BOWL_GAP: f32 = 120.0;

const CAPTION_GAP: f32 = 16.0;

/// Pixel geometry of the unit for one viewport width.
///
/// The unit is horizontally centered and fixed vertically. Shapes carry
/// their resting colors; the scene recolors them from the simulation state.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Layout {
    pub body: RectShape,
    pub vent: RectShape,
    /// Flap below the vent slot at full openness.
    pub vent_flap: RectShape,
    pub lamp: CircleShape,
    /// Setpoint, reading, status.
    pub screens: [RectShape; 3],
    /// Upper half raises the setpoint, lower half lowers it.
    pub arrow_button: RectShape,
    pub bowl: RectShape,
    pub bowl_thickness: f32,
    /// Top-center of the caption under the bowl.
    pub caption_anchor: Vec2,
}

impl Layout {
    pub fn new(viewport: Viewport) -> Self {
        let ac_x = (viewport.width - AC_WIDTH) * 0.5;
        let ac_y = AC_TOP;

        let vent_y = ac_y + AC_HEIGHT - VENT_FROM_BOTTOM;
        let vent_w = AC_WIDTH - 2.0 * VENT_INSET;

        let screen_y = ac_y + SCREENS_TOP;
        let screen = |i: usize| {
            let x = ac_x + SCREENS_LEFT + i as f32 * (SCREEN_WIDTH + SCREEN_SPACING);
            RectShape::new(x, screen_y, SCREEN_WIDTH, SCREEN_HEIGHT, palette::SCREEN_OFF)
        };
        let screens = [screen(0), screen(1), screen(2)];
        let button_x = screens[2].rect.max().x + SCREEN_SPACING;

        let bowl_x = (viewport.width - BOWL_WIDTH) * 0.5;
        let bowl_y = ac_y + AC_HEIGHT + BOWL_GAP;

        Self {
            body: RectShape::new(ac_x, ac_y, AC_WIDTH, AC_HEIGHT, palette::BODY),
            vent: RectShape::new(ac_x + VENT_INSET, vent_y, vent_w, VENT_HEIGHT, palette::VENT),
            vent_flap: RectShape::new(
                ac_x + VENT_INSET,
                vent_y + VENT_HEIGHT,
                vent_w,
                VENT_FLAP_MAX,
                palette::VENT_FLAP,
            ),
            lamp: CircleShape::new(
                ac_x + AC_WIDTH - LAMP_FROM_RIGHT,
                ac_y + AC_HEIGHT - LAMP_FROM_BOTTOM,
                LAMP_RADIUS,
                palette::LAMP_OFF,
            ),
            screens,
            arrow_button: RectShape::new(
                button_x,
                screen_y,
                BUTTON_WIDTH,
                SCREEN_HEIGHT,
                palette::BUTTON,
            ),
            bowl: RectShape::new(bowl_x, bowl_y, BOWL_WIDTH, BOWL_HEIGHT, palette::BOWL),
            bowl_thickness: BOWL_THICKNESS,
            caption_anchor: Vec2::new(
                viewport.width * 0.5,
                bowl_y + BOWL_HEIGHT + CAPTION_GAP,
            ),
        }
    }

    /// Upper half of the arrow button.
    pub fn arrow_up_zone(&self) -> Rect {
        let r = self.arrow_button.rect;
        Rect::new(r.origin.x, r.origin.y, r.size.x, r.size.y * 0.5)
    }

    /// Lower half of the arrow button.
    pub fn arrow_down_zone(&self) -> Rect {
        let r = self.arrow_button.rect;
        let half = r.size.y * 0.5;
        Rect::new(r.origin.x, r.origin.y + half, r.size.x, r.size.y - half)
    }

    /// Inside of the bowl walls; the water fills this from the bottom.
    pub fn bowl_interior(&self) -> Rect {
        self.bowl.rect.inset(self.bowl_thickness)
    }

    /// Whether `p` is over something clickable.
    pub fn is_interactive(&self, p: Vec2) -> bool {
        self.lamp.contains(p) || self.arrow_button.rect.contains(p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> Layout {
        Layout::new(Viewport::new(800.0, 800.0))
    }

    #[test]
    fn unit_is_centered_horizontally() {
        let l = layout();
        assert_eq!(l.body.rect, Rect::new(160.0, 140.0, 480.0, 200.0));
        assert_eq!(l.bowl.rect, Rect::new(270.0, 460.0, 260.0, 140.0));
        assert_eq!(l.caption_anchor.x, 400.0);
    }

    #[test]
    fn fixed_offsets_inside_the_body() {
        let l = layout();
        assert_eq!(l.vent.rect, Rect::new(184.0, 276.0, 432.0, 16.0));
        assert_eq!(l.lamp.center, Vec2::new(596.0, 314.0));
        assert_eq!(l.lamp.radius, 14.0);
        assert_eq!(l.screens[0].rect, Rect::new(230.0, 192.0, 94.0, 54.0));
        assert_eq!(l.screens[1].rect.origin.x, 346.0);
        assert_eq!(l.screens[2].rect.origin.x, 462.0);
    }

    #[test]
    fn arrow_button_sits_inside_the_body_right_of_the_screens() {
        let l = layout();
        let b = l.arrow_button.rect;
        assert!(b.origin.x >= l.screens[2].rect.max().x);
        assert!(b.max().x <= l.body.rect.max().x);
        assert!(b.max().y <= l.vent.rect.origin.y);
        assert!(!b.contains(l.lamp.center));
    }

    #[test]
    fn arrow_zones_split_the_button() {
        let l = layout();
        let up = l.arrow_up_zone();
        let down = l.arrow_down_zone();
        assert_eq!(up.max().y, down.origin.y);
        assert_eq!(up.size.y + down.size.y, l.arrow_button.rect.size.y);
    }

    #[test]
    fn narrow_viewport_keeps_sizes() {
        let l = Layout::new(Viewport::new(400.0, 300.0));
        assert_eq!(l.body.rect.origin.x, -40.0);
        assert_eq!(l.body.rect.size, Vec2::new(480.0, 200.0));
    }

    #[test]
    fn interactive_regions() {
        let l = layout();
        assert!(l.is_interactive(l.lamp.center));
        assert!(l.is_interactive(l.arrow_button.rect.center()));
        assert!(!l.is_interactive(l.bowl.rect.center()));
    }
}
