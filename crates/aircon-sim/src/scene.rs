use aircon_engine::coords::Rect;
use aircon_engine::paint::Color;
use aircon_engine::render::Canvas;

use crate::display::NumericDisplay;
use crate::icons::select_status_icon;
use crate::layout::Layout;
use crate::palette;
use crate::state::AppState;

/// Composes one frame of the unit back to front: body, vent and flap, lamp,
/// screens, arrow button, water, bowl walls.
///
/// The background clear and any overlays belong to the caller.
pub fn draw_scene(
    canvas: &mut dyn Canvas,
    state: &AppState,
    layout: &Layout,
    display: &dyn NumericDisplay,
) {
    canvas.fill_rect_shape(&layout.body);
    canvas.fill_rect_shape(&layout.vent);
    draw_vent_flap(canvas, state, layout);
    canvas.fill_circle_shape(&layout.lamp.with_color(lamp_color(state)));
    draw_screens(canvas, state, layout, display);
    draw_arrow_button(canvas, layout);
    draw_bowl(canvas, state, layout);
}

pub fn lamp_color(state: &AppState) -> Color {
    if state.locked_by_full_bowl {
        palette::LAMP_LOCKED
    } else if state.is_on {
        palette::LAMP_ON
    } else {
        palette::LAMP_OFF
    }
}

fn draw_vent_flap(canvas: &mut dyn Canvas, state: &AppState, layout: &Layout) {
    let open = state.vent_openness.clamp(0.0, 1.0);
    if open <= 0.0 {
        return;
    }
    let mut flap = layout.vent_flap;
    flap.rect.size.y *= open;
    canvas.fill_rect_shape(&flap);
}

fn draw_screens(
    canvas: &mut dyn Canvas,
    state: &AppState,
    layout: &Layout,
    display: &dyn NumericDisplay,
) {
    let lit = if state.is_on { palette::SCREEN_ON } else { palette::SCREEN_OFF };
    for screen in &layout.screens {
        canvas.fill_rect_shape(&screen.with_color(lit));
    }
    if !state.is_on {
        return;
    }

    let [setpoint, reading, status] = layout.screens;
    display.draw_value(canvas, state.desired_temp, setpoint.rect, palette::DIGITS);
    display.draw_value(canvas, state.current_temp, reading.rect, palette::DIGITS);
    select_status_icon(state.desired_temp, state.current_temp).draw(canvas, status.rect);
}

fn draw_arrow_button(canvas: &mut dyn Canvas, layout: &Layout) {
    canvas.fill_rect_shape(&layout.arrow_button);
    arrow_glyph(canvas, layout.arrow_up_zone(), true);
    arrow_glyph(canvas, layout.arrow_down_zone(), false);
}

/// Stepped triangle of three bands, widest at the base.
fn arrow_glyph(canvas: &mut dyn Canvas, zone: Rect, up: bool) {
    const BAND: f32 = 3.0;
    let c = zone.center();
    for i in 0..3 {
        let w = 6.0 + 6.0 * i as f32;
        let row = if up { i as f32 } else { 2.0 - i as f32 };
        let y = c.y - 1.5 * BAND + row * BAND;
        canvas.fill_rect(Rect::new(c.x - w * 0.5, y, w, BAND), palette::BUTTON_GLYPH);
    }
}

fn draw_bowl(canvas: &mut dyn Canvas, state: &AppState, layout: &Layout) {
    let level = state.water_level.clamp(0.0, 1.0);
    if level > 0.0 {
        let inside = layout.bowl_interior();
        let h = inside.size.y * level;
        let water = Rect::new(inside.origin.x, inside.max().y - h, inside.size.x, h);
        canvas.fill_rect(water, palette::WATER);
    }
    canvas.stroke_frame(layout.bowl.rect, layout.bowl_thickness, layout.bowl.color);
}

#[cfg(test)]
mod tests {
    use aircon_engine::coords::Viewport;

    use super::*;
    use crate::display::SevenSegmentDisplay;
    use crate::testing::{Op, RecordingCanvas};

    fn layout() -> Layout {
        Layout::new(Viewport::new(800.0, 800.0))
    }

    fn render(state: &AppState) -> RecordingCanvas {
        let mut canvas = RecordingCanvas::default();
        draw_scene(&mut canvas, state, &layout(), &SevenSegmentDisplay);
        canvas
    }

    #[test]
    fn body_first_bowl_walls_last() {
        let l = layout();
        let c = render(&AppState::default());
        assert_eq!(c.ops.first(), Some(&Op::Rect(l.body.rect, palette::BODY)));
        let tail: Vec<_> = c.ops[c.ops.len() - 4..].to_vec();
        assert!(tail.iter().all(|op| matches!(op, Op::Rect(_, color) if *color == palette::BOWL)));
    }

    #[test]
    fn powered_off_screens_are_dark_and_blank() {
        let c = render(&AppState::default());
        assert_eq!(c.count_color(palette::SCREEN_OFF), 3);
        assert_eq!(c.count_color(palette::DIGITS), 0);
        assert_eq!(c.count_color(palette::LAMP_OFF), 1);
        assert_eq!(c.count_color(palette::WATER), 0);
        assert_eq!(c.count_color(palette::VENT_FLAP), 0);
    }

    #[test]
    fn powered_on_screens_show_values_and_icon() {
        let state = AppState { is_on: true, ..AppState::default() };
        let c = render(&state);
        assert_eq!(c.count_color(palette::SCREEN_ON), 3);
        assert_eq!(c.count_color(palette::LAMP_ON), 1);
        // "24" is 5 + 4 segments, "30" is 5 + 6.
        assert_eq!(c.count_color(palette::DIGITS), 20);
        // 30 -> 24 wants cooling.
        assert!(c.count_color(palette::SNOW) > 0);
    }

    #[test]
    fn lamp_turns_red_when_locked() {
        let state = AppState { locked_by_full_bowl: true, water_level: 1.0, ..AppState::default() };
        let c = render(&state);
        assert_eq!(c.count_color(palette::LAMP_LOCKED), 1);
    }

    #[test]
    fn water_fills_from_the_bottom() {
        let l = layout();
        let inside = l.bowl_interior();
        let state = AppState { water_level: 0.5, ..AppState::default() };
        let c = render(&state);
        let (water, _) = c
            .rects()
            .into_iter()
            .find(|(_, color)| *color == palette::WATER)
            .expect("water rect");
        assert_eq!(water.max().y, inside.max().y);
        assert!((water.size.y - inside.size.y * 0.5).abs() < 1e-4);
        assert_eq!(water.size.x, inside.size.x);
    }

    #[test]
    fn vent_flap_follows_openness() {
        let l = layout();
        let state = AppState { vent_openness: 0.5, ..AppState::default() };
        let c = render(&state);
        let (flap, _) = c
            .rects()
            .into_iter()
            .find(|(_, color)| *color == palette::VENT_FLAP)
            .expect("flap rect");
        assert_eq!(flap.origin, l.vent_flap.rect.origin);
        assert_eq!(flap.size.y, l.vent_flap.rect.size.y * 0.5);
    }

    #[test]
    fn arrow_glyphs_sit_inside_their_halves() {
        let l = layout();
        let c = render(&AppState::default());
        let glyphs: Vec<_> = c
            .rects()
            .into_iter()
            .filter(|(_, color)| *color == palette::BUTTON_GLYPH)
            .map(|(r, _)| r)
            .collect();
        assert_eq!(glyphs.len(), 6);
        assert!(glyphs[..3].iter().all(|r| l.arrow_up_zone().contains(r.center())));
        assert!(glyphs[3..].iter().all(|r| l.arrow_down_zone().contains(r.center())));
        // Narrowest band at the tip.
        assert!(glyphs[0].origin.y < glyphs[2].origin.y);
        assert!(glyphs[3].origin.y > glyphs[5].origin.y);
    }
}
