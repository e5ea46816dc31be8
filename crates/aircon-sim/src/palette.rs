//! Scene colors.

use aircon_engine::paint::Color;

pub const BACKGROUND: Color = Color::rgb(0.10, 0.12, 0.16);

pub const BODY: Color = Color::rgb(0.90, 0.93, 0.95);
pub const VENT: Color = Color::rgb(0.32, 0.36, 0.45);
pub const VENT_FLAP: Color = Color::rgb(0.46, 0.50, 0.58);

pub const LAMP_OFF: Color = Color::rgb(0.22, 0.18, 0.20);
pub const LAMP_ON: Color = Color::rgb(0.30, 0.86, 0.46);
pub const LAMP_LOCKED: Color = Color::rgb(0.92, 0.30, 0.26);

pub const SCREEN_OFF: Color = Color::rgb(0.08, 0.10, 0.12);
pub const SCREEN_ON: Color = Color::rgb(0.10, 0.18, 0.24);
pub const DIGITS: Color = Color::rgb(0.56, 0.90, 1.00);

pub const BUTTON: Color = Color::rgb(0.74, 0.78, 0.84);
pub const BUTTON_GLYPH: Color = Color::rgb(0.30, 0.34, 0.42);

pub const BOWL: Color = Color::rgb(0.78, 0.82, 0.88);
pub const WATER: Color = Color::new(0.30, 0.56, 0.95, 0.85);

pub const HEAT_OUTER: Color = Color::rgb(0.96, 0.46, 0.28);
pub const HEAT_INNER: Color = Color::rgb(0.99, 0.66, 0.32);
pub const SNOW: Color = Color::rgb(0.66, 0.85, 0.98);
pub const CHECK: Color = Color::rgb(0.38, 0.92, 0.58);

pub const OVERLAY_TEXT: Color = Color::rgb(0.85, 0.88, 0.92);
