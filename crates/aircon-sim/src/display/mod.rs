//! Numeric readouts for the unit's screens.

mod proportional;
mod segments;

use std::str::FromStr;

use aircon_engine::coords::Rect;
use aircon_engine::paint::Color;
use aircon_engine::render::Canvas;

pub use proportional::ProportionalDisplay;
pub use segments::{
    Component, DIGIT_HEIGHT, DIGIT_MASKS, DIGIT_WIDTH, SEGMENT_THICKNESS, SevenSegmentDisplay,
    layout_components, plan_components, segment_rects,
};

/// Largest magnitude a screen shows.
pub const DISPLAY_LIMIT: i32 = 99;

/// Draws a number centered in a screen rectangle.
pub trait NumericDisplay {
    fn draw_value(&self, canvas: &mut dyn Canvas, value: f32, rect: Rect, color: Color);
}

/// The value a screen shows for `value`: rounded to the nearest integer and
/// clamped to two digits. NaN shows as zero.
pub fn display_value(value: f32) -> i32 {
    (value.round() as i32).clamp(-DISPLAY_LIMIT, DISPLAY_LIMIT)
}

/// Which [`NumericDisplay`] the screens use.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub enum DisplayStyle {
    #[default]
    Segments,
    Text,
}

impl DisplayStyle {
    pub fn display(self) -> &'static dyn NumericDisplay {
        static SEGMENTS: SevenSegmentDisplay = SevenSegmentDisplay;
        static TEXT: ProportionalDisplay = ProportionalDisplay::new();
        match self {
            DisplayStyle::Segments => &SEGMENTS,
            DisplayStyle::Text => &TEXT,
        }
    }
}

impl FromStr for DisplayStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "segments" | "segment" | "7seg" => Ok(DisplayStyle::Segments),
            "text" | "font" => Ok(DisplayStyle::Text),
            other => Err(format!("unknown display style '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_value_rounds_and_clamps() {
        assert_eq!(display_value(23.6), 24);
        assert_eq!(display_value(-0.4), 0);
        assert_eq!(display_value(105.0), 99);
        assert_eq!(display_value(-150.0), -99);
        assert_eq!(display_value(f32::NAN), 0);
    }

    #[test]
    fn style_parses_case_insensitively() {
        assert_eq!("Segments".parse::<DisplayStyle>(), Ok(DisplayStyle::Segments));
        assert_eq!(" text ".parse::<DisplayStyle>(), Ok(DisplayStyle::Text));
        assert!("lcd".parse::<DisplayStyle>().is_err());
    }
}
