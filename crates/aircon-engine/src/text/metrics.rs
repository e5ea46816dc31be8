use crate::coords::Rect;

/// Per-glyph metrics in the usual rasterizer convention.
///
/// Bearings are measured from the pen position on the baseline; `bearing_y`
/// is the distance from the baseline up to the bitmap's top row. `advance` is
/// 26.6 fixed point: shift right by 6 for whole pixels.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct GlyphMetrics {
    pub width: u32,
    pub height: u32,
    pub bearing_x: i32,
    pub bearing_y: i32,
    pub advance: u32,
}

impl GlyphMetrics {
    /// Converts fontdue metrics (bottom-left bitmap origin, float advance).
    pub fn from_fontdue(m: &fontdue::Metrics) -> Self {
        let height = m.height as u32;
        Self {
            width: m.width as u32,
            height,
            bearing_x: m.xmin,
            bearing_y: m.ymin + height as i32,
            advance: (m.advance_width.max(0.0) * 64.0).round() as u32,
        }
    }

    /// Whole-pixel advance.
    #[inline]
    pub fn advance_px(&self) -> u32 {
        self.advance >> 6
    }

    /// Rows below the baseline; negative for glyphs floating above it.
    #[inline]
    pub fn descent(&self) -> i32 {
        self.height as i32 - self.bearing_y
    }
}

/// Size of a string for one scale. Recomputed on every call.
#[derive(Debug, Copy, Clone, Default, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
    pub ascent: f32,
}

/// Measures `text` over the glyphs `lookup` knows.
///
/// Unknown characters are left out entirely. If nothing contributes any
/// height, `ascent` falls back to `pixel_height * scale`.
pub fn measure_glyphs<F>(text: &str, scale: f32, pixel_height: u32, lookup: F) -> TextMetrics
where
    F: Fn(char) -> Option<GlyphMetrics>,
{
    let mut width = 0.0f32;
    let mut ascent = 0.0f32;
    let mut descent = 0.0f32;

    for g in text.chars().filter_map(&lookup) {
        width += g.advance_px() as f32 * scale;
        ascent = ascent.max(g.bearing_y as f32 * scale);
        descent = descent.max(g.descent() as f32 * scale);
    }

    if ascent + descent <= 0.0 && pixel_height > 0 {
        ascent = pixel_height as f32 * scale;
    }

    TextMetrics {
        width,
        height: ascent + descent,
        ascent,
    }
}

/// One glyph quad produced by [`layout_glyphs`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PlacedGlyph {
    pub ch: char,
    pub rect: Rect,
}

/// Places glyph quads for `text` with the top-left of the text box at `(x, y)`.
///
/// The baseline sits at `y + ascent` from [`measure_glyphs`]; the pen advances
/// left to right. Unknown characters are skipped exactly as in measurement,
/// and zero-sized glyphs (spaces) advance the pen without producing a quad.
pub fn layout_glyphs<F>(
    text: &str,
    x: f32,
    y: f32,
    scale: f32,
    pixel_height: u32,
    lookup: F,
) -> Vec<PlacedGlyph>
where
    F: Fn(char) -> Option<GlyphMetrics>,
{
    let metrics = measure_glyphs(text, scale, pixel_height, &lookup);
    let baseline = y + metrics.ascent;

    let mut pen = x;
    let mut out = Vec::with_capacity(text.len());
    for ch in text.chars() {
        let Some(g) = lookup(ch) else { continue };
        if g.width > 0 && g.height > 0 {
            out.push(PlacedGlyph {
                ch,
                rect: Rect::new(
                    pen + g.bearing_x as f32 * scale,
                    baseline - g.bearing_y as f32 * scale,
                    g.width as f32 * scale,
                    g.height as f32 * scale,
                ),
            });
        }
        pen += g.advance_px() as f32 * scale;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Digits 10 px wide, 20 tall, sitting on the baseline; '-' floats; ' ' is blank.
    fn lookup(c: char) -> Option<GlyphMetrics> {
        match c {
            '0'..='9' => Some(GlyphMetrics { width: 10, height: 20, bearing_x: 1, bearing_y: 20, advance: 12 << 6 }),
            '-' => Some(GlyphMetrics { width: 8, height: 3, bearing_x: 2, bearing_y: 10, advance: 12 << 6 }),
            'p' => Some(GlyphMetrics { width: 10, height: 20, bearing_x: 1, bearing_y: 14, advance: 11 << 6 }),
            ' ' => Some(GlyphMetrics { width: 0, height: 0, bearing_x: 0, bearing_y: 0, advance: 6 << 6 }),
            _ => None,
        }
    }

    // ── GlyphMetrics ──────────────────────────────────────────────────────

    #[test]
    fn advance_is_26_6_fixed_point() {
        let g = GlyphMetrics { advance: (13 << 6) + 40, ..Default::default() };
        assert_eq!(g.advance_px(), 13);
    }

    #[test]
    fn fontdue_metrics_convert_to_top_bearing() {
        let m = fontdue::Metrics {
            xmin: 2,
            ymin: -5,
            width: 10,
            height: 25,
            advance_width: 14.5,
            ..Default::default()
        };
        let g = GlyphMetrics::from_fontdue(&m);
        assert_eq!(g.bearing_x, 2);
        assert_eq!(g.bearing_y, 20);
        assert_eq!(g.descent(), 5);
        assert_eq!(g.advance, 928);
        assert_eq!(g.advance_px(), 14);
    }

    // ── measure ───────────────────────────────────────────────────────────

    #[test]
    fn measure_sums_advances_and_extents() {
        let m = measure_glyphs("24", 1.0, 48, lookup);
        assert_eq!(m.width, 24.0);
        assert_eq!(m.ascent, 20.0);
        assert_eq!(m.height, 20.0);
    }

    #[test]
    fn measure_includes_descenders() {
        let m = measure_glyphs("1p", 1.0, 48, lookup);
        assert_eq!(m.ascent, 20.0);
        assert_eq!(m.height, 26.0);
    }

    #[test]
    fn measure_scales_linearly() {
        let m = measure_glyphs("10", 0.5, 48, lookup);
        assert_eq!(m.width, 12.0);
        assert_eq!(m.ascent, 10.0);
    }

    #[test]
    fn unknown_characters_are_omitted() {
        assert_eq!(measure_glyphs("2x4", 1.0, 48, lookup), measure_glyphs("24", 1.0, 48, lookup));
    }

    #[test]
    fn empty_measure_falls_back_to_pixel_height() {
        let m = measure_glyphs("", 0.5, 48, lookup);
        assert_eq!(m.width, 0.0);
        assert_eq!(m.ascent, 24.0);
        assert_eq!(m.height, 24.0);
    }

    // ── layout ────────────────────────────────────────────────────────────

    #[test]
    fn layout_places_glyphs_on_shared_baseline() {
        let placed = layout_glyphs("-1", 100.0, 50.0, 1.0, 48, lookup);
        assert_eq!(placed.len(), 2);
        // Baseline at y + ascent = 70.
        assert_eq!(placed[0].rect, Rect::new(102.0, 60.0, 8.0, 3.0));
        assert_eq!(placed[1].rect, Rect::new(113.0, 50.0, 10.0, 20.0));
    }

    #[test]
    fn blank_glyphs_advance_without_quads() {
        let placed = layout_glyphs("1 1", 0.0, 0.0, 1.0, 48, lookup);
        assert_eq!(placed.len(), 2);
        assert_eq!(placed[1].rect.origin.x, 12.0 + 6.0 + 1.0);
    }

    #[test]
    fn layout_width_agrees_with_measure() {
        let text = "12x3";
        let m = measure_glyphs(text, 2.0, 48, lookup);
        let placed = layout_glyphs(text, 0.0, 0.0, 2.0, 48, lookup);
        let last = placed.last().map(|p| p.rect.origin.x - 2.0).unwrap_or_default();
        // Pen before the last glyph plus its advance is the measured width.
        assert_eq!(last + 24.0, m.width);
    }
}
