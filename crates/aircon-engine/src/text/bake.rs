use crate::paint::Color;

use super::error::TextError;
use super::metrics::GlyphMetrics;

/// A rasterized glyph: metrics plus a row-major coverage bitmap
/// (`width * height` bytes, top row first).
#[derive(Debug, Clone, PartialEq)]
pub struct RasterGlyph {
    pub metrics: GlyphMetrics,
    pub coverage: Vec<u8>,
}

/// Straight-alpha RGBA8 image, row-major, top row first.
#[derive(Debug, Clone, PartialEq)]
pub struct TextBitmap {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<u8>,
}

impl TextBitmap {
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [self.pixels[i], self.pixels[i + 1], self.pixels[i + 2], self.pixels[i + 3]]
    }
}

/// Fails with `TooLarge` when either side of a `width` x `height` image is
/// above `limit` (the device's `max_texture_dimension_2d`).
pub fn check_texture_size(width: u32, height: u32, limit: u32) -> Result<(), TextError> {
    if width > limit || height > limit {
        return Err(TextError::TooLarge { width, height, limit });
    }
    Ok(())
}

/// Bakes a run of glyphs into one RGBA bitmap.
///
/// The image is the measured text box (sum of whole-pixel advances by max
/// ascent plus max descent) grown by `padding` on every side. It is filled
/// with `background` first, then each glyph's coverage is composited over it
/// with `text_color`, using `coverage * text_color.a` as source alpha.
pub fn compose_text_bitmap(
    glyphs: &[RasterGlyph],
    text_color: Color,
    background: Color,
    padding: u32,
) -> Result<TextBitmap, TextError> {
    let mut advance = 0u32;
    let mut ascent = 0i32;
    let mut descent = 0i32;
    for g in glyphs {
        advance += g.metrics.advance_px();
        ascent = ascent.max(g.metrics.bearing_y);
        descent = descent.max(g.metrics.descent());
    }
    if advance == 0 {
        return Err(TextError::EmptyText);
    }

    let width = advance + padding * 2;
    let height = (ascent + descent) as u32 + padding * 2;

    let bg = background.to_rgba8();
    let mut pixels = bg.repeat((width * height) as usize);

    let text_alpha = text_color.a.clamp(0.0, 1.0);
    let [tr, tg, tb, _] = text_color.to_rgba8();

    let mut pen = padding as i32;
    let baseline = padding as i32 + ascent;
    for g in glyphs {
        let m = g.metrics;
        let x0 = pen + m.bearing_x;
        let y0 = baseline - m.bearing_y;

        for row in 0..m.height as i32 {
            for col in 0..m.width as i32 {
                let coverage = g.coverage[(row * m.width as i32 + col) as usize];
                if coverage == 0 {
                    continue;
                }
                let (px, py) = (x0 + col, y0 + row);
                if px < 0 || py < 0 || px >= width as i32 || py >= height as i32 {
                    continue;
                }
                let i = ((py as u32 * width + px as u32) * 4) as usize;
                let src_a = f32::from(coverage) / 255.0 * text_alpha;
                let dst = [pixels[i], pixels[i + 1], pixels[i + 2], pixels[i + 3]];
                pixels[i..i + 4].copy_from_slice(&over([tr, tg, tb], src_a, dst));
            }
        }

        pen += m.advance_px() as i32;
    }

    Ok(TextBitmap { width, height, pixels })
}

/// Straight-alpha "source over destination".
fn over(src: [u8; 3], src_a: f32, dst: [u8; 4]) -> [u8; 4] {
    let dst_a = f32::from(dst[3]) / 255.0;
    let out_a = src_a + dst_a * (1.0 - src_a);
    if out_a <= 0.0 {
        return [0, 0, 0, 0];
    }
    let channel = |s: u8, d: u8| {
        let v = (f32::from(s) * src_a + f32::from(d) * dst_a * (1.0 - src_a)) / out_a;
        (v + 0.5).clamp(0.0, 255.0) as u8
    };
    [
        channel(src[0], dst[0]),
        channel(src[1], dst[1]),
        channel(src[2], dst[2]),
        (out_a * 255.0 + 0.5).clamp(0.0, 255.0) as u8,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    /// 2×3 solid block sitting on the baseline, 4 px advance.
    fn block() -> RasterGlyph {
        RasterGlyph {
            metrics: GlyphMetrics { width: 2, height: 3, bearing_x: 1, bearing_y: 3, advance: 4 << 6 },
            coverage: vec![255; 6],
        }
    }

    fn space() -> RasterGlyph {
        RasterGlyph {
            metrics: GlyphMetrics { width: 0, height: 0, bearing_x: 0, bearing_y: 0, advance: 3 << 6 },
            coverage: Vec::new(),
        }
    }

    #[test]
    fn size_is_measured_box_plus_padding() {
        let bmp = compose_text_bitmap(&[block(), space(), block()], Color::WHITE, Color::BLACK, 2).unwrap();
        assert_eq!((bmp.width, bmp.height), (4 + 3 + 4 + 4, 3 + 4));
        assert_eq!(bmp.pixels.len(), (bmp.width * bmp.height * 4) as usize);
    }

    #[test]
    fn background_fills_untouched_pixels() {
        let bg = Color::rgb(0.0, 0.0, 1.0);
        let bmp = compose_text_bitmap(&[block()], Color::WHITE, bg, 1).unwrap();
        assert_eq!(bmp.pixel(0, 0), [0, 0, 255, 255]);
    }

    #[test]
    fn opaque_text_overwrites_background() {
        let bmp = compose_text_bitmap(&[block()], Color::rgb(1.0, 0.0, 0.0), Color::BLACK, 1).unwrap();
        // padding 1 + bearing 1 => first glyph column at x = 2, top row at y = 1.
        assert_eq!(bmp.pixel(2, 1), [255, 0, 0, 255]);
        assert_eq!(bmp.pixel(1, 1), [0, 0, 0, 255]);
    }

    #[test]
    fn transparent_background_keeps_text_color_with_scaled_alpha() {
        let text = Color::new(0.0, 1.0, 0.0, 0.5);
        let bmp = compose_text_bitmap(&[block()], text, Color::TRANSPARENT, 0).unwrap();
        assert_eq!(bmp.pixel(1, 0), [0, 255, 0, 128]);
        assert_eq!(bmp.pixel(0, 0), [0, 0, 0, 0]);
    }

    #[test]
    fn partial_coverage_blends_over_background() {
        let mut g = block();
        g.coverage = vec![128; 6];
        let bmp = compose_text_bitmap(&[g], Color::WHITE, Color::BLACK, 0).unwrap();
        let [r, _, _, a] = bmp.pixel(1, 0);
        assert_eq!(a, 255);
        assert!((127..=129).contains(&r));
    }

    #[test]
    fn nothing_to_measure_is_an_error() {
        assert!(matches!(
            compose_text_bitmap(&[], Color::WHITE, Color::BLACK, 4),
            Err(TextError::EmptyText)
        ));
    }

    // ── texture limits ────────────────────────────────────────────────────

    /// Downlevel devices cap 2D textures at 2048 px.
    const DOWNLEVEL_LIMIT: u32 = 2048;

    #[test]
    fn long_caption_is_rejected_before_upload() {
        let mut wide = block();
        wide.metrics.advance = 24 << 6;
        let glyphs = vec![wide; 100];
        let bmp = compose_text_bitmap(&glyphs, Color::WHITE, Color::BLACK, 6).unwrap();
        assert_eq!(bmp.width, 2412);
        assert!(matches!(
            check_texture_size(bmp.width, bmp.height, DOWNLEVEL_LIMIT),
            Err(TextError::TooLarge { width: 2412, limit: DOWNLEVEL_LIMIT, .. })
        ));
    }

    #[test]
    fn tall_bitmap_is_rejected() {
        assert!(check_texture_size(10, DOWNLEVEL_LIMIT + 1, DOWNLEVEL_LIMIT).is_err());
    }

    #[test]
    fn exactly_the_limit_fits() {
        assert!(check_texture_size(DOWNLEVEL_LIMIT, DOWNLEVEL_LIMIT, DOWNLEVEL_LIMIT).is_ok());
        let bmp = compose_text_bitmap(&[block()], Color::WHITE, Color::BLACK, 2).unwrap();
        assert!(check_texture_size(bmp.width, bmp.height, DOWNLEVEL_LIMIT).is_ok());
    }
}
