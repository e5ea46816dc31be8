//! Font handling and text geometry.
//!
//! Everything here is CPU-only: parsing and rasterizing with fontdue, glyph
//! metrics, string measurement and layout, UTF-8 decoding and compositing of
//! baked text bitmaps. `render::TextRenderer` uploads the results.

mod bake;
mod error;
mod face;
mod metrics;
mod utf8;

pub use bake::{check_texture_size, compose_text_bitmap, RasterGlyph, TextBitmap};
pub use error::TextError;
pub use face::FontFace;
pub use metrics::{layout_glyphs, measure_glyphs, GlyphMetrics, PlacedGlyph, TextMetrics};
pub use utf8::decode_utf8;

/// Characters rasterized when a font is loaded for `draw_text`.
pub const PRELOADED_CHARSET: &str = " -0123456789CFPSfpsdtm.";

/// Pixel height used when callers do not pick one.
pub const DEFAULT_PIXEL_HEIGHT: u32 = 48;
