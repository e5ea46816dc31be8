use std::path::{Path, PathBuf};

use super::bake::{compose_text_bitmap, RasterGlyph, TextBitmap};
use super::error::TextError;
use super::metrics::GlyphMetrics;
use super::utf8::decode_utf8;
use crate::paint::Color;

/// A parsed font face.
///
/// Kept alive after loading so arbitrary strings can be baked later at any
/// pixel height.
pub struct FontFace {
    font: fontdue::Font,
    origin: Option<PathBuf>,
}

impl FontFace {
    /// Parses a TrueType or OpenType face from raw bytes.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, TextError> {
        let font = fontdue::Font::from_bytes(bytes, fontdue::FontSettings::default())
            .map_err(|e| TextError::Parse(e.to_string()))?;
        Ok(Self { font, origin: None })
    }

    pub fn open(path: impl AsRef<Path>) -> Result<Self, TextError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| TextError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut face = Self::from_bytes(&bytes)?;
        face.origin = Some(path.to_path_buf());
        Ok(face)
    }

    /// File the face was read from, if any.
    pub fn origin(&self) -> Option<&Path> {
        self.origin.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.font.name()
    }

    /// Rasterizes `ch` at `pixel_height`. `None` if the face has no glyph for it.
    pub fn rasterize(&self, ch: char, pixel_height: u32) -> Option<RasterGlyph> {
        if self.font.lookup_glyph_index(ch) == 0 && !ch.is_whitespace() {
            return None;
        }
        let (metrics, coverage) = self.font.rasterize(ch, pixel_height as f32);
        Some(RasterGlyph {
            metrics: GlyphMetrics::from_fontdue(&metrics),
            coverage,
        })
    }

    /// Decodes `text` as UTF-8 and bakes it into one RGBA bitmap.
    ///
    /// Code points the face cannot render are skipped; if none remain the
    /// result is [`TextError::EmptyText`].
    pub fn bake(
        &self,
        text: &[u8],
        text_color: Color,
        background: Color,
        padding: u32,
        pixel_height: u32,
    ) -> Result<TextBitmap, TextError> {
        let glyphs: Vec<RasterGlyph> = decode_utf8(text)
            .into_iter()
            .filter_map(char::from_u32)
            .filter_map(|ch| {
                let glyph = self.rasterize(ch, pixel_height);
                if glyph.is_none() {
                    log::debug!("no glyph for U+{:04X}; skipped", ch as u32);
                }
                glyph
            })
            .collect();
        compose_text_bitmap(&glyphs, text_color, background, padding)
    }
}

impl std::fmt::Debug for FontFace {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontFace")
            .field("name", &self.font.name())
            .field("origin", &self.origin)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn garbage_bytes_do_not_parse() {
        assert!(matches!(FontFace::from_bytes(b"not a font"), Err(TextError::Parse(_))));
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = FontFace::open("/definitely/not/here.ttf").unwrap_err();
        assert!(matches!(err, TextError::Io { .. }));
        assert!(err.to_string().contains("here.ttf"));
    }
}
