use std::fmt;
use std::path::PathBuf;

/// Recoverable text failures. None of them invalidate previously loaded state.
#[derive(Debug)]
pub enum TextError {
    /// Font file could not be read.
    Io { path: PathBuf, source: std::io::Error },
    /// Bytes are not a usable font face.
    Parse(String),
    /// The face produced none of the requested glyphs.
    NoGlyphs,
    /// No font has been loaded yet.
    NoFont,
    /// Nothing measurable to bake: empty input or only unsupported characters.
    EmptyText,
    /// The bitmap is wider or taller than the device allows for one texture.
    TooLarge { width: u32, height: u32, limit: u32 },
}

impl fmt::Display for TextError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TextError::Io { path, source } => write!(f, "failed to read font {}: {source}", path.display()),
            TextError::Parse(msg) => write!(f, "failed to parse font: {msg}"),
            TextError::NoGlyphs => f.write_str("font produced no glyphs"),
            TextError::NoFont => f.write_str("no font loaded"),
            TextError::EmptyText => f.write_str("text has no renderable glyphs"),
            TextError::TooLarge { width, height, limit } => {
                write!(f, "text bitmap {width}x{height} exceeds the {limit}px texture limit")
            }
        }
    }
}

impl std::error::Error for TextError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            TextError::Io { source, .. } => Some(source),
            _ => None,
        }
    }
}
