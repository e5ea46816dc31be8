//! Immediate-mode GPU renderers.

mod common;
mod primitive;
mod text;

pub use primitive::PrimitiveRenderer;
pub use text::{TextRenderer, TextTexture};
