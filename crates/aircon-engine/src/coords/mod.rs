//! Coordinate and geometry types shared across the renderers and the simulation.
//!
//! Canonical CPU space:
//! - Logical pixels (DPI-aware)
//! - Origin top-left
//! - +X right, +Y down
//!
//! Renderers convert to normalized device coordinates on the CPU through
//! [`NdcMapper`] before uploading vertices.

mod ndc;
mod rect;
mod vec2;
mod viewport;

pub use ndc::{NdcMapper, NdcRect};
pub use rect::Rect;
pub use vec2::Vec2;
pub use viewport::Viewport;
