//! GPU rendering subsystem.
//!
//! Renderers are immediate mode: each draw call uploads its geometry and
//! records its own render pass right away, so the order of calls is the
//! painting order. There is no batching and no scene graph.
//!
//! Convention:
//! - callers pass logical pixels (top-left origin, +Y down)
//! - renderers convert to NDC on the CPU with their own stored viewport

mod canvas;
mod ctx;
pub mod shapes;

pub use canvas::{Canvas, Painter};
pub use ctx::{RenderCtx, RenderTarget};
pub use shapes::{PrimitiveRenderer, TextRenderer, TextTexture};
