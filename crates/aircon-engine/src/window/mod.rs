//! Window and event loop.
//!
//! Owns the winit `EventLoop` and the single application window, and wires
//! them to the GPU layer, the input subsystem and frame timing.

mod runtime;

pub use runtime::{Runtime, RuntimeConfig};
pub use winit::window::CursorIcon;
