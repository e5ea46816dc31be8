//! Aircon engine crate.
//!
//! Platform and GPU runtime for the air-conditioner simulation: window loop,
//! input translation, frame timing, coordinate mapping, and the immediate-mode
//! primitive and text renderers behind the [`render::Canvas`] seam.

pub mod core;
pub mod device;
pub mod input;
pub mod time;
pub mod window;

pub mod coords;
pub mod logging;
pub mod paint;
pub mod render;
pub mod shape;
pub mod text;
