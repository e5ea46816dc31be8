//! Paint model shared between the simulation and the renderers.
//!
//! Colors are straight (non-premultiplied) RGBA and are blended with
//! `src_alpha / one_minus_src_alpha`.

pub mod color;

pub use color::Color;
