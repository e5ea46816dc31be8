//! Air-conditioner simulation.
//!
//! Owns the simulation record ([`AppState`]), its per-frame update functions,
//! the pixel layout of the unit, the numeric displays and status icons, and
//! the back-to-front composition of a frame. Everything draws through
//! [`aircon_engine::render::Canvas`], so nothing here touches the GPU.

pub mod display;
pub mod icons;
pub mod input;
pub mod layout;
pub mod palette;
pub mod scene;
pub mod state;
pub mod update;

#[cfg(test)]
pub(crate) mod testing;

pub use display::{DisplayStyle, NumericDisplay, ProportionalDisplay, SevenSegmentDisplay};
pub use icons::{StatusIcon, select_status_icon};
pub use input::{Edges, FrameInput, Latches};
pub use layout::Layout;
pub use scene::draw_scene;
pub use state::{AppState, Tuning, TEMP_MAX, TEMP_MIN};
pub use update::step;
