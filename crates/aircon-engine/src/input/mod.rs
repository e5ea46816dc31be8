//! Input subsystem.
//!
//! The public API does not expose winit types. `platform::winit` translates
//! window events into `InputEvent`s; `InputState` folds them into held state
//! and per-frame transitions (`InputFrame`).

mod frame;
pub(crate) mod platform;
mod state;
mod types;

pub use frame::{InputFrame, Transitions};
pub use state::InputState;
pub use types::{InputEvent, Key, MouseButton, Press};
