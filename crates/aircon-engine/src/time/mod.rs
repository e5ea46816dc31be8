//! Frame timing.
//!
//! - `FrameClock` yields one clamped `FrameTime` per presented frame.
//! - `FramePacer` optionally blocks the loop thread until the next frame deadline.

mod frame_clock;
mod pacer;

pub use frame_clock::{FrameClock, FrameTime};
pub use pacer::FramePacer;
