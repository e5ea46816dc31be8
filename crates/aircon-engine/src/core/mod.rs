//! Contracts between the runtime loop and the application.
//!
//! The runtime owns the window, GPU and input plumbing; applications implement
//! [`App`] and receive a [`FrameCtx`] once per frame.

mod app;
mod ctx;

pub use app::{App, AppControl};
pub use ctx::{FrameCtx, WindowCtx};
pub(crate) use ctx::logical_viewport;
