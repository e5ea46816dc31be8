use winit::event::WindowEvent;

use crate::coords::Viewport;

use super::ctx::FrameCtx;

/// Returned by app callbacks to keep running or leave the loop.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Application contract implemented by binaries.
pub trait App {
    /// Raw window events, delivered after input translation.
    fn on_window_event(&mut self, event: &WindowEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    /// New logical drawable size.
    ///
    /// Called once after the window exists and again on every resize or scale
    /// factor change, before the next frame.
    fn on_resize(&mut self, viewport: Viewport) {
        let _ = viewport;
    }

    /// One rendered frame.
    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl;
}
