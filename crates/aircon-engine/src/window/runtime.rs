use anyhow::{Context, Result};
use ouroboros::self_referencing;

use winit::application::ApplicationHandler;
use winit::dpi::LogicalSize;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::window::{Window, WindowId};

use crate::core::{logical_viewport, App, AppControl, FrameCtx, WindowCtx};
use crate::device::{Gpu, GpuInit};
use crate::input::platform::winit::translate_window_event;
use crate::input::{InputFrame, InputState};
use crate::time::{FrameClock, FramePacer};

/// Window and loop configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub title: String,
    /// Requested client area in logical pixels.
    pub size: (f64, f64),

    /// Sleep between frames to hold this rate. `None` runs at the present rate.
    pub target_fps: Option<u32>,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            title: "aircon".to_string(),
            size: (800.0, 800.0),
            target_fps: None,
        }
    }
}

/// Owns the event loop for a single window.
pub struct Runtime;

impl Runtime {
    /// Blocks until the window closes or the app returns `Exit`.
    ///
    /// An error raised while opening the window or the GPU is returned after
    /// the loop has shut down.
    pub fn run<A: App + 'static>(config: RuntimeConfig, gpu_init: GpuInit, app: A) -> Result<()> {
        let event_loop = EventLoop::new().context("cannot create the event loop")?;
        let mut driver = Driver {
            config,
            gpu_init,
            app,
            session: None,
            phase: Phase::Running,
        };

        event_loop
            .run_app(&mut driver)
            .context("event loop stopped with an error")?;

        match driver.phase {
            Phase::Failed(err) => Err(err),
            Phase::Running | Phase::Closing => Ok(()),
        }
    }
}

enum Phase {
    Running,
    Closing,
    Failed(anyhow::Error),
}

/// Everything tied to the open window. The GPU surface borrows the window.
#[self_referencing]
struct Session {
    held: InputState,
    transitions: InputFrame,
    clock: FrameClock,
    pacer: Option<FramePacer>,

    window: Window,

    #[borrows(window)]
    #[covariant]
    gpu: Gpu<'this>,
}

impl Session {
    fn open(event_loop: &ActiveEventLoop, config: &RuntimeConfig, gpu_init: GpuInit) -> Result<Self> {
        let (width, height) = config.size;
        let attributes = Window::default_attributes()
            .with_title(config.title.as_str())
            .with_inner_size(LogicalSize::new(width, height));
        let window = event_loop
            .create_window(attributes)
            .context("cannot open the window")?;

        SessionTryBuilder {
            held: InputState::default(),
            transitions: InputFrame::default(),
            clock: FrameClock::default(),
            pacer: config.target_fps.map(FramePacer::new),
            window,
            gpu_builder: |window| {
                pollster::block_on(Gpu::new(window, gpu_init)).context("cannot initialize the GPU")
            },
        }
        .try_build()
    }

    fn request_redraw(&self) {
        self.with_window(|w| w.request_redraw());
    }
}

struct Driver<A: App> {
    config: RuntimeConfig,
    gpu_init: GpuInit,
    app: A,
    session: Option<Session>,
    phase: Phase,
}

impl<A: App> Driver<A> {
    fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running)
    }

    fn stop(&mut self, event_loop: &ActiveEventLoop, failure: Option<anyhow::Error>) {
        if let Some(err) = failure {
            log::error!("{err:#}");
            self.phase = Phase::Failed(err);
        } else if self.is_running() {
            self.phase = Phase::Closing;
        }
        // The surface must be released while the window still exists.
        self.session = None;
        event_loop.exit();
    }

    /// Reconfigures the surface and reports the logical size to the app.
    fn resized(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let (physical, viewport) = session.with_window(|w| (w.inner_size(), logical_viewport(w)));
        session.with_gpu_mut(|gpu| gpu.resize(physical));
        log::debug!("viewport now {}x{} logical", viewport.width, viewport.height);

        if viewport.has_area() {
            self.app.on_resize(viewport);
        }
        session.request_redraw();
    }

    fn frame(&mut self) -> AppControl {
        let Some(session) = self.session.as_mut() else {
            return AppControl::Continue;
        };
        let app = &mut self.app;

        session.with_mut(|s| {
            let mut ctx = FrameCtx {
                window: WindowCtx { window: s.window },
                gpu: s.gpu,
                input: s.held,
                input_frame: s.transitions,
                time: s.clock.tick(),
            };
            let control = app.on_frame(&mut ctx);

            s.transitions.clear();
            if let Some(pacer) = s.pacer.as_mut() {
                pacer.wait();
            }
            control
        })
    }

    /// Folds `event` into the input state and hands it to the app.
    fn forward(&mut self, event: &WindowEvent) -> AppControl {
        let Some(session) = self.session.as_mut() else {
            return AppControl::Continue;
        };
        let app = &mut self.app;

        session.with_mut(|s| {
            if let Some(input) = translate_window_event(s.window, s.held, event) {
                s.held.apply_event(s.transitions, input);
            }
            app.on_window_event(event)
        })
    }
}

impl<A: App> ApplicationHandler for Driver<A> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.session.is_some() || !self.is_running() {
            return;
        }

        match Session::open(event_loop, &self.config, self.gpu_init.clone()) {
            Ok(session) => {
                log::info!("opened window \"{}\"", self.config.title);
                self.session = Some(session);
                self.resized();
            }
            Err(err) => self.stop(event_loop, Some(err)),
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        if !self.is_running() {
            event_loop.exit();
            return;
        }

        if self.forward(&event) == AppControl::Exit {
            self.stop(event_loop, None);
            return;
        }

        let control = match event {
            WindowEvent::CloseRequested => {
                log::info!("window closed");
                AppControl::Exit
            }
            WindowEvent::Resized(_) | WindowEvent::ScaleFactorChanged { .. } => {
                self.resized();
                AppControl::Continue
            }
            WindowEvent::RedrawRequested => self.frame(),
            _ => AppControl::Continue,
        };

        if control == AppControl::Exit {
            self.stop(event_loop, None);
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if !self.is_running() {
            event_loop.exit();
            return;
        }

        // The simulation animates every frame, so keep redrawing.
        event_loop.set_control_flow(ControlFlow::Wait);
        if let Some(session) = self.session.as_ref() {
            session.request_redraw();
        }
    }
}
