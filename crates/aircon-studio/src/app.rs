use anyhow::{Context, Result};

use aircon_engine::coords::{Rect, Vec2, Viewport};
use aircon_engine::core::{App, AppControl, FrameCtx};
use aircon_engine::input::{InputFrame, InputState, Key, MouseButton};
use aircon_engine::paint::Color;
use aircon_engine::render::{
    Canvas, Painter, PrimitiveRenderer, RenderCtx, TextRenderer, TextTexture,
};
use aircon_engine::window::CursorIcon;
use aircon_sim::{AppState, DisplayStyle, FrameInput, Layout, draw_scene, palette, step};

use crate::config::StudioConfig;

const OVERLAY_ORIGIN: Vec2 = Vec2::new(12.0, 10.0);
const OVERLAY_SCALE: f32 = 0.4;
const OVERLAY_LINE_GAP: f32 = 4.0;
const CAPTION_PADDING: u32 = 6;

// ── renderers ─────────────────────────────────────────────────────────────

/// GPU-side state, created on the first frame once a device exists.
struct Renderers {
    prims: PrimitiveRenderer,
    text: TextRenderer,
    caption: Option<TextTexture>,
    display: DisplayStyle,
}

impl Renderers {
    fn create(rctx: &RenderCtx<'_>, viewport: Viewport, config: &StudioConfig) -> Result<Self> {
        let prims = PrimitiveRenderer::new(rctx.device, rctx.surface_format, viewport)
            .context("failed to create primitive renderer")?;
        let mut text = TextRenderer::new(rctx.device, rctx.surface_format, viewport)
            .context("failed to create text renderer")?;

        load_first_font(rctx, &mut text, config);

        let caption = if text.has_font() {
            match text.create_text_texture(
                rctx,
                &config.caption,
                palette::OVERLAY_TEXT,
                Color::TRANSPARENT,
                CAPTION_PADDING,
                config.caption_pixel_height,
            ) {
                Ok(tex) => Some(tex),
                Err(err) => {
                    log::warn!("caption not baked: {err}");
                    None
                }
            }
        } else {
            None
        };

        let display = config.display.unwrap_or(if text.has_font() {
            DisplayStyle::Text
        } else {
            DisplayStyle::Segments
        });
        log::info!("numeric display: {display:?}");

        Ok(Self { prims, text, caption, display })
    }

    fn resize(&mut self, viewport: Viewport) {
        self.prims.resize(viewport);
        self.text.resize(viewport);
    }
}

fn load_first_font(rctx: &RenderCtx<'_>, text: &mut TextRenderer, config: &StudioConfig) {
    for path in &config.font_candidates {
        match text.load_font(rctx, path, config.font_pixel_height) {
            Ok(_) => return,
            Err(err) => log::debug!("font {} skipped: {err}", path.display()),
        }
    }
    log::warn!("no usable font found, text output disabled");
}

// ── input ─────────────────────────────────────────────────────────────────

/// Samples the levels the simulation consumes. A press and release inside
/// one frame still reads as down for that frame.
fn sample_input(input: &InputState, frame: &InputFrame, dt: f32) -> FrameInput {
    let key = |k: Key| input.key_down(k) || frame.key_pressed(k);
    FrameInput {
        dt,
        pointer: input.pointer.unwrap_or(Vec2::new(-1.0, -1.0)),
        mouse_down: input.button_down(MouseButton::Left) || frame.button_pressed(MouseButton::Left),
        up: key(Key::ArrowUp),
        down: key(Key::ArrowDown),
        space: key(Key::Space),
    }
}

// ── diagnostics ───────────────────────────────────────────────────────────

/// Exponentially smoothed frame time.
#[derive(Debug, Clone)]
struct FrameStats {
    avg_dt: f32,
}

impl FrameStats {
    const SMOOTHING: f32 = 0.1;

    fn new() -> Self {
        Self { avg_dt: 0.0 }
    }

    fn record(&mut self, dt: f32) {
        self.avg_dt = if self.avg_dt <= 0.0 {
            dt
        } else {
            self.avg_dt + (dt - self.avg_dt) * Self::SMOOTHING
        };
    }

    fn fps(&self) -> f32 {
        if self.avg_dt > 0.0 { 1.0 / self.avg_dt } else { 0.0 }
    }

    fn lines(&self) -> [String; 2] {
        [
            format!("FPS {:.0}", self.fps()),
            format!("dt {:.1} ms", self.avg_dt * 1000.0),
        ]
    }
}

fn draw_overlay(canvas: &mut dyn Canvas, stats: &FrameStats) {
    let mut y = OVERLAY_ORIGIN.y;
    for line in stats.lines() {
        let Some(m) = canvas.measure_text(&line, OVERLAY_SCALE) else {
            return;
        };
        canvas.draw_text(&line, OVERLAY_ORIGIN.x, y, OVERLAY_SCALE, palette::OVERLAY_TEXT);
        y += m.height + OVERLAY_LINE_GAP;
    }
}

/// Caption rectangle at native size, top-centered on `anchor`.
fn caption_rect(anchor: Vec2, size: (f32, f32)) -> Rect {
    Rect::new(anchor.x - size.0 * 0.5, anchor.y, size.0, size.1)
}

// ── app ───────────────────────────────────────────────────────────────────

pub struct AirconApp {
    config: StudioConfig,
    state: AppState,
    viewport: Viewport,
    layout: Layout,
    renderers: Option<Renderers>,
    stats: FrameStats,
    hovering: bool,
}

impl AirconApp {
    pub fn new(config: StudioConfig) -> Self {
        let viewport = Viewport::new(800.0, 800.0);
        Self {
            config,
            state: AppState::default(),
            viewport,
            layout: Layout::new(viewport),
            renderers: None,
            stats: FrameStats::new(),
            hovering: false,
        }
    }
}

impl App for AirconApp {
    fn on_resize(&mut self, viewport: Viewport) {
        log::debug!("resize {}x{}", viewport.width, viewport.height);
        self.viewport = viewport;
        self.layout = Layout::new(viewport);
        if let Some(r) = self.renderers.as_mut() {
            r.resize(viewport);
        }
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        if ctx.input_frame.key_pressed(Key::Escape) {
            log::info!("escape pressed, exiting");
            return AppControl::Exit;
        }

        // ── Simulate ──────────────────────────────────────────────────────
        let input = sample_input(ctx.input, ctx.input_frame, ctx.time.dt);
        step(&mut self.state, &input, &self.layout);
        self.stats.record(ctx.time.dt);

        let hovering = self.layout.is_interactive(input.pointer);
        if hovering != self.hovering {
            self.hovering = hovering;
            ctx.window.set_cursor(if hovering { CursorIcon::Pointer } else { CursorIcon::Default });
        }

        // ── Render ────────────────────────────────────────────────────────
        let renderers = &mut self.renderers;
        let config = &self.config;
        let state = &self.state;
        let layout = &self.layout;
        let stats = &self.stats;
        let viewport = self.viewport;
        let mut failure = None;

        let control = ctx.render(palette::BACKGROUND, |rctx, target| {
            if renderers.is_none() {
                match Renderers::create(rctx, viewport, config) {
                    Ok(created) => *renderers = Some(created),
                    Err(err) => {
                        failure = Some(err);
                        return;
                    }
                }
            }
            let Some(r) = renderers.as_mut() else { return };

            let mut painter = Painter::new(rctx, target, &mut r.prims, &mut r.text);
            draw_scene(&mut painter, state, layout, r.display.display());
            if let Some(caption) = &r.caption {
                painter.draw_texture(caption, caption_rect(layout.caption_anchor, caption.size()));
            }
            draw_overlay(&mut painter, stats);
        });

        if let Some(err) = failure {
            log::error!("renderer setup failed: {err:#}");
            return AppControl::Exit;
        }
        control
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── input ─────────────────────────────────────────────────────────────

    #[test]
    fn held_keys_read_as_down() {
        let mut state = InputState::default();
        state.keys.insert(Key::ArrowUp);
        state.buttons.insert(MouseButton::Left);
        state.pointer = Some(Vec2::new(10.0, 20.0));

        let input = sample_input(&state, &InputFrame::default(), 0.016);
        assert!(input.up && !input.down && !input.space);
        assert!(input.mouse_down);
        assert_eq!(input.pointer, Vec2::new(10.0, 20.0));
        assert_eq!(input.dt, 0.016);
    }

    #[test]
    fn tap_within_one_frame_still_counts() {
        let mut frame = InputFrame::default();
        frame.keys.pressed.insert(Key::Space);
        frame.buttons.pressed.insert(MouseButton::Left);

        let input = sample_input(&InputState::default(), &frame, 0.0);
        assert!(input.space);
        assert!(input.mouse_down);
    }

    #[test]
    fn pointer_outside_window_hits_nothing() {
        let input = sample_input(&InputState::default(), &InputFrame::default(), 0.0);
        let layout = Layout::new(Viewport::new(800.0, 800.0));
        assert!(!layout.is_interactive(input.pointer));
    }

    // ── diagnostics ───────────────────────────────────────────────────────

    #[test]
    fn first_sample_sets_average() {
        let mut s = FrameStats::new();
        s.record(0.02);
        assert_eq!(s.avg_dt, 0.02);
        assert!((s.fps() - 50.0).abs() < 1e-3);
    }

    #[test]
    fn average_moves_toward_new_samples() {
        let mut s = FrameStats::new();
        s.record(0.02);
        s.record(0.01);
        assert!(s.avg_dt < 0.02 && s.avg_dt > 0.01);
    }

    #[test]
    fn overlay_lines_use_preloaded_characters() {
        let mut s = FrameStats::new();
        s.record(1.0 / 60.0);
        let [fps, dt] = s.lines();
        assert_eq!(fps, "FPS 60");
        assert_eq!(dt, "dt 16.7 ms");
        let charset = aircon_engine::text::PRELOADED_CHARSET;
        assert!(fps.chars().chain(dt.chars()).all(|c| charset.contains(c)));
    }

    #[test]
    fn no_stats_reads_zero_fps() {
        assert_eq!(FrameStats::new().fps(), 0.0);
    }

    #[test]
    fn caption_is_centered_under_anchor() {
        let r = caption_rect(Vec2::new(400.0, 616.0), (200.0, 30.0));
        assert_eq!(r, Rect::new(300.0, 616.0, 200.0, 30.0));
    }
}
