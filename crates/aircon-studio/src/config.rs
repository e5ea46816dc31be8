use std::env;
use std::path::PathBuf;

use aircon_sim::DisplayStyle;

pub const FONT_ENV: &str = "AIRCON_FONT";
pub const DISPLAY_ENV: &str = "AIRCON_DISPLAY";
pub const VSYNC_ENV: &str = "AIRCON_VSYNC";

/// Driver settings. Defaults can be overridden through the environment, see
/// [`StudioConfig::from_env`].
#[derive(Debug, Clone)]
pub struct StudioConfig {
    /// Tried in order; the first that loads wins.
    pub font_candidates: Vec<PathBuf>,
    pub font_pixel_height: u32,

    /// `None` picks text when a font loaded and segments otherwise.
    pub display: Option<DisplayStyle>,

    /// Baked once and drawn under the bowl.
    pub caption: String,
    pub caption_pixel_height: u32,

    pub target_fps: u32,
    pub vsync: bool,
}

impl Default for StudioConfig {
    fn default() -> Self {
        Self {
            font_candidates: [
                "assets/fonts/DejaVuSans.ttf",
                "/usr/share/fonts/truetype/dejavu/DejaVuSans.ttf",
                "/usr/share/fonts/TTF/DejaVuSans.ttf",
                "/usr/share/fonts/dejavu-sans-fonts/DejaVuSans.ttf",
                "/System/Library/Fonts/Supplemental/Arial.ttf",
                "C:\\Windows\\Fonts\\arial.ttf",
            ]
            .into_iter()
            .map(PathBuf::from)
            .collect(),
            font_pixel_height: 48,
            display: None,
            caption: "Space empties the bowl · Esc quits".to_string(),
            caption_pixel_height: 22,
            target_fps: 75,
            vsync: true,
        }
    }
}

impl StudioConfig {
    /// Defaults plus:
    ///
    /// - `AIRCON_FONT`: font path tried before the built-in candidates
    /// - `AIRCON_DISPLAY`: `segments` or `text`
    /// - `AIRCON_VSYNC`: `0`/`false`/`off` disables vsync
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply(|key| env::var(key).ok());
        config
    }

    fn apply(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(path) = var(FONT_ENV).filter(|p| !p.trim().is_empty()) {
            self.font_candidates.insert(0, PathBuf::from(path.trim()));
        }

        if let Some(raw) = var(DISPLAY_ENV) {
            match raw.parse::<DisplayStyle>() {
                Ok(style) => self.display = Some(style),
                Err(err) => log::warn!("{DISPLAY_ENV}: {err}, using default"),
            }
        }

        if let Some(raw) = var(VSYNC_ENV) {
            self.vsync = !matches!(raw.trim().to_ascii_lowercase().as_str(), "0" | "false" | "off" | "no");
        }
    }

    pub fn present_mode(&self) -> wgpu::PresentMode {
        if self.vsync {
            wgpu::PresentMode::Fifo
        } else {
            wgpu::PresentMode::AutoNoVsync
        }
    }
}
