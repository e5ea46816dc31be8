mod app;
mod config;

use anyhow::Result;

use aircon_engine::device::GpuInit;
use aircon_engine::logging::{LoggingConfig, init_logging};
use aircon_engine::window::{Runtime, RuntimeConfig};

use crate::app::AirconApp;
use crate::config::StudioConfig;

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let config = StudioConfig::from_env();
    log::info!(
        "starting: display {:?}, {} fps target, {} font candidates",
        config.display,
        config.target_fps,
        config.font_candidates.len()
    );

    let runtime = RuntimeConfig {
        title: "Air Conditioner".to_string(),
        size: (800.0, 800.0),
        target_fps: Some(config.target_fps),
    };

    // Palette values are meant to reach the screen as given.
    let gpu = GpuInit {
        prefer_srgb: false,
        present_mode: config.present_mode(),
        ..GpuInit::default()
    };

    Runtime::run(runtime, gpu, AirconApp::new(config))
}
