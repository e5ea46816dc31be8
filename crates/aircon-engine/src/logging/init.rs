use std::sync::Once;

/// Crates that flood `info` with per-frame chatter.
const NOISY: [&str; 3] = ["wgpu_core", "wgpu_hal", "naga"];

/// Logger configuration.
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// `env_logger` filter, e.g. `"debug"` or `"aircon_sim=trace"`.
    /// Overrides `RUST_LOG` when set.
    pub filter: Option<String>,
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: None, write_style: env_logger::WriteStyle::Auto }
    }
}

/// Final filter string: the explicit filter, else `env`, else `info`.
/// Noisy GPU crates are capped at `warn` unless the filter names them.
fn resolve_filter(explicit: Option<String>, env: Option<String>) -> String {
    let usable = |f: &String| !f.trim().is_empty();
    let base = explicit
        .filter(usable)
        .or_else(|| env.filter(usable))
        .unwrap_or_else(|| "info".to_string());

    let mut out = String::new();
    for module in NOISY {
        if !base.contains(module) {
            out.push_str(module);
            out.push_str("=warn,");
        }
    }
    // Later directives win in env_logger, so the user's go last.
    out.push_str(&base);
    out
}

static INIT: Once = Once::new();

/// Installs `env_logger` as the global logger. Later calls do nothing.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let filter = resolve_filter(config.filter, std::env::var("RUST_LOG").ok());
        env_logger::Builder::new()
            .parse_filters(&filter)
            .write_style(config.write_style)
            .init();
        log::debug!("logger installed with filter {filter:?}");
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_info_with_quiet_gpu() {
        let f = resolve_filter(None, None);
        assert!(f.ends_with("info"));
        assert!(f.contains("wgpu_core=warn"));
        assert!(f.contains("naga=warn"));
    }

    #[test]
    fn explicit_filter_beats_environment() {
        let f = resolve_filter(Some("debug".into()), Some("trace".into()));
        assert!(f.ends_with("debug"));
        assert!(!f.contains("trace"));
    }

    #[test]
    fn environment_used_when_nothing_explicit() {
        assert!(resolve_filter(None, Some("aircon_sim=trace".into())).ends_with("aircon_sim=trace"));
    }

    #[test]
    fn naming_a_gpu_crate_lifts_its_cap() {
        let f = resolve_filter(Some("wgpu_hal=debug".into()), None);
        assert!(!f.contains("wgpu_hal=warn"));
        assert!(f.contains("wgpu_core=warn"));
    }

    #[test]
    fn blank_filter_falls_back_to_info() {
        assert!(resolve_filter(Some("  ".into()), None).ends_with("info"));
    }

    #[test]
    fn blank_filter_defers_to_environment() {
        let f = resolve_filter(Some(String::new()), Some("aircon_engine=debug".into()));
        assert!(f.ends_with("aircon_engine=debug"));
    }

    #[test]
    fn blank_environment_falls_back_to_info() {
        assert!(resolve_filter(None, Some(" ".into())).ends_with("info"));
    }
}
