//! Configuration presets for common scenarios

use super::{Config, DisplayConfig, Format, WriterConfig};

const DEVELOPMENT_FILTER: &str = "info,regviz_core=debug,regviz_api=debug,tower_http=debug";
const PRODUCTION_FILTER: &str = "info,tower_http=warn,hyper=warn";

impl Config {
    /// Development configuration in debug builds, production otherwise
    #[must_use]
    pub fn auto() -> Self {
        if cfg!(debug_assertions) {
            Self::development()
        } else {
            Self::production()
        }
    }

    /// Development configuration: pretty output, regviz crates at debug,
    /// request spans from `tower_http` kept
    #[must_use]
    pub fn development() -> Self {
        Self {
            level: DEVELOPMENT_FILTER.to_string(),
            format: Format::Pretty,
            display: DisplayConfig {
                colors: None,
                source: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Production configuration: one JSON object per line on stdout for the
    /// log collector, per-request `tower_http` and `hyper` chatter muted
    #[must_use]
    pub fn production() -> Self {
        Self {
            level: PRODUCTION_FILTER.to_string(),
            format: Format::Json,
            writer: WriterConfig::Stdout,
            display: DisplayConfig {
                colors: Some(false),
                source: false,
                target: false,
                span_list: false,
                flatten: true,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }

    /// Apply `REGVIZ_LOG` (or `RUST_LOG`), `REGVIZ_LOG_FORMAT` and the
    /// `REGVIZ_LOG_TIME` / `REGVIZ_LOG_SOURCE` / `REGVIZ_LOG_COLORS` toggles
    #[must_use]
    pub fn with_env_overrides(self) -> Self {
        self.with_vars(|key| std::env::var(key).ok())
    }

    pub(crate) fn with_vars(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(level) = var("REGVIZ_LOG").or_else(|| var("RUST_LOG")) {
            self.level = level;
        }

        if let Some(format) = var("REGVIZ_LOG_FORMAT") {
            self.format = match format.to_lowercase().as_str() {
                "pretty" => Format::Pretty,
                "json" => Format::Json,
                _ => Format::Compact,
            };
        }

        let flag = |key: &str| var(key).map(|v| v != "0" && v != "false");
        if let Some(time) = flag("REGVIZ_LOG_TIME") {
            self.display.time = time;
        }
        if let Some(source) = flag("REGVIZ_LOG_SOURCE") {
            self.display.source = source;
        }
        if let Some(colors) = flag("REGVIZ_LOG_COLORS") {
            self.display.colors = Some(colors);
        }

        self
    }

    /// Test configuration (no colors, no timestamps)
    #[cfg(test)]
    pub(crate) fn test() -> Self {
        Self {
            level: "trace".to_string(),
            format: Format::Compact,
            display: DisplayConfig {
                colors: Some(false),
                time: false,
                ..DisplayConfig::default()
            },
            ..Self::default()
        }
    }
}
