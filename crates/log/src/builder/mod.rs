//! Logger builder implementation

#[macro_use]
mod format;

use tracing_subscriber::{
    EnvFilter, Layer, Registry,
    fmt,
    layer::{Layered, SubscriberExt},
    util::SubscriberInitExt,
};

use crate::config::{Config, Format};
use crate::error::{LogError, LogResult};

type BoxedLayer = Box<dyn Layer<Layered<EnvFilter, Registry>> + Send + Sync>;

/// Logger builder
#[derive(Debug)]
pub struct LoggerBuilder {
    config: Config,
}

impl LoggerBuilder {
    /// Create builder from config
    #[must_use]
    pub fn from_config(config: Config) -> Self {
        Self { config }
    }

    /// Build and install the global subscriber
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Filter string cannot be parsed
    /// - A global subscriber is already installed
    pub fn build(self) -> LogResult<()> {
        let filter = EnvFilter::try_new(&self.config.level).map_err(|e| LogError::Filter {
            filter: self.config.level.clone(),
            reason: e.to_string(),
        })?;

        let writer = self.config.writer.make_writer();
        let display = &self.config.display;
        let colors = display.colors_for(self.config.writer);

        let layer: BoxedLayer = match self.config.format {
            Format::Pretty => {
                display_layer!(fmt::layer().pretty().with_writer(writer), display, colors)
            }
            Format::Compact => {
                display_layer!(fmt::layer().compact().with_writer(writer), display, colors)
            }
            Format::Json => display_layer!(
                fmt::layer()
                    .json()
                    .with_writer(writer)
                    .with_current_span(true)
                    .with_span_list(display.span_list)
                    .flatten_event(display.flatten),
                display,
                colors
            ),
        };

        Registry::default()
            .with(filter)
            .with(layer)
            .try_init()
            .map_err(|e| LogError::Init(e.to_string()))?;

        tracing::debug!(
            level = %self.config.level,
            format = ?self.config.format,
            colors,
            "logger installed"
        );
        Ok(())
    }
}
