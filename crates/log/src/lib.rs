//! # regviz Log
//!
//! Installs the global `tracing` subscriber for regviz binaries.
//!
//! ```rust,no_run
//! let config = regviz_log::Config::auto().with_env_overrides();
//! regviz_log::init_with(config)?;
//! tracing::info!(port = 5000, "server starting");
//! # Ok::<(), regviz_log::LogError>(())
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms)]

mod builder;
mod config;
mod error;

pub use builder::LoggerBuilder;
pub use config::{Config, DisplayConfig, Format, WriterConfig};
pub use error::{LogError, LogResult};

/// Initialize with custom configuration
pub fn init_with(config: Config) -> LogResult<()> {
    LoggerBuilder::from_config(config).build()
}
