//! Server configuration.
//!
//! Sources are merged in order, later ones winning:
//! built-in defaults, an optional TOML file, then `REGVIZ_*` environment
//! variables (nested keys split on `__`, e.g. `REGVIZ_LIMITS__NEST_LIMIT=64`).
//! The binary applies its CLI flags on top.

use std::net::{Ipv4Addr, SocketAddr};
use std::path::{Path, PathBuf};

use figment::Figment;
use figment::providers::{Env, Format, Serialized, Toml};
use regviz_core::Limits;
use serde::{Deserialize, Serialize};

use crate::error::ServerError;

/// Prefix for environment overrides.
pub const ENV_PREFIX: &str = "REGVIZ_";

/// Env keys under [`ENV_PREFIX`] that belong to other consumers:
/// `REGVIZ_LOG` is a filter string read by `regviz-log`, `REGVIZ_CONFIG`
/// is the config file path read by the binary.
const FOREIGN_ENV_KEYS: &[&str] = &["log", "config"];

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    /// Listen address
    pub bind: SocketAddr,

    /// Directory of client assets served for any unmatched `GET`
    pub static_dir: Option<PathBuf>,

    /// Largest accepted request body, in bytes
    pub max_body_bytes: usize,

    /// Answer cross-origin requests from any origin
    pub cors: bool,

    /// Pattern compilation limits
    pub limits: Limits,

    /// Logger configuration
    pub log: regviz_log::Config,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from((Ipv4Addr::LOCALHOST, 5000)),
            static_dir: None,
            max_body_bytes: 64 * 1024,
            cors: false,
            limits: Limits::default(),
            log: regviz_log::Config::auto(),
        }
    }
}

impl ApiConfig {
    /// The merged provider chain, for callers that want to add their own layers.
    pub fn figment(file: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if let Some(path) = file {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(
            Env::prefixed(ENV_PREFIX)
                .split("__")
                .ignore(FOREIGN_ENV_KEYS),
        )
    }

    /// Load configuration from defaults, `file` and the environment.
    ///
    /// A `file` that was asked for but does not exist is an error.
    pub fn load(file: Option<&Path>) -> Result<Self, ServerError> {
        if let Some(path) = file.filter(|path| !path.is_file()) {
            return Err(ServerError::ConfigFile(path.to_path_buf()));
        }
        let config: Self = Self::figment(file).extract()?;
        tracing::debug!(?config, "configuration loaded");
        Ok(config)
    }
}
