//! Server lifecycle errors.
//!
//! Validation failures never show up here: they are ordinary
//! `{"valid": false}` responses.

use std::net::SocketAddr;
use std::path::PathBuf;

/// Errors that stop the server from starting or running.
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    /// Configuration could not be loaded or merged.
    #[error("configuration error: {0}")]
    Config(#[from] figment::Error),

    /// The requested configuration file does not exist.
    #[error("configuration file not found: {}", .0.display())]
    ConfigFile(PathBuf),

    /// The configured static asset directory does not exist.
    #[error("static asset directory not found: {}", .0.display())]
    StaticDir(PathBuf),

    /// The logging subscriber could not be installed.
    #[error("logging error: {0}")]
    Log(#[from] regviz_log::LogError),

    /// The listener could not be bound.
    #[error("failed to bind {addr}: {source}")]
    Bind {
        /// Address that was requested.
        addr: SocketAddr,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The server stopped with an I/O error.
    #[error("server error: {0}")]
    Serve(#[source] std::io::Error),
}
