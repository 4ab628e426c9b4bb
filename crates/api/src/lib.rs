#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! # regviz API
//!
//! HTTP surface of the regviz backend.
//!
//! This crate provides:
//! - [`create_router`] -- the axum [`Router`](axum::Router) with the validation routes
//! - [`ApiConfig`] -- layered server configuration (defaults, TOML file, `REGVIZ_*` env)
//! - [`serve`] / [`serve_with_shutdown`] -- bind and run until a shutdown signal
//!
//! `POST /api/validate`, `/api/parse-tree` and `/api/railroad` share one
//! handler and one response contract; the diagram routes keep older clients
//! working.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod server;
pub mod state;

pub use config::ApiConfig;
pub use error::ServerError;
pub use router::create_router;
pub use server::{init_logging, serve, serve_with_shutdown, shutdown_signal};
pub use state::AppState;
