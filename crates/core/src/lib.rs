#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! # regviz Core
//!
//! Pattern validation for the regviz visualizer backend.
//!
//! This crate provides:
//! - [`validate`] -- checks a pattern with the default [`Limits`]
//! - [`Validator`] -- the same check under configured limits
//! - [`ValidationRequest`] / [`ValidationResult`] -- the wire model
//! - [`PatternError`] and [`Diagnostic`] -- why a pattern failed to compile
//!
//! Parse trees and railroad diagrams are built client-side. The backend only
//! answers whether the `regex` engine accepts a pattern and, if not, why.

pub mod diagnostic;
pub mod error;
pub mod request;
pub mod result;
pub mod validator;

pub use diagnostic::Diagnostic;
pub use error::PatternError;
pub use request::ValidationRequest;
pub use result::ValidationResult;
pub use validator::{Limits, Validator, validate};
