//! Core module - configuration and environment errors
//!
//! - [`Config`] - console configuration
//! - [`ConfigError`] - configuration errors

pub mod config;
pub mod error;

pub use config::Config;
pub use error::{ConfigError, Result};
