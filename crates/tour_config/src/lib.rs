//! Parsing and validation of `tour.toml` project configuration files.
//!
//! This crate reads the project configuration file and produces a strongly-typed
//! [`TourConfig`] describing where lessons live and how they are built.

#![warn(missing_docs)]

pub mod error;
pub mod loader;
pub mod types;

pub use error::ConfigError;
pub use loader::{load_config, load_config_from_str, CONFIG_FILE};
pub use types::*;
