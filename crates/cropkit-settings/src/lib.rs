//! CropKit Settings Crate
//!
//! Loads, validates and persists the crop engine configuration.

pub mod config;
pub mod error;

pub use config::{default_config_path, Config, ConfigFormat, LoggingSettings};
pub use error::{SettingsError, SettingsResult};
