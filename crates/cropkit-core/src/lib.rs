//! # CropKit Core
//!
//! Core types shared by the CropKit crates.
//! Provides the geometry primitives the crop engine works in, the option
//! types hosts configure it with, and the error taxonomy for both.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod options;

pub use error::{ConfigError, CropError, Error, Result};
pub use geometry::{Bounds, Point};
pub use options::{AspectRatio, CropOptions, GuidelinesMode};
