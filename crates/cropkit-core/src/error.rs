//! Error handling for CropKit
//!
//! The crop engine itself is pure geometry over validated inputs, so the
//! taxonomy is narrow:
//! - Configuration errors (rejected at the configuration boundary)
//! - Crop export errors (mapping a view-space window into image pixels)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Configuration error type
///
/// Raised synchronously when a host hands the engine an invalid option.
/// The engine state is left unchanged whenever one of these is returned.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// One of the aspect ratio components is zero or negative
    #[error("Cannot set aspect ratio to {x}:{y}; both values must be greater than 0")]
    InvalidAspectRatio {
        /// The horizontal component.
        x: i32,
        /// The vertical component.
        y: i32,
    },

    /// Snap radius is not a positive number
    #[error("Snap radius must be > 0, got {0}")]
    InvalidSnapRadius(f64),

    /// Handle hit radius is not a positive number
    #[error("Handle radius must be > 0, got {0}")]
    InvalidHandleRadius(f64),

    /// Minimum crop length is negative or not finite
    #[error("Minimum crop length must be >= 0, got {0}")]
    InvalidMinCropLength(f64),
}

/// Crop export error type
///
/// Represents failures mapping the view-space crop window onto the
/// source image.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CropError {
    /// The image-to-view transform has a non-positive scale
    #[error("Invalid image scale {scale_x}x{scale_y}")]
    InvalidScale {
        /// Horizontal scale factor.
        scale_x: f64,
        /// Vertical scale factor.
        scale_y: f64,
    },

    /// The source image has no pixels
    #[error("Cannot crop an empty image")]
    EmptyImage,
}

/// Main error type for CropKit
///
/// A unified error type that can represent any error from all layers.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Crop export error
    #[error(transparent)]
    Crop(#[from] CropError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
