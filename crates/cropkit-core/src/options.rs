//! Crop engine options
//!
//! Everything a host can tune about the crop window: snapping and hit-test
//! radii, the minimum window size, the fixed aspect ratio and when to show
//! the rule-of-thirds guidelines. Values are validated here, at the
//! configuration boundary, so the geometry code never sees a bad ratio.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_HANDLE_RADIUS, DEFAULT_MIN_CROP_LENGTH, DEFAULT_SNAP_RADIUS};
use crate::error::ConfigError;

/// When the rule-of-thirds guidelines are drawn inside the crop window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GuidelinesMode {
    /// Never show guidelines
    Off,
    /// Show guidelines only while a handle is pressed
    #[default]
    OnTouch,
    /// Always show guidelines
    On,
}

impl fmt::Display for GuidelinesMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Off => write!(f, "off"),
            Self::OnTouch => write!(f, "on_touch"),
            Self::On => write!(f, "on"),
        }
    }
}

/// A validated width:height aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AspectRatio {
    x: i32,
    y: i32,
}

impl AspectRatio {
    /// Square crop window.
    pub const SQUARE: AspectRatio = AspectRatio { x: 1, y: 1 };

    /// Creates a ratio, rejecting zero or negative components.
    pub fn new(x: i32, y: i32) -> Result<Self, ConfigError> {
        if x <= 0 || y <= 0 {
            return Err(ConfigError::InvalidAspectRatio { x, y });
        }
        Ok(Self { x, y })
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    /// Ratio as width / height.
    pub fn value(&self) -> f64 {
        f64::from(self.x) / f64::from(self.y)
    }
}

impl Default for AspectRatio {
    fn default() -> Self {
        Self::SQUARE
    }
}

impl fmt::Display for AspectRatio {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.x, self.y)
    }
}

/// Options for a crop session
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CropOptions {
    /// Distance within which an edge snaps flush to the bounding rect
    pub snap_radius: f64,
    /// Touchable radius around each handle
    pub handle_radius: f64,
    /// Smallest side an edge drag may shrink the window to
    pub min_crop_length: f64,
    /// Whether the window keeps `aspect_ratio_x:aspect_ratio_y`
    pub fixed_aspect_ratio: bool,
    /// Horizontal aspect ratio component
    pub aspect_ratio_x: i32,
    /// Vertical aspect ratio component
    pub aspect_ratio_y: i32,
    /// Guideline display mode
    pub guidelines: GuidelinesMode,
}

impl Default for CropOptions {
    fn default() -> Self {
        Self {
            snap_radius: DEFAULT_SNAP_RADIUS,
            handle_radius: DEFAULT_HANDLE_RADIUS,
            min_crop_length: DEFAULT_MIN_CROP_LENGTH,
            fixed_aspect_ratio: false,
            aspect_ratio_x: 1,
            aspect_ratio_y: 1,
            guidelines: GuidelinesMode::default(),
        }
    }
}

impl CropOptions {
    /// Create new options with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate every option
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.snap_radius > 0.0) {
            return Err(ConfigError::InvalidSnapRadius(self.snap_radius));
        }
        if !(self.handle_radius > 0.0) {
            return Err(ConfigError::InvalidHandleRadius(self.handle_radius));
        }
        if !(self.min_crop_length >= 0.0) || !self.min_crop_length.is_finite() {
            return Err(ConfigError::InvalidMinCropLength(self.min_crop_length));
        }
        self.aspect_ratio()?;
        Ok(())
    }

    /// The configured ratio, validated.
    pub fn aspect_ratio(&self) -> Result<AspectRatio, ConfigError> {
        AspectRatio::new(self.aspect_ratio_x, self.aspect_ratio_y)
    }

    /// Sets both ratio components after validating them.
    pub fn set_aspect_ratio(&mut self, ratio: AspectRatio) {
        self.aspect_ratio_x = ratio.x();
        self.aspect_ratio_y = ratio.y();
    }

    /// Width / height the window is held to when the ratio is fixed.
    pub fn target_aspect_ratio(&self) -> f64 {
        f64::from(self.aspect_ratio_x) / f64::from(self.aspect_ratio_y)
    }

    /// The ratio drags should honour, or `None` in free-form mode.
    pub fn locked_aspect_ratio(&self) -> Option<f64> {
        self.fixed_aspect_ratio.then(|| self.target_aspect_ratio())
    }
}
