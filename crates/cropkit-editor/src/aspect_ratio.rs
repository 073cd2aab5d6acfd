//! Aspect ratio arithmetic.
//!
//! Ratios are always width / height as a positive float. Non-positive ratios
//! are rejected when options are validated, so nothing here checks for them.

use cropkit_core::Bounds;

/// Ratio of the rectangle with the given sides.
pub fn calculate_aspect_ratio(left: f64, top: f64, right: f64, bottom: f64) -> f64 {
    (right - left) / (bottom - top)
}

/// Ratio of the given bounds.
pub fn aspect_ratio_of(bounds: &Bounds) -> f64 {
    bounds.width() / bounds.height()
}

/// Width a rectangle of `height` needs to have `ratio`.
pub fn calculate_width(height: f64, ratio: f64) -> f64 {
    height * ratio
}

/// Height a rectangle of `width` needs to have `ratio`.
pub fn calculate_height(width: f64, ratio: f64) -> f64 {
    width / ratio
}

/// Left side given the other three sides and the target ratio.
pub fn calculate_left(top: f64, right: f64, bottom: f64, ratio: f64) -> f64 {
    right - calculate_width(bottom - top, ratio)
}

/// Top side given the other three sides and the target ratio.
pub fn calculate_top(left: f64, right: f64, bottom: f64, ratio: f64) -> f64 {
    bottom - calculate_height(right - left, ratio)
}

/// Right side given the other three sides and the target ratio.
pub fn calculate_right(left: f64, top: f64, bottom: f64, ratio: f64) -> f64 {
    left + calculate_width(bottom - top, ratio)
}

/// Bottom side given the other three sides and the target ratio.
pub fn calculate_bottom(left: f64, top: f64, right: f64, ratio: f64) -> f64 {
    top + calculate_height(right - left, ratio)
}
