//! Default values shared across the crop engine.

/// Fraction of the bounding rect left as padding on each side when a
/// free-form crop window is first laid out.
pub const INITIAL_CROP_INSET: f64 = 0.1;

/// Distance (in view pixels) within which an edge snaps flush to the bounds.
pub const DEFAULT_SNAP_RADIUS: f64 = 3.0;

/// Radius (in view pixels) of the touchable area around a handle.
/// Based on the recommended 48px touch target.
pub const DEFAULT_HANDLE_RADIUS: f64 = 24.0;

/// Smallest side length an edge drag may shrink the crop window to.
pub const DEFAULT_MIN_CROP_LENGTH: f64 = 40.0;
