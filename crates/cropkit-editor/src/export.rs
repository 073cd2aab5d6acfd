//! Mapping between view space and source image pixels.
//!
//! The host displays the image scaled and translated inside its view. The
//! crop window is kept in view coordinates; this module converts it into
//! the pixel region of the source image the host should extract.

use cropkit_core::{Bounds, CropError};
use serde::{Deserialize, Serialize};

use crate::edge::RectEdges;

/// Scale and translation from image pixels to view pixels.
///
/// Other transformations (rotation, skew) are not supported.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageTransform {
    pub scale_x: f64,
    pub scale_y: f64,
    pub translate_x: f64,
    pub translate_y: f64,
}

impl Default for ImageTransform {
    fn default() -> Self {
        Self::identity()
    }
}

impl ImageTransform {
    pub fn new(scale_x: f64, scale_y: f64, translate_x: f64, translate_y: f64) -> Self {
        Self {
            scale_x,
            scale_y,
            translate_x,
            translate_y,
        }
    }

    pub fn identity() -> Self {
        Self::new(1.0, 1.0, 0.0, 0.0)
    }

    fn validate(&self) -> Result<(), CropError> {
        if !(self.scale_x > 0.0 && self.scale_y > 0.0) {
            return Err(CropError::InvalidScale {
                scale_x: self.scale_x,
                scale_y: self.scale_y,
            });
        }
        Ok(())
    }

    /// Bounds of an `image_width` x `image_height` image as displayed in a
    /// `view_width` x `view_height` view, clipped to the view.
    ///
    /// This is the bounding rect hosts hand to the crop session.
    pub fn displayed_bounds(
        &self,
        image_width: u32,
        image_height: u32,
        view_width: f64,
        view_height: f64,
    ) -> Bounds {
        let display_width = (f64::from(image_width) * self.scale_x).round();
        let display_height = (f64::from(image_height) * self.scale_y).round();

        let left = self.translate_x.max(0.0);
        let top = self.translate_y.max(0.0);
        let right = (left + display_width).min(view_width);
        let bottom = (top + display_height).min(view_height);
        Bounds::new(left, top, right, bottom)
    }
}

/// A region of the source image, in whole pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CropRegion {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Maps the view-space crop window onto the source image.
///
/// Right and bottom are clamped to the image so rounding in the displayed
/// size never asks for pixels past the edge.
pub fn crop_region(
    edges: &RectEdges,
    transform: &ImageTransform,
    image_width: u32,
    image_height: u32,
) -> Result<CropRegion, CropError> {
    transform.validate()?;
    if image_width == 0 || image_height == 0 {
        return Err(CropError::EmptyImage);
    }

    let image_width = f64::from(image_width);
    let image_height = f64::from(image_height);

    let crop_x = ((edges.left() - transform.translate_x) / transform.scale_x).clamp(0.0, image_width);
    let crop_y = ((edges.top() - transform.translate_y) / transform.scale_y).clamp(0.0, image_height);
    let crop_width = (edges.width() / transform.scale_x)
        .min(image_width - crop_x)
        .max(0.0);
    let crop_height = (edges.height() / transform.scale_y)
        .min(image_height - crop_y)
        .max(0.0);

    // Truncation toward zero; every value is in [0, image size].
    Ok(CropRegion {
        x: crop_x as u32,
        y: crop_y as u32,
        width: crop_width as u32,
        height: crop_height as u32,
    })
}
