//! Initial crop window layout.

use cropkit_core::constants::INITIAL_CROP_INSET;
use cropkit_core::Bounds;
use tracing::debug;

use crate::aspect_ratio::{aspect_ratio_of, calculate_height, calculate_width};
use crate::edge::RectEdges;

/// Lays out the crop window for freshly laid-out `bounds`.
///
/// Free-form windows are inset 10% from every side. With a fixed ratio the
/// window is the largest rectangle of that ratio that fits, filling the
/// bounds on one axis and centred on the other. Empty bounds yield a window
/// lying on the bounds themselves.
pub fn initial_crop_window(bounds: &Bounds, aspect_ratio: Option<f64>) -> RectEdges {
    if bounds.is_empty() {
        debug!("Bounds {} are empty; crop window collapses onto them", bounds);
        return RectEdges::from_bounds(bounds);
    }

    let edges = match aspect_ratio {
        Some(ratio) => fit_aspect_ratio(bounds, ratio),
        None => {
            let horizontal_padding = INITIAL_CROP_INSET * bounds.width();
            let vertical_padding = INITIAL_CROP_INSET * bounds.height();
            RectEdges::new(
                bounds.left + horizontal_padding,
                bounds.top + vertical_padding,
                bounds.right - horizontal_padding,
                bounds.bottom - vertical_padding,
            )
        }
    };
    debug!("Initialised crop window {} within {}", edges, bounds);
    edges
}

fn fit_aspect_ratio(bounds: &Bounds, ratio: f64) -> RectEdges {
    // Bounds wider than the target: height is the limiting side.
    if aspect_ratio_of(bounds) > ratio {
        let half_width = calculate_width(bounds.height(), ratio) / 2.0;
        RectEdges::new(
            bounds.center_x() - half_width,
            bounds.top,
            bounds.center_x() + half_width,
            bounds.bottom,
        )
    } else {
        let half_height = calculate_height(bounds.width(), ratio) / 2.0;
        RectEdges::new(
            bounds.left,
            bounds.center_y() - half_height,
            bounds.right,
            bounds.center_y() + half_height,
        )
    }
}
