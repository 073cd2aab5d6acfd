//! Crop window edges
//!
//! The crop window is four independent coordinates, one per [`Edge`], held
//! together in a [`RectEdges`] value owned by the crop session. Every
//! per-edge primitive the handle strategies are built from lives here:
//! margin tests, snapping to the bounding rect, pointer-driven adjustment
//! with a minimum window size, and ratio-driven re-solving of one side.

use std::fmt;

use cropkit_core::{Bounds, Point};
use serde::{Deserialize, Serialize};

use crate::aspect_ratio::{
    calculate_bottom, calculate_left, calculate_right, calculate_top,
};

/// One side of the crop window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Edge {
    Left,
    Top,
    Right,
    Bottom,
}

impl Edge {
    /// All edges in declaration order.
    pub const ALL: [Edge; 4] = [Edge::Left, Edge::Top, Edge::Right, Edge::Bottom];

    /// True for LEFT and RIGHT, whose coordinate is an x value.
    pub fn is_vertical(self) -> bool {
        matches!(self, Edge::Left | Edge::Right)
    }

    /// The edge across the window from this one.
    pub fn opposite(self) -> Edge {
        match self {
            Edge::Left => Edge::Right,
            Edge::Top => Edge::Bottom,
            Edge::Right => Edge::Left,
            Edge::Bottom => Edge::Top,
        }
    }

    /// The side of `bounds` this edge snaps to.
    pub fn bound_of(self, bounds: &Bounds) -> f64 {
        match self {
            Edge::Left => bounds.left,
            Edge::Top => bounds.top,
            Edge::Right => bounds.right,
            Edge::Bottom => bounds.bottom,
        }
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Edge::Left => write!(f, "left"),
            Edge::Top => write!(f, "top"),
            Edge::Right => write!(f, "right"),
            Edge::Bottom => write!(f, "bottom"),
        }
    }
}

/// Limits a drag update is solved against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragLimits {
    /// The bounding rect the window must stay within
    pub bounds: Bounds,
    /// Distance within which an edge snaps flush to `bounds`
    pub snap_radius: f64,
    /// Smallest side an edge may be pushed down to
    pub min_crop_length: f64,
}

impl DragLimits {
    pub fn new(bounds: Bounds, snap_radius: f64, min_crop_length: f64) -> Self {
        Self {
            bounds,
            snap_radius,
            min_crop_length,
        }
    }
}

/// The crop window as four independent edge coordinates.
///
/// At rest `left <= right` and `top <= bottom`. Updates may cross an edge
/// past its opposite transiently but resolve it before returning.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RectEdges {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
}

impl RectEdges {
    pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Edges lying exactly on `bounds`.
    pub fn from_bounds(bounds: &Bounds) -> Self {
        Self::new(bounds.left, bounds.top, bounds.right, bounds.bottom)
    }

    pub fn to_bounds(&self) -> Bounds {
        Bounds::new(self.left, self.top, self.right, self.bottom)
    }

    pub fn left(&self) -> f64 {
        self.left
    }

    pub fn top(&self) -> f64 {
        self.top
    }

    pub fn right(&self) -> f64 {
        self.right
    }

    pub fn bottom(&self) -> f64 {
        self.bottom
    }

    pub fn coordinate(&self, edge: Edge) -> f64 {
        match edge {
            Edge::Left => self.left,
            Edge::Top => self.top,
            Edge::Right => self.right,
            Edge::Bottom => self.bottom,
        }
    }

    pub fn set_coordinate(&mut self, edge: Edge, value: f64) {
        match edge {
            Edge::Left => self.left = value,
            Edge::Top => self.top = value,
            Edge::Right => self.right = value,
            Edge::Bottom => self.bottom = value,
        }
    }

    /// Moves `edge` by `delta`.
    pub fn offset(&mut self, edge: Edge, delta: f64) {
        let value = self.coordinate(edge) + delta;
        self.set_coordinate(edge, value);
    }

    /// Moves all four edges, keeping the size.
    pub fn translate(&mut self, dx: f64, dy: f64) {
        self.left += dx;
        self.right += dx;
        self.top += dy;
        self.bottom += dy;
    }

    pub fn width(&self) -> f64 {
        self.right - self.left
    }

    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.left + self.right) / 2.0,
            (self.top + self.bottom) / 2.0,
        )
    }

    /// Whether `edge` lies outside `bounds` or within `margin` of its side.
    ///
    /// A near miss counts so the edge can be snapped before it visually
    /// crosses. Empty bounds have nothing to snap to and always yield false.
    pub fn is_outside_margin(&self, edge: Edge, bounds: &Bounds, margin: f64) -> bool {
        if bounds.is_empty() {
            return false;
        }
        match edge {
            Edge::Left => self.left - bounds.left < margin,
            Edge::Top => self.top - bounds.top < margin,
            Edge::Right => bounds.right - self.right < margin,
            Edge::Bottom => bounds.bottom - self.bottom < margin,
        }
    }

    /// Signed distance `edge` would move if snapped to `bounds`.
    pub fn snap_offset(&self, edge: Edge, bounds: &Bounds) -> f64 {
        if bounds.is_empty() {
            return 0.0;
        }
        edge.bound_of(bounds) - self.coordinate(edge)
    }

    /// Snaps `edge` flush to its side of `bounds` and returns the delta
    /// applied, so callers can carry the same shift to other edges.
    pub fn snap_to_rect(&mut self, edge: Edge, bounds: &Bounds) -> f64 {
        let delta = self.snap_offset(edge, bounds);
        if delta != 0.0 {
            self.set_coordinate(edge, edge.bound_of(bounds));
        }
        delta
    }

    /// Moves `edge` toward `pointer`.
    ///
    /// A pointer within the snap radius of (or beyond) the bounding side
    /// snaps the edge to that side. Otherwise the edge follows the pointer
    /// but stops `min_crop_length` short of the opposite edge, and, using
    /// `aspect_ratio`, short of squeezing the other axis below that length.
    pub fn adjust_coordinate(
        &mut self,
        edge: Edge,
        pointer: Point,
        limits: &DragLimits,
        aspect_ratio: f64,
    ) {
        let value = match edge {
            Edge::Left => self.adjust_left(pointer.x, limits, aspect_ratio),
            Edge::Top => self.adjust_top(pointer.y, limits, aspect_ratio),
            Edge::Right => self.adjust_right(pointer.x, limits, aspect_ratio),
            Edge::Bottom => self.adjust_bottom(pointer.y, limits, aspect_ratio),
        };
        self.set_coordinate(edge, value);
    }

    /// Re-solves `edge` from the other three so the window has `aspect_ratio`.
    pub fn adjust_to_aspect_ratio(&mut self, edge: Edge, aspect_ratio: f64) {
        let (left, top, right, bottom) = (self.left, self.top, self.right, self.bottom);
        let value = match edge {
            Edge::Left => calculate_left(top, right, bottom, aspect_ratio),
            Edge::Top => calculate_top(left, right, bottom, aspect_ratio),
            Edge::Right => calculate_right(left, top, bottom, aspect_ratio),
            Edge::Bottom => calculate_bottom(left, top, right, aspect_ratio),
        };
        self.set_coordinate(edge, value);
    }

    /// Whether snapping `adjacent` to `bounds` would leave the window out of
    /// bounds once `edge` is re-solved for `aspect_ratio`.
    ///
    /// `edge` is the edge being dragged and `adjacent` one of the two edges
    /// perpendicular to it. The adjacent edge's opposite is assumed to move
    /// by the negated snap delta. Any other pairing reports true.
    pub fn is_new_rectangle_out_of_bounds(
        &self,
        edge: Edge,
        adjacent: Edge,
        bounds: &Bounds,
        aspect_ratio: f64,
    ) -> bool {
        let offset = self.snap_offset(adjacent, bounds);
        let (left, top, right, bottom) = match (edge, adjacent) {
            (Edge::Left, Edge::Top) | (Edge::Right, Edge::Top) => {
                (self.left, bounds.top, self.right, self.bottom - offset)
            }
            (Edge::Left, Edge::Bottom) | (Edge::Right, Edge::Bottom) => {
                (self.left, self.top - offset, self.right, bounds.bottom)
            }
            (Edge::Top, Edge::Left) | (Edge::Bottom, Edge::Left) => {
                (bounds.left, self.top, self.right - offset, self.bottom)
            }
            (Edge::Top, Edge::Right) | (Edge::Bottom, Edge::Right) => {
                (self.left - offset, self.top, bounds.right, self.bottom)
            }
            _ => return true,
        };

        let (left, top, right, bottom) = match edge {
            Edge::Left => (calculate_left(top, right, bottom, aspect_ratio), top, right, bottom),
            Edge::Top => (left, calculate_top(left, right, bottom, aspect_ratio), right, bottom),
            Edge::Right => (left, top, calculate_right(left, top, bottom, aspect_ratio), bottom),
            Edge::Bottom => (left, top, right, calculate_bottom(left, top, right, aspect_ratio)),
        };

        top < bounds.top || left < bounds.left || bottom > bounds.bottom || right > bounds.right
    }

    fn snaps_to(limits: &DragLimits, distance_to_bound: f64) -> bool {
        !limits.bounds.is_empty() && distance_to_bound < limits.snap_radius
    }

    fn adjust_left(&self, x: f64, limits: &DragLimits, aspect_ratio: f64) -> f64 {
        if Self::snaps_to(limits, x - limits.bounds.left) {
            return limits.bounds.left;
        }
        let min = limits.min_crop_length;
        let mut too_narrow = f64::INFINITY;
        let mut too_short = f64::INFINITY;
        if x >= self.right - min {
            too_narrow = self.right - min;
        }
        if (self.right - x) / aspect_ratio <= min {
            too_short = self.right - min * aspect_ratio;
        }
        x.min(too_narrow.min(too_short))
    }

    fn adjust_top(&self, y: f64, limits: &DragLimits, aspect_ratio: f64) -> f64 {
        if Self::snaps_to(limits, y - limits.bounds.top) {
            return limits.bounds.top;
        }
        let min = limits.min_crop_length;
        let mut too_short = f64::INFINITY;
        let mut too_narrow = f64::INFINITY;
        if y >= self.bottom - min {
            too_short = self.bottom - min;
        }
        if (self.bottom - y) * aspect_ratio <= min {
            too_narrow = self.bottom - min / aspect_ratio;
        }
        y.min(too_short.min(too_narrow))
    }

    fn adjust_right(&self, x: f64, limits: &DragLimits, aspect_ratio: f64) -> f64 {
        if Self::snaps_to(limits, limits.bounds.right - x) {
            return limits.bounds.right;
        }
        let min = limits.min_crop_length;
        let mut too_narrow = f64::NEG_INFINITY;
        let mut too_short = f64::NEG_INFINITY;
        if x <= self.left + min {
            too_narrow = self.left + min;
        }
        if (x - self.left) / aspect_ratio <= min {
            too_short = self.left + min * aspect_ratio;
        }
        x.max(too_narrow.max(too_short))
    }

    fn adjust_bottom(&self, y: f64, limits: &DragLimits, aspect_ratio: f64) -> f64 {
        if Self::snaps_to(limits, limits.bounds.bottom - y) {
            return limits.bounds.bottom;
        }
        let min = limits.min_crop_length;
        let mut too_short = f64::NEG_INFINITY;
        let mut too_narrow = f64::NEG_INFINITY;
        if y <= self.top + min {
            too_short = self.top + min;
        }
        if (y - self.top) * aspect_ratio <= min {
            too_narrow = self.top + min / aspect_ratio;
        }
        y.max(too_short.max(too_narrow))
    }
}

impl fmt::Display for RectEdges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:.1}, {:.1}, {:.1}, {:.1}] {:.1}x{:.1}",
            self.left,
            self.top,
            self.right,
            self.bottom,
            self.width(),
            self.height()
        )
    }
}
