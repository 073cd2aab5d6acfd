//! Per-handle update strategies.
//!
//! Each handle category solves the new crop window differently:
//!
//! - **Corner**: both owned edges follow the pointer. Under aspect lock the
//!   edge on the pointer's dominant axis follows it and the other is solved
//!   from the ratio. A snapped secondary edge re-solves the primary, and a
//!   primary pushed past its bound is snapped in turn.
//! - **Horizontal / vertical edge**: the owned edge follows the pointer.
//!   Under aspect lock the two perpendicular edges are moved symmetrically to
//!   restore the ratio, then pulled back inside the bounds if needed.
//! - **Center**: the window is translated, never resized.
//!
//! Overflow corrections always check LEFT before RIGHT and TOP before
//! BOTTOM. A centre drag corrects at most one side per axis; a symmetric
//! resize checks both, and the second check sees the first correction.

use cropkit_core::Point;

use crate::aspect_ratio::{calculate_aspect_ratio, calculate_height, calculate_width};
use crate::edge::{DragLimits, Edge, RectEdges};
use crate::handle::{Handle, HandleKind};

/// Ratio passed to [`RectEdges::adjust_coordinate`] when nothing is locked,
/// so the minimum-size checks treat both axes alike.
const UNFIXED_ASPECT_RATIO: f64 = 1.0;

impl Handle {
    /// Free-form update: drags this handle to `pointer`, mutating `edges`.
    pub fn update_crop_window(self, edges: &mut RectEdges, pointer: Point, limits: &DragLimits) {
        match self.kind() {
            HandleKind::Corner {
                horizontal,
                vertical,
            } => {
                edges.adjust_coordinate(horizontal, pointer, limits, UNFIXED_ASPECT_RATIO);
                edges.adjust_coordinate(vertical, pointer, limits, UNFIXED_ASPECT_RATIO);
            }
            HandleKind::HorizontalEdge(edge) | HandleKind::VerticalEdge(edge) => {
                edges.adjust_coordinate(edge, pointer, limits, UNFIXED_ASPECT_RATIO);
            }
            HandleKind::Center => translate_window(edges, pointer, limits),
        }
    }

    /// Aspect-locked update: drags this handle to `pointer` while keeping
    /// `edges.width() / edges.height() == aspect_ratio`.
    pub fn update_crop_window_with_ratio(
        self,
        edges: &mut RectEdges,
        pointer: Point,
        aspect_ratio: f64,
        limits: &DragLimits,
    ) {
        match self.kind() {
            HandleKind::Corner {
                horizontal,
                vertical,
            } => resize_corner(edges, horizontal, vertical, pointer, aspect_ratio, limits),
            HandleKind::HorizontalEdge(edge) => {
                resize_edge(edges, edge, [Edge::Left, Edge::Right], pointer, aspect_ratio, limits)
            }
            HandleKind::VerticalEdge(edge) => {
                resize_edge(edges, edge, [Edge::Top, Edge::Bottom], pointer, aspect_ratio, limits)
            }
            // Pure translation; the ratio cannot change.
            HandleKind::Center => translate_window(edges, pointer, limits),
        }
    }

    /// Dispatches to the aspect-locked update when `aspect_ratio` is set and
    /// to the free-form one otherwise.
    pub fn apply(
        self,
        edges: &mut RectEdges,
        pointer: Point,
        aspect_ratio: Option<f64>,
        limits: &DragLimits,
    ) {
        match aspect_ratio {
            Some(ratio) => self.update_crop_window_with_ratio(edges, pointer, ratio, limits),
            None => self.update_crop_window(edges, pointer, limits),
        }
    }

    /// Value-returning form of [`Handle::apply`].
    pub fn updated(
        self,
        mut edges: RectEdges,
        pointer: Point,
        aspect_ratio: Option<f64>,
        limits: &DragLimits,
    ) -> RectEdges {
        self.apply(&mut edges, pointer, aspect_ratio, limits);
        edges
    }
}

fn translate_window(edges: &mut RectEdges, pointer: Point, limits: &DragLimits) {
    let center = edges.center();
    edges.translate(pointer.x - center.x, pointer.y - center.y);

    let bounds = &limits.bounds;
    let snap_radius = limits.snap_radius;

    if edges.is_outside_margin(Edge::Left, bounds, snap_radius) {
        let delta = edges.snap_to_rect(Edge::Left, bounds);
        edges.offset(Edge::Right, delta);
    } else if edges.is_outside_margin(Edge::Right, bounds, snap_radius) {
        let delta = edges.snap_to_rect(Edge::Right, bounds);
        edges.offset(Edge::Left, delta);
    }

    if edges.is_outside_margin(Edge::Top, bounds, snap_radius) {
        let delta = edges.snap_to_rect(Edge::Top, bounds);
        edges.offset(Edge::Bottom, delta);
    } else if edges.is_outside_margin(Edge::Bottom, bounds, snap_radius) {
        let delta = edges.snap_to_rect(Edge::Bottom, bounds);
        edges.offset(Edge::Top, delta);
    }
}

fn resize_corner(
    edges: &mut RectEdges,
    horizontal: Edge,
    vertical: Edge,
    pointer: Point,
    aspect_ratio: f64,
    limits: &DragLimits,
) {
    // If the corner at the pointer would make the window wider than the
    // target, x drives the resize; otherwise y does.
    let (primary, secondary) =
        if potential_aspect_ratio(edges, horizontal, vertical, pointer) > aspect_ratio {
            (vertical, horizontal)
        } else {
            (horizontal, vertical)
        };

    edges.adjust_coordinate(primary, pointer, limits, aspect_ratio);
    edges.adjust_to_aspect_ratio(secondary, aspect_ratio);

    let bounds = &limits.bounds;
    if edges.is_outside_margin(secondary, bounds, limits.snap_radius) {
        edges.snap_to_rect(secondary, bounds);
        edges.adjust_to_aspect_ratio(primary, aspect_ratio);

        // Snapping the secondary outward can push the re-solved primary
        // past its bound.
        if edges.is_outside_margin(primary, bounds, 0.0) {
            edges.snap_to_rect(primary, bounds);
            edges.adjust_to_aspect_ratio(secondary, aspect_ratio);
        }
    }
}

/// Ratio the window would have with the dragged corner at `pointer`.
fn potential_aspect_ratio(
    edges: &RectEdges,
    horizontal: Edge,
    vertical: Edge,
    pointer: Point,
) -> f64 {
    let pick = |edge: Edge, owned: Edge, value: f64| {
        if edge == owned {
            value
        } else {
            edges.coordinate(edge)
        }
    };
    calculate_aspect_ratio(
        pick(Edge::Left, vertical, pointer.x),
        pick(Edge::Top, horizontal, pointer.y),
        pick(Edge::Right, vertical, pointer.x),
        pick(Edge::Bottom, horizontal, pointer.y),
    )
}

/// Single-edge drag under aspect lock. `adjacent` holds the two edges
/// perpendicular to `edge`, lower coordinate first.
fn resize_edge(
    edges: &mut RectEdges,
    edge: Edge,
    adjacent: [Edge; 2],
    pointer: Point,
    aspect_ratio: f64,
    limits: &DragLimits,
) {
    edges.adjust_coordinate(edge, pointer, limits, aspect_ratio);

    // Restore the ratio by growing or shrinking the perpendicular axis
    // evenly about its centre.
    let difference = if edge.is_vertical() {
        calculate_height(edges.width(), aspect_ratio) - edges.height()
    } else {
        calculate_width(edges.height(), aspect_ratio) - edges.width()
    };
    let half_difference = difference / 2.0;
    let [low, high] = adjacent;
    edges.offset(low, -half_difference);
    edges.offset(high, half_difference);

    let bounds = &limits.bounds;
    for side in adjacent {
        if edges.is_outside_margin(side, bounds, limits.snap_radius)
            && !edges.is_new_rectangle_out_of_bounds(edge, side, bounds, aspect_ratio)
        {
            let delta = edges.snap_to_rect(side, bounds);
            edges.offset(side.opposite(), -delta);
            edges.adjust_to_aspect_ratio(edge, aspect_ratio);
        }
    }
}
