use cropkit_core::{Bounds, Point};
use cropkit_editor::{DragLimits, Handle, RectEdges};

const EPSILON: f64 = 1e-9;

fn limits() -> DragLimits {
    DragLimits::new(Bounds::new(0.0, 0.0, 1000.0, 800.0), 10.0, 40.0)
}

fn assert_ratio(edges: &RectEdges, ratio: f64) {
    assert!(
        (edges.width() / edges.height() - ratio).abs() < EPSILON,
        "expected ratio {ratio}, got {edges}"
    );
}

#[test]
fn test_top_drag_keeps_horizontal_center() {
    let before = RectEdges::new(300.0, 300.0, 700.0, 500.0);
    let after = Handle::Top.updated(before, Point::new(123.0, 250.0), Some(2.0), &limits());
    assert_eq!(after.top(), 250.0);
    assert_eq!(after.left() - before.left(), -(after.right() - before.right()));
    assert_eq!(after.center().x, before.center().x);
    assert_ratio(&after, 2.0);
}

#[test]
fn test_left_drag_keeps_vertical_center() {
    let before = RectEdges::new(300.0, 300.0, 700.0, 500.0);
    let after = Handle::Left.updated(before, Point::new(200.0, 0.0), Some(2.0), &limits());
    assert_eq!(after, RectEdges::new(200.0, 275.0, 700.0, 525.0));
}

#[test]
fn test_edge_drag_pulls_overflowing_side_back() {
    let before = RectEdges::new(20.0, 200.0, 220.0, 600.0);
    let after = Handle::Right.updated(before, Point::new(500.0, 0.0), Some(0.5), &limits());
    assert_eq!(after, RectEdges::new(20.0, 0.0, 420.0, 800.0));
    assert_ratio(&after, 0.5);
}

#[test]
fn test_simultaneous_overflow_corrects_left_before_right() {
    // Restoring 4:1 after the drag pushes left to -350 and right to 1050.
    let before = RectEdges::new(50.0, 300.0, 650.0, 450.0);
    let after = Handle::Top.updated(before, Point::new(0.0, 100.0), Some(4.0), &limits());
    assert_eq!(after, RectEdges::new(0.0, 275.0, 700.0, 450.0));
    assert_ratio(&after, 4.0);
}

#[test]
fn test_simultaneous_overflow_wider_than_bounds() {
    // Both sides overflow symmetrically; left is pinned first, right then lands on its bound.
    let before = RectEdges::new(100.0, 300.0, 900.0, 500.0);
    let after = Handle::Top.updated(before, Point::new(0.0, 50.0), Some(4.0), &limits());
    assert_eq!(after, RectEdges::new(0.0, 250.0, 1000.0, 500.0));
}

#[test]
fn test_refused_correction_falls_through_to_opposite_side() {
    // Snapping top would still leave the square taller than the bounds, so
    // only the bottom correction applies.
    let before = RectEdges::new(600.0, 300.0, 900.0, 600.0);
    let after = Handle::Left.updated(before, Point::new(5.0, 450.0), Some(1.0), &limits());
    assert_eq!(after, RectEdges::new(200.0, 100.0, 900.0, 800.0));
    assert_ratio(&after, 1.0);
}

#[test]
fn test_corner_drag_keeps_ratio() {
    let before = RectEdges::new(200.0, 200.0, 500.0, 400.0);
    for pointer in [
        Point::new(100.0, 150.0),
        Point::new(150.0, 20.0),
        Point::new(-50.0, -50.0),
        Point::new(450.0, 350.0),
    ] {
        let after = Handle::TopLeft.updated(before, pointer, Some(1.5), &limits());
        assert_ratio(&after, 1.5);
        assert_eq!(after.right(), 500.0);
        assert_eq!(after.bottom(), 400.0);
    }
}

#[test]
fn test_corner_drag_toward_corner_of_bounds_snaps() {
    let before = RectEdges::new(200.0, 200.0, 600.0, 600.0);
    let after = Handle::TopLeft.updated(before, Point::new(-30.0, -30.0), Some(1.0), &limits());
    assert_eq!(after, RectEdges::new(0.0, 0.0, 600.0, 600.0));
}
