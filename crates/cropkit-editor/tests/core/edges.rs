use cropkit_core::Bounds;
use cropkit_editor::{Edge, RectEdges};

fn bounds() -> Bounds {
    Bounds::new(0.0, 0.0, 1000.0, 800.0)
}

#[test]
fn test_snap_is_idempotent() {
    let mut edges = RectEdges::new(-12.5, 30.0, 1003.0, 790.0);
    for edge in Edge::ALL {
        edges.snap_to_rect(edge, &bounds());
        let once = edges.coordinate(edge);
        let delta = edges.snap_to_rect(edge, &bounds());
        assert_eq!(edges.coordinate(edge), once, "{edge} moved on second snap");
        assert_eq!(delta, 0.0);
    }
    assert_eq!(edges, RectEdges::from_bounds(&bounds()));
}

#[test]
fn test_snap_clamps_to_axis_bound() {
    let mut edges = RectEdges::new(40.0, 50.0, 960.0, 770.0);
    assert_eq!(edges.snap_to_rect(Edge::Left, &bounds()), -40.0);
    assert_eq!(edges.snap_to_rect(Edge::Top, &bounds()), -50.0);
    assert_eq!(edges.snap_to_rect(Edge::Right, &bounds()), 40.0);
    assert_eq!(edges.snap_to_rect(Edge::Bottom, &bounds()), 30.0);
}

#[test]
fn test_margin_boundary_is_inclusive_of_radius() {
    // Exactly snap_radius away is not a near miss; anything closer is.
    let edges = RectEdges::new(10.0, 9.999, 990.0, 790.0);
    assert!(!edges.is_outside_margin(Edge::Left, &bounds(), 10.0));
    assert!(edges.is_outside_margin(Edge::Top, &bounds(), 10.0));
    assert!(!edges.is_outside_margin(Edge::Right, &bounds(), 10.0));
    assert!(!edges.is_outside_margin(Edge::Bottom, &bounds(), 10.0));
}

#[test]
fn test_width_height_and_offset() {
    let mut edges = RectEdges::new(100.0, 80.0, 900.0, 720.0);
    assert_eq!(edges.width(), 800.0);
    assert_eq!(edges.height(), 640.0);
    edges.offset(Edge::Right, -50.0);
    edges.offset(Edge::Top, 20.0);
    assert_eq!(edges.width(), 750.0);
    assert_eq!(edges.height(), 620.0);
}

#[test]
fn test_edge_helpers() {
    assert_eq!(Edge::Left.opposite(), Edge::Right);
    assert_eq!(Edge::Bottom.opposite(), Edge::Top);
    assert!(Edge::Right.is_vertical());
    assert!(!Edge::Top.is_vertical());
    assert_eq!(Edge::Bottom.bound_of(&bounds()), 800.0);
}
