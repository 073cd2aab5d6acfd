use cropkit_core::Point;
use cropkit_editor::{pressed_handle, touch_offset, Handle, RectEdges};

const RADIUS: f64 = 24.0;

fn window() -> RectEdges {
    RectEdges::new(100.0, 80.0, 900.0, 720.0)
}

#[test]
fn test_every_anchor_hits_its_own_handle() {
    let edges = window();
    for handle in Handle::ALL {
        let anchor = handle.anchor(&edges);
        assert_eq!(pressed_handle(anchor, &edges, RADIUS), Some(handle), "{handle}");
        assert_eq!(touch_offset(handle, anchor, &edges), Point::new(0.0, 0.0));
    }
}

#[test]
fn test_corners_take_priority_over_edges() {
    // On the left edge, 15 px below the corner.
    assert_eq!(
        pressed_handle(Point::new(100.0, 95.0), &window(), RADIUS),
        Some(Handle::TopLeft)
    );
}

#[test]
fn test_edges_tie_in_declaration_order() {
    // 20 px from both LEFT and TOP, 28 px from the corner.
    assert_eq!(
        pressed_handle(Point::new(120.0, 100.0), &window(), RADIUS),
        Some(Handle::Left)
    );
}

#[test]
fn test_press_just_outside_window_hits_edge() {
    assert_eq!(
        pressed_handle(Point::new(880.0, 740.0), &window(), RADIUS),
        Some(Handle::Bottom)
    );
    assert_eq!(
        pressed_handle(Point::new(80.0, 400.0), &window(), RADIUS),
        Some(Handle::Left)
    );
}

#[test]
fn test_press_outside_radius_misses() {
    assert_eq!(pressed_handle(Point::new(-50.0, -50.0), &window(), RADIUS), None);
    assert_eq!(pressed_handle(Point::new(500.0, 760.0), &window(), RADIUS), None);
}

#[test]
fn test_nearest_corner_wins_on_small_window() {
    let small = RectEdges::new(0.0, 0.0, 30.0, 30.0);
    assert_eq!(
        pressed_handle(Point::new(10.0, 10.0), &small, RADIUS),
        Some(Handle::TopLeft)
    );
    assert_eq!(
        pressed_handle(Point::new(20.0, 12.0), &small, RADIUS),
        Some(Handle::TopRight)
    );
    assert_eq!(
        pressed_handle(Point::new(22.0, 22.0), &small, RADIUS),
        Some(Handle::BottomRight)
    );
}

#[test]
fn test_center_offset_is_relative_to_window_center() {
    let offset = touch_offset(Handle::Center, Point::new(400.0, 300.0), &window());
    assert_eq!(offset, Point::new(-100.0, -100.0));
}
