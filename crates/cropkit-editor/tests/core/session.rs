use std::cell::RefCell;
use std::rc::Rc;

use cropkit_core::{Bounds, CropOptions, GuidelinesMode};
use cropkit_editor::{CropEvent, CropListener, CropSession, Handle, ImageTransform, RectEdges};

fn bounds() -> Bounds {
    Bounds::new(0.0, 0.0, 1000.0, 800.0)
}

fn session() -> CropSession {
    CropSession::with_bounds(CropOptions::default(), bounds()).unwrap()
}

#[derive(Default)]
struct Recorder {
    log: RefCell<Vec<String>>,
}

struct RecordingListener(Rc<Recorder>);

impl CropListener for RecordingListener {
    fn on_redraw_requested(&self, _edges: &RectEdges, pressed: Option<Handle>) {
        let pressed = pressed.map_or("none".to_string(), |h| h.to_string());
        self.0.log.borrow_mut().push(format!("redraw({pressed})"));
    }

    fn on_handle_pressed(&self, handle: Handle) {
        self.0.log.borrow_mut().push(format!("pressed({handle})"));
    }

    fn on_handle_released(&self, handle: Handle) {
        self.0.log.borrow_mut().push(format!("released({handle})"));
    }
}

#[test]
fn test_initial_layout() {
    assert_eq!(session().edges(), RectEdges::new(100.0, 80.0, 900.0, 720.0));

    let options = CropOptions {
        fixed_aspect_ratio: true,
        ..CropOptions::default()
    };
    let locked = CropSession::with_bounds(options, bounds()).unwrap();
    assert_eq!(locked.edges(), RectEdges::new(100.0, 0.0, 900.0, 800.0));
}

#[test]
fn test_empty_bounds_give_empty_window() {
    let session = CropSession::new(CropOptions::default()).unwrap();
    assert_eq!(session.edges(), RectEdges::default());
    assert_eq!(session.edges().width(), 0.0);
}

#[test]
fn test_event_sequence() {
    let mut session = session();
    assert_eq!(session.on_press(900.0, 400.0), Some(CropEvent::HandlePressed(Handle::Right)));
    assert_eq!(session.pressed_handle(), Some(Handle::Right));

    let Some(CropEvent::CropWindowChanged { handle, edges }) = session.on_move(800.0, 10.0) else {
        panic!("expected a window change");
    };
    assert_eq!(handle, Handle::Right);
    assert_eq!(edges, RectEdges::new(100.0, 80.0, 800.0, 720.0));
    assert_eq!(session.edges(), edges);

    assert_eq!(session.on_release(), Some(CropEvent::HandleReleased(Handle::Right)));
    assert_eq!(session.pressed_handle(), None);
}

#[test]
fn test_center_drag_translates_with_touch_offset() {
    let mut session = session();
    session.on_press(400.0, 300.0);
    session.on_move(450.0, 350.0);
    assert_eq!(session.edges(), RectEdges::new(150.0, 130.0, 950.0, 770.0));
}

#[test]
fn test_listener_order() {
    let recorder = Rc::new(Recorder::default());
    let mut session = session();
    session.add_listener(Box::new(RecordingListener(recorder.clone())));

    session.on_press(100.0, 80.0);
    session.on_move(90.0, 70.0);
    session.on_release();

    assert_eq!(
        *recorder.log.borrow(),
        vec![
            "pressed(top-left)",
            "redraw(top-left)",
            "redraw(top-left)",
            "released(top-left)",
            "redraw(none)",
        ]
    );
}

#[test]
fn test_missed_press_emits_nothing() {
    let recorder = Rc::new(Recorder::default());
    let mut session = session();
    session.add_listener(Box::new(RecordingListener(recorder.clone())));

    assert_eq!(session.on_press(5.0, 5.0), None);
    assert_eq!(session.on_move(50.0, 50.0), None);
    assert_eq!(session.on_release(), None);
    assert!(recorder.log.borrow().is_empty());
}

#[test]
fn test_second_press_rehits() {
    let recorder = Rc::new(Recorder::default());
    let mut session = session();
    session.add_listener(Box::new(RecordingListener(recorder.clone())));

    session.on_press(100.0, 80.0);
    assert_eq!(session.pressed_handle(), Some(Handle::TopLeft));
    session.on_press(900.0, 720.0);
    assert_eq!(session.pressed_handle(), Some(Handle::BottomRight));
    assert_eq!(
        session.on_press(2.0, 2.0),
        Some(CropEvent::HandleReleased(Handle::BottomRight))
    );
    assert_eq!(session.pressed_handle(), None);

    assert_eq!(
        *recorder.log.borrow(),
        vec![
            "pressed(top-left)",
            "redraw(top-left)",
            "pressed(bottom-right)",
            "redraw(bottom-right)",
            "released(bottom-right)",
            "redraw(none)",
        ]
    );
}

#[test]
fn test_set_bounds_relays_out() {
    let mut session = session();
    session.on_press(100.0, 80.0);
    session.on_move(60.0, 50.0);
    session.set_bounds(Bounds::new(0.0, 0.0, 500.0, 400.0));
    assert_eq!(session.edges(), RectEdges::new(50.0, 40.0, 450.0, 360.0));
}

#[test]
fn test_locked_drag_keeps_ratio() {
    let mut session = session();
    session.set_aspect_ratio(4, 3).unwrap();
    session.set_fixed_aspect_ratio(true);
    let start = session.edges();
    assert!((start.width() / start.height() - 4.0 / 3.0).abs() < 1e-9);

    session.on_press(start.right(), start.bottom());
    session.on_move(700.0, 500.0);
    let edges = session.edges();
    assert!((edges.width() / edges.height() - 4.0 / 3.0).abs() < 1e-9);
}

#[test]
fn test_guidelines_follow_mode() {
    let mut session = session();
    session.set_guidelines(GuidelinesMode::On);
    let guidelines = session.guidelines().unwrap();
    assert_eq!(guidelines.horizontal, [80.0 + 640.0 / 3.0, 720.0 - 640.0 / 3.0]);
}

#[test]
fn test_crop_region_through_session() {
    let session = session();
    let region = session
        .crop_region(&ImageTransform::new(0.5, 0.5, 0.0, 0.0), 2000, 1600)
        .unwrap();
    assert_eq!((region.x, region.y, region.width, region.height), (200, 160, 1600, 1280));
}
