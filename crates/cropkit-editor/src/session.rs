//! Crop session state for UI integration.
//!
//! [`CropSession`] is what a host view talks to: it owns the crop window,
//! the drag controller and the options, turns raw pointer events into
//! window updates, and tells registered [`CropListener`]s when to redraw.

use std::fmt;

use cropkit_core::{AspectRatio, Bounds, ConfigError, CropError, CropOptions, GuidelinesMode, Point};
use tracing::{debug, warn};

use crate::crop_window::initial_crop_window;
use crate::drag::{CropEvent, DragController};
use crate::edge::{DragLimits, RectEdges};
use crate::export::{crop_region, CropRegion, ImageTransform};
use crate::handle::Handle;

/// Listener trait for crop session events
///
/// Implement this trait to be told when the crop window needs repainting.
pub trait CropListener {
    /// Called after any event that changed what should be drawn
    fn on_redraw_requested(&self, _edges: &RectEdges, _pressed: Option<Handle>) {}

    /// Called when a handle is pressed
    fn on_handle_pressed(&self, _handle: Handle) {}

    /// Called when the held handle is released
    fn on_handle_released(&self, _handle: Handle) {}
}

/// Rule-of-thirds guideline positions inside the crop window
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Guidelines {
    /// x coordinates of the two vertical lines
    pub vertical: [f64; 2],
    /// y coordinates of the two horizontal lines
    pub horizontal: [f64; 2],
}

impl Guidelines {
    pub fn for_edges(edges: &RectEdges) -> Self {
        let third_width = edges.width() / 3.0;
        let third_height = edges.height() / 3.0;
        Self {
            vertical: [edges.left() + third_width, edges.right() - third_width],
            horizontal: [edges.top() + third_height, edges.bottom() - third_height],
        }
    }
}

/// An interactive crop window over one displayed image.
pub struct CropSession {
    options: CropOptions,
    bounds: Bounds,
    edges: RectEdges,
    controller: DragController,
    listeners: Vec<Box<dyn CropListener>>,
}

impl CropSession {
    /// Creates a session with validated `options` and no layout yet.
    pub fn new(options: CropOptions) -> Result<Self, ConfigError> {
        options.validate()?;
        Ok(Self {
            options,
            bounds: Bounds::default(),
            edges: RectEdges::default(),
            controller: DragController::new(),
            listeners: Vec::new(),
        })
    }

    /// Creates a session and lays the window out within `bounds`.
    pub fn with_bounds(options: CropOptions, bounds: Bounds) -> Result<Self, ConfigError> {
        let mut session = Self::new(options)?;
        session.set_bounds(bounds);
        Ok(session)
    }

    pub fn add_listener(&mut self, listener: Box<dyn CropListener>) {
        self.listeners.push(listener);
    }

    pub fn options(&self) -> &CropOptions {
        &self.options
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Current crop window in view coordinates.
    pub fn edges(&self) -> RectEdges {
        self.edges
    }

    pub fn pressed_handle(&self) -> Option<Handle> {
        self.controller.pressed_handle()
    }

    pub fn controller(&self) -> &DragController {
        &self.controller
    }

    /// Supplies new displayed-image bounds and re-initialises the window.
    pub fn set_bounds(&mut self, bounds: Bounds) {
        self.bounds = bounds;
        self.reset_crop_window();
    }

    /// Discards the current window and lays it out afresh for the bounds.
    pub fn reset_crop_window(&mut self) {
        self.edges = initial_crop_window(&self.bounds, self.options.locked_aspect_ratio());
        self.request_redraw();
    }

    /// Turns aspect lock on or off; the window is laid out again.
    pub fn set_fixed_aspect_ratio(&mut self, fixed: bool) {
        self.options.fixed_aspect_ratio = fixed;
        self.reset_crop_window();
    }

    /// Sets the target ratio. Invalid components are rejected and leave the
    /// session untouched. The window is laid out again if the ratio is locked.
    pub fn set_aspect_ratio(&mut self, x: i32, y: i32) -> Result<(), ConfigError> {
        let ratio = AspectRatio::new(x, y).inspect_err(|e| warn!("Rejected aspect ratio: {}", e))?;
        self.options.set_aspect_ratio(ratio);
        debug!("Aspect ratio set to {}", ratio);
        if self.options.fixed_aspect_ratio {
            self.reset_crop_window();
        }
        Ok(())
    }

    pub fn target_aspect_ratio(&self) -> f64 {
        self.options.target_aspect_ratio()
    }

    pub fn set_guidelines(&mut self, mode: GuidelinesMode) {
        self.options.guidelines = mode;
        self.request_redraw();
    }

    /// Whether the renderer should draw guidelines right now.
    pub fn show_guidelines(&self) -> bool {
        match self.options.guidelines {
            GuidelinesMode::On => true,
            GuidelinesMode::OnTouch => self.pressed_handle().is_some(),
            GuidelinesMode::Off => false,
        }
    }

    /// Guideline positions, when they should be shown.
    pub fn guidelines(&self) -> Option<Guidelines> {
        self.show_guidelines()
            .then(|| Guidelines::for_edges(&self.edges))
    }

    fn limits(&self) -> DragLimits {
        DragLimits::new(
            self.bounds,
            self.options.snap_radius,
            self.options.min_crop_length,
        )
    }

    /// Pointer down at (`x`, `y`).
    pub fn on_press(&mut self, x: f64, y: f64) -> Option<CropEvent> {
        let event =
            self.controller
                .on_press(Point::new(x, y), &self.edges, self.options.handle_radius);
        self.dispatch(event);
        event
    }

    /// Pointer moved to (`x`, `y`).
    pub fn on_move(&mut self, x: f64, y: f64) -> Option<CropEvent> {
        let limits = self.limits();
        let event = self.controller.on_move(
            Point::new(x, y),
            &mut self.edges,
            self.options.locked_aspect_ratio(),
            &limits,
        );
        self.dispatch(event);
        event
    }

    /// Pointer up or gesture cancelled.
    pub fn on_release(&mut self) -> Option<CropEvent> {
        let event = self.controller.on_release();
        self.dispatch(event);
        event
    }

    /// Source image region covered by the crop window.
    pub fn crop_region(
        &self,
        transform: &ImageTransform,
        image_width: u32,
        image_height: u32,
    ) -> Result<CropRegion, CropError> {
        crop_region(&self.edges, transform, image_width, image_height)
    }

    fn dispatch(&self, event: Option<CropEvent>) {
        let Some(event) = event else {
            return;
        };
        for listener in &self.listeners {
            match event {
                CropEvent::HandlePressed(handle) => listener.on_handle_pressed(handle),
                CropEvent::HandleReleased(handle) => listener.on_handle_released(handle),
                CropEvent::CropWindowChanged { .. } => {}
            }
        }
        self.request_redraw();
    }

    fn request_redraw(&self) {
        let pressed = self.pressed_handle();
        for listener in &self.listeners {
            listener.on_redraw_requested(&self.edges, pressed);
        }
    }
}

impl fmt::Debug for CropSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CropSession")
            .field("options", &self.options)
            .field("bounds", &self.bounds)
            .field("edges", &self.edges)
            .field("controller", &self.controller)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
