//! Drag lifecycle for a single pointer.
//!
//! ```text
//! Idle --press (hit)--> Pressed --move--> Dragging --release--> Idle
//!   \--press (miss)--> Idle            (move/release while Idle are ignored)
//! ```

use std::fmt;

use cropkit_core::Point;
use tracing::{debug, trace};

use crate::edge::{DragLimits, RectEdges};
use crate::handle::Handle;
use crate::hit_test::{pressed_handle, touch_offset};

/// Where the controller is in the press/move/release cycle
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DragState {
    /// No handle held
    #[default]
    Idle,
    /// A handle was pressed but has not moved yet
    Pressed { handle: Handle, touch_offset: Point },
    /// A handle is being dragged
    Dragging { handle: Handle, touch_offset: Point },
}

impl DragState {
    pub fn handle(&self) -> Option<Handle> {
        match self {
            DragState::Idle => None,
            DragState::Pressed { handle, .. } | DragState::Dragging { handle, .. } => {
                Some(*handle)
            }
        }
    }
}

/// What a pointer event changed. Every event asks the host to redraw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CropEvent {
    /// A handle was pressed
    HandlePressed(Handle),
    /// The crop window changed under a dragged handle
    CropWindowChanged { handle: Handle, edges: RectEdges },
    /// The held handle was released
    HandleReleased(Handle),
}

impl fmt::Display for CropEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CropEvent::HandlePressed(handle) => write!(f, "Pressed {} handle", handle),
            CropEvent::CropWindowChanged { handle, edges } => {
                write!(f, "Dragged {} handle: {}", handle, edges)
            }
            CropEvent::HandleReleased(handle) => write!(f, "Released {} handle", handle),
        }
    }
}

/// Drives one drag at a time against a borrowed crop window.
#[derive(Debug, Clone, Default)]
pub struct DragController {
    state: DragState,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> DragState {
        self.state
    }

    /// The handle currently held, if any.
    pub fn pressed_handle(&self) -> Option<Handle> {
        self.state.handle()
    }

    /// Handles a pointer-down at `point`.
    ///
    /// A press always re-runs hit testing. A stray second press that misses
    /// every handle drops back to idle and reports the held handle as
    /// released.
    pub fn on_press(
        &mut self,
        point: Point,
        edges: &RectEdges,
        handle_radius: f64,
    ) -> Option<CropEvent> {
        match pressed_handle(point, edges, handle_radius) {
            Some(handle) => {
                let touch_offset = touch_offset(handle, point, edges);
                debug!("Pressed {} handle at {} (offset {})", handle, point, touch_offset);
                self.state = DragState::Pressed {
                    handle,
                    touch_offset,
                };
                Some(CropEvent::HandlePressed(handle))
            }
            None => {
                let released = self.state.handle()?;
                debug!("Press at {} missed; releasing {} handle", point, released);
                self.state = DragState::Idle;
                Some(CropEvent::HandleReleased(released))
            }
        }
    }

    /// Handles a pointer move, updating `edges` through the held handle.
    ///
    /// `aspect_ratio` selects the aspect-locked strategy when set.
    pub fn on_move(
        &mut self,
        point: Point,
        edges: &mut RectEdges,
        aspect_ratio: Option<f64>,
        limits: &DragLimits,
    ) -> Option<CropEvent> {
        let (handle, touch_offset) = match self.state {
            DragState::Idle => return None,
            DragState::Pressed {
                handle,
                touch_offset,
            }
            | DragState::Dragging {
                handle,
                touch_offset,
            } => (handle, touch_offset),
        };

        let target = point.offset_from(&touch_offset);
        handle.apply(edges, target, aspect_ratio, limits);
        trace!("Dragged {} handle to {}: {}", handle, target, edges);

        self.state = DragState::Dragging {
            handle,
            touch_offset,
        };
        Some(CropEvent::CropWindowChanged {
            handle,
            edges: *edges,
        })
    }

    /// Handles a pointer-up or cancel.
    pub fn on_release(&mut self) -> Option<CropEvent> {
        let handle = self.state.handle()?;
        debug!("Released {} handle", handle);
        self.state = DragState::Idle;
        Some(CropEvent::HandleReleased(handle))
    }
}
