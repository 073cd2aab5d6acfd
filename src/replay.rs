//! Drag-script replay
//!
//! Feeds a recorded sequence of pointer events through a [`CropSession`] and
//! reports where the crop window ended up. Scripts are JSON:
//!
//! ```json
//! {
//!   "bounds": { "left": 0, "top": 0, "right": 1000, "bottom": 800 },
//!   "events": [
//!     { "type": "press", "x": 100, "y": 80 },
//!     { "type": "move", "x": 50, "y": 50 },
//!     { "type": "release" }
//!   ]
//! }
//! ```

use std::fs;
use std::path::Path;

use cropkit_core::{Bounds, CropOptions, Error, Result};
use cropkit_editor::{CropSession, Handle, RectEdges};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// One scripted input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ScriptEvent {
    Press { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Release,
    /// Turns aspect lock on or off mid-script
    FixedAspectRatio { fixed: bool },
    /// Changes the target ratio mid-script
    AspectRatio { x: i32, y: i32 },
}

/// A replayable drag script
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayScript {
    /// Displayed image bounds in view coordinates
    pub bounds: Bounds,
    /// Overrides the configured options when present
    #[serde(default)]
    pub options: Option<CropOptions>,
    pub events: Vec<ScriptEvent>,
}

impl ReplayScript {
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| Error::other(format!("Invalid replay script {}: {}", path.display(), e)))
    }
}

/// Outcome of a replay
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReplayReport {
    pub bounds: Bounds,
    pub edges: RectEdges,
    pub width: f64,
    pub height: f64,
    /// Handle still held when the script ended
    pub pressed: Option<Handle>,
    /// Every event the session emitted, in order
    pub events: Vec<String>,
}

/// Replays `script` against a fresh session built from `options`.
pub fn replay(script: &ReplayScript, options: &CropOptions) -> Result<ReplayReport> {
    let options = script.options.clone().unwrap_or_else(|| options.clone());
    let mut session = CropSession::with_bounds(options, script.bounds)?;
    info!(
        "Replaying {} events within {}",
        script.events.len(),
        script.bounds
    );

    let mut emitted = Vec::new();
    for event in &script.events {
        let outcome = match *event {
            ScriptEvent::Press { x, y } => session.on_press(x, y),
            ScriptEvent::Move { x, y } => session.on_move(x, y),
            ScriptEvent::Release => session.on_release(),
            ScriptEvent::FixedAspectRatio { fixed } => {
                session.set_fixed_aspect_ratio(fixed);
                None
            }
            ScriptEvent::AspectRatio { x, y } => {
                session.set_aspect_ratio(x, y)?;
                None
            }
        };
        match outcome {
            Some(crop_event) => emitted.push(crop_event.to_string()),
            None => debug!("{:?} produced no event", event),
        }
    }

    let edges = session.edges();
    Ok(ReplayReport {
        bounds: script.bounds,
        edges,
        width: edges.width(),
        height: edges.height(),
        pressed: session.pressed_handle(),
        events: emitted,
    })
}
