//! # CropKit Editor
//!
//! Interactive crop-window editing: given the displayed bounds of an image
//! and a pointer dragging one of nine handles, computes how the crop window
//! moves and resizes while staying inside the bounds, snapping to them, and
//! optionally holding a fixed aspect ratio.
//!
//! ## Architecture
//!
//! ```text
//! CropSession (host-facing state, listeners)
//!   ├── DragController (press → move → release)
//!   │     └── hit_test (which handle, touch offset)
//!   ├── Handle strategies (corner, edge, center)
//!   │     └── RectEdges / Edge (margins, snapping, adjustment)
//!   │           └── aspect_ratio (pure ratio math)
//!   ├── crop_window (initial layout)
//!   └── export (view space → image pixels)
//! ```
//!
//! Everything is synchronous and single-threaded; each call leaves the crop
//! window fully consistent before it returns.
//!
//! ## Usage
//!
//! ```rust
//! use cropkit_core::{Bounds, CropOptions};
//! use cropkit_editor::CropSession;
//!
//! let mut session =
//!     CropSession::with_bounds(CropOptions::default(), Bounds::new(0.0, 0.0, 1000.0, 800.0))
//!         .unwrap();
//! session.on_press(100.0, 80.0);
//! session.on_move(60.0, 50.0);
//! session.on_release();
//! assert_eq!(session.edges().left(), 60.0);
//! ```

pub mod aspect_ratio;
pub mod crop_window;
pub mod drag;
pub mod edge;
pub mod export;
pub mod handle;
pub mod session;
pub mod strategy;

pub use crop_window::initial_crop_window;
pub use drag::{CropEvent, DragController, DragState};
pub use edge::{DragLimits, Edge, RectEdges};
pub use export::{crop_region, CropRegion, ImageTransform};
pub use handle::{Handle, HandleKind};
pub use hit_test::{pressed_handle, touch_offset};
pub use session::{CropListener, CropSession, Guidelines};
