//! # CropKit
//!
//! An interactive crop-window engine: the geometry behind a draggable crop
//! rectangle over a displayed image, with:
//! - Nine handles (four corners, four edges, the interior)
//! - Snapping to the image bounds within a configurable radius
//! - Optional fixed aspect ratio held through every drag
//! - Rule-of-thirds guidelines and export to source-image pixels
//!
//! ## Architecture
//!
//! CropKit is organized as a workspace with multiple crates:
//!
//! 1. **cropkit-core** - Geometry primitives, options, constants, errors
//! 2. **cropkit-editor** - Edges, handle strategies, hit testing, drag lifecycle, session
//! 3. **cropkit-settings** - Configuration files (JSON/TOML) and defaults
//! 4. **cropkit** - Re-exports, logging setup and the `cropkit` replay binary

pub mod replay;

pub use cropkit_core::{
    AspectRatio, Bounds, ConfigError, CropError, CropOptions, Error, GuidelinesMode, Point, Result,
};

pub use cropkit_editor::{
    crop_region, initial_crop_window, pressed_handle, touch_offset, CropEvent, CropListener,
    CropRegion, CropSession, DragController, DragLimits, DragState, Edge, Guidelines, Handle,
    HandleKind, ImageTransform, RectEdges,
};

pub use cropkit_settings::{
    default_config_path, Config, ConfigFormat, LoggingSettings, SettingsError,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging
///
/// Sets up structured logging with:
/// - Output on stderr, so stdout carries only command results
/// - RUST_LOG environment variable support
/// - Pretty text, or one JSON object per line when `json` is set
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::builder()
        .with_default_directive(tracing::Level::INFO.into())
        .from_env_lossy();
    let registry = tracing_subscriber::registry().with(env_filter);

    if json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_current_span(false);
        registry.with(fmt_layer).try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true)
            .with_line_number(true)
            .pretty();
        registry.with(fmt_layer).try_init()?;
    }

    Ok(())
}
