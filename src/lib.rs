//! # BoxKit
//!
//! A rotation-aware bounding-box editor engine: the geometry and state behind
//! an overlay that lets a user move, resize and rotate a box by dragging its
//! handles.
//!
//! ## Architecture
//!
//! BoxKit is organized as a workspace with multiple crates:
//!
//! 1. **boxkit-core** - Geometry primitives, interaction settings, errors
//! 2. **boxkit-designer** - Handle layout, frame conversion, drag sessions, host interface
//! 3. **boxkit-settings** - Configuration files and persistence
//! 4. **boxkit** - Facade re-exporting the above plus logging setup
//!
//! ## Features
//!
//! - **Handle Layout**: eight resize anchors, a rotation handle and a center marker
//! - **Rotated Frames**: resize math stays correct however the box is turned
//! - **Drag Sessions**: pointer-down/move/up state machine with per-handle resize rules
//! - **Host Agnostic**: all rendering goes through [`HostAdapter`]

pub use boxkit_designer as designer;
pub use boxkit_settings as settings;

pub use boxkit_core::{
    AbsCoords, AngleDeg, AngleRad, DegeneratePolicy, Error, InteractionSettings, RelCoords,
    Result, Size,
};

pub use boxkit_designer::{
    compute_layout, to_relative, BoxEditor, DragHandle, DragSession, ElementRef, HostAdapter,
    InMemorySurface, LayoutResult, PointerEvent, PointerKind, ResizeHandle, SessionState,
    SideEffect, SurfaceProbe,
};

pub use boxkit_settings::{Config, LogFormat, LoggingSettings, SettingsPersistence};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Builds the log filter: `RUST_LOG` when set, otherwise the configured level.
pub fn log_filter(settings: &LoggingSettings) -> anyhow::Result<tracing_subscriber::EnvFilter> {
    use anyhow::Context;
    use tracing_subscriber::EnvFilter;

    match EnvFilter::try_from_default_env() {
        Ok(filter) => Ok(filter),
        Err(_) => EnvFilter::try_new(&settings.level)
            .with_context(|| format!("invalid log level directive {:?}", settings.level)),
    }
}

/// Initialize logging
///
/// Sets up structured logging with:
/// - Console output, pretty or JSON
/// - RUST_LOG environment variable support
///
/// Fails if a global subscriber is already installed.
pub fn init_logging(settings: &LoggingSettings) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;

    let env_filter = log_filter(settings)?;
    let registry = tracing_subscriber::registry().with(env_filter);

    match settings.format {
        LogFormat::Pretty => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stdout)
                    .with_target(true)
                    .with_level(true)
                    .with_thread_ids(true)
                    .with_thread_names(true)
                    .with_line_number(true)
                    .pretty(),
            )
            .try_init()?,
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .with_writer(std::io::stdout)
                    .with_target(true)
                    .json()
                    .with_current_span(true),
            )
            .try_init()?,
    }

    tracing::debug!(version = VERSION, format = %settings.format, "logging initialised");
    Ok(())
}

/// Loads the configuration at `path` (defaults if absent) and creates an
/// editor over `host` with its interaction settings.
pub fn editor_from_config<H: HostAdapter>(
    path: &std::path::Path,
    host: H,
) -> anyhow::Result<(Config, BoxEditor<H>)> {
    let config = SettingsPersistence::load_or_default(path)?.into_config();
    let editor = BoxEditor::new(host, config.interaction);
    Ok((config, editor))
}
