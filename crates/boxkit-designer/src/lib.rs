//! # BoxKit Designer
//!
//! The geometry and state engine behind the bounding-box editor overlay.
//!
//! ## Core Components
//!
//! - **Layout**: box size → handle anchors, box rectangle, center, canvas size
//! - **Frame**: page coordinates → box-centered, counter-rotated coordinates
//! - **Session**: pointer-down/move/up state machine applying handle rules
//! - **Host**: the narrow read/write interface to the rendering surface
//!
//! ## Architecture
//!
//! ```text
//! BoxEditor (one per surface)
//!   ├── DragSession (Idle | Dragging(snapshot))
//!   │     ├── Frame (to_relative, centered_offset, angle_from_origin)
//!   │     └── Layout (compute_layout)
//!   └── HostAdapter (apply_layout / apply_position / apply_rotation)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use boxkit_core::{AbsCoords, InteractionSettings, Size};
//! use boxkit_designer::{BoxEditor, ElementRef, InMemorySurface, PointerEvent, ResizeHandle};
//!
//! let mut editor = BoxEditor::new(InMemorySurface::new(), InteractionSettings::default());
//! editor.wrap_region(AbsCoords::new(100.0, 100.0), Size::new(400.0, 200.0));
//!
//! let grab = editor
//!     .host()
//!     .layout()
//!     .anchor(ResizeHandle::BottomRight)
//!     .translated(90.0, 50.0);
//! editor.handle_event(&PointerEvent::down(ResizeHandle::BottomRight.into(), grab))?;
//! editor.handle_event(&PointerEvent::moved(grab.translated(50.0, 30.0)))?;
//! editor.handle_event(&PointerEvent::up(grab.translated(50.0, 30.0)))?;
//!
//! assert_eq!(editor.host().layout().box_size(), Size::new(450.0, 230.0));
//! # Ok::<(), boxkit_core::Error>(())
//! ```

pub mod css;
pub mod editor;
pub mod frame;
pub mod handle;
pub mod host;
pub mod layout;
pub mod session;
pub mod surface;

pub use editor::BoxEditor;
pub use frame::{angle_from_origin, centered_offset, to_relative};
pub use handle::{AxisSide, DragHandle, ElementRef, HandleElement, ResizeHandle};
pub use host::{HostAdapter, SurfaceProbe};
pub use layout::{compute_layout, layout_for, LayoutResult, RotateGuide};
pub use session::{
    resize, rotation_angle, transition, DragSession, DragSnapshot, PointerEvent, PointerKind,
    ResizeOutcome, RotationAnchor, SessionState, SideEffect, Transition,
};
pub use surface::InMemorySurface;
