//! Handle and element identities.
//!
//! Host element ids are parsed once into [`ElementRef`]; from then on the
//! session dispatches on [`DragHandle`] only.

use std::fmt;
use std::str::FromStr;

use boxkit_core::SessionError;
use serde::{Deserialize, Serialize};

/// Host id of the overlay root surface.
pub const SURFACE_ID: &str = "box-editor";
/// Host id of the box rectangle.
pub const BOX_ID: &str = "box";
/// Host id of the center marker.
pub const CENTER_ID: &str = "center";
/// Host id of the line joining the rotation handle to the box.
pub const ROTATE_LINK_ID: &str = "handle_rotate_link";
/// Prefix shared by every handle id.
pub const HANDLE_PREFIX: &str = "handle_";

/// Where a handle sits along one axis of the box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSide {
    /// Left or top: dragging outward grows the box and moves its origin.
    Leading,
    /// Middle: the axis is unaffected.
    Middle,
    /// Right or bottom: dragging outward grows the box, origin stays.
    Trailing,
}

/// The eight resize handles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResizeHandle {
    TopLeft,
    TopMiddle,
    TopRight,
    MiddleLeft,
    MiddleRight,
    BottomLeft,
    BottomMiddle,
    BottomRight,
}

impl ResizeHandle {
    pub const ALL: [ResizeHandle; 8] = [
        ResizeHandle::TopLeft,
        ResizeHandle::TopMiddle,
        ResizeHandle::TopRight,
        ResizeHandle::MiddleLeft,
        ResizeHandle::MiddleRight,
        ResizeHandle::BottomLeft,
        ResizeHandle::BottomMiddle,
        ResizeHandle::BottomRight,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::TopLeft => "top_left",
            Self::TopMiddle => "top_middle",
            Self::TopRight => "top_right",
            Self::MiddleLeft => "middle_left",
            Self::MiddleRight => "middle_right",
            Self::BottomLeft => "bottom_left",
            Self::BottomMiddle => "bottom_middle",
            Self::BottomRight => "bottom_right",
        }
    }

    /// Column of the handle: left, middle or right.
    pub fn horizontal(self) -> AxisSide {
        match self {
            Self::TopLeft | Self::MiddleLeft | Self::BottomLeft => AxisSide::Leading,
            Self::TopMiddle | Self::BottomMiddle => AxisSide::Middle,
            Self::TopRight | Self::MiddleRight | Self::BottomRight => AxisSide::Trailing,
        }
    }

    /// Row of the handle: top, middle or bottom.
    pub fn vertical(self) -> AxisSide {
        match self {
            Self::TopLeft | Self::TopMiddle | Self::TopRight => AxisSide::Leading,
            Self::MiddleLeft | Self::MiddleRight => AxisSide::Middle,
            Self::BottomLeft | Self::BottomMiddle | Self::BottomRight => AxisSide::Trailing,
        }
    }
}

impl fmt::Display for ResizeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The transformation rule active for a drag session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragHandle {
    Resize(ResizeHandle),
    Rotate,
    Move,
}

impl DragHandle {
    pub fn is_resize(self) -> bool {
        matches!(self, Self::Resize(_))
    }
}

impl fmt::Display for DragHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Resize(handle) => handle.fmt(f),
            Self::Rotate => f.write_str("rotate"),
            Self::Move => f.write_str("move"),
        }
    }
}

/// Every element a pointer event can report as its target.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ElementRef {
    /// The overlay root that is positioned and rotated.
    Surface,
    /// The box rectangle.
    Box,
    /// The center marker.
    Center,
    /// The guide line under the rotation handle.
    RotateLink,
    /// A resize handle or the rotation handle.
    Handle(HandleElement),
    /// Any host element that is not part of the overlay.
    Foreign(String),
}

/// Handle elements of the overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandleElement {
    Resize(ResizeHandle),
    Rotate,
}

impl ElementRef {
    /// Parses a host element id.
    ///
    /// Ids carrying the handle prefix must name a known handle; anything
    /// else that is not an overlay id becomes [`ElementRef::Foreign`].
    pub fn parse(id: &str) -> Result<Self, SessionError> {
        match id {
            SURFACE_ID => return Ok(Self::Surface),
            BOX_ID => return Ok(Self::Box),
            CENTER_ID => return Ok(Self::Center),
            ROTATE_LINK_ID => return Ok(Self::RotateLink),
            _ => {}
        }

        let Some(tag) = id.strip_prefix(HANDLE_PREFIX) else {
            return Ok(Self::Foreign(id.to_string()));
        };

        if tag == "rotate" {
            return Ok(Self::Handle(HandleElement::Rotate));
        }

        ResizeHandle::ALL
            .iter()
            .find(|handle| handle.name() == tag)
            .map(|handle| Self::Handle(HandleElement::Resize(*handle)))
            .ok_or_else(|| SessionError::InvalidHandle {
                identity: id.to_string(),
            })
    }

    /// The host id this element was parsed from.
    pub fn id(&self) -> String {
        match self {
            Self::Surface => SURFACE_ID.to_string(),
            Self::Box => BOX_ID.to_string(),
            Self::Center => CENTER_ID.to_string(),
            Self::RotateLink => ROTATE_LINK_ID.to_string(),
            Self::Handle(HandleElement::Rotate) => format!("{HANDLE_PREFIX}rotate"),
            Self::Handle(HandleElement::Resize(handle)) => {
                format!("{HANDLE_PREFIX}{}", handle.name())
            }
            Self::Foreign(id) => id.clone(),
        }
    }

    /// Maps a pointer-down target onto the rule it starts.
    ///
    /// Handles start their own rule; the box body, the center marker and the
    /// surface itself start a move. The guide line and foreign elements are
    /// not draggable.
    pub fn drag_handle(&self) -> Option<DragHandle> {
        match self {
            Self::Handle(HandleElement::Resize(handle)) => Some(DragHandle::Resize(*handle)),
            Self::Handle(HandleElement::Rotate) => Some(DragHandle::Rotate),
            Self::Box | Self::Center | Self::Surface => Some(DragHandle::Move),
            Self::RotateLink | Self::Foreign(_) => None,
        }
    }
}

impl FromStr for ElementRef {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<ResizeHandle> for ElementRef {
    fn from(handle: ResizeHandle) -> Self {
        Self::Handle(HandleElement::Resize(handle))
    }
}
