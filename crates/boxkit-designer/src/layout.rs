//! Handle layout for the overlay surface.
//!
//! The surface is a canvas slightly larger than the box: a band of
//! [`ROTATE_HANDLE_Y_OFFSET`] pixels above the box holds the rotation handle
//! and half a handle of padding sits on the other sides. All coordinates below
//! are local to that canvas, origin top-left.
//!
//! ```text
//!            (o)          <- rotation handle, y = 11
//!             |           <- guide line
//!   [■]------[■]------[■] <- box top at y = 50
//!    |                 |
//!   [■]       +       [■]
//!    |                 |
//!   [■]------[■]------[■]
//! ```

use boxkit_core::constants::{
    HANDLE_SIZE, HORIZONTAL_MARGIN, ROTATE_HANDLE_Y_OFFSET, VERTICAL_MARGIN,
};
use boxkit_core::{AbsCoords, Error, Result, Size};
use serde::{Deserialize, Serialize};

use crate::handle::ResizeHandle;

/// The vertical guide joining the rotation handle to the box top edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RotateGuide {
    pub x: f64,
    pub y1: f64,
    pub y2: f64,
}

/// Every coordinate the host needs to draw the overlay for one box size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayoutResult {
    pub handle_size: f64,
    pub box_width: f64,
    pub box_height: f64,
    /// Canvas width.
    pub width: f64,
    /// Canvas height.
    pub height: f64,
    pub box_top: f64,
    pub box_left: f64,
    /// Surface origin relative to the wrapped region, vertically.
    pub top_offset: f64,
    /// Surface origin relative to the wrapped region, horizontally.
    pub left_offset: f64,

    pub rotate: AbsCoords,
    pub rotate_link: RotateGuide,
    pub top_left: AbsCoords,
    pub top_middle: AbsCoords,
    pub top_right: AbsCoords,
    pub middle_left: AbsCoords,
    pub middle_right: AbsCoords,
    pub bottom_left: AbsCoords,
    pub bottom_middle: AbsCoords,
    pub bottom_right: AbsCoords,
    pub center: AbsCoords,
}

impl LayoutResult {
    /// Anchor of a resize handle.
    pub fn anchor(&self, handle: ResizeHandle) -> AbsCoords {
        match handle {
            ResizeHandle::TopLeft => self.top_left,
            ResizeHandle::TopMiddle => self.top_middle,
            ResizeHandle::TopRight => self.top_right,
            ResizeHandle::MiddleLeft => self.middle_left,
            ResizeHandle::MiddleRight => self.middle_right,
            ResizeHandle::BottomLeft => self.bottom_left,
            ResizeHandle::BottomMiddle => self.bottom_middle,
            ResizeHandle::BottomRight => self.bottom_right,
        }
    }

    /// All eight resize anchors, in [`ResizeHandle::ALL`] order.
    pub fn anchors(&self) -> impl Iterator<Item = (ResizeHandle, AbsCoords)> + '_ {
        ResizeHandle::ALL
            .into_iter()
            .map(move |handle| (handle, self.anchor(handle)))
    }

    pub fn box_size(&self) -> Size {
        Size::new(self.box_width, self.box_height)
    }

    pub fn canvas_size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// The host `viewBox` attribute for the canvas.
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    /// Serializes the layout for hosts that render from JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| Error::other(format!("Failed to serialize layout: {}", e)))
    }
}

/// Computes the overlay layout for a box of `width` x `height` pixels.
///
/// Total for every input: very small or negative sizes produce a degenerate
/// drawing, never an error.
pub fn compute_layout(width: f64, height: f64) -> LayoutResult {
    let half = HANDLE_SIZE / 2.0;

    // handles straddle the border, nudged one pixel inward
    let top = ROTATE_HANDLE_Y_OFFSET;
    let top_handle_y = top - half - 1.0;
    let bottom_handle_y = top + height - half - 1.0;
    let middle_handle_y = top + height / 2.0 - half;

    let left_x = 1.0;
    let middle_x = width / 2.0;
    let right_x = width - 1.0;

    let rotate = AbsCoords::new(width / 2.0 + half, half + 1.0);

    LayoutResult {
        handle_size: HANDLE_SIZE,
        box_height: height,
        box_width: width,
        height: height + VERTICAL_MARGIN,
        width: width + HORIZONTAL_MARGIN,
        box_top: top,
        box_left: half,
        top_offset: -top,
        left_offset: -half,
        rotate,
        rotate_link: RotateGuide {
            x: rotate.x,
            y1: rotate.y,
            y2: top,
        },
        top_left: AbsCoords::new(left_x, top_handle_y),
        top_middle: AbsCoords::new(middle_x, top_handle_y),
        top_right: AbsCoords::new(right_x, top_handle_y),
        middle_left: AbsCoords::new(left_x, middle_handle_y),
        middle_right: AbsCoords::new(right_x, middle_handle_y),
        bottom_left: AbsCoords::new(left_x, bottom_handle_y),
        bottom_middle: AbsCoords::new(middle_x, bottom_handle_y),
        bottom_right: AbsCoords::new(right_x, bottom_handle_y),
        center: AbsCoords::new((width + HORIZONTAL_MARGIN) / 2.0, top + height / 2.0),
    }
}

/// Layout for a [`Size`].
pub fn layout_for(size: Size) -> LayoutResult {
    compute_layout(size.width, size.height)
}
