//! In-memory host surface.
//!
//! Keeps the overlay attributes the way a page would (numeric geometry plus
//! CSS transform strings) and records every effect applied to it. Used by the
//! tests and as the reference for real host adapters.

use boxkit_core::{AbsCoords, AngleDeg, Result, Size};

use crate::css::{format_origin, format_px, format_rotation, parse_px, parse_rotation};
use crate::handle::{ElementRef, HandleElement};
use crate::host::{HostAdapter, SurfaceProbe};
use crate::layout::{compute_layout, LayoutResult};
use crate::session::SideEffect;

/// Radius of the center marker.
pub const CENTER_MARKER_RADIUS: f64 = 5.0;

#[derive(Debug, Clone)]
pub struct InMemorySurface {
    position: AbsCoords,
    layout: LayoutResult,
    transform: String,
    transform_origin: String,
    history: Vec<SideEffect>,
}

impl Default for InMemorySurface {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemorySurface {
    /// An unplaced, unrotated surface with an empty box.
    pub fn new() -> Self {
        Self {
            position: AbsCoords::default(),
            layout: compute_layout(0.0, 0.0),
            transform: String::new(),
            transform_origin: String::new(),
            history: Vec::new(),
        }
    }

    /// Replaces the CSS `transform` value, as a host stylesheet might.
    pub fn with_transform(mut self, transform: impl Into<String>) -> Self {
        self.transform = transform.into();
        self
    }

    /// Places the surface from CSS `left` and `top` values, as a host
    /// stylesheet might.
    pub fn with_position_style(mut self, left: &str, top: &str) -> Result<Self> {
        self.position = AbsCoords::new(parse_px(left)?, parse_px(top)?);
        Ok(self)
    }

    pub fn position(&self) -> AbsCoords {
        self.position
    }

    pub fn layout(&self) -> &LayoutResult {
        &self.layout
    }

    /// The CSS `left` and `top` values for the current position.
    pub fn position_style(&self) -> (String, String) {
        (format_px(self.position.x), format_px(self.position.y))
    }

    /// The CSS `transform` value currently applied.
    pub fn transform(&self) -> &str {
        &self.transform
    }

    /// The CSS `transform-origin` value currently applied.
    pub fn transform_origin(&self) -> &str {
        &self.transform_origin
    }

    /// Effects applied so far, oldest first.
    pub fn history(&self) -> &[SideEffect] {
        &self.history
    }

    pub fn clear_history(&mut self) {
        self.history.clear();
    }

    fn local_rect(&self, element: &ElementRef) -> Option<(AbsCoords, Size)> {
        let layout = &self.layout;
        let handle = Size::new(layout.handle_size, layout.handle_size);
        let half = layout.handle_size / 2.0;

        match element {
            ElementRef::Surface => Some((AbsCoords::default(), layout.canvas_size())),
            ElementRef::Box => Some((
                AbsCoords::new(layout.box_left, layout.box_top),
                layout.box_size(),
            )),
            ElementRef::Center => Some((
                layout
                    .center
                    .translated(-CENTER_MARKER_RADIUS, -CENTER_MARKER_RADIUS),
                Size::new(CENTER_MARKER_RADIUS * 2.0, CENTER_MARKER_RADIUS * 2.0),
            )),
            ElementRef::RotateLink => Some((
                AbsCoords::new(layout.rotate_link.x, layout.rotate_link.y1),
                Size::new(0.0, layout.rotate_link.y2 - layout.rotate_link.y1),
            )),
            ElementRef::Handle(HandleElement::Rotate) => {
                Some((layout.rotate.translated(-half, -half), handle))
            }
            ElementRef::Handle(HandleElement::Resize(resize)) => {
                Some((layout.anchor(*resize), handle))
            }
            ElementRef::Foreign(_) => None,
        }
    }
}

impl SurfaceProbe for InMemorySurface {
    /// Axis-aligned boxes, ignoring the rotation.
    ///
    /// The center marker sits on the rotation pivot, so its box is exact
    /// whatever the rotation.
    fn bounding_box(&self, element: &ElementRef) -> Option<(AbsCoords, Size)> {
        self.local_rect(element).map(|(top_left, size)| {
            (
                top_left.translated(self.position.x, self.position.y),
                size,
            )
        })
    }

    fn current_rotation(&self) -> Result<AngleDeg> {
        Ok(parse_rotation(&self.transform)?)
    }

    fn surface_position(&self) -> AbsCoords {
        self.position
    }

    fn current_layout(&self) -> LayoutResult {
        self.layout
    }
}

impl HostAdapter for InMemorySurface {
    fn apply_layout(&mut self, layout: &LayoutResult) {
        self.layout = *layout;
        self.history.push(SideEffect::Layout(*layout));
    }

    fn apply_position(&mut self, top_left: AbsCoords) {
        self.position = top_left;
        self.history.push(SideEffect::Position(top_left));
    }

    fn apply_rotation(&mut self, angle: AngleDeg, pivot: AbsCoords) {
        self.transform_origin = format_origin(pivot);
        self.transform = format_rotation(angle);
        self.history.push(SideEffect::Rotation { angle, pivot });
    }
}
