//! Interaction settings consumed by the drag session.

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;
use crate::geometry::Size;

/// What a resize does when it would collapse or invert the box.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum DegeneratePolicy {
    /// Emit the raw size, even if zero or negative (visually inverted box).
    #[default]
    Allow,
    /// Never go below the given dimensions on any of the resize handles.
    Clamp { min_width: f64, min_height: f64 },
}

impl DegeneratePolicy {
    /// Applies the policy to a computed size.
    pub fn apply(&self, size: Size) -> Size {
        match *self {
            Self::Allow => size,
            Self::Clamp {
                min_width,
                min_height,
            } => Size::new(size.width.max(min_width), size.height.max(min_height)),
        }
    }

    /// Checks that clamp minimums are usable.
    ///
    /// Minimums must be finite and must themselves form a non-degenerate size.
    pub fn validate(&self) -> Result<(), GeometryError> {
        let Self::Clamp {
            min_width,
            min_height,
        } = *self
        else {
            return Ok(());
        };

        for (axis, value) in [("width", min_width), ("height", min_height)] {
            if !value.is_finite() {
                return Err(GeometryError::InvalidMinimum {
                    axis: axis.to_string(),
                    value,
                });
            }
        }

        let minimum = Size::new(min_width, min_height);
        if minimum.is_degenerate() {
            return Err(GeometryError::DegenerateSize {
                width: minimum.width,
                height: minimum.height,
            });
        }
        Ok(())
    }
}

/// Pointer interaction preferences
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InteractionSettings {
    /// Treat the pointer leaving the surface as a release
    pub release_on_leave: bool,
    /// Ignore moves that do not report a pressed button
    pub require_pressed_button: bool,
    /// Add the rotation held at drag start to the computed rotation
    pub accumulate_rotation: bool,
    /// Resize policy for collapsing boxes
    pub degenerate: DegeneratePolicy,
}

impl Default for InteractionSettings {
    fn default() -> Self {
        Self {
            release_on_leave: true,
            require_pressed_button: true,
            accumulate_rotation: false,
            degenerate: DegeneratePolicy::Allow,
        }
    }
}

impl InteractionSettings {
    pub fn validate(&self) -> Result<(), GeometryError> {
        self.degenerate.validate()
    }
}
