//! Geometry value types
//!
//! Two coordinate frames are in play:
//! - **Absolute** ([`AbsCoords`]): page pixels, origin top-left, +Y goes down.
//! - **Relative** ([`RelCoords`]): offsets from a box center. Depending on the
//!   producer the frame is either flipped and counter-rotated (resize math) or a
//!   plain screen-space offset (rotation tracking).
//!
//! Angles are carried as [`AngleDeg`] outside the engine and only turned into
//! [`AngleRad`] inside trigonometric code.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::constants::ANGLE_DECIMALS;

/// A point in the page's absolute pixel frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct AbsCoords {
    pub x: f64,
    pub y: f64,
}

impl AbsCoords {
    /// Creates a new absolute point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns this point shifted by `(dx, dy)`.
    pub fn translated(self, dx: f64, dy: f64) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for AbsCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.1}, {:.1})", self.x, self.y)
    }
}

/// A point expressed relative to a box center.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RelCoords {
    pub x: f64,
    pub y: f64,
}

impl RelCoords {
    /// Creates a new relative point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance from the frame origin.
    pub fn magnitude(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

impl Sub for RelCoords {
    type Output = RelCoords;

    fn sub(self, rhs: RelCoords) -> RelCoords {
        RelCoords::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Plain vector difference, no flip and no rotation.
impl Sub for AbsCoords {
    type Output = RelCoords;

    fn sub(self, rhs: AbsCoords) -> RelCoords {
        RelCoords::new(self.x - rhs.x, self.y - rhs.y)
    }
}

/// Re-anchors an unrotated offset on its center.
impl Add<AbsCoords> for RelCoords {
    type Output = AbsCoords;

    fn add(self, rhs: AbsCoords) -> AbsCoords {
        AbsCoords::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for RelCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<{:.1}, {:.1}>", self.x, self.y)
    }
}

/// Width and height of a box, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// Creates a new size.
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// True when either dimension is zero or negative.
    pub fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}x{:.1}", self.width, self.height)
    }
}

/// A rotation in degrees, the value hosts display and store.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AngleDeg(pub f64);

impl AngleDeg {
    pub const ZERO: AngleDeg = AngleDeg(0.0);

    pub fn to_radians(self) -> AngleRad {
        AngleRad(self.0.to_radians())
    }

    /// Rounds to the stored precision (hundredths of a degree).
    pub fn rounded(self) -> AngleDeg {
        AngleDeg(round_to_decimals(self.0, ANGLE_DECIMALS))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl fmt::Display for AngleDeg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}°", self.0)
    }
}

/// A rotation in radians. Only used inside trigonometric computation.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct AngleRad(pub f64);

impl AngleRad {
    pub fn to_degrees(self) -> AngleDeg {
        AngleDeg(self.0 * (180.0 / std::f64::consts::PI))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

impl Sub for AngleRad {
    type Output = AngleRad;

    fn sub(self, rhs: AngleRad) -> AngleRad {
        AngleRad(self.0 - rhs.0)
    }
}

/// Rounds to the nearest integer, halves going toward positive infinity.
///
/// `f64::round` sends `-2.5` to `-3`; pixel snapping here sends it to `-2`.
pub fn round_half_up(value: f64) -> f64 {
    let floor = value.floor();
    if value - floor >= 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Rounds `value` to `decimals` places, halves going away from zero.
///
/// Matches fixed-point formatting of angles, so `-0.125` becomes `-0.13`.
pub fn round_to_decimals(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale + 0.0
}
