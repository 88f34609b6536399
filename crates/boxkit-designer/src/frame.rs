//! Coordinate frame conversion.
//!
//! Resize math runs in a frame centered on the box, flipped so +Y goes up and
//! counter-rotated by the box's rotation, so that "drag right" always grows a
//! right handle no matter how the box is turned on screen.
//!
//! Formula:
//! ```text
//! x  = px - cx
//! y  = -(py - cy)                  // screen Y down -> frame Y up
//! x' = -round(y·sin θ - x·cos θ)
//! y' =  round(y·cos θ + x·sin θ)
//! ```

use boxkit_core::{round_half_up, AbsCoords, AngleDeg, AngleRad, RelCoords};

/// Converts an absolute point into the box's rotated relative frame.
///
/// Results are snapped to whole pixels to reject sub-pixel pointer noise.
pub fn to_relative(center: AbsCoords, angle: AngleDeg, point: AbsCoords) -> RelCoords {
    let x = point.x - center.x;
    let y = -(point.y - center.y);
    let theta = angle.to_radians().value();
    let (sin, cos) = theta.sin_cos();

    let x_rel = -round_half_up(y * sin - x * cos);
    let y_rel = round_half_up(y * cos + x * sin);
    // -0.0 would otherwise leak into displayed offsets
    RelCoords::new(x_rel + 0.0, y_rel + 0.0)
}

/// Offset of `point` from `center` in screen orientation, unrotated.
///
/// Used for rotation tracking, which measures the angle itself and so needs
/// no rotation compensation.
pub fn centered_offset(center: AbsCoords, point: AbsCoords) -> RelCoords {
    point - center
}

/// Polar angle of an already-centered point.
///
/// `atan2(0, 0)` is `0` under IEEE semantics, so the exact center yields a
/// defined angle.
pub fn angle_from_origin(point: RelCoords) -> AngleRad {
    AngleRad(point.y.atan2(point.x))
}
