//! CSS transform strings at the host boundary.
//!
//! Rotation is numeric everywhere inside the engine. Hosts that keep it in a
//! style attribute parse it here on the way in and format it here on the way
//! out.

use boxkit_core::{AbsCoords, AngleDeg, TransformError};

const ROTATE_FN: &str = "rotate(";

/// Reads the rotation out of a CSS `transform` value.
///
/// An empty value, `none`, or a transform without a `rotate()` term is an
/// unrotated surface.
pub fn parse_rotation(transform: &str) -> Result<AngleDeg, TransformError> {
    let trimmed = transform.trim();
    if trimmed.is_empty() || trimmed == "none" {
        return Ok(AngleDeg::ZERO);
    }

    let Some(start) = trimmed.find(ROTATE_FN) else {
        return Ok(AngleDeg::ZERO);
    };
    let rest = &trimmed[start + ROTATE_FN.len()..];
    let malformed = || TransformError::Malformed {
        input: transform.to_string(),
    };
    let end = rest.find(')').ok_or_else(malformed)?;
    let term = rest[..end].trim();

    let number = term
        .strip_suffix("deg")
        .or_else(|| (term == "0").then_some(term))
        .ok_or_else(malformed)?;
    let value: f64 = number.trim().parse().map_err(|_| malformed())?;

    if !value.is_finite() {
        return Err(TransformError::NonFinite {
            input: transform.to_string(),
        });
    }
    Ok(AngleDeg(value))
}

/// Formats a rotation as a CSS `transform` value.
pub fn format_rotation(angle: AngleDeg) -> String {
    format!("rotate({:.2}deg)", angle.value())
}

/// Formats a pivot as a CSS `transform-origin` value.
pub fn format_origin(pivot: AbsCoords) -> String {
    format!("{}px {}px", pivot.x, pivot.y)
}

/// Formats a length in pixels, as written to `left` and `top`.
pub fn format_px(value: f64) -> String {
    format!("{value}px")
}

/// Reads a pixel length such as `"120px"` or `"-3.5px"`.
pub fn parse_px(value: &str) -> Result<f64, TransformError> {
    let trimmed = value.trim();
    trimmed
        .strip_suffix("px")
        .unwrap_or(trimmed)
        .trim()
        .parse()
        .map_err(|_| TransformError::Malformed {
            input: value.to_string(),
        })
}
