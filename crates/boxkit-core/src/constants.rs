//! Layout constants shared by the overlay crates.

/// Side of a resize handle square, in pixels.
pub const HANDLE_SIZE: f64 = 20.0;

/// Vertical gap reserved above the box for the rotation handle and its guide line.
pub const ROTATE_HANDLE_Y_OFFSET: f64 = HANDLE_SIZE * 2.0 + HANDLE_SIZE / 2.0;

/// Extra canvas height around the box (rotation gap plus bottom handle overhang).
pub const VERTICAL_MARGIN: f64 = 60.0;

/// Extra canvas width around the box (half a handle on each side).
pub const HORIZONTAL_MARGIN: f64 = 20.0;

/// Decimal places kept when a rotation is stored or displayed.
pub const ANGLE_DECIMALS: i32 = 2;
