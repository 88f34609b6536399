//! # BoxKit Core
//!
//! Core types and utilities for BoxKit.
//! Provides the geometry value types, layout constants, interaction settings
//! and the error taxonomy shared by the editor crates.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod interaction;
pub mod types;

pub use error::{Error, GeometryError, Result, SessionError, TransformError};

pub use geometry::{
    round_half_up, round_to_decimals, AbsCoords, AngleDeg, AngleRad, RelCoords, Size,
};

pub use interaction::{DegeneratePolicy, InteractionSettings};

// Re-export type aliases for convenience
pub use types::{shared, thread_safe, Shared, ThreadSafe};
