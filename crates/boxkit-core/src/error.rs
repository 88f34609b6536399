//! Error handling for BoxKit
//!
//! Provides error types for each layer of the editor engine:
//! - Session errors (drag state machine and handle identity)
//! - Geometry errors (size policies and degenerate boxes)
//! - Transform errors (parsing host transform strings)
//!
//! All error types use `thiserror` for ergonomic error handling.

use thiserror::Error;

/// Drag session error type
///
/// Represents violations of the drag session state machine and
/// handle identities that cannot be mapped to a known tag.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SessionError {
    /// A draggable element carries an identity that names no known handle
    #[error("Unknown handle identity: {identity}")]
    InvalidHandle {
        /// The raw identity reported by the host.
        identity: String,
    },

    /// The held snapshot does not match the rule of its handle
    #[error("Invalid session state: {reason}")]
    InvalidState {
        /// Why the snapshot is unusable.
        reason: String,
    },
}

/// Geometry error type
///
/// Represents sizes that a resize policy refuses to produce or accept.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// A size limit has a zero or negative dimension
    #[error("Degenerate size {width}x{height}")]
    DegenerateSize {
        /// The rejected width.
        width: f64,
        /// The rejected height.
        height: f64,
    },

    /// A clamp minimum is not a finite number
    #[error("Invalid minimum for {axis}: {value}")]
    InvalidMinimum {
        /// The axis the minimum applies to.
        axis: String,
        /// The rejected minimum.
        value: f64,
    },
}

/// Transform error type
///
/// Represents host transform strings that cannot be read as a rotation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TransformError {
    /// The transform string does not contain a `rotate(<n>deg)` term
    #[error("Malformed transform: {input:?}")]
    Malformed {
        /// The offending host string.
        input: String,
    },

    /// The rotation parsed to an infinite or NaN value
    #[error("Rotation is not finite: {input:?}")]
    NonFinite {
        /// The offending host string.
        input: String,
    },
}

/// Main error type for BoxKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Session error
    #[error(transparent)]
    Session(#[from] SessionError),

    /// Geometry error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// Transform error
    #[error(transparent)]
    Transform(#[from] TransformError),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a session error
    pub fn is_session_error(&self) -> bool {
        matches!(self, Error::Session(_))
    }

    /// Check if this is an invalid handle error
    pub fn is_invalid_handle(&self) -> bool {
        matches!(self, Error::Session(SessionError::InvalidHandle { .. }))
    }

    /// Check if this is a transform error
    pub fn is_transform_error(&self) -> bool {
        matches!(self, Error::Transform(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
