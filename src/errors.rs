//! # Error Types
//!
//! Structured error types for the analysis engine. Every failure mode from
//! input validation through the equilibrium solve is represented as a value,
//! so callers can clear displayed results and report a reason instead of
//! catching panics.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{BeamError, BeamResult};
//!
//! fn validate_length(length: f64) -> BeamResult<()> {
//!     if length <= 0.0 {
//!         return Err(BeamError::invalid_geometry(
//!             "length",
//!             length.to_string(),
//!             "Beam length must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for analysis operations
pub type BeamResult<T> = Result<T, BeamError>;

/// Structured error type for the beam analysis pipeline.
///
/// Each variant corresponds to one failure class of the static solve,
/// carrying enough context to explain the problem to a user without
/// re-running the analysis.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum BeamError {
    /// The structure is a mechanism: fewer reaction unknowns than
    /// independent equilibrium equations.
    #[error("Unstable structure: {unknowns} reaction unknowns for {equations} equilibrium equations")]
    Unstable { unknowns: usize, equations: usize },

    /// The structure is statically indeterminate: more reaction unknowns
    /// than equilibrium equations. This engine only solves determinate
    /// (including compound/hinged) systems.
    #[error("Statically indeterminate structure: {unknowns} reaction unknowns for {equations} equilibrium equations")]
    Indeterminate { unknowns: usize, equations: usize },

    /// An input value is geometrically invalid (out of range, duplicated,
    /// non-positive where positive is required).
    #[error("Invalid geometry for '{field}': {value} - {reason}")]
    InvalidGeometry {
        field: String,
        value: String,
        reason: String,
    },

    /// The equilibrium matrix is numerically singular despite a correct
    /// unknown count (e.g. a hinged segment with no support on one side).
    #[error("Singular equilibrium system: {reason}")]
    Singular { reason: String },
}

impl BeamError {
    /// Create an Unstable error
    pub fn unstable(unknowns: usize, equations: usize) -> Self {
        BeamError::Unstable {
            unknowns,
            equations,
        }
    }

    /// Create an Indeterminate error
    pub fn indeterminate(unknowns: usize, equations: usize) -> Self {
        BeamError::Indeterminate {
            unknowns,
            equations,
        }
    }

    /// Create an InvalidGeometry error
    pub fn invalid_geometry(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BeamError::InvalidGeometry {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a Singular error
    pub fn singular(reason: impl Into<String>) -> Self {
        BeamError::Singular {
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            BeamError::Unstable { .. } => "UNSTABLE",
            BeamError::Indeterminate { .. } => "INDETERMINATE",
            BeamError::InvalidGeometry { .. } => "INVALID_GEOMETRY",
            BeamError::Singular { .. } => "SINGULAR",
        }
    }
}
