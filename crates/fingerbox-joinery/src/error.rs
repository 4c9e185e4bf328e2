//! Error types for the joinery crate.
//!
//! Box generation fails as a whole: every variant here aborts the request
//! and carries the panel, edge or parameter it was raised for.

use std::io;
use thiserror::Error;

/// Errors that abort a box generation request.
#[derive(Error, Debug)]
pub enum BoxError {
    /// A box parameter failed pre-flight validation.
    #[error("Invalid parameter '{name}': {reason}")]
    InvalidParameter { name: String, reason: String },

    /// A panel edge cannot be laid out without producing a degenerate or
    /// self-intersecting outline.
    #[error("Invalid joint geometry on {panel} ({edge}): {reason}")]
    InvalidJointGeometry {
        panel: String,
        edge: String,
        reason: String,
    },

    /// The solidifier rejected an outline.
    #[error("Failed to solidify {panel}: {source}")]
    SolidifyFailure {
        panel: String,
        #[source]
        source: SolidifyError,
    },
}

impl BoxError {
    pub fn invalid_parameter(name: impl Into<String>, reason: impl Into<String>) -> Self {
        BoxError::InvalidParameter {
            name: name.into(),
            reason: reason.into(),
        }
    }

    pub fn invalid_geometry(
        panel: impl Into<String>,
        edge: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        BoxError::InvalidJointGeometry {
            panel: panel.into(),
            edge: edge.into(),
            reason: reason.into(),
        }
    }

    pub fn is_invalid_parameter(&self) -> bool {
        matches!(self, BoxError::InvalidParameter { .. })
    }

    pub fn is_invalid_geometry(&self) -> bool {
        matches!(self, BoxError::InvalidJointGeometry { .. })
    }

    pub fn is_solidify_failure(&self) -> bool {
        matches!(self, BoxError::SolidifyFailure { .. })
    }
}

/// Errors reported by a [`crate::solidify::Solidifier`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SolidifyError {
    /// Extrusion thickness must be positive and finite.
    #[error("Thickness must be positive, got {0}")]
    NonPositiveThickness(f64),

    /// The outline cannot bound a solid.
    #[error("Degenerate outline: {0}")]
    DegenerateOutline(String),

    /// Cap triangulation failed.
    #[error("Tessellation failed: {0}")]
    Tessellation(String),
}

/// Errors raised while writing generated panels to disk or to a string.
#[derive(Error, Debug)]
pub enum ExportError {
    /// Nothing to export.
    #[error("Nothing to export: {0}")]
    Empty(String),

    /// I/O error during file operations.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// JSON serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Writing into an in-memory buffer failed.
    #[error("Formatting error: {0}")]
    Format(#[from] std::fmt::Error),
}

/// Result type alias for box generation.
pub type BoxResult<T> = Result<T, BoxError>;

/// Result type alias for exporters.
pub type ExportResult<T> = Result<T, ExportError>;
