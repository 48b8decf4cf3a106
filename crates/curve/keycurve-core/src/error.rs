//! Error types for curve construction and sampling

use serde::{Deserialize, Serialize};

use crate::ids::CurveId;

/// Error type for curve operations
#[derive(thiserror::Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[non_exhaustive]
pub enum CurveError {
    /// A key was absent or carried a non-finite position/value
    #[error("Invalid key: {reason}")]
    InvalidKey { reason: String },

    /// Sampling was requested on a curve without keys
    #[error("Cannot evaluate a curve with no keys")]
    EmptyCurve,

    /// No curve registered under the given id
    #[error("Curve not found: {id:?}")]
    CurveNotFound { id: CurveId },

    /// A curve with this name is already registered
    #[error("Curve already registered: {name}")]
    DuplicateCurve { name: String },

    /// Baking window or rate could not be resolved
    #[error("Invalid config: {reason}")]
    InvalidConfig { reason: String },
}

impl CurveError {
    /// Shorthand for an [`CurveError::InvalidKey`] with the given reason.
    #[inline]
    pub fn invalid_key(reason: impl Into<String>) -> Self {
        Self::InvalidKey {
            reason: reason.into(),
        }
    }

    /// Get error category for logging
    #[inline]
    pub fn category(&self) -> &'static str {
        match self {
            Self::InvalidKey { .. } => "authoring",
            Self::EmptyCurve => "sampling",
            Self::CurveNotFound { .. } | Self::DuplicateCurve { .. } => "library",
            Self::InvalidConfig { .. } => "config",
        }
    }
}
