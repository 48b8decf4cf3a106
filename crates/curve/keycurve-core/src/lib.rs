//! Keycurve Core
//!
//! Scalar keyframe curves: an ordered set of keys with tangents and a per-key
//! continuity mode, sampled at arbitrary positions.
//!
//! - [`Curve`] keeps keys sorted by position under insertion.
//! - [`TangentCalculator`] fills tangents that were not authored (flat, linear, smooth).
//! - [`Curve::evaluate`] samples with cubic Hermite or step segments and clamps
//!   outside the authored domain.
//!
//! Curves hold no locks. Mutation needs `&mut Curve`; any number of threads may
//! evaluate a shared `&Curve` concurrently.

pub mod baking;
pub mod config;
pub mod curve;
pub mod error;
pub mod ids;
pub mod interp;
pub mod keyframe;
pub mod library;
pub mod sampling;
pub mod tangent;

// Re-exports for consumers
pub use baking::{bake_curve, BakedCurve, BakingConfig, MAX_BAKE_FRAMES};
pub use config::{Config, CurveBuilder};
pub use curve::{Curve, Segment};
pub use error::CurveError;
pub use ids::CurveId;
pub use keyframe::{AuthoredTangents, Continuity, Keyframe};
pub use library::{CurveEntry, CurveLibrary};
pub use sampling::{evaluate_segment, segment_derivative};
pub use tangent::{TangentCalculator, TangentMode};

/// Result type for curve operations
pub type Result<T> = core::result::Result<T, CurveError>;
