//! Interpolation helpers.
//!
//! Scalar cubic Hermite basis, its derivative, and linear blending.

pub mod functions;
