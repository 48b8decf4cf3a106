//! Curve sampling.
//!
//! Model:
//! - Keys are sorted ascending by position; the segment containing `t` is found
//!   with a binary partition.
//! - Queries before the first key or at/after the last key clamp to that key's value.
//! - A Step key holds its value on `[p_i, p_{i+1})`; the next key owns its exact position.
//! - A Smooth key starts a cubic Hermite segment using `tangent_out(k_i)` and
//!   `tangent_in(k_{i+1})`, both scaled by the segment span.
//!
//! API:
//! - Curve::evaluate(t) / Curve::evaluate_derivative(t)
//! - Curve::sample(t) fail-soft variant for callers that treat an empty curve as "no value"
//! - evaluate_segment / segment_derivative for a single key pair

use crate::curve::{Curve, Segment};
use crate::error::CurveError;
use crate::interp::functions::{hermite, hermite_derivative};
use crate::keyframe::{Continuity, Keyframe};
use crate::Result;

/// Span and normalized parameter of `t` within `[left, right]`, in f64.
///
/// `None` for a zero-length segment.
#[inline]
fn segment_param(left: &Keyframe, right: &Keyframe, t: f32) -> Option<(f64, f64)> {
    let span = f64::from(right.position) - f64::from(left.position);
    if span <= 0.0 {
        return None;
    }
    let u = ((f64::from(t) - f64::from(left.position)) / span).clamp(0.0, 1.0);
    Some((span, u))
}

/// Evaluate the segment `[left, right]` at `t`.
///
/// `t` is clamped to the segment. A zero-length segment yields `left.value`.
pub fn evaluate_segment(left: &Keyframe, right: &Keyframe, t: f32) -> f32 {
    let Some((span, u)) = segment_param(left, right, t) else {
        return left.value;
    };
    if t >= right.position {
        return right.value;
    }
    match left.continuity {
        Continuity::Step => left.value,
        Continuity::Smooth => hermite(
            f64::from(left.value),
            f64::from(left.tangent_out) * span,
            f64::from(right.value),
            f64::from(right.tangent_in) * span,
            u,
        ) as f32,
    }
}

/// Slope per unit position of the segment `[left, right]` at `t`.
pub fn segment_derivative(left: &Keyframe, right: &Keyframe, t: f32) -> f32 {
    let Some((span, u)) = segment_param(left, right, t) else {
        return 0.0;
    };
    match left.continuity {
        Continuity::Step => 0.0,
        Continuity::Smooth => (hermite_derivative(
            f64::from(left.value),
            f64::from(left.tangent_out) * span,
            f64::from(right.value),
            f64::from(right.tangent_in) * span,
            u,
        ) / span) as f32,
    }
}

/// Where a query lands relative to the keys.
enum Lookup<'a> {
    Clamped(&'a Keyframe),
    Inside(&'a Keyframe, &'a Keyframe),
}

impl Curve {
    fn lookup(&self, t: f32) -> Result<Lookup<'_>> {
        let keys = self.keys();
        let (first, last) = match (keys.first(), keys.last()) {
            (Some(first), Some(last)) => (first, last),
            _ => return Err(CurveError::EmptyCurve),
        };
        if let Some(Segment { start, end }) = self.segment_at(t) {
            return Ok(Lookup::Inside(&keys[start], &keys[end]));
        }
        // outside [first, last): at or past the end clamps right, anything else
        // (including NaN) clamps left
        if t >= last.position {
            Ok(Lookup::Clamped(last))
        } else {
            Ok(Lookup::Clamped(first))
        }
    }

    /// Sample the curve at `t`.
    ///
    /// Fails only for an empty curve. Out-of-domain queries clamp to the
    /// boundary keys.
    pub fn evaluate(&self, t: f32) -> Result<f32> {
        Ok(match self.lookup(t)? {
            Lookup::Clamped(key) => key.value,
            Lookup::Inside(left, right) => evaluate_segment(left, right, t),
        })
    }

    /// First derivative of the curve at `t`, per unit position.
    ///
    /// Zero outside the domain, on Step segments, and for single-key curves.
    pub fn evaluate_derivative(&self, t: f32) -> Result<f32> {
        Ok(match self.lookup(t)? {
            Lookup::Clamped(_) => 0.0,
            Lookup::Inside(left, right) => segment_derivative(left, right, t),
        })
    }

    /// Fail-soft [`Curve::evaluate`]: `None` when the curve has no keys.
    #[inline]
    pub fn sample(&self, t: f32) -> Option<f32> {
        self.evaluate(t).ok()
    }
}
