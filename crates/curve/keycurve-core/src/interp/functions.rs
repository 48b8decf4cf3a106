//! Interpolation helpers:
//! - hermite (cubic Hermite from endpoint values and segment-scaled tangents)
//! - hermite_derivative (d/du of the same polynomial)
//!
//! Everything runs in f64: a segment span between two finite f32 positions can
//! exceed f32::MAX, and tangent * span must stay finite.

/// Cubic Hermite basis weights `[h00, h10, h01, h11]` at `u` in [0, 1].
#[inline]
pub fn hermite_basis(u: f64) -> [f64; 4] {
    let u2 = u * u;
    let u3 = u2 * u;
    [
        2.0 * u3 - 3.0 * u2 + 1.0,
        u3 - 2.0 * u2 + u,
        -2.0 * u3 + 3.0 * u2,
        u3 - u2,
    ]
}

/// Derivatives of the Hermite basis weights with respect to `u`.
#[inline]
fn hermite_basis_derivative(u: f64) -> [f64; 4] {
    let u2 = u * u;
    [
        6.0 * u2 - 6.0 * u,
        3.0 * u2 - 4.0 * u + 1.0,
        -6.0 * u2 + 6.0 * u,
        3.0 * u2 - 2.0 * u,
    ]
}

/// Cubic Hermite interpolation.
///
/// `m0` and `m1` are control tangents over the whole segment, i.e. per-unit
/// slopes already multiplied by the segment span.
#[inline]
pub fn hermite(p0: f64, m0: f64, p1: f64, m1: f64, u: f64) -> f64 {
    let [h00, h10, h01, h11] = hermite_basis(u);
    h00 * p0 + h10 * m0 + h01 * p1 + h11 * m1
}

/// Derivative of [`hermite`] with respect to `u`.
/// Divide by the segment span to get a slope per unit position.
#[inline]
pub fn hermite_derivative(p0: f64, m0: f64, p1: f64, m1: f64, u: f64) -> f64 {
    let [d00, d10, d01, d11] = hermite_basis_derivative(u);
    d00 * p0 + d10 * m0 + d01 * p1 + d11 * m1
}
