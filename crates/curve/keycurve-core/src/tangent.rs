//! Tangent derivation from neighbouring keys.
//!
//! Modes:
//! - Flat: both tangents are zero.
//! - Linear: each side points at its neighbour (chord slope of the adjacent segment).
//! - Smooth: central difference across both neighbours, one-sided at the ends.
//!
//! Derived tangents only depend on neighbour positions and values, never on
//! neighbour tangents, so a pass over the keys can write in place.

use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::keyframe::Keyframe;

/// Strategy for filling tangents that were not authored.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TangentMode {
    Flat,
    /// Each side takes the chord slope towards its neighbour:
    /// `(value(k+1) - value(k)) / (position(k+1) - position(k))` for `tangent_out`,
    /// and the mirror for `tangent_in`. This is a per-unit slope, not the raw
    /// value delta; the two agree only when keys are one unit apart.
    Linear,
    #[default]
    Smooth,
}

impl TangentMode {
    #[inline]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Flat => "flat",
            Self::Linear => "linear",
            Self::Smooth => "smooth",
        }
    }
}

/// Slope per unit position between two keys; zero when the span is degenerate.
/// Computed in f64 so spans wider than f32::MAX still give a finite slope.
#[inline]
fn slope(from: &Keyframe, to: &Keyframe) -> f32 {
    let span = f64::from(to.position) - f64::from(from.position);
    if span > 0.0 {
        ((f64::from(to.value) - f64::from(from.value)) / span) as f32
    } else {
        0.0
    }
}

/// Fills non-authored tangents for a batch of keys.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TangentCalculator {
    mode: TangentMode,
}

impl TangentCalculator {
    pub const fn new(mode: TangentMode) -> Self {
        Self { mode }
    }

    #[inline]
    pub fn mode(&self) -> TangentMode {
        self.mode
    }

    /// Compute `(tangent_in, tangent_out)` for `keys[index]`, ignoring authoring flags.
    ///
    /// The key's own `tangent_mode` wins over the batch mode. `keys` must be sorted
    /// by position; returns `None` if `index` is out of bounds.
    pub fn tangents_at(&self, keys: &[Keyframe], index: usize) -> Option<(f32, f32)> {
        let key = keys.get(index)?;
        let prev = index.checked_sub(1).and_then(|i| keys.get(i));
        let next = keys.get(index + 1);

        Some(match key.tangent_mode.unwrap_or(self.mode) {
            TangentMode::Flat => (0.0, 0.0),
            TangentMode::Linear => {
                let t_in = prev.map_or(0.0, |p| slope(p, key));
                let t_out = next.map_or(0.0, |n| slope(key, n));
                (t_in, t_out)
            }
            TangentMode::Smooth => {
                let t = match (prev, next) {
                    (Some(p), Some(n)) => slope(p, n),
                    (Some(p), None) => slope(p, key),
                    (None, Some(n)) => slope(key, n),
                    (None, None) => 0.0,
                };
                (t, t)
            }
        })
    }

    /// Derive tangents for every key side that is not authored.
    /// Returns the number of keys whose tangents changed.
    pub fn apply(&self, curve: &mut Curve) -> usize {
        let mut changed = 0;
        for i in 0..curve.len() {
            let Some((t_in, t_out)) = self.tangents_at(curve.keys(), i) else {
                continue;
            };
            let key = &mut curve.keys_mut()[i];
            let before = (key.tangent_in, key.tangent_out);
            if !key.authored.r#in {
                key.tangent_in = t_in;
            }
            if !key.authored.r#out {
                key.tangent_out = t_out;
            }
            if before != (key.tangent_in, key.tangent_out) {
                changed += 1;
            }
        }
        log::debug!(
            "derived {} tangents over {} keys ({} changed)",
            self.mode.name(),
            curve.len(),
            changed
        );
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn keys(points: &[(f32, f32)]) -> Vec<Keyframe> {
        points.iter().copied().map(Keyframe::from).collect()
    }

    #[test]
    fn flat_is_zero() {
        let ks = keys(&[(0.0, 0.0), (1.0, 5.0), (2.0, 1.0)]);
        let calc = TangentCalculator::new(TangentMode::Flat);
        for i in 0..ks.len() {
            assert_eq!(calc.tangents_at(&ks, i), Some((0.0, 0.0)));
        }
    }

    #[test]
    fn linear_uses_adjacent_chords() {
        let ks = keys(&[(0.0, 0.0), (1.0, 10.0), (3.0, 6.0)]);
        let calc = TangentCalculator::new(TangentMode::Linear);
        assert_eq!(calc.tangents_at(&ks, 0), Some((0.0, 10.0)));
        assert_eq!(calc.tangents_at(&ks, 1), Some((10.0, -2.0)));
        assert_eq!(calc.tangents_at(&ks, 2), Some((-2.0, 0.0)));
    }

    #[test]
    fn smooth_central_and_one_sided() {
        let ks = keys(&[(0.0, 0.0), (1.0, 10.0), (3.0, 6.0)]);
        let calc = TangentCalculator::new(TangentMode::Smooth);
        assert_eq!(calc.tangents_at(&ks, 0), Some((10.0, 10.0)));
        let (t_in, t_out) = calc.tangents_at(&ks, 1).unwrap();
        assert_relative_eq!(t_in, 2.0);
        assert_relative_eq!(t_out, 2.0);
        assert_eq!(calc.tangents_at(&ks, 2), Some((-2.0, -2.0)));
    }

    #[test]
    fn smooth_single_key_is_zero() {
        let ks = keys(&[(4.0, 7.0)]);
        let calc = TangentCalculator::new(TangentMode::Smooth);
        assert_eq!(calc.tangents_at(&ks, 0), Some((0.0, 0.0)));
    }

    #[test]
    fn coincident_neighbours_give_zero_slope() {
        let ks = keys(&[(1.0, 0.0), (1.0, 5.0)]);
        let calc = TangentCalculator::new(TangentMode::Linear);
        assert_eq!(calc.tangents_at(&ks, 0), Some((0.0, 0.0)));
        assert_eq!(calc.tangents_at(&ks, 1), Some((0.0, 0.0)));
    }

    #[test]
    fn per_key_mode_overrides_batch() {
        let mut ks = keys(&[(0.0, 0.0), (1.0, 10.0), (2.0, 0.0)]);
        ks[1] = ks[1].with_tangent_mode(TangentMode::Linear);
        let calc = TangentCalculator::new(TangentMode::Flat);
        assert_eq!(calc.tangents_at(&ks, 0), Some((0.0, 0.0)));
        assert_eq!(calc.tangents_at(&ks, 1), Some((10.0, -10.0)));
    }

    #[test]
    fn out_of_range_index_is_none() {
        let ks = keys(&[(0.0, 0.0), (1.0, 1.0)]);
        let calc = TangentCalculator::new(TangentMode::Smooth);
        assert_eq!(calc.tangents_at(&ks, 2), None);
        assert_eq!(calc.tangents_at(&[], 0), None);
    }

    #[test]
    fn linear_divides_by_span() {
        // raw deltas are 4 and -6; spans are 2 and 3
        let ks = keys(&[(0.0, 0.0), (2.0, 4.0), (5.0, -2.0)]);
        let calc = TangentCalculator::new(TangentMode::Linear);
        assert_eq!(calc.tangents_at(&ks, 1), Some((2.0, -2.0)));
    }
}
