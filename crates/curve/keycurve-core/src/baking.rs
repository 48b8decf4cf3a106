//! Baking API: sample a curve at a fixed rate over a position window.

use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::error::CurveError;
use crate::Result;

const DEFAULT_FRAME_RATE: f32 = 60.0;

/// Upper bound on frames produced by a single bake. Windows that would need
/// more are rejected with [`CurveError::InvalidConfig`].
pub const MAX_BAKE_FRAMES: usize = 1 << 24;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BakingConfig {
    /// Samples per unit of position.
    pub frame_rate: f32,
    /// Window start; if None, uses the first key's position.
    pub start: Option<f32>,
    /// Window end; if None, uses the last key's position.
    pub end: Option<f32>,
}

impl Default for BakingConfig {
    fn default() -> Self {
        Self {
            frame_rate: DEFAULT_FRAME_RATE,
            start: None,
            end: None,
        }
    }
}

/// Uniform samples of a curve and its derivative.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BakedCurve {
    pub frame_rate: f32,
    pub start: f32,
    pub end: f32,
    pub values: Vec<f32>,
    pub derivatives: Vec<f32>,
}

impl BakedCurve {
    #[inline]
    pub fn frame_count(&self) -> usize {
        self.values.len()
    }

    /// Position of frame `index`; the final frame is pinned to `end`.
    #[inline]
    pub fn position_of(&self, index: usize) -> f32 {
        (self.start + index as f32 / self.frame_rate).min(self.end)
    }

    /// Value of the frame closest to `t`, clamped to the baked window.
    pub fn nearest(&self, t: f32) -> Option<f32> {
        let last = self.values.len().checked_sub(1)?;
        let frame = ((t - self.start) * self.frame_rate).round();
        let index = if frame.is_nan() || frame <= 0.0 {
            0
        } else {
            (frame as usize).min(last)
        };
        self.values.get(index).copied()
    }
}

/// Bake `curve` using the provided config.
///
/// Frames are spaced `1 / frame_rate` apart starting at `start`; the window end
/// is always included as the last frame.
pub fn bake_curve(curve: &Curve, cfg: &BakingConfig) -> Result<BakedCurve> {
    let (first, last) = curve.domain().ok_or(CurveError::EmptyCurve)?;

    let rate = if cfg.frame_rate.is_finite() && cfg.frame_rate > 0.0 {
        cfg.frame_rate
    } else {
        log::warn!(
            "invalid bake frame rate {}, falling back to {DEFAULT_FRAME_RATE}",
            cfg.frame_rate
        );
        DEFAULT_FRAME_RATE
    };
    let start = cfg.start.unwrap_or(first);
    let end = cfg.end.unwrap_or(last);
    if !start.is_finite() || !end.is_finite() || end < start {
        return Err(CurveError::InvalidConfig {
            reason: format!("bake window [{start}, {end}] is not a finite ascending range"),
        });
    }

    // f64 so a window near f32::MAX does not overflow before the cap check
    let frames = ((f64::from(end) - f64::from(start)) * f64::from(rate)).ceil();
    if !frames.is_finite() || frames >= MAX_BAKE_FRAMES as f64 {
        return Err(CurveError::InvalidConfig {
            reason: format!(
                "bake window [{start}, {end}] at {rate} exceeds {MAX_BAKE_FRAMES} frames"
            ),
        });
    }
    let frame_count = frames as usize + 1; // inclusive of end
    let mut values = Vec::with_capacity(frame_count);
    let mut derivatives = Vec::with_capacity(frame_count);
    for f in 0..frame_count {
        let t = (start + f as f32 / rate).min(end);
        values.push(curve.evaluate(t)?);
        derivatives.push(curve.evaluate_derivative(t)?);
    }
    log::debug!("baked {frame_count} frames over [{start}, {end}] at {rate}");

    Ok(BakedCurve {
        frame_rate: rate,
        start,
        end,
        values,
        derivatives,
    })
}
