//! Authoring configuration and the curve builder that consumes it.

use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::keyframe::{Continuity, Keyframe};
use crate::tangent::TangentMode;
use crate::Result;

/// Defaults applied while building curves from authored keys.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Batch mode for keys without their own `tangent_mode`.
    pub default_tangent_mode: TangentMode,
    /// Run the tangent calculator once all keys are inserted.
    pub auto_tangents: bool,
    /// Continuity given to keys added through [`CurveBuilder::point`].
    pub default_continuity: Continuity,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_tangent_mode: TangentMode::Smooth,
            auto_tangents: true,
            default_continuity: Continuity::Smooth,
        }
    }
}

/// Collects authored keys, then inserts them and derives tangents in one go.
///
/// Keys are validated on [`CurveBuilder::build`]; the first invalid key aborts
/// the build.
#[derive(Clone, Debug, Default)]
pub struct CurveBuilder {
    config: Config,
    keys: Vec<Option<Keyframe>>,
}

impl CurveBuilder {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            keys: Vec::new(),
        }
    }

    #[inline]
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Add a fully specified key.
    pub fn key(mut self, key: Keyframe) -> Self {
        self.keys.push(Some(key));
        self
    }

    /// Add a key that may be missing from the source data.
    pub fn maybe_key(mut self, key: Option<Keyframe>) -> Self {
        self.keys.push(key);
        self
    }

    /// Add a `(position, value)` pair using the configured continuity.
    pub fn point(self, position: f32, value: f32) -> Self {
        let continuity = self.config.default_continuity;
        self.key(Keyframe::new(position, value).with_continuity(continuity))
    }

    pub fn build(self) -> Result<Curve> {
        let mut curve = Curve::with_capacity(self.keys.len());
        for key in self.keys {
            curve.try_insert(key)?;
        }
        if self.config.auto_tangents {
            curve.derive_tangents(self.config.default_tangent_mode);
        }
        Ok(curve)
    }
}
