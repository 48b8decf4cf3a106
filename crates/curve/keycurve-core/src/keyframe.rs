//! Keyframe data model.

use serde::{Deserialize, Serialize};

use crate::tangent::TangentMode;

/// Whether interpolation happens across the segment that follows a key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Continuity {
    /// Cubic Hermite interpolation towards the next key.
    #[default]
    Smooth,
    /// Hold this key's value until the next key's position.
    Step,
}

/// Which tangent sides were explicitly authored.
/// Authored sides are left untouched by the tangent calculator.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AuthoredTangents {
    #[serde(default)]
    #[serde(rename = "in")]
    pub r#in: bool,
    #[serde(default)]
    #[serde(rename = "out")]
    pub r#out: bool,
}

impl AuthoredTangents {
    pub const NONE: Self = Self {
        r#in: false,
        r#out: false,
    };
    pub const BOTH: Self = Self {
        r#in: true,
        r#out: true,
    };

    #[inline]
    pub fn any(self) -> bool {
        self.r#in || self.r#out
    }
}

/// A single (position, value) sample with tangent and continuity metadata.
///
/// Tangents are slopes per unit of position. The evaluator scales them by the
/// segment span before feeding the Hermite basis.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Keyframe {
    pub position: f32,
    pub value: f32,
    #[serde(default)]
    pub tangent_in: f32,
    #[serde(default)]
    pub tangent_out: f32,
    #[serde(default)]
    pub continuity: Continuity,
    #[serde(default)]
    pub authored: AuthoredTangents,
    /// Per-key override of the batch tangent mode.
    #[serde(default)]
    pub tangent_mode: Option<TangentMode>,
}

impl Keyframe {
    /// Smooth key with flat, derivable tangents.
    #[inline]
    pub const fn new(position: f32, value: f32) -> Self {
        Self {
            position,
            value,
            tangent_in: 0.0,
            tangent_out: 0.0,
            continuity: Continuity::Smooth,
            authored: AuthoredTangents::NONE,
            tangent_mode: None,
        }
    }

    /// Key that holds its value across the following segment.
    #[inline]
    pub const fn step(position: f32, value: f32) -> Self {
        Self::new(position, value).with_continuity(Continuity::Step)
    }

    /// Key with both tangents authored explicitly.
    #[inline]
    pub const fn with_tangents(mut self, tangent_in: f32, tangent_out: f32) -> Self {
        self.tangent_in = tangent_in;
        self.tangent_out = tangent_out;
        self.authored = AuthoredTangents::BOTH;
        self
    }

    /// Author only the incoming tangent; the outgoing side stays derivable.
    #[inline]
    pub const fn with_tangent_in(mut self, tangent_in: f32) -> Self {
        self.tangent_in = tangent_in;
        self.authored.r#in = true;
        self
    }

    /// Author only the outgoing tangent; the incoming side stays derivable.
    #[inline]
    pub const fn with_tangent_out(mut self, tangent_out: f32) -> Self {
        self.tangent_out = tangent_out;
        self.authored.r#out = true;
        self
    }

    #[inline]
    pub const fn with_continuity(mut self, continuity: Continuity) -> Self {
        self.continuity = continuity;
        self
    }

    #[inline]
    pub const fn with_tangent_mode(mut self, mode: TangentMode) -> Self {
        self.tangent_mode = Some(mode);
        self
    }

    /// A key is usable only if both its position and value are finite.
    #[inline]
    pub fn is_defined(&self) -> bool {
        self.position.is_finite() && self.value.is_finite()
    }
}

impl From<(f32, f32)> for Keyframe {
    fn from((position, value): (f32, f32)) -> Self {
        Self::new(position, value)
    }
}
