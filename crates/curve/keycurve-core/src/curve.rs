//! Ordered keyframe collection.
//!
//! Keys stay sorted ascending by position after every insertion. Keys sharing a
//! position keep their insertion order, so the later key owns that position
//! when sampled.

use crate::error::CurveError;
use crate::keyframe::Keyframe;
use crate::tangent::{TangentCalculator, TangentMode};
use crate::Result;

/// Index pair of the keys bounding a query position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Segment {
    pub start: usize,
    pub end: usize,
}

/// A scalar keyframe curve.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Curve {
    keys: Vec<Keyframe>,
}

impl Curve {
    /// Create an empty curve.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
        }
    }

    /// Build a curve from keys in any order.
    /// Fails on the first undefined key; no curve is returned in that case.
    pub fn from_keys<I>(keys: I) -> Result<Self>
    where
        I: IntoIterator,
        I::Item: Into<Keyframe>,
    {
        let iter = keys.into_iter();
        let mut curve = Self::with_capacity(iter.size_hint().0);
        for key in iter {
            curve.insert(key.into())?;
        }
        Ok(curve)
    }

    /// Insert a key, keeping the collection sorted by position.
    ///
    /// The key goes right before the first key with a strictly greater
    /// position, or at the end. Returns the index it was placed at.
    pub fn insert(&mut self, key: Keyframe) -> Result<usize> {
        if !key.position.is_finite() {
            return Err(CurveError::invalid_key(format!(
                "position must be finite, got {}",
                key.position
            )));
        }
        if !key.value.is_finite() {
            return Err(CurveError::invalid_key(format!(
                "value must be finite, got {}",
                key.value
            )));
        }

        let index = self.keys.partition_point(|k| k.position <= key.position);
        self.keys.insert(index, key);
        log::trace!(
            "inserted key at position {} (index {index} of {})",
            key.position,
            self.keys.len()
        );
        Ok(index)
    }

    /// Insert a key that may be missing from authored data.
    pub fn try_insert(&mut self, key: Option<Keyframe>) -> Result<usize> {
        match key {
            Some(key) => self.insert(key),
            None => Err(CurveError::invalid_key("key is missing")),
        }
    }

    /// Fill every non-authored tangent using `mode`.
    /// Returns the number of keys whose tangents changed.
    #[inline]
    pub fn derive_tangents(&mut self, mode: TangentMode) -> usize {
        TangentCalculator::new(mode).apply(self)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Keys in ascending position order.
    #[inline]
    pub fn keys(&self) -> &[Keyframe] {
        &self.keys
    }

    /// Tangent passes write through here; the slice cannot change the key count.
    #[inline]
    pub(crate) fn keys_mut(&mut self) -> &mut [Keyframe] {
        &mut self.keys
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<&Keyframe> {
        self.keys.get(index)
    }

    #[inline]
    pub fn first(&self) -> Option<&Keyframe> {
        self.keys.first()
    }

    #[inline]
    pub fn last(&self) -> Option<&Keyframe> {
        self.keys.last()
    }

    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, Keyframe> {
        self.keys.iter()
    }

    /// Position range `(first, last)` covered by the keys.
    #[inline]
    pub fn domain(&self) -> Option<(f32, f32)> {
        match (self.keys.first(), self.keys.last()) {
            (Some(first), Some(last)) => Some((first.position, last.position)),
            _ => None,
        }
    }

    /// Find the segment with `keys[start].position <= t < keys[end].position`.
    ///
    /// Returns `None` when `t` lies outside `[first, last)` or fewer than two
    /// keys exist; callers clamp to the boundary key in that case.
    pub fn segment_at(&self, t: f32) -> Option<Segment> {
        let (first, last) = self.domain()?;
        if self.keys.len() < 2 || !(t >= first && t < last) {
            return None;
        }
        // first key with position > t; t < last guarantees it exists and t >= first
        // guarantees it is not index 0
        let end = self.keys.partition_point(|k| k.position <= t);
        Some(Segment {
            start: end - 1,
            end,
        })
    }
}

impl<'a> IntoIterator for &'a Curve {
    type Item = &'a Keyframe;
    type IntoIter = std::slice::Iter<'a, Keyframe>;

    fn into_iter(self) -> Self::IntoIter {
        self.keys.iter()
    }
}
