//! Named curve registry.
//!
//! Curves are registered once under a unique name and addressed afterwards by
//! a dense [`CurveId`]. Each entry carries a caller-typed payload `P` (camera
//! rig handle, light index, blend slot...) next to the curve.

use hashbrown::HashMap;

use crate::curve::Curve;
use crate::error::CurveError;
use crate::ids::{CurveId, IdAllocator};
use crate::Result;

#[derive(Clone, Debug, PartialEq)]
pub struct CurveEntry<P> {
    pub name: String,
    pub curve: Curve,
    pub payload: P,
}

#[derive(Debug)]
pub struct CurveLibrary<P = ()> {
    ids: IdAllocator,
    entries: HashMap<CurveId, CurveEntry<P>>,
    by_name: HashMap<String, CurveId>,
}

impl<P> Default for CurveLibrary<P> {
    fn default() -> Self {
        Self {
            ids: IdAllocator::new(),
            entries: HashMap::new(),
            by_name: HashMap::new(),
        }
    }
}

impl<P> CurveLibrary<P> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `curve` under `name`. Names are unique within a library.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        curve: Curve,
        payload: P,
    ) -> Result<CurveId> {
        let name = name.into();
        if self.by_name.contains_key(&name) {
            return Err(CurveError::DuplicateCurve { name });
        }
        let id = self.ids.alloc_curve();
        log::debug!("registered curve '{name}' as {id:?} ({} keys)", curve.len());
        self.by_name.insert(name.clone(), id);
        self.entries.insert(
            id,
            CurveEntry {
                name,
                curve,
                payload,
            },
        );
        Ok(id)
    }

    #[inline]
    pub fn id_of(&self, name: &str) -> Option<CurveId> {
        self.by_name.get(name).copied()
    }

    #[inline]
    pub fn get(&self, id: CurveId) -> Option<&CurveEntry<P>> {
        self.entries.get(&id)
    }

    #[inline]
    pub fn curve(&self, id: CurveId) -> Option<&Curve> {
        self.entries.get(&id).map(|e| &e.curve)
    }

    /// Mutable access for further authoring (inserting keys, re-deriving tangents).
    #[inline]
    pub fn curve_mut(&mut self, id: CurveId) -> Option<&mut Curve> {
        self.entries.get_mut(&id).map(|e| &mut e.curve)
    }

    #[inline]
    pub fn payload(&self, id: CurveId) -> Option<&P> {
        self.entries.get(&id).map(|e| &e.payload)
    }

    /// Sample the curve registered as `id` at `t`.
    pub fn evaluate(&self, id: CurveId, t: f32) -> Result<f32> {
        self.curve(id)
            .ok_or(CurveError::CurveNotFound { id })?
            .evaluate(t)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (CurveId, &CurveEntry<P>)> {
        self.entries.iter().map(|(id, e)| (*id, e))
    }
}
