//! Identifiers and a simple allocator for registered curves.

use serde::{Deserialize, Serialize};

/// Stable handle of a curve inside a [`crate::CurveLibrary`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CurveId(pub u32);

/// Monotonic allocator for CurveId.
/// Ids are never reused within one allocator.
#[derive(Default, Debug)]
pub struct IdAllocator {
    next_curve: u32,
}

impl IdAllocator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn alloc_curve(&mut self) -> CurveId {
        let id = CurveId(self.next_curve);
        self.next_curve = self.next_curve.wrapping_add(1);
        id
    }
}
