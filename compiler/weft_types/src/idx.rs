//! Type node handle.
//!
//! Every node of the bound type graph lives in the [`Pool`](crate::Pool)
//! and is referenced by a 32-bit `Idx`.
//!
//! # Identity
//!
//! An `Idx` *is* the identity of a node. A class mentioned by a field, by a
//! pointer qualifier and by a template argument is the same `Idx` in all
//! three places. Comparing two handles is an O(1) integer comparison.

use std::fmt;

/// A 32-bit index into the type pool.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Idx(u32);

impl Idx {
    /// Create an index from a raw u32 value.
    ///
    /// The caller must ensure the index is valid in the pool it is used with.
    #[inline]
    pub(crate) const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Position of the node in pool storage.
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Debug for Idx {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Idx({})", self.0)
    }
}
