//! Stack growth for the recursive walks over types.
//!
//! Descriptor resolution and canonical formatting both recurse once per
//! nesting level. On native targets `stacker` grows the stack on demand;
//! on wasm32 the guard is a passthrough.

/// Keep this much stack free before descending another level.
#[cfg(not(target_arch = "wasm32"))]
const RED_ZONE: usize = 64 * 1024;

/// Grow the stack by this much when the red zone is reached.
#[cfg(not(target_arch = "wasm32"))]
const STACK_GROWTH: usize = 1024 * 1024;

/// Run `f`, growing the stack first if less than the red zone remains.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_GROWTH, f)
}

#[inline]
#[cfg(target_arch = "wasm32")]
pub(crate) fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
