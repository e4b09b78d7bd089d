//! Two-pass specification binder.
//!
//! The `Binder` owns every piece of mutable state of one bind: the pool,
//! the symbol table and the ordered entity lists. It is threaded through
//! all resolution calls explicitly; there is no ambient registry.
//!
//! # Architecture
//!
//! ```text
//! Registering (pass 1)
//!   templates        → arity table
//!   primitives       → complete nodes
//!   classes          → empty shells
//!   interfaces       → empty shells
//!   enums            → complete nodes
//!   structs          → empty shells
//!   opaque types     → complete nodes
//!   shared wrappers  → template<class> instances
//!   aliases          → second name for a resolved node
//!
//! Resolving (pass 2)
//!   struct fields
//!   class / interface methods, statics, constructors, properties, iterable
//! ```
//!
//! Allocating every named node before resolving anything lets any
//! declaration reference any other regardless of order.

mod api;
mod linking;
mod methods;
mod registration;
mod resolve;

pub use api::{bind_spec, bind_spec_with_options};

use crate::{BoundSpec, Idx, Pool, SymbolTable};

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod integration_tests;

/// Knobs for a bind invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindOptions {
    /// Template installed by shared-ownership wrappers.
    pub shared_template: String,
    /// Primitive constructors must declare as their return type.
    pub void_type: String,
}

impl Default for BindOptions {
    fn default() -> Self {
        BindOptions {
            shared_template: "std::shared_ptr".to_owned(),
            void_type: "void".to_owned(),
        }
    }
}

/// Which pass a bind invocation is in.
///
/// Strictly `Registering` then `Resolving`; the first error ends the bind.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(crate) enum BindPhase {
    /// Pass 1: allocating named nodes.
    Registering,
    /// Pass 2: filling shells.
    Resolving,
}

/// State of one bind invocation.
///
/// # Component Structure
///
/// ```text
/// Binder
/// ├── pool: Pool              (every node)
/// ├── symbols: SymbolTable    (names, template arities)
/// ├── options: BindOptions
/// ├── phase: BindPhase
/// └── Entity lists (declaration order)
///     ├── classes   (classes, then interfaces)
///     ├── records
///     ├── enums
///     └── opaques
/// ```
pub(crate) struct Binder {
    pool: Pool,
    symbols: SymbolTable,
    options: BindOptions,
    phase: BindPhase,

    classes: Vec<Idx>,
    records: Vec<Idx>,
    enums: Vec<Idx>,
    opaques: Vec<Idx>,
}

impl Binder {
    pub(crate) fn new(options: BindOptions) -> Self {
        Binder {
            pool: Pool::new(),
            symbols: SymbolTable::new(),
            options,
            phase: BindPhase::Registering,
            classes: Vec::new(),
            records: Vec::new(),
            enums: Vec::new(),
            opaques: Vec::new(),
        }
    }

    /// Leave the registering pass. There is no way back.
    fn begin_resolving(&mut self) {
        debug_assert_eq!(self.phase, BindPhase::Registering);
        self.phase = BindPhase::Resolving;
    }

    /// Freeze everything into the output bundle.
    fn finish(self) -> BoundSpec {
        debug_assert_eq!(self.phase, BindPhase::Resolving);
        tracing::debug!(nodes = self.pool.len(), "bind finished");
        BoundSpec::new(
            self.pool,
            self.symbols,
            self.classes,
            self.records,
            self.enums,
            self.opaques,
        )
    }
}
