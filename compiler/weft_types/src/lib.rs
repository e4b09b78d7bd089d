//! Type graph and binder for Weft.
//!
//! Turns an unresolved `weft_ir::SpecInput` into a `BoundSpec`: a graph of
//! `TypeData` nodes addressed by `Idx` handles, in which every type
//! reference points at exactly one node.
//!
//! # Node Identity
//!
//! - Entities (classes, interfaces, records, enums, opaque types,
//!   primitives) get one node per declared name.
//! - Composites (qualifiers, functions, template instances) are interned
//!   by structure, so equal composites compare equal by `Idx`.
//!
//! Binding runs in two passes over a single `Binder`; the `bind` module
//! documents the pass layout.

mod bind;
mod data;
mod error;
mod idx;
mod output;
mod pool;
mod stack;
mod symbols;

pub use bind::{bind_spec, bind_spec_with_options, BindOptions};
pub use data::{
    ClassDef, EnumDef, Enumerator, FieldDef, FunctionArg, FunctionSig, Method, MethodKind,
    Property, StructDef, TemplateInstance, TypeData,
};
pub use error::{BindError, BindResult};
pub use idx::Idx;
pub use output::{BindStats, BoundSpec};
pub use pool::Pool;
pub use symbols::SymbolTable;

// Size assertions to prevent accidental regressions.
#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Idx;
    const _: () = assert!(std::mem::size_of::<Idx>() == 4);
    const _: () = assert!(std::mem::size_of::<Option<Idx>>() == 8);
}
