//! Weft IR - the unresolved input tree.
//!
//! This crate holds the data handed to the binder by the specification
//! loader:
//! - `TypeDesc` trees describing types before resolution
//! - Declarations for structs, classes, interfaces, enums, opaque types,
//!   templates and aliases
//! - `SpecInput`, the root of one whole specification
//!
//! Nothing here resolves names. Declarations reference each other purely by
//! (qualified) name; `weft_types` turns the tree into a cross-referenced
//! type graph.
//!
//! # Serialization
//!
//! With the `serde` feature every type derives `Serialize`/`Deserialize`,
//! so a loader can hand over the tree as JSON.

mod parsed_type;
mod spec;

pub use parsed_type::{ArgDesc, QualifiedName, Qualifiers, TypeDesc, TypeDescKind};
pub use spec::{
    AliasDecl, Arity, ClassDecl, EnumDecl, EnumeratorDecl, FieldDecl, MethodDecl, OverloadDecl,
    PropertyDecl, SpecInput, StructDecl, TemplateDecl,
};
