//! Symbol table for one bind invocation.
//!
//! Two independent maps:
//! - type names → pool nodes, one global namespace shared by primitives,
//!   opaque types, enums, records, classes, interfaces, shared wrappers and
//!   aliases
//! - template names → declared arity
//!
//! A name can be bound once. Aliases are stored as a second name for an
//! existing node, so an alias and its target are indistinguishable after
//! lookup.

use rustc_hash::FxHashMap;
use weft_ir::Arity;

use crate::{BindError, BindResult, Idx, Pool};

#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    types: FxHashMap<String, Idx>,
    templates: FxHashMap<String, Arity>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Bind `name` to `idx`.
    ///
    /// Fails with `DuplicateName` if `name` is already bound.
    pub fn register(&mut self, name: &str, idx: Idx) -> BindResult<Idx> {
        if self.types.contains_key(name) {
            return Err(BindError::duplicate_name(name));
        }
        tracing::trace!(name, ?idx, "registered type name");
        self.types.insert(name.to_owned(), idx);
        Ok(idx)
    }

    /// Bind `name` to `template<target>`, the owning-pointer wrapper of a
    /// shared-ownership class.
    pub fn register_shared_wrapper(
        &mut self,
        name: &str,
        target: Idx,
        template: &str,
        pool: &mut Pool,
    ) -> BindResult<Idx> {
        if self.types.contains_key(name) {
            return Err(BindError::duplicate_name(name));
        }
        let wrapper = pool.template_instance(template, vec![target]);
        self.register(name, wrapper)
    }

    /// Declare a template and its arity.
    pub fn register_template(&mut self, name: &str, arity: Arity) -> BindResult<()> {
        if self.templates.contains_key(name) {
            return Err(BindError::duplicate_name(name));
        }
        self.templates.insert(name.to_owned(), arity);
        Ok(())
    }

    /// Fails with `UnknownType` if `name` is not bound.
    pub fn lookup_type(&self, name: &str) -> BindResult<Idx> {
        self.get(name).ok_or_else(|| BindError::unknown_type(name))
    }

    /// Fails with `UnknownTemplate` if `name` was never declared.
    pub fn lookup_template_arity(&self, name: &str) -> BindResult<Arity> {
        self.templates
            .get(name)
            .copied()
            .ok_or_else(|| BindError::unknown_template(name))
    }

    /// Non-failing lookup.
    pub fn get(&self, name: &str) -> Option<Idx> {
        self.types.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.types.contains_key(name)
    }

    /// Number of bound type names (aliases included).
    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}
