//! Type pool: storage for every node of the bound graph.
//!
//! # Design
//!
//! - Flat `Vec<TypeData>` addressed by [`Idx`]
//! - Entity nodes (primitives, classes, ...) are pushed once per name and
//!   never deduplicated; their `Idx` is their identity
//! - Composite nodes (qualifiers, functions, template instances) are
//!   interned by structure, so `Pointer(Animal)` built twice is one node
//! - Entity shells may be filled after allocation (two-pass binding); the
//!   intern map never keys on entity contents, so filling is safe
//!
//! The pool is append-only while binding and frozen inside the
//! [`BoundSpec`](crate::BoundSpec) afterwards.
//!
//! # Panics
//!
//! Every constructor that appends a node panics once the pool already
//! holds `u32::MAX` nodes, the limit of an [`Idx`].

mod format;

use rustc_hash::FxHashMap;

use crate::{ClassDef, EnumDef, FunctionSig, Idx, StructDef, TemplateInstance, TypeData};

/// Unified storage for type nodes.
#[derive(Clone, Debug, Default)]
pub struct Pool {
    items: Vec<TypeData>,
    /// Composite node → its interned index.
    interned: FxHashMap<TypeData, Idx>,
}

impl Pool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of nodes in the pool.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the node behind `idx`.
    ///
    /// # Panics
    /// Panics if `idx` was not produced by this pool.
    #[inline]
    pub fn get(&self, idx: Idx) -> &TypeData {
        &self.items[idx.index()]
    }

    /// Iterate over all nodes with their handles.
    pub fn iter(&self) -> impl Iterator<Item = (Idx, &TypeData)> {
        self.items
            .iter()
            .enumerate()
            .map(|(i, data)| (Self::idx_at(i), data))
    }

    // === Allocation ===

    fn idx_at(position: usize) -> Idx {
        let raw = u32::try_from(position)
            .unwrap_or_else(|_| panic!("type pool exceeded {} nodes", u32::MAX));
        Idx::from_raw(raw)
    }

    /// Append a node without deduplication.
    fn push(&mut self, data: TypeData) -> Idx {
        let idx = Self::idx_at(self.items.len());
        self.items.push(data);
        idx
    }

    /// Return the existing node equal to `data`, or append it.
    fn intern(&mut self, data: TypeData) -> Idx {
        debug_assert!(data.is_composite(), "entities are never interned");
        if let Some(&idx) = self.interned.get(&data) {
            return idx;
        }
        let idx = self.push(data.clone());
        self.interned.insert(data, idx);
        idx
    }

    // === Entities ===

    /// Allocate a primitive node.
    ///
    /// # Panics
    /// Panics if the pool is full (see the module docs).
    pub fn primitive(&mut self, name: &str) -> Idx {
        self.push(TypeData::Primitive(name.to_owned()))
    }

    /// Allocate an opaque node.
    ///
    /// # Panics
    /// Panics if the pool is full (see the module docs).
    pub fn opaque(&mut self, name: &str) -> Idx {
        self.push(TypeData::Opaque(name.to_owned()))
    }

    /// Allocate a complete enum node.
    ///
    /// # Panics
    /// Panics if the pool is full (see the module docs).
    pub fn enum_type(&mut self, def: EnumDef) -> Idx {
        self.push(TypeData::Enum(def))
    }

    /// Allocate a record with no fields yet.
    ///
    /// # Panics
    /// Panics if the pool is full (see the module docs).
    pub fn struct_shell(&mut self, name: &str) -> Idx {
        self.push(TypeData::Struct(StructDef {
            name: name.to_owned(),
            fields: Vec::new(),
        }))
    }

    /// Allocate a class or interface with no members yet.
    ///
    /// # Panics
    /// Panics if the pool is full (see the module docs).
    pub fn class_shell(&mut self, name: &str, is_interface: bool) -> Idx {
        self.push(TypeData::Class(ClassDef::shell(name, is_interface)))
    }

    // === Composites ===
    //
    // Interning only appends for a structure not seen before; that append
    // panics on a full pool like the entity constructors.

    pub fn konst(&mut self, inner: Idx) -> Idx {
        self.intern(TypeData::Const(inner))
    }

    pub fn pointer(&mut self, inner: Idx) -> Idx {
        self.intern(TypeData::Pointer(inner))
    }

    pub fn reference(&mut self, inner: Idx) -> Idx {
        self.intern(TypeData::Ref(inner))
    }

    pub fn rvalue_reference(&mut self, inner: Idx) -> Idx {
        self.intern(TypeData::RvalueRef(inner))
    }

    pub fn function(&mut self, sig: FunctionSig) -> Idx {
        self.intern(TypeData::Function(sig))
    }

    pub fn template_instance(&mut self, template: &str, args: Vec<Idx>) -> Idx {
        self.intern(TypeData::TemplateInstance(TemplateInstance {
            template: template.to_owned(),
            args,
        }))
    }

    // === Typed access ===

    pub fn class_def(&self, idx: Idx) -> Option<&ClassDef> {
        match self.get(idx) {
            TypeData::Class(def) => Some(def),
            _ => None,
        }
    }

    pub fn struct_def(&self, idx: Idx) -> Option<&StructDef> {
        match self.get(idx) {
            TypeData::Struct(def) => Some(def),
            _ => None,
        }
    }

    pub fn enum_def(&self, idx: Idx) -> Option<&EnumDef> {
        match self.get(idx) {
            TypeData::Enum(def) => Some(def),
            _ => None,
        }
    }

    pub fn function_sig(&self, idx: Idx) -> Option<&FunctionSig> {
        match self.get(idx) {
            TypeData::Function(sig) => Some(sig),
            _ => None,
        }
    }

    pub fn template_instance_data(&self, idx: Idx) -> Option<&TemplateInstance> {
        match self.get(idx) {
            TypeData::TemplateInstance(inst) => Some(inst),
            _ => None,
        }
    }

    /// The declared name of an entity node.
    pub fn entity_name(&self, idx: Idx) -> Option<&str> {
        self.get(idx).entity_name()
    }

    pub(crate) fn class_def_mut(&mut self, idx: Idx) -> Option<&mut ClassDef> {
        match &mut self.items[idx.index()] {
            TypeData::Class(def) => Some(def),
            _ => None,
        }
    }

    pub(crate) fn struct_def_mut(&mut self, idx: Idx) -> Option<&mut StructDef> {
        match &mut self.items[idx.index()] {
            TypeData::Struct(def) => Some(def),
            _ => None,
        }
    }
}
