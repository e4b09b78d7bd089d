//! The bound specification handed to code generators.
//!
//! `BoundSpec` owns the frozen pool and exposes entities as ordered
//! sequences. Nothing in it can be mutated, so it is `Send + Sync` and may
//! be traversed by any number of readers at once.

use std::fmt;

use crate::{
    ClassDef, EnumDef, Idx, Method, MethodKind, Pool, StructDef, SymbolTable, TypeData,
};

/// Fully resolved, cross-referenced output of a bind.
#[derive(Clone, Debug)]
pub struct BoundSpec {
    pool: Pool,
    symbols: SymbolTable,
    /// Classes, then interfaces, in declaration order.
    classes: Vec<Idx>,
    records: Vec<Idx>,
    enums: Vec<Idx>,
    opaques: Vec<Idx>,
}

impl BoundSpec {
    pub(crate) fn new(
        pool: Pool,
        symbols: SymbolTable,
        classes: Vec<Idx>,
        records: Vec<Idx>,
        enums: Vec<Idx>,
        opaques: Vec<Idx>,
    ) -> Self {
        BoundSpec {
            pool,
            symbols,
            classes,
            records,
            enums,
            opaques,
        }
    }

    /// The node storage. Every `Idx` in the bundle resolves here.
    pub fn pool(&self) -> &Pool {
        &self.pool
    }

    // === Ordered entity sequences ===

    pub fn classes(&self) -> impl Iterator<Item = (Idx, &ClassDef)> + '_ {
        self.classes
            .iter()
            .filter_map(|&idx| self.pool.class_def(idx).map(|def| (idx, def)))
    }

    pub fn records(&self) -> impl Iterator<Item = (Idx, &StructDef)> + '_ {
        self.records
            .iter()
            .filter_map(|&idx| self.pool.struct_def(idx).map(|def| (idx, def)))
    }

    pub fn enums(&self) -> impl Iterator<Item = (Idx, &EnumDef)> + '_ {
        self.enums
            .iter()
            .filter_map(|&idx| self.pool.enum_def(idx).map(|def| (idx, def)))
    }

    /// Opaque types with their names.
    pub fn opaques(&self) -> impl Iterator<Item = (Idx, &str)> + '_ {
        self.opaques.iter().filter_map(|&idx| match self.pool.get(idx) {
            TypeData::Opaque(name) => Some((idx, name.as_str())),
            _ => None,
        })
    }

    // === Lookups ===

    /// Any registered name: entities, wrappers and aliases.
    pub fn lookup(&self, name: &str) -> Option<Idx> {
        self.symbols.get(name)
    }

    pub fn class_named(&self, name: &str) -> Option<(Idx, &ClassDef)> {
        let idx = self.lookup(name)?;
        self.pool.class_def(idx).map(|def| (idx, def))
    }

    pub fn record_named(&self, name: &str) -> Option<(Idx, &StructDef)> {
        let idx = self.lookup(name)?;
        self.pool.struct_def(idx).map(|def| (idx, def))
    }

    pub fn enum_named(&self, name: &str) -> Option<(Idx, &EnumDef)> {
        let idx = self.lookup(name)?;
        self.pool.enum_def(idx).map(|def| (idx, def))
    }

    pub fn opaque_named(&self, name: &str) -> Option<Idx> {
        let idx = self.lookup(name)?;
        matches!(self.pool.get(idx), TypeData::Opaque(_)).then_some(idx)
    }

    /// Find a method by its identity key `(class name, unique name)`.
    pub fn method(&self, class: &str, unique_name: &str) -> Option<&Method> {
        self.class_named(class)?.1.method(unique_name)
    }

    /// Canonical text of a node.
    pub fn format_type(&self, idx: Idx) -> String {
        self.pool.format_type(idx)
    }

    pub fn stats(&self) -> BindStats {
        let mut stats = BindStats {
            records: self.records.len(),
            enums: self.enums.len(),
            opaques: self.opaques.len(),
            ..BindStats::default()
        };
        for (_, class) in self.classes() {
            if class.is_interface {
                stats.interfaces += 1;
            } else {
                stats.classes += 1;
            }
            for method in &class.methods {
                match method.kind {
                    MethodKind::Instance => stats.instance_methods += 1,
                    MethodKind::Static => stats.static_methods += 1,
                    MethodKind::Constructor => stats.constructors += 1,
                }
            }
        }
        stats
    }
}

/// Entity counts of a bound specification.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct BindStats {
    pub classes: usize,
    pub interfaces: usize,
    pub records: usize,
    pub enums: usize,
    pub opaques: usize,
    pub instance_methods: usize,
    pub static_methods: usize,
    pub constructors: usize,
}

impl fmt::Display for BindStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} classes, {} interfaces, {} records, {} enums, {} opaque types; \
             {} methods, {} static methods, {} constructors",
            self.classes,
            self.interfaces,
            self.records,
            self.enums,
            self.opaques,
            self.instance_methods,
            self.static_methods,
            self.constructors,
        )
    }
}
