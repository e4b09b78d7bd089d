//! Unresolved type descriptors.
//!
//! A `TypeDesc` is the input-side description of a type: a qualified name,
//! a template instantiation or a function signature, plus independent
//! qualifier flags. The binder resolves descriptors into pool nodes.
//!
//! Qualifiers are flags rather than nested wrappers. The nesting order of
//! the resolved type is decided by the resolver, not by the loader.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Qualifier flags attached to a type descriptor.
    ///
    /// On a function descriptor only `CONST` is meaningful: it marks the
    /// function itself as const (a const method), not its return type.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    #[cfg_attr(feature = "serde", serde(transparent))]
    pub struct Qualifiers: u8 {
        /// `const T`
        const CONST = 1 << 0;
        /// `T*`
        const POINTER = 1 << 1;
        /// `T&`
        const REFERENCE = 1 << 2;
        /// `T&&`
        const RVALUE_REFERENCE = 1 << 3;
    }
}

/// A possibly namespaced name, e.g. `std::string`.
///
/// Lookups join the segments with `::` into a single key.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct QualifiedName {
    pub segments: Vec<String>,
}

impl QualifiedName {
    /// Separator used when joining segments.
    pub const SEPARATOR: &'static str = "::";

    /// Split `text` on `::` into segments.
    pub fn parse(text: &str) -> Self {
        QualifiedName {
            segments: text.split(Self::SEPARATOR).map(str::to_owned).collect(),
        }
    }

    /// The lookup key: all segments joined with `::`.
    pub fn joined(&self) -> String {
        self.segments.join(Self::SEPARATOR)
    }
}

impl fmt::Display for QualifiedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.joined())
    }
}

/// An unresolved type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeDesc {
    #[cfg_attr(feature = "serde", serde(default))]
    pub qualifiers: Qualifiers,
    pub kind: TypeDescKind,
}

/// What a descriptor names once its qualifiers are stripped.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum TypeDescKind {
    /// A reference to a registered entity or alias: `Animal`, `std::string`.
    Named(QualifiedName),

    /// A template instantiation: `vector<int>`.
    Template {
        name: QualifiedName,
        args: Vec<TypeDesc>,
    },

    /// A function signature: `(name: string) -> void`.
    Function {
        ret: Box<TypeDesc>,
        args: Vec<ArgDesc>,
        #[cfg_attr(feature = "serde", serde(default))]
        noexcept: bool,
    },
}

/// A named function argument.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArgDesc {
    pub name: String,
    pub ty: TypeDesc,
}

impl ArgDesc {
    pub fn new(name: impl Into<String>, ty: TypeDesc) -> Self {
        ArgDesc {
            name: name.into(),
            ty,
        }
    }
}

impl TypeDesc {
    /// A named type; `text` may contain `::` separators.
    pub fn named(text: &str) -> Self {
        TypeDesc {
            qualifiers: Qualifiers::empty(),
            kind: TypeDescKind::Named(QualifiedName::parse(text)),
        }
    }

    /// A template instantiation `name<args...>`.
    pub fn template(name: &str, args: Vec<TypeDesc>) -> Self {
        TypeDesc {
            qualifiers: Qualifiers::empty(),
            kind: TypeDescKind::Template {
                name: QualifiedName::parse(name),
                args,
            },
        }
    }

    /// A function signature `(args...) -> ret`.
    pub fn function(ret: TypeDesc, args: Vec<ArgDesc>) -> Self {
        TypeDesc {
            qualifiers: Qualifiers::empty(),
            kind: TypeDescKind::Function {
                ret: Box::new(ret),
                args,
                noexcept: false,
            },
        }
    }

    /// Add qualifier flags.
    #[must_use]
    pub fn with(mut self, qualifiers: Qualifiers) -> Self {
        self.qualifiers |= qualifiers;
        self
    }

    #[must_use]
    pub fn konst(self) -> Self {
        self.with(Qualifiers::CONST)
    }

    #[must_use]
    pub fn pointer(self) -> Self {
        self.with(Qualifiers::POINTER)
    }

    #[must_use]
    pub fn reference(self) -> Self {
        self.with(Qualifiers::REFERENCE)
    }

    #[must_use]
    pub fn rvalue_reference(self) -> Self {
        self.with(Qualifiers::RVALUE_REFERENCE)
    }

    /// Mark a function descriptor `noexcept`. No effect on other kinds.
    #[must_use]
    pub fn noexcept(mut self) -> Self {
        if let TypeDescKind::Function { noexcept, .. } = &mut self.kind {
            *noexcept = true;
        }
        self
    }

    /// Check if this descriptor is a function signature.
    pub fn is_function(&self) -> bool {
        matches!(self.kind, TypeDescKind::Function { .. })
    }
}
