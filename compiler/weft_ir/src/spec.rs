//! Declarations making up one interface specification.
//!
//! Every declaration list is ordered; the binder preserves declaration
//! order in its output. Names are plain strings and may reference entities
//! declared anywhere else in the same `SpecInput`.

use std::fmt;

use crate::TypeDesc;

/// Root of an unresolved specification.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SpecInput {
    /// Built-in type names (`int`, `void`, `std::string`, ...).
    pub primitives: Vec<String>,
    /// Template names with their declared arity.
    pub templates: Vec<TemplateDecl>,
    pub structs: Vec<StructDecl>,
    pub classes: Vec<ClassDecl>,
    pub interfaces: Vec<ClassDecl>,
    pub enums: Vec<EnumDecl>,
    /// Types known only by identity.
    pub opaques: Vec<String>,
    pub aliases: Vec<AliasDecl>,
}

/// Number of arguments a template accepts.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Arity {
    /// Exactly this many arguments.
    Fixed(usize),
    /// Any number of arguments.
    Variadic,
}

impl Arity {
    /// Check whether `count` arguments satisfy this arity.
    #[inline]
    pub fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Fixed(n) => n == count,
            Arity::Variadic => true,
        }
    }
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Arity::Fixed(n) => write!(f, "{n}"),
            Arity::Variadic => f.write_str("any number of"),
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateDecl {
    pub name: String,
    pub arity: Arity,
}

impl TemplateDecl {
    pub fn new(name: impl Into<String>, arity: Arity) -> Self {
        TemplateDecl {
            name: name.into(),
            arity,
        }
    }
}

/// A record: plain data with named fields.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StructDecl {
    pub name: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub fields: Vec<FieldDecl>,
}

impl StructDecl {
    pub fn new(name: impl Into<String>, fields: Vec<FieldDecl>) -> Self {
        StructDecl {
            name: name.into(),
            fields,
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldDecl {
    pub name: String,
    pub ty: TypeDesc,
    /// Default value as written in the source, if any.
    #[cfg_attr(feature = "serde", serde(default))]
    pub default: Option<String>,
}

impl FieldDecl {
    pub fn new(name: impl Into<String>, ty: TypeDesc) -> Self {
        FieldDecl {
            name: name.into(),
            ty,
            default: None,
        }
    }

    #[must_use]
    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }
}

/// A class or interface declaration.
///
/// Interfaces use the same shape; the binder forces their ownership and
/// indirection attributes.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ClassDecl {
    pub name: String,
    /// Name of the shared-ownership wrapper registered for this class.
    ///
    /// When set, the class is always handled through a reference-counted
    /// pointer and the wrapper name resolves to that pointer type.
    pub shared_wrapper: Option<String>,
    /// Instances must be dereferenced before use.
    pub needs_deref: bool,
    pub methods: Vec<MethodDecl>,
    pub static_methods: Vec<MethodDecl>,
    /// Named constructors. Each overload declares a void return.
    pub constructors: Vec<MethodDecl>,
    pub properties: Vec<PropertyDecl>,
    /// Element type, when the class can be iterated.
    pub iterable: Option<TypeDesc>,
}

impl ClassDecl {
    pub fn new(name: impl Into<String>) -> Self {
        ClassDecl {
            name: name.into(),
            ..ClassDecl::default()
        }
    }

    #[must_use]
    pub fn with_shared_wrapper(mut self, wrapper: impl Into<String>) -> Self {
        self.shared_wrapper = Some(wrapper.into());
        self
    }

    #[must_use]
    pub fn with_method(mut self, method: MethodDecl) -> Self {
        self.methods.push(method);
        self
    }

    #[must_use]
    pub fn with_static_method(mut self, method: MethodDecl) -> Self {
        self.static_methods.push(method);
        self
    }

    #[must_use]
    pub fn with_constructor(mut self, ctor: MethodDecl) -> Self {
        self.constructors.push(ctor);
        self
    }

    #[must_use]
    pub fn with_property(mut self, name: impl Into<String>, ty: TypeDesc) -> Self {
        self.properties.push(PropertyDecl {
            name: name.into(),
            ty,
        });
        self
    }

    #[must_use]
    pub fn with_iterable(mut self, element: TypeDesc) -> Self {
        self.iterable = Some(element);
        self
    }
}

/// All overloads declared under one method name.
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MethodDecl {
    pub name: String,
    pub overloads: Vec<OverloadDecl>,
}

impl MethodDecl {
    pub fn new(name: impl Into<String>, overloads: Vec<OverloadDecl>) -> Self {
        MethodDecl {
            name: name.into(),
            overloads,
        }
    }

    /// A method with a single, unsuffixed overload.
    pub fn single(name: impl Into<String>, signature: TypeDesc) -> Self {
        Self::new(name, vec![OverloadDecl::new(signature)])
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OverloadDecl {
    /// Disambiguating token; the unique name becomes `name_suffix`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub suffix: Option<String>,
    /// Must be a function descriptor.
    pub signature: TypeDesc,
}

impl OverloadDecl {
    pub fn new(signature: TypeDesc) -> Self {
        OverloadDecl {
            suffix: None,
            signature,
        }
    }

    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = Some(suffix.into());
        self
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PropertyDecl {
    pub name: String,
    pub ty: TypeDesc,
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumDecl {
    pub name: String,
    pub enumerators: Vec<EnumeratorDecl>,
}

impl EnumDecl {
    /// Build an enum from `(name, value)` pairs.
    pub fn new(name: impl Into<String>, enumerators: &[(&str, i64)]) -> Self {
        EnumDecl {
            name: name.into(),
            enumerators: enumerators
                .iter()
                .map(|&(name, value)| EnumeratorDecl {
                    name: name.to_owned(),
                    value,
                })
                .collect(),
        }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnumeratorDecl {
    pub name: String,
    pub value: i64,
}

/// `using name = target;`
#[derive(Clone, Eq, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AliasDecl {
    pub name: String,
    pub target: TypeDesc,
}

impl AliasDecl {
    pub fn new(name: impl Into<String>, target: TypeDesc) -> Self {
        AliasDecl {
            name: name.into(),
            target,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
