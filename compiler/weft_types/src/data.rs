//! Type graph node data.
//!
//! `TypeData` is the closed set of node variants stored in the pool. Child
//! types are always `Idx` handles, never owned nodes, so the reference
//! graph may contain cycles (two classes mentioning each other) while
//! storage stays a flat arena.
//!
//! # Node Categories
//!
//! - **Entities**: `Primitive`, `Opaque`, `Enum`, `Struct`, `Class`. One node
//!   per declared name; identity matters.
//! - **Composites**: qualifiers, `Function`, `TemplateInstance`. Interned by
//!   structure; equal composites share one node.

use crate::Idx;

/// A node in the type graph.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeData {
    /// A built-in type known only by name.
    Primitive(String),
    /// A type with no structural definition, identity only.
    Opaque(String),
    Enum(EnumDef),
    Struct(StructDef),
    /// A class or interface.
    Class(ClassDef),

    /// `T const`
    Const(Idx),
    /// `T*`
    Pointer(Idx),
    /// `T&`
    Ref(Idx),
    /// `T&&`
    RvalueRef(Idx),

    Function(FunctionSig),
    TemplateInstance(TemplateInstance),
}

impl TypeData {
    /// The declared name of an entity node; `None` for composites.
    pub fn entity_name(&self) -> Option<&str> {
        match self {
            TypeData::Primitive(name) | TypeData::Opaque(name) => Some(name),
            TypeData::Enum(def) => Some(&def.name),
            TypeData::Struct(def) => Some(&def.name),
            TypeData::Class(def) => Some(&def.name),
            TypeData::Const(_)
            | TypeData::Pointer(_)
            | TypeData::Ref(_)
            | TypeData::RvalueRef(_)
            | TypeData::Function(_)
            | TypeData::TemplateInstance(_) => None,
        }
    }

    /// Check if this node is interned by structure.
    pub fn is_composite(&self) -> bool {
        self.entity_name().is_none()
    }

    /// Short label for the node kind; entity labels head entity dumps.
    pub fn kind_label(&self) -> &'static str {
        match self {
            TypeData::Primitive(_) => "primitive",
            TypeData::Opaque(_) => "opaque",
            TypeData::Enum(_) => "enum",
            TypeData::Struct(_) => "record",
            TypeData::Class(def) if def.is_interface => "interface",
            TypeData::Class(_) => "class",
            TypeData::Const(_) => "const",
            TypeData::Pointer(_) => "pointer",
            TypeData::Ref(_) => "reference",
            TypeData::RvalueRef(_) => "rvalue reference",
            TypeData::Function(_) => "function",
            TypeData::TemplateInstance(_) => "template instance",
        }
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct EnumDef {
    pub name: String,
    /// Enumerators in declaration order.
    pub enumerators: Vec<Enumerator>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Enumerator {
    pub name: String,
    pub value: i64,
}

/// A record.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct StructDef {
    pub name: String,
    pub fields: Vec<FieldDef>,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FieldDef {
    pub name: String,
    pub ty: Idx,
    /// False exactly when the source declared a default value.
    pub required: bool,
}

/// A class or interface.
///
/// Interfaces are the same variant with `is_interface` set; they always
/// have `shared_ownership` and `needs_deref` set as well.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct ClassDef {
    pub name: String,
    pub is_interface: bool,
    /// Always handled through a reference-counted pointer.
    pub shared_ownership: bool,
    /// Must be dereferenced before use.
    pub needs_deref: bool,
    /// Element type when the class is iterable.
    pub iterable: Option<Idx>,
    pub properties: Vec<Property>,
    /// Instance methods, then static methods, then constructors.
    pub methods: Vec<Method>,
}

impl ClassDef {
    /// An empty shell, filled in during the resolving pass.
    pub(crate) fn shell(name: &str, is_interface: bool) -> Self {
        ClassDef {
            name: name.to_owned(),
            is_interface,
            shared_ownership: is_interface,
            needs_deref: is_interface,
            iterable: None,
            properties: Vec::new(),
            methods: Vec::new(),
        }
    }

    /// Find a method by its unique name.
    pub fn method(&self, unique_name: &str) -> Option<&Method> {
        self.methods.iter().find(|m| m.unique_name == unique_name)
    }

    /// Methods of one kind, in declaration order.
    pub fn methods_of(&self, kind: MethodKind) -> impl Iterator<Item = &Method> {
        self.methods.iter().filter(move |m| m.kind == kind)
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Property {
    pub name: String,
    pub ty: Idx,
}

/// The three forms a bound method takes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum MethodKind {
    Instance,
    Static,
    /// A static factory whose return type is the owning class.
    Constructor,
}

impl MethodKind {
    /// Check if the method is called without a receiver.
    pub fn is_static(self) -> bool {
        matches!(self, MethodKind::Static | MethodKind::Constructor)
    }
}

/// A bound method.
///
/// Identity across the whole graph is `(owner class name, unique_name)`.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Method {
    pub kind: MethodKind,
    /// The owning class node.
    pub owner: Idx,
    /// Name as declared.
    pub name: String,
    /// `name`, or `name_suffix` for a suffixed overload.
    pub unique_name: String,
    /// A `TypeData::Function` node.
    pub signature: Idx,
}

/// A resolved function signature.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionSig {
    pub ret: Idx,
    pub args: Vec<FunctionArg>,
    pub is_const: bool,
    pub is_noexcept: bool,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct FunctionArg {
    pub name: String,
    pub ty: Idx,
}

/// `template<args...>`
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TemplateInstance {
    /// Joined template name.
    pub template: String,
    pub args: Vec<Idx>,
}
