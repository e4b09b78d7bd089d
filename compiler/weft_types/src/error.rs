//! Bind errors.
//!
//! Every variant is a defect in the specification, not a runtime
//! condition: the first error aborts the whole bind and no partial graph
//! is returned.

use weft_ir::Arity;

/// Result alias used throughout the binder.
pub type BindResult<T> = Result<T, BindError>;

/// Why a specification failed to bind.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum BindError {
    /// Two entities, an alias or a template claim the same name.
    #[error("duplicate name `{name}`")]
    DuplicateName { name: String },

    /// A qualified name references nothing registered.
    #[error("unknown type `{name}`")]
    UnknownType { name: String },

    /// A template instantiation names an undeclared template.
    #[error("unknown template `{name}`")]
    UnknownTemplate { name: String },

    /// Argument count disagrees with the declared arity.
    #[error("template `{template}` expects {expected} argument(s), found {found}")]
    TemplateArityMismatch {
        template: String,
        expected: Arity,
        found: usize,
    },

    /// A constructor does not declare the void return type.
    #[error("constructor `{class}::{name}` must return `{expected}`, found `{found}`")]
    MalformedConstructorSignature {
        class: String,
        name: String,
        expected: String,
        found: String,
    },

    /// Two overloads of one class bind to the same unique name.
    #[error("duplicate method `{class}::{unique_name}`")]
    DuplicateMethod { class: String, unique_name: String },
}

impl BindError {
    pub(crate) fn duplicate_name(name: &str) -> Self {
        BindError::DuplicateName {
            name: name.to_owned(),
        }
    }

    pub(crate) fn unknown_type(name: &str) -> Self {
        BindError::UnknownType {
            name: name.to_owned(),
        }
    }

    pub(crate) fn unknown_template(name: &str) -> Self {
        BindError::UnknownTemplate {
            name: name.to_owned(),
        }
    }

    /// The name the error is about, for reporting.
    pub fn subject(&self) -> &str {
        match self {
            BindError::DuplicateName { name }
            | BindError::UnknownType { name }
            | BindError::UnknownTemplate { name }
            | BindError::MalformedConstructorSignature { name, .. } => name,
            BindError::TemplateArityMismatch { template, .. } => template,
            BindError::DuplicateMethod { unique_name, .. } => unique_name,
        }
    }
}
