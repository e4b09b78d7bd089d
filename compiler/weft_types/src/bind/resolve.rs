//! Type descriptor resolution.
//!
//! Maps a `TypeDesc` to a pool node using the symbol table.
//!
//! # Qualifier Order
//!
//! Flags are tested in a fixed order and peeled one per call:
//!
//! ```text
//! REFERENCE → Ref
//! RVALUE_REFERENCE → RvalueRef
//! POINTER → Pointer
//! CONST → Const
//! ```
//!
//! The wrapper found first is outermost, so `POINTER | CONST` on `Base`
//! yields `Pointer(Const(Base))`. Function descriptors are never wrapped:
//! their `CONST` flag marks a const method.

use weft_ir::{ArgDesc, QualifiedName, Qualifiers, TypeDesc, TypeDescKind};

use super::Binder;
use crate::stack::ensure_sufficient_stack;
use crate::{BindError, BindResult, FunctionArg, FunctionSig, Idx};

/// Resolve a descriptor with all of its qualifiers.
pub(super) fn resolve_type(binder: &mut Binder, desc: &TypeDesc) -> BindResult<Idx> {
    resolve_qualified(binder, desc, desc.qualifiers)
}

/// Resolve `desc` as if it carried exactly `quals`.
fn resolve_qualified(binder: &mut Binder, desc: &TypeDesc, quals: Qualifiers) -> BindResult<Idx> {
    ensure_sufficient_stack(|| match &desc.kind {
        TypeDescKind::Function {
            ret,
            args,
            noexcept,
        } => resolve_function(
            binder,
            ret,
            args,
            quals.contains(Qualifiers::CONST),
            *noexcept,
        ),

        _ if quals.contains(Qualifiers::REFERENCE) => {
            let inner = resolve_qualified(binder, desc, quals - Qualifiers::REFERENCE)?;
            Ok(binder.pool.reference(inner))
        }
        _ if quals.contains(Qualifiers::RVALUE_REFERENCE) => {
            let inner = resolve_qualified(binder, desc, quals - Qualifiers::RVALUE_REFERENCE)?;
            Ok(binder.pool.rvalue_reference(inner))
        }
        _ if quals.contains(Qualifiers::POINTER) => {
            let inner = resolve_qualified(binder, desc, quals - Qualifiers::POINTER)?;
            Ok(binder.pool.pointer(inner))
        }
        _ if quals.contains(Qualifiers::CONST) => {
            let inner = resolve_qualified(binder, desc, quals - Qualifiers::CONST)?;
            Ok(binder.pool.konst(inner))
        }

        TypeDescKind::Named(name) => binder.symbols.lookup_type(&name.joined()),
        TypeDescKind::Template { name, args } => resolve_template(binder, name, args),
    })
}

/// Check the template and its argument count, then resolve the arguments.
fn resolve_template(
    binder: &mut Binder,
    name: &QualifiedName,
    args: &[TypeDesc],
) -> BindResult<Idx> {
    let template = name.joined();
    let arity = binder.symbols.lookup_template_arity(&template)?;
    if !arity.accepts(args.len()) {
        return Err(BindError::TemplateArityMismatch {
            template,
            expected: arity,
            found: args.len(),
        });
    }

    let resolved = args
        .iter()
        .map(|arg| resolve_type(binder, arg))
        .collect::<BindResult<Vec<_>>>()?;
    Ok(binder.pool.template_instance(&template, resolved))
}

fn resolve_function(
    binder: &mut Binder,
    ret: &TypeDesc,
    args: &[ArgDesc],
    is_const: bool,
    is_noexcept: bool,
) -> BindResult<Idx> {
    let ret = resolve_type(binder, ret)?;
    let args = args
        .iter()
        .map(|arg| {
            Ok(FunctionArg {
                name: arg.name.clone(),
                ty: resolve_type(binder, &arg.ty)?,
            })
        })
        .collect::<BindResult<Vec<_>>>()?;

    Ok(binder.pool.function(FunctionSig {
        ret,
        args,
        is_const,
        is_noexcept,
    }))
}
