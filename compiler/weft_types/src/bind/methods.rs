//! Method binding.
//!
//! Turns per-name overload lists into bound `Method` records. The same
//! traversal serves instance and static tables; constructors get their
//! declared void return replaced by the owning class.

use rustc_hash::FxHashSet;
use weft_ir::{MethodDecl, OverloadDecl};

use super::resolve::resolve_type;
use super::Binder;
use crate::{BindError, BindResult, FunctionSig, Idx, Method, MethodKind};

/// Methods of one class being bound, with unique-name bookkeeping.
pub(super) struct MethodTable<'a> {
    owner: Idx,
    class_name: &'a str,
    methods: Vec<Method>,
    seen: FxHashSet<String>,
}

impl<'a> MethodTable<'a> {
    pub(super) fn new(owner: Idx, class_name: &'a str) -> Self {
        MethodTable {
            owner,
            class_name,
            methods: Vec::new(),
            seen: FxHashSet::default(),
        }
    }

    pub(super) fn into_methods(self) -> Vec<Method> {
        self.methods
    }

    fn push(&mut self, method: Method) -> BindResult<()> {
        if !self.seen.insert(method.unique_name.clone()) {
            return Err(BindError::DuplicateMethod {
                class: self.class_name.to_owned(),
                unique_name: method.unique_name,
            });
        }
        self.methods.push(method);
        Ok(())
    }
}

/// `name`, or `name_suffix` when the overload carries a suffix.
pub(super) fn unique_name(name: &str, suffix: Option<&str>) -> String {
    match suffix {
        Some(suffix) => format!("{name}_{suffix}"),
        None => name.to_owned(),
    }
}

/// Bind every overload of every method in `decls` as `kind`.
pub(super) fn bind_methods(
    binder: &mut Binder,
    table: &mut MethodTable<'_>,
    decls: &[MethodDecl],
    kind: MethodKind,
) -> BindResult<()> {
    for decl in decls {
        for overload in &decl.overloads {
            let signature = resolve_type(binder, &overload.signature)?;
            table.push(Method {
                kind,
                owner: table.owner,
                name: decl.name.clone(),
                unique_name: unique_name(&decl.name, overload.suffix.as_deref()),
                signature,
            })?;
        }
    }
    Ok(())
}

/// Bind named constructors, rewriting each void return to the owner.
pub(super) fn bind_constructors(
    binder: &mut Binder,
    table: &mut MethodTable<'_>,
    decls: &[MethodDecl],
) -> BindResult<()> {
    for decl in decls {
        for overload in &decl.overloads {
            let signature = bind_constructor_signature(binder, table, &decl.name, overload)?;
            table.push(Method {
                kind: MethodKind::Constructor,
                owner: table.owner,
                name: decl.name.clone(),
                unique_name: unique_name(&decl.name, overload.suffix.as_deref()),
                signature,
            })?;
        }
    }
    Ok(())
}

fn bind_constructor_signature(
    binder: &mut Binder,
    table: &MethodTable<'_>,
    name: &str,
    overload: &OverloadDecl,
) -> BindResult<Idx> {
    let declared = resolve_type(binder, &overload.signature)?;
    let void = binder.symbols.get(&binder.options.void_type);

    let sig = match binder.pool.function_sig(declared) {
        Some(sig) if Some(sig.ret) == void => sig,
        found => {
            let found = match found {
                Some(sig) => binder.pool.format_type(sig.ret),
                None => binder.pool.format_type(declared),
            };
            return Err(BindError::MalformedConstructorSignature {
                class: table.class_name.to_owned(),
                name: name.to_owned(),
                expected: binder.options.void_type.clone(),
                found,
            });
        }
    };

    let rewritten = FunctionSig {
        ret: table.owner,
        ..sig.clone()
    };
    Ok(binder.pool.function(rewritten))
}
