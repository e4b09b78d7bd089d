//! Registration pass (pass 1).
//!
//! Allocates a node for every named entity and binds its name. Classes,
//! interfaces and records are allocated as empty shells; their members are
//! resolved by the linking pass once every name exists. Enums have no
//! references to other types and are built complete here.

use weft_ir::{AliasDecl, ClassDecl, EnumDecl, SpecInput, StructDecl, TemplateDecl};

use super::resolve::resolve_type;
use super::Binder;
use crate::{BindError, BindResult, EnumDef, Enumerator};

pub(super) fn register_templates(binder: &mut Binder, templates: &[TemplateDecl]) -> BindResult<()> {
    for decl in templates {
        binder.symbols.register_template(&decl.name, decl.arity)?;
    }
    Ok(())
}

pub(super) fn register_primitives(binder: &mut Binder, primitives: &[String]) -> BindResult<()> {
    for name in primitives {
        let idx = binder.pool.primitive(name);
        binder.symbols.register(name, idx)?;
    }
    Ok(())
}

/// Allocate class (or interface) shells in declaration order.
pub(super) fn register_class_shells(
    binder: &mut Binder,
    decls: &[ClassDecl],
    is_interface: bool,
) -> BindResult<()> {
    for decl in decls {
        let idx = binder.pool.class_shell(&decl.name, is_interface);
        binder.symbols.register(&decl.name, idx)?;
        binder.classes.push(idx);
    }
    Ok(())
}

pub(super) fn register_enums(binder: &mut Binder, decls: &[EnumDecl]) -> BindResult<()> {
    for decl in decls {
        let def = EnumDef {
            name: decl.name.clone(),
            enumerators: decl
                .enumerators
                .iter()
                .map(|e| Enumerator {
                    name: e.name.clone(),
                    value: e.value,
                })
                .collect(),
        };
        let idx = binder.pool.enum_type(def);
        binder.symbols.register(&decl.name, idx)?;
        binder.enums.push(idx);
    }
    Ok(())
}

pub(super) fn register_struct_shells(binder: &mut Binder, decls: &[StructDecl]) -> BindResult<()> {
    for decl in decls {
        let idx = binder.pool.struct_shell(&decl.name);
        binder.symbols.register(&decl.name, idx)?;
        binder.records.push(idx);
    }
    Ok(())
}

pub(super) fn register_opaques(binder: &mut Binder, names: &[String]) -> BindResult<()> {
    for name in names {
        let idx = binder.pool.opaque(name);
        binder.symbols.register(name, idx)?;
        binder.opaques.push(idx);
    }
    Ok(())
}

/// Bind `wrapper` names of shared-ownership classes to
/// `shared_template<Class>`.
pub(super) fn register_shared_wrappers(binder: &mut Binder, spec: &SpecInput) -> BindResult<()> {
    let decls = spec.classes.iter().chain(&spec.interfaces);
    for (decl, &class) in decls.zip(&binder.classes) {
        let Some(wrapper) = &decl.shared_wrapper else {
            continue;
        };
        binder.symbols.register_shared_wrapper(
            wrapper,
            class,
            &binder.options.shared_template,
            &mut binder.pool,
        )?;
    }
    Ok(())
}

/// Resolve each alias target and bind the alias name to the same node.
///
/// Runs last, so targets may name any entity or wrapper. An alias may
/// reference an earlier alias, not a later one.
pub(super) fn register_aliases(binder: &mut Binder, aliases: &[AliasDecl]) -> BindResult<()> {
    for alias in aliases {
        if binder.symbols.contains(&alias.name) {
            return Err(BindError::duplicate_name(&alias.name));
        }
        let target = resolve_type(binder, &alias.target)?;
        binder.symbols.register(&alias.name, target)?;
    }
    Ok(())
}
