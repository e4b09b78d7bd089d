//! Linking pass (pass 2).
//!
//! Fills the shells allocated by registration. Every name is bound by
//! now, so a member may reference any class, record or wrapper regardless
//! of where it was declared.

use weft_ir::{ClassDecl, SpecInput};

use super::methods::{bind_constructors, bind_methods, MethodTable};
use super::resolve::resolve_type;
use super::Binder;
use crate::{BindResult, FieldDef, Idx, MethodKind, Property};

/// Resolve and attach the fields of every record.
#[tracing::instrument(level = "debug", skip_all, fields(count = spec.structs.len()))]
pub(super) fn link_structs(binder: &mut Binder, spec: &SpecInput) -> BindResult<()> {
    let records = binder.records.clone();
    for (decl, idx) in spec.structs.iter().zip(records) {
        let fields = decl
            .fields
            .iter()
            .map(|field| {
                Ok(FieldDef {
                    name: field.name.clone(),
                    ty: resolve_type(binder, &field.ty)?,
                    required: field.default.is_none(),
                })
            })
            .collect::<BindResult<Vec<_>>>()?;

        if let Some(def) = binder.pool.struct_def_mut(idx) {
            def.fields = fields;
        }
    }
    Ok(())
}

/// Resolve and attach the members of every class, then every interface.
#[tracing::instrument(level = "debug", skip_all, fields(
    classes = spec.classes.len(),
    interfaces = spec.interfaces.len(),
))]
pub(super) fn link_classes(binder: &mut Binder, spec: &SpecInput) -> BindResult<()> {
    let classes = binder.classes.clone();
    let decls = spec.classes.iter().chain(&spec.interfaces);
    for (decl, idx) in decls.zip(classes) {
        link_class(binder, decl, idx)?;
    }
    Ok(())
}

fn link_class(binder: &mut Binder, decl: &ClassDecl, idx: Idx) -> BindResult<()> {
    let mut table = MethodTable::new(idx, &decl.name);
    bind_methods(binder, &mut table, &decl.methods, MethodKind::Instance)?;
    bind_methods(binder, &mut table, &decl.static_methods, MethodKind::Static)?;
    bind_constructors(binder, &mut table, &decl.constructors)?;
    let methods = table.into_methods();

    let properties = decl
        .properties
        .iter()
        .map(|prop| {
            Ok(Property {
                name: prop.name.clone(),
                ty: resolve_type(binder, &prop.ty)?,
            })
        })
        .collect::<BindResult<Vec<_>>>()?;

    let iterable = decl
        .iterable
        .as_ref()
        .map(|element| resolve_type(binder, element))
        .transpose()?;

    tracing::trace!(
        class = %decl.name,
        methods = methods.len(),
        properties = properties.len(),
        "linked class"
    );

    if let Some(def) = binder.pool.class_def_mut(idx) {
        def.shared_ownership |= decl.shared_wrapper.is_some();
        def.needs_deref |= decl.needs_deref;
        def.iterable = iterable;
        def.properties = properties;
        def.methods = methods;
    }
    Ok(())
}
