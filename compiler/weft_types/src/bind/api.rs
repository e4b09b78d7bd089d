//! Public entry points.
//!
//! Each call creates a fresh [`Binder`], runs both passes to completion and
//! either returns the frozen [`BoundSpec`] or the first error. There is no
//! partial result.

use weft_ir::SpecInput;

use super::linking::{link_classes, link_structs};
use super::registration::{
    register_aliases, register_class_shells, register_enums, register_opaques,
    register_primitives, register_shared_wrappers, register_struct_shells, register_templates,
};
use super::{BindOptions, Binder};
use crate::{BindResult, BoundSpec};

/// Bind a specification with default options.
///
/// # Example
///
/// ```ignore
/// let bound = bind_spec(&spec)?;
/// for (idx, class) in bound.classes() {
///     println!("{} has {} methods", class.name, class.methods.len());
/// }
/// ```
pub fn bind_spec(spec: &SpecInput) -> BindResult<BoundSpec> {
    bind_spec_with_options(spec, &BindOptions::default())
}

/// Bind a specification.
#[tracing::instrument(level = "debug", skip_all, fields(
    classes = spec.classes.len(),
    interfaces = spec.interfaces.len(),
    structs = spec.structs.len(),
))]
pub fn bind_spec_with_options(spec: &SpecInput, options: &BindOptions) -> BindResult<BoundSpec> {
    let mut binder = Binder::new(options.clone());

    register_all(&mut binder, spec)?;
    tracing::debug!("registration pass complete");

    binder.begin_resolving();
    link_structs(&mut binder, spec)?;
    link_classes(&mut binder, spec)?;
    tracing::debug!("resolving pass complete");

    Ok(binder.finish())
}

/// Pass 1. Order matters: aliases resolve against everything else.
fn register_all(binder: &mut Binder, spec: &SpecInput) -> BindResult<()> {
    register_templates(binder, &spec.templates)?;
    register_primitives(binder, &spec.primitives)?;
    register_class_shells(binder, &spec.classes, false)?;
    register_class_shells(binder, &spec.interfaces, true)?;
    register_enums(binder, &spec.enums)?;
    register_struct_shells(binder, &spec.structs)?;
    register_opaques(binder, &spec.opaques)?;
    register_shared_wrappers(binder, spec)?;
    register_aliases(binder, &spec.aliases)
}
