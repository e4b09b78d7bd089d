//! Text rendering of a bound specification.
//!
//! One header line per entity, `<kind> <name>` with the node's kind label,
//! then members indented by two spaces. Every type is printed in the
//! pool's canonical form.

use std::fmt;

use weft_types::{BoundSpec, ClassDef, EnumDef, Idx, MethodKind, StructDef};

/// `Display` adapter printing every entity of a `BoundSpec`.
pub struct DumpView<'a>(pub &'a BoundSpec);

impl fmt::Display for DumpView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let bound = self.0;
        for (idx, class) in bound.classes() {
            write_header(f, bound, idx)?;
            write_class(f, bound, class)?;
        }
        for (idx, record) in bound.records() {
            write_header(f, bound, idx)?;
            writeln!(f)?;
            write_record(f, bound, record)?;
        }
        for (idx, def) in bound.enums() {
            write_header(f, bound, idx)?;
            writeln!(f)?;
            write_enum(f, def)?;
        }
        for (idx, _) in bound.opaques() {
            write_header(f, bound, idx)?;
            writeln!(f)?;
        }
        Ok(())
    }
}

fn write_header(f: &mut fmt::Formatter<'_>, bound: &BoundSpec, idx: Idx) -> fmt::Result {
    let data = bound.pool().get(idx);
    write!(
        f,
        "{} {}",
        data.kind_label(),
        data.entity_name().unwrap_or_default()
    )
}

fn write_class(f: &mut fmt::Formatter<'_>, bound: &BoundSpec, class: &ClassDef) -> fmt::Result {
    match (class.shared_ownership, class.needs_deref) {
        (true, true) => write!(f, " [shared, deref]")?,
        (true, false) => write!(f, " [shared]")?,
        (false, true) => write!(f, " [deref]")?,
        (false, false) => {}
    }
    writeln!(f)?;

    if let Some(element) = class.iterable {
        writeln!(f, "  iterable {}", bound.format_type(element))?;
    }
    for prop in &class.properties {
        writeln!(f, "  property {}: {}", prop.name, bound.format_type(prop.ty))?;
    }
    for method in &class.methods {
        let label = match method.kind {
            MethodKind::Instance => "method",
            MethodKind::Static => "static",
            MethodKind::Constructor => "constructor",
        };
        writeln!(
            f,
            "  {label} {}: {}",
            method.unique_name,
            bound.format_type(method.signature)
        )?;
    }
    Ok(())
}

fn write_record(f: &mut fmt::Formatter<'_>, bound: &BoundSpec, record: &StructDef) -> fmt::Result {
    for field in &record.fields {
        write!(f, "  field {}: {}", field.name, bound.format_type(field.ty))?;
        if !field.required {
            write!(f, " (optional)")?;
        }
        writeln!(f)?;
    }
    Ok(())
}

fn write_enum(f: &mut fmt::Formatter<'_>, def: &EnumDef) -> fmt::Result {
    for e in &def.enumerators {
        writeln!(f, "  {} = {}", e.name, e.value)?;
    }
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use weft_ir::{ClassDecl, EnumDecl, FieldDecl, MethodDecl, SpecInput, StructDecl, TypeDesc};
    use weft_types::bind_spec;

    #[test]
    fn renders_every_entity_kind() {
        let spec = SpecInput {
            primitives: vec!["int".to_owned(), "void".to_owned()],
            classes: vec![ClassDecl::new("Counter")
                .with_shared_wrapper("CounterPtr")
                .with_property("value", TypeDesc::named("int"))
                .with_method(MethodDecl::single(
                    "get",
                    TypeDesc::function(TypeDesc::named("int"), vec![]).konst(),
                ))
                .with_constructor(MethodDecl::single(
                    "make",
                    TypeDesc::function(TypeDesc::named("void"), vec![]),
                ))],
            interfaces: vec![ClassDecl::new("Observer")],
            structs: vec![StructDecl::new(
                "Span",
                vec![
                    FieldDecl::new("start", TypeDesc::named("int")),
                    FieldDecl::new("len", TypeDesc::named("int")).with_default("0"),
                ],
            )],
            enums: vec![EnumDecl::new("Mode", &[("Fast", 0), ("Safe", 1)])],
            opaques: vec!["Handle".to_owned()],
            ..SpecInput::default()
        };
        let bound = bind_spec(&spec).unwrap();

        let expected = "\
class Counter [shared]
  property value: int
  method get: () -> int const
  constructor make: () -> Counter
interface Observer [shared, deref]
record Span
  field start: int
  field len: int (optional)
enum Mode
  Fast = 0
  Safe = 1
opaque Handle
";
        assert_eq!(DumpView(&bound).to_string(), expected);
    }
}
