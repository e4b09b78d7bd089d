use super::*;
use pretty_assertions::assert_eq;

#[test]
fn fixed_arity_accepts_exact_count() {
    let arity = Arity::Fixed(2);
    assert!(arity.accepts(2));
    assert!(!arity.accepts(1));
    assert!(!arity.accepts(3));
}

#[test]
fn variadic_accepts_anything() {
    for count in [0, 1, 7, 100] {
        assert!(Arity::Variadic.accepts(count));
    }
}

#[test]
fn field_default_marks_optional() {
    let field = FieldDecl::new("count", TypeDesc::named("int")).with_default("0");
    assert_eq!(field.default.as_deref(), Some("0"));
}

#[test]
fn enum_builder_keeps_order() {
    let decl = EnumDecl::new("Color", &[("Red", 0), ("Green", 4), ("Blue", -1)]);
    let names: Vec<&str> = decl.enumerators.iter().map(|e| e.name.as_str()).collect();
    assert_eq!(names, vec!["Red", "Green", "Blue"]);
    assert_eq!(decl.enumerators[2].value, -1);
}

#[test]
fn class_builder_collects_members() {
    let class = ClassDecl::new("Animal")
        .with_shared_wrapper("AnimalPtr")
        .with_method(MethodDecl::single(
            "speak",
            TypeDesc::function(TypeDesc::named("void"), vec![]),
        ))
        .with_property("age", TypeDesc::named("int"));

    assert_eq!(class.name, "Animal");
    assert_eq!(class.shared_wrapper.as_deref(), Some("AnimalPtr"));
    assert_eq!(class.methods.len(), 1);
    assert_eq!(class.properties[0].name, "age");
    assert!(class.constructors.is_empty());
    assert!(!class.needs_deref);
}

#[cfg(feature = "serde")]
#[test]
fn spec_input_defaults_missing_sections() {
    let json = r#"{
        "primitives": ["int"],
        "templates": [{ "name": "vector", "arity": { "fixed": 1 } },
                      { "name": "tuple", "arity": "variadic" }],
        "classes": [{ "name": "Zoo" }]
    }"#;

    let spec: SpecInput = serde_json::from_str(json).unwrap();
    assert_eq!(spec.primitives, vec!["int"]);
    assert_eq!(
        spec.templates,
        vec![
            TemplateDecl::new("vector", Arity::Fixed(1)),
            TemplateDecl::new("tuple", Arity::Variadic),
        ]
    );
    assert_eq!(spec.classes, vec![ClassDecl::new("Zoo")]);
    assert!(spec.structs.is_empty());
    assert!(spec.aliases.is_empty());
}
