//! End-to-end binds of whole specifications.

use pretty_assertions::assert_eq;
use rayon::prelude::*;
use weft_ir::{
    AliasDecl, ArgDesc, Arity, ClassDecl, EnumDecl, FieldDecl, MethodDecl, OverloadDecl,
    SpecInput, StructDecl, TemplateDecl, TypeDesc,
};

use super::{bind_spec, bind_spec_with_options, BindOptions};
use crate::{BindError, MethodKind, TypeData};

fn primitives(names: &[&str]) -> Vec<String> {
    names.iter().map(|&n| n.to_owned()).collect()
}

fn void_fn(args: Vec<ArgDesc>) -> TypeDesc {
    TypeDesc::function(TypeDesc::named("void"), args)
}

fn animal_zoo() -> SpecInput {
    SpecInput {
        primitives: primitives(&["int", "void", "string"]),
        classes: vec![
            ClassDecl::new("Animal")
                .with_method(MethodDecl::single("speak", void_fn(vec![])))
                .with_constructor(MethodDecl::single(
                    "make",
                    void_fn(vec![ArgDesc::new("name", TypeDesc::named("string"))]),
                )),
            ClassDecl::new("Zoo").with_property("pet", TypeDesc::named("Animal").pointer()),
        ],
        ..SpecInput::default()
    }
}

#[test]
fn animal_and_zoo_bind_with_shared_nodes() {
    let bound = bind_spec(&animal_zoo()).unwrap();
    let pool = bound.pool();

    let classes: Vec<_> = bound.classes().collect();
    assert_eq!(classes.len(), 2);
    let (animal, animal_def) = classes[0];
    let (_, zoo_def) = classes[1];
    assert_eq!(animal_def.name, "Animal");

    let pet = zoo_def.property("pet").unwrap();
    assert_eq!(*pool.get(pet.ty), TypeData::Pointer(animal));

    let make = animal_def.method("make").unwrap();
    assert_eq!(make.kind, MethodKind::Constructor);
    assert_eq!(pool.function_sig(make.signature).unwrap().ret, animal);

    let speak = animal_def.method("speak").unwrap();
    assert_eq!(speak.kind, MethodKind::Instance);
    assert_eq!(bound.format_type(speak.signature), "() -> void");
}

#[test]
fn unknown_template_argument_wins_over_arity() {
    let spec = SpecInput {
        primitives: primitives(&["int"]),
        templates: vec![TemplateDecl::new("vector", Arity::Fixed(1))],
        structs: vec![StructDecl::new(
            "Bag",
            vec![FieldDecl::new(
                "items",
                TypeDesc::template("vector", vec![TypeDesc::named("UnknownClass")]),
            )],
        )],
        ..SpecInput::default()
    };

    assert_eq!(
        bind_spec(&spec).unwrap_err(),
        BindError::UnknownType {
            name: "UnknownClass".to_owned()
        }
    );
}

#[test]
fn forward_references_share_identity() {
    let spec = SpecInput {
        primitives: primitives(&["int"]),
        templates: vec![TemplateDecl::new("vector", Arity::Fixed(1))],
        structs: vec![StructDecl::new(
            "Snapshot",
            vec![FieldDecl::new("owner", TypeDesc::named("Late").konst().reference())],
        )],
        classes: vec![
            ClassDecl::new("Early").with_property(
                "later",
                TypeDesc::template("vector", vec![TypeDesc::named("Late")]),
            ),
            ClassDecl::new("Late").with_property("early", TypeDesc::named("Early").pointer()),
        ],
        ..SpecInput::default()
    };
    let bound = bind_spec(&spec).unwrap();
    let pool = bound.pool();

    let (early, early_def) = bound.class_named("Early").unwrap();
    let (late, late_def) = bound.class_named("Late").unwrap();

    let later = early_def.property("later").unwrap();
    assert_eq!(pool.template_instance_data(later.ty).unwrap().args, vec![late]);
    assert_eq!(*pool.get(late_def.property("early").unwrap().ty), TypeData::Pointer(early));

    let (_, snapshot) = bound.record_named("Snapshot").unwrap();
    let TypeData::Ref(inner) = *pool.get(snapshot.fields[0].ty) else {
        panic!("expected reference");
    };
    assert_eq!(*pool.get(inner), TypeData::Const(late));
}

#[test]
fn required_tracks_declared_defaults() {
    let spec = SpecInput {
        primitives: primitives(&["int"]),
        structs: vec![StructDecl::new(
            "Config",
            vec![
                FieldDecl::new("port", TypeDesc::named("int")),
                FieldDecl::new("retries", TypeDesc::named("int")).with_default("3"),
            ],
        )],
        ..SpecInput::default()
    };
    let bound = bind_spec(&spec).unwrap();
    let (_, config) = bound.record_named("Config").unwrap();

    let required: Vec<(&str, bool)> = config
        .fields
        .iter()
        .map(|f| (f.name.as_str(), f.required))
        .collect();
    assert_eq!(required, vec![("port", true), ("retries", false)]);
}

#[test]
fn duplicate_names_across_entity_kinds() {
    let cases = [
        SpecInput {
            primitives: primitives(&["Thing"]),
            classes: vec![ClassDecl::new("Thing")],
            ..SpecInput::default()
        },
        SpecInput {
            classes: vec![ClassDecl::new("Thing")],
            interfaces: vec![ClassDecl::new("Thing")],
            ..SpecInput::default()
        },
        SpecInput {
            enums: vec![EnumDecl::new("Thing", &[])],
            opaques: vec!["Thing".to_owned()],
            ..SpecInput::default()
        },
        SpecInput {
            classes: vec![ClassDecl::new("Widget").with_shared_wrapper("Thing")],
            structs: vec![StructDecl::new("Thing", vec![])],
            ..SpecInput::default()
        },
        SpecInput {
            primitives: primitives(&["int", "Thing"]),
            aliases: vec![AliasDecl::new("Thing", TypeDesc::named("int"))],
            ..SpecInput::default()
        },
    ];

    for spec in &cases {
        assert_eq!(
            bind_spec(spec).unwrap_err(),
            BindError::DuplicateName {
                name: "Thing".to_owned()
            }
        );
    }
}

#[test]
fn distinct_names_bind() {
    let spec = SpecInput {
        primitives: primitives(&["int"]),
        classes: vec![ClassDecl::new("A")],
        interfaces: vec![ClassDecl::new("B")],
        enums: vec![EnumDecl::new("C", &[("X", 1)])],
        structs: vec![StructDecl::new("D", vec![])],
        opaques: vec!["E".to_owned()],
        aliases: vec![AliasDecl::new("F", TypeDesc::named("int"))],
        ..SpecInput::default()
    };
    assert!(bind_spec(&spec).is_ok());
}

#[test]
fn interfaces_force_indirection_flags() {
    let spec = SpecInput {
        classes: vec![
            ClassDecl::new("Plain"),
            ClassDecl::new("Shared").with_shared_wrapper("SharedPtr"),
        ],
        interfaces: vec![ClassDecl::new("Listener")],
        ..SpecInput::default()
    };
    let bound = bind_spec(&spec).unwrap();

    let flags: Vec<(&str, bool, bool, bool)> = bound
        .classes()
        .map(|(_, c)| {
            (
                c.name.as_str(),
                c.is_interface,
                c.shared_ownership,
                c.needs_deref,
            )
        })
        .collect();
    assert_eq!(
        flags,
        vec![
            ("Plain", false, false, false),
            ("Shared", false, true, false),
            ("Listener", true, true, true),
        ]
    );
}

#[test]
fn shared_wrapper_names_template_instance() {
    let spec = SpecInput {
        classes: vec![
            ClassDecl::new("Session").with_shared_wrapper("SessionPtr"),
            ClassDecl::new("Pool").with_property("current", TypeDesc::named("SessionPtr")),
        ],
        ..SpecInput::default()
    };
    let bound = bind_spec(&spec).unwrap();

    let (session, _) = bound.class_named("Session").unwrap();
    let wrapper = bound.lookup("SessionPtr").unwrap();
    let inst = bound.pool().template_instance_data(wrapper).unwrap();
    assert_eq!(inst.template, "std::shared_ptr");
    assert_eq!(inst.args, vec![session]);

    let (_, pool_def) = bound.class_named("Pool").unwrap();
    assert_eq!(pool_def.property("current").unwrap().ty, wrapper);
}

#[test]
fn options_override_wrapper_template_and_void() {
    let spec = SpecInput {
        primitives: primitives(&["unit"]),
        classes: vec![ClassDecl::new("Node")
            .with_shared_wrapper("NodeRef")
            .with_constructor(MethodDecl::single(
                "create",
                TypeDesc::function(TypeDesc::named("unit"), vec![]),
            ))],
        ..SpecInput::default()
    };
    let options = BindOptions {
        shared_template: "Rc".to_owned(),
        void_type: "unit".to_owned(),
    };
    let bound = bind_spec_with_options(&spec, &options).unwrap();

    let wrapper = bound.lookup("NodeRef").unwrap();
    assert_eq!(bound.format_type(wrapper), "Rc<Node>");

    let create = bound.method("Node", "create").unwrap();
    assert_eq!(bound.format_type(create.signature), "() -> Node");
}

#[test]
fn iterable_element_is_resolved() {
    let spec = SpecInput {
        primitives: primitives(&["int"]),
        classes: vec![ClassDecl::new("Range").with_iterable(TypeDesc::named("int"))],
        ..SpecInput::default()
    };
    let bound = bind_spec(&spec).unwrap();
    let (_, range) = bound.class_named("Range").unwrap();
    assert_eq!(range.iterable, bound.lookup("int"));
}

#[test]
fn aliases_are_erased() {
    let spec = SpecInput {
        primitives: primitives(&["int"]),
        templates: vec![TemplateDecl::new("vector", Arity::Fixed(1))],
        classes: vec![ClassDecl::new("Table")
            .with_property("ids", TypeDesc::named("IdList"))
            .with_property("direct", TypeDesc::template("vector", vec![TypeDesc::named("int")]))],
        aliases: vec![
            AliasDecl::new("Id", TypeDesc::named("int")),
            AliasDecl::new("IdList", TypeDesc::template("vector", vec![TypeDesc::named("Id")])),
        ],
        ..SpecInput::default()
    };
    let bound = bind_spec(&spec).unwrap();

    assert_eq!(bound.lookup("Id"), bound.lookup("int"));
    let (_, table) = bound.class_named("Table").unwrap();
    assert_eq!(
        table.property("ids").unwrap().ty,
        table.property("direct").unwrap().ty
    );
    assert!(bound.pool().iter().all(|(_, data)| data.entity_name() != Some("Id")));
}

#[test]
fn alias_cannot_reference_a_later_alias() {
    let spec = SpecInput {
        primitives: primitives(&["int"]),
        aliases: vec![
            AliasDecl::new("Outer", TypeDesc::named("Inner")),
            AliasDecl::new("Inner", TypeDesc::named("int")),
        ],
        ..SpecInput::default()
    };
    assert_eq!(
        bind_spec(&spec).unwrap_err(),
        BindError::UnknownType {
            name: "Inner".to_owned()
        }
    );
}

#[test]
fn first_error_aborts_the_bind() {
    let spec = SpecInput {
        primitives: primitives(&["int"]),
        structs: vec![StructDecl::new(
            "First",
            vec![FieldDecl::new("a", TypeDesc::named("MissingA"))],
        )],
        classes: vec![ClassDecl::new("Second").with_property("b", TypeDesc::named("MissingB"))],
        ..SpecInput::default()
    };
    // Struct fields are linked before class members.
    assert_eq!(bind_spec(&spec).unwrap_err().subject(), "MissingA");
}

#[test]
fn every_constructor_returns_its_class() {
    let overloads = vec![
        OverloadDecl::new(void_fn(vec![])),
        OverloadDecl::new(void_fn(vec![ArgDesc::new("size", TypeDesc::named("int"))]))
            .with_suffix("sized"),
    ];
    let spec = SpecInput {
        primitives: primitives(&["int", "void"]),
        classes: vec![
            ClassDecl::new("Buffer").with_constructor(MethodDecl::new("make", overloads.clone())),
            ClassDecl::new("Stream").with_constructor(MethodDecl::new("open", overloads)),
        ],
        ..SpecInput::default()
    };
    let bound = bind_spec(&spec).unwrap();

    for (idx, class) in bound.classes() {
        let ctors: Vec<_> = class.methods_of(MethodKind::Constructor).collect();
        assert_eq!(ctors.len(), 2);
        for ctor in ctors {
            assert_eq!(bound.pool().function_sig(ctor.signature).unwrap().ret, idx);
            assert_eq!(ctor.owner, idx);
        }
    }
}

#[test]
fn bound_graph_reads_in_parallel() {
    let mut spec = animal_zoo();
    for i in 0..64 {
        spec.classes.push(
            ClassDecl::new(format!("Cage{i}"))
                .with_property("resident", TypeDesc::named("Animal").pointer())
                .with_method(MethodDecl::single("open", void_fn(vec![]))),
        );
    }
    let bound = bind_spec(&spec).unwrap();
    let (animal, _) = bound.class_named("Animal").unwrap();

    let classes: Vec<_> = bound.classes().collect();
    let rendered: Vec<String> = classes
        .par_iter()
        .filter_map(|(_, class)| class.property("resident"))
        .map(|prop| bound.format_type(prop.ty))
        .collect();

    assert_eq!(rendered.len(), 64);
    assert!(rendered.iter().all(|text| text == "Animal*"));

    let pointers: Vec<_> = classes
        .par_iter()
        .filter_map(|(_, class)| class.property("resident").map(|p| p.ty))
        .collect();
    assert!(pointers.windows(2).all(|w| w[0] == w[1]));
    assert_eq!(*bound.pool().get(pointers[0]), TypeData::Pointer(animal));
}
