//! Integration tests for the public API

use std::sync::Arc;

use lineage::plugins::class::*;
use lineage::prelude::*;
use lineage::{build, generate};

fn abstract_template() -> Arc<ClassType> {
    Arc::new(
        ClassType::builder("AbstractTemplate")
            .method("template_method", &["self"], "NoneType")
            .method("base_operation1", &["self"], "NoneType")
            .abstract_method("required_operation1", &["self"], "NoneType")
            .abstract_method("required_operation2", &["self"], "NoneType")
            .method("hook1", &["self"], "NoneType")
            .build(),
    )
}

fn concrete_implementation() -> ClassType {
    ClassType::builder("ConcreteImplementation1")
        .extends(abstract_template())
        .field("test1", "int")
        .field("test2", "int")
        .field("_test3", "str")
        .field("_ConcreteImplementation1__test4", "bool")
        .method("required_operation1", &["self"], "NoneType")
        .method("required_operation2", &["self"], "NoneType")
        .property("dummy", "str")
        .static_method("mytest", &["a"], "str")
        .build()
}

#[test]
fn test_template_implementation_members() {
    for direction in ["up", "down"] {
        let graph = build(concrete_implementation(), direction).unwrap();
        let arrow = RelationshipKind::Inheritance.glyph(direction.parse().unwrap());
        assert!(graph.contains(arrow), "missing inheritance arrow for {}", direction);
        assert!(graph.contains("+mytest(a)$ str"));
        assert!(graph.contains("#str test3"));
        assert!(graph.contains("-bool test4"));
        assert!(graph.contains("+str dummy"));
        assert!(graph.contains("+required_operation1()* NoneType"));
    }
}

#[test]
fn test_template_implementation_invalid_direction() {
    let result = build(concrete_implementation(), "insideout");
    assert!(matches!(result, Err(DiagramError::InvalidDirection { .. })));
}

#[test]
fn test_leaf_block_layout() {
    let graph = build(concrete_implementation(), "up").unwrap();
    let expected = "class ConcreteImplementation1{\n\
                    +int test1\n\
                    +int test2\n\
                    +required_operation1() NoneType\n\
                    +required_operation2() NoneType\n\
                    +str dummy\n\
                    +mytest(a)$ str\n\
                    #str test3\n\
                    -bool test4\n\
                    }";
    assert!(graph.contains(expected), "unexpected leaf block:\n{}", graph);
}

#[test]
fn test_base_mid_leaf_down() {
    let base = Arc::new(ClassType::builder("Base").method("a", &["self"], "int").build());
    let mid = Arc::new(ClassType::builder("Mid").extends(base).build());
    let leaf = ClassType::builder("Leaf").extends(mid).build();

    let graph = build(leaf, "down").unwrap();
    assert_eq!(
        graph,
        "classDiagram\nBase <|-- Mid\nMid <|-- Leaf\nclass Base{\n+a() int\n}\nclass Mid{\n}\nclass Leaf{\n}"
    );
}

#[test]
fn test_composite_directions() {
    let element = ClassType::builder("ComposedElement")
        .field("name", "str")
        .method("log_name", &["self"], "NoneType")
        .build();
    let element = Arc::new(element);
    let implementation = ClassType::builder("Implementation")
        .param("element", TypeRef::Class(Arc::clone(&element)))
        .param("element2", TypeRef::named("str"))
        .method("do_something", &["self"], "NoneType")
        .method("get_name", &["self"], "str")
        .build();
    let implementation = Arc::new(implementation);

    for direction in Direction::ALL {
        let graph = build(Arc::clone(&implementation), direction.as_str()).unwrap();
        let composition = format!(
            "Implementation {} ComposedElement",
            RelationshipKind::Composition.glyph(direction)
        );
        assert_eq!(graph.matches(&composition).count(), 1);
        assert_eq!(graph.matches("class ComposedElement{").count(), 1);
        assert!(!graph.contains("class str{"));
    }
}

#[test]
fn test_composed_type_block_follows_its_relationship() {
    let engine = ClassType::builder("Engine").method("start", &["self"], "None").build();
    let wheel = ClassType::builder("Wheel").build();
    let car = ClassType::builder("Car")
        .param("engine", TypeRef::class(engine))
        .param("seats", TypeRef::named("int"))
        .param("wheel", TypeRef::class(wheel))
        .build();

    let graph = build(car, "down").unwrap();
    let lines: Vec<_> = graph.lines().collect();
    assert_eq!(
        lines,
        vec![
            "classDiagram",
            "class Car{",
            "}",
            "Car *-- Engine",
            "class Engine{",
            "+start() None",
            "}",
            "Car *-- Wheel",
            "class Wheel{",
            "}",
        ]
    );
}

#[test]
fn test_assemble_counts() {
    let diagram = ClassDiagram::new(concrete_implementation(), "down").unwrap();
    let db = diagram.assemble();
    assert_eq!(db.classes().count(), 2);
    assert_eq!(db.relationships().count(), 1);
    assert!(db.classes().any(|c| c.name == "AbstractTemplate"));
}

struct Engine;

impl Describe for Engine {
    fn describe() -> ClassType {
        ClassType::builder("Engine")
            .field("_rpm", "int")
            .method("start", &["self"], "None")
            .build()
    }
}

struct Car;

impl Describe for Car {
    fn describe() -> ClassType {
        ClassType::builder("Car")
            .param("engine", TypeRef::of::<Engine>())
            .build()
    }
}

#[test]
fn test_describe_types() {
    let graph = ClassDiagram::of::<Car>("up").unwrap().build().unwrap();
    assert!(graph.contains("Car --* Engine"));
    assert!(graph.contains("#int rpm"));
}

#[test]
fn test_model_file_drops_special_methods() {
    let model = TypeModel::from_json(
        r#"{ "classes": [
            { "name": "Animal", "members": [
                { "kind": "method", "name": "speak", "params": ["self"], "returns": "str", "abstract": true }
            ] },
            { "name": "Dog", "bases": ["Animal"], "members": [
                { "kind": "method", "name": "speak", "params": ["self"], "returns": "str" },
                { "kind": "method", "name": "__repr__", "params": ["self"], "returns": "str" }
            ] }
        ] }"#,
    )
    .unwrap();

    let graph = build(model.require("Dog").unwrap(), "down").unwrap();
    assert_eq!(
        graph,
        "classDiagram\nAnimal <|-- Dog\nclass Animal{\n+speak()* str\n}\nclass Dog{\n+speak() str\n}"
    );
}

#[test]
fn test_generate_escapes_markup() {
    let base = Arc::new(ClassType::builder("Base").build());
    let leaf = ClassType::builder("Leaf").extends(base).build();
    let html = generate(leaf, DiagramConfig::default()).unwrap();
    assert!(html.contains("Base &lt;|-- Leaf"));
}

#[test]
fn test_graph_with_file_templates() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("simple.html"), "<body>{{ uml_string }}</body>").unwrap();

    let strategy = ClassDiagram::with_direction(ClassType::builder("Solo").build(), Direction::Up);
    let graph = Graph::with_renderer(strategy, FileTemplateRenderer::new(dir.path()));
    assert_eq!(
        graph.generate().unwrap(),
        "<body>classDiagram\nclass Solo{\n}</body>"
    );
}
