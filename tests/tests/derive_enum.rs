use tests::prelude::*;

use pretty_assertions::assert_eq;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, tagged::Enum)]
#[tagged(rename = "Job")]
enum JobState {
    Queued,
    #[tagged(rename = "running")]
    InProgress { worker: String, attempt: u32 },
    Finished(Option<Status>),
}

#[derive(Debug, tagged::Enum)]
#[tagged(skip_display)]
enum Quiet {
    Only(bool),
}

impl std::fmt::Display for Quiet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("quiet")
    }
}

#[derive(Debug, Clone, tagged::Enum)]
enum Handle {
    Shared(Object),
    Typed(Arc<String>),
}

#[derive(Debug, Clone, PartialEq, tagged::Enum)]
enum Tree {
    Leaf(i64),
    Node(Box<Tree>, Box<Tree>),
}

#[derive(Debug, Clone, PartialEq, tagged::Enum)]
enum Cursor {
    At(usize, char),
    Scaled(f32),
}

fn variants_are_listed_in_declaration_order() {
    assert_eq!(Status::VARIANTS, ["Active", "Failed", "Moved"]);
    assert_eq!(JobState::VARIANTS, ["Queued", "running", "Finished"]);
    assert_eq!(Shape::VARIANTS, ["Circle", "Rect", "Dot"]);
}

fn definition_mirrors_the_rust_enum() {
    let def = Status::def();

    assert_eq!(def.name, "Status");
    assert_eq!(def.id, type_id::<Status>());

    let moved = def.variant("Moved").unwrap();
    assert_eq!(moved.discriminant, 2);
    assert_eq!(moved.fields, [Type::I64, Type::String]);

    assert_eq!(JobState::def().name, "Job");
    assert_eq!(
        JobState::def().variant("Finished").unwrap().fields,
        [Type::Enum(type_id::<Status>())]
    );
}

fn type_handles_are_stable_and_distinct() {
    let status = type_id::<Status>();

    assert_eq!(status, type_id::<Status>());
    assert_eq!(status, Status::Active.type_handle());
    assert_eq!(status, Status::Failed(1).type_handle());
    assert_ne!(status, type_id::<Shape>());
    assert_ne!(status, type_id::<JobState>());
}

fn predicates_follow_rust_identifiers() {
    let job = JobState::InProgress {
        worker: "w1".to_string(),
        attempt: 2,
    };

    assert!(job.is_in_progress());
    assert!(!job.is_queued());
    assert!(job.is("running"));
    assert!(!job.is("InProgress"));
    assert_eq!(job.variant_name(), "running");
    assert!(Shape::Point.is_point());
    assert!(Shape::Point.is("Dot"));
}

fn display_uses_runtime_names() {
    let job = JobState::InProgress {
        worker: "w1".to_string(),
        attempt: 2,
    };

    assert_eq!(job.to_string(), "running(w1, 2)");
    assert_eq!(Shape::Rect(2.0, 3.5).to_string(), "Rect(2, 3.5)");
    assert_eq!(Shape::Point.to_string(), "Dot");
    assert_eq!(
        JobState::Finished(Some(Status::Failed(7))).to_string(),
        "Finished(Failed(7))"
    );
    assert_eq!(JobState::Finished(None).to_string(), "Finished(null)");
}

fn skip_display_keeps_the_hand_written_impl() {
    assert_eq!(Quiet::Only(true).to_string(), "quiet");
    assert_eq!(Quiet::Only(true).to_variant().to_string(), "Only(true)");
}

fn construct_runs_the_rust_constructor() {
    let moved = Status::construct("Moved", (301i64, "/new")).unwrap();
    assert_eq!(
        moved,
        Status::Moved {
            code: 301,
            location: "/new".to_string(),
        }
    );

    assert_eq!(Status::construct("Active", ()).unwrap(), Status::Active);
    assert_eq!(Status::construct("Failed", [404]).unwrap(), Status::Failed(404));
}

fn construct_rejects_unknown_names() {
    let err = assert_err!(Status::construct("Paused", ()), is_unknown_variant);
    assert_eq!(err.to_string(), "unknown variant `Paused` for enum `Status`");

    // Renamed variants are only reachable through their runtime name.
    assert_err!(JobState::construct("InProgress", ("w", 1u32)), is_unknown_variant);
}

fn construct_checks_payloads() {
    assert_err!(Status::construct("Failed", ()), is_payload_arity);
    assert_err!(Status::construct("Active", [1i64]), is_payload_arity);

    let err = assert_err!(Status::construct("Failed", ["404"]), is_type_conversion);
    assert_eq!(
        err.to_string(),
        "field 0 of `Failed`: cannot convert String to i64"
    );
}

fn variants_round_trip() {
    let values = vec![
        JobState::Queued,
        JobState::InProgress {
            worker: "w1".to_string(),
            attempt: 3,
        },
        JobState::Finished(Some(Status::Moved {
            code: 302,
            location: "/tmp".to_string(),
        })),
        JobState::Finished(None),
    ];

    for value in values {
        let variant = value.to_variant();
        assert_eq!(variant, value.clone().into_variant());
        assert_eq!(JobState::from_variant(variant).unwrap(), value);
    }
}

fn recursive_enums_round_trip() {
    let tree = Tree::Node(
        Box::new(Tree::Leaf(1)),
        Box::new(Tree::Node(Box::new(Tree::Leaf(2)), Box::new(Tree::Leaf(3)))),
    );

    assert_eq!(tree.to_string(), "Node(Leaf(1), Node(Leaf(2), Leaf(3)))");
    assert_eq!(Tree::from_variant(tree.to_variant()).unwrap(), tree);

    let (left, _right) = tree.unwrap_tuple::<(Tree, Tree)>().unwrap();
    assert_eq!(left, Tree::Leaf(1));
}

fn nested_enum_of_another_type_is_rejected() {
    let value = Value::from(Shape::Point);
    let err = assert_err!(Status::load(value), is_type_conversion);
    assert_eq!(
        err.to_string(),
        format!("cannot convert Enum({:?}) to Status", type_id::<Shape>())
    );
}

fn unwrap_and_unwrap_tuple() {
    let moved = Status::Moved {
        code: 301,
        location: "/new".to_string(),
    };

    assert_eq!(moved.unwrap::<i64>().unwrap(), 301);
    assert_eq!(
        moved.unwrap_tuple::<(i64, String)>().unwrap(),
        (301, "/new".to_string())
    );
    assert_err!(moved.unwrap_tuple::<(i64,)>(), is_payload_arity);
    assert_err!(moved.unwrap::<bool>(), is_type_conversion);

    // The variant name is not checked.
    assert_eq!(Status::Failed(9).unwrap::<i64>().unwrap(), 9);
}

fn object_payloads_keep_identity() {
    let object = Object::new(String::from("session"));
    let handle = Handle::Shared(object.clone());
    assert!(handle.unwrap::<Object>().unwrap().ptr_eq(&object));

    let typed = Arc::new(String::from("session"));
    let handle = Handle::Typed(typed.clone());
    assert!(Arc::ptr_eq(&handle.unwrap::<Arc<String>>().unwrap(), &typed));

    let Handle::Typed(back) = Handle::from_variant(handle.to_variant()).unwrap() else {
        panic!("expected Typed");
    };
    assert!(Arc::ptr_eq(&back, &typed));
}

fn platform_scalars_are_payloads() {
    let cursor = Cursor::At(12, 'x');

    assert_eq!(cursor.to_string(), "At(12, x)");
    assert_eq!(
        Cursor::def().variant("At").unwrap().fields,
        [Type::U64, Type::String]
    );
    assert_eq!(Cursor::from_variant(cursor.to_variant()).unwrap(), cursor);
    assert_eq!(
        Cursor::construct("Scaled", [0.5f32]).unwrap(),
        Cursor::Scaled(0.5)
    );

    assert_err!(Cursor::construct("At", (1usize, "xy")), is_type_conversion);
}

fn native_match_is_exhaustive() {
    fn describe(status: &Status) -> String {
        match status {
            Status::Active => "active".to_string(),
            Status::Failed(code) => format!("failed with {code}"),
            Status::Moved { code, location } => format!("{code} -> {location}"),
        }
    }

    assert_eq!(describe(&Status::Active), "active");
    assert_eq!(describe(&Status::Failed(1)), "failed with 1");
    assert_eq!(
        describe(&Status::Moved {
            code: 301,
            location: "/x".to_string()
        }),
        "301 -> /x"
    );
}

tests!(
    variants_are_listed_in_declaration_order,
    definition_mirrors_the_rust_enum,
    type_handles_are_stable_and_distinct,
    predicates_follow_rust_identifiers,
    display_uses_runtime_names,
    skip_display_keeps_the_hand_written_impl,
    construct_runs_the_rust_constructor,
    construct_rejects_unknown_names,
    construct_checks_payloads,
    variants_round_trip,
    recursive_enums_round_trip,
    nested_enum_of_another_type_is_rejected,
    unwrap_and_unwrap_tuple,
    object_payloads_keep_identity,
    platform_scalars_are_payloads,
    native_match_is_exhaustive,
);
