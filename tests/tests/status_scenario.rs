use tests::prelude::*;

use pretty_assertions::assert_eq;

fn display_of_unit_variant() {
    assert_eq!(Status::Active.to_string(), "Active");
}

fn failed_is_introspectable() {
    let status = Status::Failed(404);

    assert_eq!(status.to_string(), "Failed(404)");
    assert!(status.is("Failed"));
    assert!(!status.is("Active"));
    assert_eq!(status.unwrap::<i64>().unwrap(), 404);
}

fn match_with_all_handlers() {
    let message = Status::Active
        .match_with(
            Patterns::new()
                .on("Active", || "ok".to_string())
                .on("Failed", |code: i64| format!("err:{code}")),
        )
        .unwrap();

    assert_eq!(message, "ok");
}

fn match_missing_handler_names_the_variant() {
    let err = assert_err!(
        Status::Failed(500).match_with(Patterns::new().on("Active", || "ok")),
        is_non_exhaustive_match
    );

    assert!(err.to_string().contains("Failed"));
}

fn unwrap_unit_variant_is_empty_payload() {
    let err = assert_err!(Status::Active.unwrap::<i64>(), is_empty_payload);
    assert_eq!(err.to_string(), "cannot unwrap `Active`: payload is empty");
}

fn same_scenario_on_a_runtime_definition() {
    let def = EnumDef::builder("Status")
        .unit("Active")
        .variant("Failed", [Type::I64])
        .build()
        .unwrap();

    let active = def.construct("Active", ()).unwrap();
    let failed = def.factory("Failed").unwrap().call([404i64]).unwrap();

    assert_eq!(active.to_string(), "Active");
    assert_eq!(failed.to_string(), "Failed(404)");
    assert!(failed.is("Failed"));
    assert_eq!(failed.unwrap::<i64>().unwrap(), 404);

    let message = active
        .match_with(
            Patterns::new()
                .on("Active", || "ok".to_string())
                .on("Failed", |code: i64| format!("err:{code}")),
        )
        .unwrap();
    assert_eq!(message, "ok");

    let err = assert_err!(
        failed.match_with(Patterns::new().on("Active", || "ok")),
        is_non_exhaustive_match
    );
    assert!(err.to_string().contains("Failed"));
}

tests!(
    display_of_unit_variant,
    failed_is_introspectable,
    match_with_all_handlers,
    match_missing_handler_names_the_variant,
    unwrap_unit_variant_is_empty_payload,
    same_scenario_on_a_runtime_definition,
);
