use tests::prelude::*;

use pretty_assertions::assert_eq;
use std::cell::Cell;

fn describe(status: Status) -> tagged::Result<String> {
    status.match_with(
        Patterns::new()
            .on("Active", || "active".to_string())
            .on("Failed", |code: i64| format!("failed: {code}"))
            .on("Moved", |code: i64, location: String| {
                format!("{code} -> {location}")
            }),
    )
}

fn payload_is_spread_over_handler_arguments() {
    assert_eq!(describe(Status::Active).unwrap(), "active");
    assert_eq!(describe(Status::Failed(404)).unwrap(), "failed: 404");
    assert_eq!(
        describe(Status::Moved {
            code: 301,
            location: "/new".to_string(),
        })
        .unwrap(),
        "301 -> /new"
    );
}

fn exactly_one_handler_runs() {
    let calls = Cell::new(0);
    let count = || calls.set(calls.get() + 1);

    Status::Failed(1)
        .match_with_default(
            Patterns::new()
                .on("Active", || count())
                .on("Failed", |_: i64| count()),
            Patterns::new().on("Failed", |_: i64| count()),
        )
        .unwrap();

    assert_eq!(calls.get(), 1);
}

fn defaults_cover_missing_patterns() {
    let label = |status: Status| {
        status.match_with_default(
            Patterns::new().on("Active", || "up"),
            Patterns::new()
                .on("Failed", |_: i64| "down")
                .on("Moved", |_: i64, _: String| "down"),
        )
    };

    assert_eq!(label(Status::Active).unwrap(), "up");
    assert_eq!(label(Status::Failed(3)).unwrap(), "down");
}

fn missing_everywhere_is_non_exhaustive() {
    let err = assert_err!(
        Status::Failed(500).match_with_default(
            Patterns::new().on("Active", || "ok"),
            Patterns::<&str>::new(),
        ),
        is_non_exhaustive_match
    );

    assert_eq!(
        err.to_string(),
        "non-exhaustive match: no pattern for variant `Failed`"
    );
}

fn handler_arity_must_match_the_payload() {
    let err = assert_err!(
        Status::Failed(404).match_with(Patterns::new().on("Failed", || "no args")),
        is_payload_arity
    );
    assert!(err.to_string().contains("Failed"));

    assert_err!(
        Status::Failed(404).match_with(Patterns::new().on("Failed", |_: i64, _: i64| ())),
        is_payload_arity
    );
}

fn handler_argument_types_are_checked() {
    assert_err!(
        Status::Failed(404).match_with(Patterns::new().on("Failed", |code: String| code)),
        is_type_conversion
    );
}

fn out_of_range_arguments_are_type_conversions() {
    let err = assert_err!(
        Status::Failed(404).match_with(Patterns::new().on("Failed", |code: u8| code)),
        is_type_conversion
    );
    assert_eq!(
        err.to_string(),
        "field 0 of `Failed`: value 404 is out of range for u8: cannot convert I64 to u8"
    );

    assert_err!(Status::Failed(-1).unwrap::<u32>(), is_type_conversion);
}

fn handlers_may_fall_back_to_raw_values() {
    let rendered = Status::Moved {
        code: 307,
        location: "/tmp".to_string(),
    }
    .match_with(Patterns::new().on("Moved", |code: Value, location: Value| {
        format!("{code}|{location}")
    }))
    .unwrap();

    assert_eq!(rendered, "307|/tmp");
}

fn renamed_variants_match_by_runtime_name() {
    let shape = Shape::Point;

    let matched = shape
        .clone()
        .match_with(Patterns::new().on("Dot", || true))
        .unwrap();
    assert!(matched);

    assert_err!(
        shape.match_with(Patterns::new().on("Point", || true)),
        is_non_exhaustive_match
    );
}

tests!(
    payload_is_spread_over_handler_arguments,
    exactly_one_handler_runs,
    defaults_cover_missing_patterns,
    missing_everywhere_is_non_exhaustive,
    handler_arity_must_match_the_payload,
    handler_argument_types_are_checked,
    out_of_range_arguments_are_type_conversions,
    handlers_may_fall_back_to_raw_values,
    renamed_variants_match_by_runtime_name,
);
