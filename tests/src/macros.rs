/// Wraps each listed function in a `#[test]` that installs logging first.
#[macro_export]
macro_rules! tests {
    (
        $(
            $( #[$attrs:meta] )*
            $f:ident
        ),+ $(,)?
    ) => {
        mod run {
            $(
                #[test]
                $( #[$attrs] )*
                fn $f() {
                    $crate::init_logging();
                    super::$f();
                }
            )*
        }
    };
}

/// Asserts that `$result` failed and that its error satisfies `$predicate`.
#[macro_export]
macro_rules! assert_err {
    ($result:expr, $predicate:ident) => {{
        let err = match $result {
            Ok(value) => panic!("expected error, got `{:?}`", value),
            Err(err) => err,
        };
        assert!(err.$predicate(), "unexpected error: {err}");
        err
    }};
}
