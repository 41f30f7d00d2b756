// Diagnostics emitted by `#[derive(Enum)]` for inputs it rejects.
#[test]
fn ui() {
    let t = trybuild::TestCases::new();
    t.compile_fail("tests/ui/*.rs");
}
