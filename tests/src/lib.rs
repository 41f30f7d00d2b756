#[macro_use]
mod macros;

pub mod fixtures;

pub mod prelude;

/// Installs the test logger once per process. `RUST_LOG=trace` shows type
/// handle allocation and default-pattern dispatch.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
