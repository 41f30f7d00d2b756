use crate::Enum;

use std::fmt;

/// A process-stable identifier for a tagged enum type.
///
/// Handles are allocated once per type and never reused, so two values share
/// a handle exactly when they belong to the same enum type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeHandle(pub usize);

impl fmt::Display for TypeHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Generate a unique type handle at runtime.
///
/// This function uses a global atomic counter to ensure each call returns
/// a unique handle. Handles start at 0 and increment with each call.
/// This is thread-safe and can be called concurrently.
pub fn generate_type_handle() -> TypeHandle {
    use std::sync::atomic::{AtomicUsize, Ordering};

    static NEXT_TYPE_HANDLE: AtomicUsize = AtomicUsize::new(0);

    let id = NEXT_TYPE_HANDLE.fetch_add(1, Ordering::Relaxed);
    log::trace!("allocated type handle #{id}");
    TypeHandle(id)
}

/// Returns the type handle of the enum type `T`.
pub fn type_id<T: Enum>() -> TypeHandle {
    T::id()
}
