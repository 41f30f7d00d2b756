use std::{any::Any, fmt, sync::Arc};

/// Types that can be carried in a payload as an opaque [`Object`].
///
/// Implemented for every `'static` type that is `Debug + Display + Send + Sync`.
pub trait ObjectValue: Any + fmt::Debug + fmt::Display + Send + Sync {
    #[doc(hidden)]
    fn as_any(&self) -> &dyn Any;

    #[doc(hidden)]
    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync>;
}

impl<T> ObjectValue for T
where
    T: Any + fmt::Debug + fmt::Display + Send + Sync,
{
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Arc<Self>) -> Arc<dyn Any + Send + Sync> {
        self
    }
}

/// A shared reference to an arbitrary value.
///
/// Cloning an `Object` shares the same allocation, so a value unwrapped from a
/// payload is the very instance that was stored. Equality is identity.
#[derive(Clone)]
pub struct Object {
    inner: Arc<dyn ObjectValue>,
}

impl Object {
    pub fn new<T: ObjectValue>(value: T) -> Object {
        Object::from_arc(Arc::new(value))
    }

    pub fn from_arc<T: ObjectValue>(value: Arc<T>) -> Object {
        Object { inner: value }
    }

    /// Returns `true` if both objects point to the same allocation.
    pub fn ptr_eq(&self, other: &Object) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.inner), Arc::as_ptr(&other.inner))
    }

    pub fn is<T: ObjectValue>(&self) -> bool {
        ObjectValue::as_any(&*self.inner).is::<T>()
    }

    /// Returns the shared value if it is a `T`.
    pub fn downcast<T: ObjectValue>(&self) -> Option<Arc<T>> {
        ObjectValue::into_any(Arc::clone(&self.inner))
            .downcast::<T>()
            .ok()
    }
}

impl PartialEq for Object {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Object").field(&self.inner).finish()
    }
}

impl fmt::Display for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.inner, f)
    }
}

impl From<Object> for super::Value {
    fn from(value: Object) -> Self {
        Self::Object(value)
    }
}

impl<T: ObjectValue> From<Arc<T>> for super::Value {
    fn from(value: Arc<T>) -> Self {
        Self::Object(Object::from_arc(value))
    }
}
