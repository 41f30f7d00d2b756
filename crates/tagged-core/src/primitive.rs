use crate::{Error, Object, ObjectValue, Result, Type, Value};

use std::sync::Arc;

/// A Rust type that can be stored in a payload position.
///
/// `load` is the typed read used by unwrap, by match handler arguments, and by
/// derived `from_variant` implementations.
pub trait Primitive: Sized {
    /// The payload type this Rust type maps to.
    fn ty() -> Type;

    fn load(value: Value) -> Result<Self>;

    fn to_value(&self) -> Value;

    fn into_value(self) -> Value {
        self.to_value()
    }
}

macro_rules! impl_primitive {
    ( $( $ty:ty => $variant:ident ),* ) => {
        $(
            impl Primitive for $ty {
                fn ty() -> Type {
                    Type::$variant
                }

                fn load(value: Value) -> Result<Self> {
                    value.try_into()
                }

                fn to_value(&self) -> Value {
                    Value::from(*self)
                }
            }
        )*
    };
}

impl_primitive! {
    bool => Bool,
    i8 => I8,
    i16 => I16,
    i32 => I32,
    i64 => I64,
    u8 => U8,
    u16 => U16,
    u32 => U32,
    u64 => U64,
    f64 => F64
}

/// `usize` and `isize` are stored as 64-bit integers and checked against the
/// platform width when loaded.
impl Primitive for usize {
    fn ty() -> Type {
        Type::U64
    }

    fn load(value: Value) -> Result<Self> {
        let wide = u64::load(value.clone())?;
        usize::try_from(wide).map_err(|_| Error::type_conversion(value, "usize"))
    }

    fn to_value(&self) -> Value {
        Value::from(*self)
    }
}

impl Primitive for isize {
    fn ty() -> Type {
        Type::I64
    }

    fn load(value: Value) -> Result<Self> {
        let wide = i64::load(value.clone())?;
        isize::try_from(wide).map_err(|_| Error::type_conversion(value, "isize"))
    }

    fn to_value(&self) -> Value {
        Value::from(*self)
    }
}

/// Stored as `F64`; loading narrows with `as`.
impl Primitive for f32 {
    fn ty() -> Type {
        Type::F64
    }

    fn load(value: Value) -> Result<Self> {
        f64::try_from(value).map(|v| v as f32)
    }

    fn to_value(&self) -> Value {
        Value::from(*self)
    }
}

/// Stored as a one-character `String`.
impl Primitive for char {
    fn ty() -> Type {
        Type::String
    }

    fn load(value: Value) -> Result<Self> {
        if let Value::String(s) = &value {
            let mut chars = s.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                return Ok(c);
            }
        }

        Err(Error::type_conversion(value, "char"))
    }

    fn to_value(&self) -> Value {
        Value::from(*self)
    }
}

impl Primitive for String {
    fn ty() -> Type {
        Type::String
    }

    fn load(value: Value) -> Result<Self> {
        value.try_into()
    }

    fn to_value(&self) -> Value {
        Value::String(self.clone())
    }

    fn into_value(self) -> Value {
        Value::String(self)
    }
}

impl Primitive for Value {
    fn ty() -> Type {
        Type::Any
    }

    fn load(value: Value) -> Result<Self> {
        Ok(value)
    }

    fn to_value(&self) -> Value {
        self.clone()
    }

    fn into_value(self) -> Value {
        self
    }
}

impl Primitive for Object {
    fn ty() -> Type {
        Type::Object
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::Object(object) => Ok(object),
            _ => Err(Error::type_conversion(value, "Object")),
        }
    }

    fn to_value(&self) -> Value {
        Value::Object(self.clone())
    }
}

impl<T: ObjectValue> Primitive for Arc<T> {
    fn ty() -> Type {
        Type::Object
    }

    fn load(value: Value) -> Result<Self> {
        if let Value::Object(object) = &value {
            if let Some(shared) = object.downcast::<T>() {
                return Ok(shared);
            }
        }

        Err(Error::type_conversion(value, std::any::type_name::<T>()))
    }

    fn to_value(&self) -> Value {
        Value::Object(Object::from_arc(self.clone()))
    }
}

/// `None` is stored as `Null`. Nested options collapse: `Some(None)` is
/// stored as `Null` too and loads back as `None`.
impl<T: Primitive> Primitive for Option<T> {
    fn ty() -> Type {
        T::ty()
    }

    fn load(value: Value) -> Result<Self> {
        if value.is_null() {
            Ok(None)
        } else {
            Ok(Some(T::load(value)?))
        }
    }

    fn to_value(&self) -> Value {
        match self {
            Some(value) => value.to_value(),
            None => Value::Null,
        }
    }

    fn into_value(self) -> Value {
        match self {
            Some(value) => value.into_value(),
            None => Value::Null,
        }
    }
}

impl<T: Primitive> Primitive for Box<T> {
    fn ty() -> Type {
        T::ty()
    }

    fn load(value: Value) -> Result<Self> {
        T::load(value).map(Box::new)
    }

    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn into_value(self) -> Value {
        (*self).into_value()
    }
}

impl<T: Primitive> Primitive for Vec<T> {
    fn ty() -> Type {
        Type::list(T::ty())
    }

    fn load(value: Value) -> Result<Self> {
        match value {
            Value::List(items) => items.into_iter().map(T::load).collect(),
            _ => Err(Error::type_conversion(value, "Vec")),
        }
    }

    fn to_value(&self) -> Value {
        Value::List(self.iter().map(Primitive::to_value).collect())
    }

    fn into_value(self) -> Value {
        Value::List(self.into_iter().map(Primitive::into_value).collect())
    }
}
