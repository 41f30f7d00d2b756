mod num;

mod object;
pub use object::{Object, ObjectValue};

mod value_enum;
pub use value_enum::ValueEnum;

use crate::{Error, Result, Type};

use std::fmt;

/// A single payload value.
///
/// Payloads are heterogeneous, so every position holds a `Value` and typed
/// access goes through [`Primitive`](crate::Primitive) or `TryFrom<Value>`.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Boolean value
    Bool(bool),

    /// Value of a tagged enum
    Enum(ValueEnum),

    /// 64-bit floating point number
    F64(f64),

    /// Signed 8-bit integer
    I8(i8),

    /// Signed 16-bit integer
    I16(i16),

    /// Signed 32-bit integer
    I32(i32),

    /// Signed 64-bit integer
    I64(i64),

    /// A list of values of the same type
    List(Vec<Value>),

    /// Null value
    #[default]
    Null,

    /// An opaque shared object, compared by identity
    Object(Object),

    /// String value
    String(String),

    /// Unsigned 8-bit integer
    U8(u8),

    /// Unsigned 16-bit integer
    U16(u16),

    /// Unsigned 32-bit integer
    U32(u32),

    /// Unsigned 64-bit integer
    U64(u64),
}

impl Value {
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn list_from_vec(items: Vec<Self>) -> Self {
        Self::List(items)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(v) => Some(&**v),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&ValueEnum> {
        match self {
            Self::Enum(value) => Some(value),
            _ => None,
        }
    }

    pub fn into_enum(self) -> Result<ValueEnum> {
        match self {
            Self::Enum(value) => Ok(value),
            _ => Err(Error::type_conversion(self, "enum")),
        }
    }

    /// Infers the type of this value.
    ///
    /// Lists are typed after their first item; an empty list has an
    /// [`Type::Unknown`] item type.
    pub fn infer_ty(&self) -> Type {
        match self {
            Self::Bool(_) => Type::Bool,
            Self::Enum(value) => Type::Enum(value.ty),
            Self::F64(_) => Type::F64,
            Self::I8(_) => Type::I8,
            Self::I16(_) => Type::I16,
            Self::I32(_) => Type::I32,
            Self::I64(_) => Type::I64,
            Self::List(items) => match items.first() {
                Some(item) => Type::list(item.infer_ty()),
                None => Type::list(Type::Unknown),
            },
            Self::Null => Type::Null,
            Self::Object(_) => Type::Object,
            Self::String(_) => Type::String,
            Self::U8(_) => Type::U8,
            Self::U16(_) => Type::U16,
            Self::U32(_) => Type::U32,
            Self::U64(_) => Type::U64,
        }
    }

    /// Returns `true` if this value conforms to `ty`.
    ///
    /// Null conforms to every type and every value conforms to `Type::Any`.
    pub fn is_a(&self, ty: &Type) -> bool {
        if ty.is_any() {
            return true;
        }

        match self {
            Self::Null => true,
            Self::Bool(_) => ty.is_bool(),
            Self::F64(_) => ty.is_f64(),
            Self::I8(_) => ty.is_i8(),
            Self::I16(_) => ty.is_i16(),
            Self::I32(_) => ty.is_i32(),
            Self::I64(_) => ty.is_i64(),
            Self::U8(_) => ty.is_u8(),
            Self::U16(_) => ty.is_u16(),
            Self::U32(_) => ty.is_u32(),
            Self::U64(_) => ty.is_u64(),
            Self::String(_) => ty.is_string(),
            Self::Object(_) => ty.is_object(),
            Self::Enum(value) => match ty {
                Type::Enum(handle) => value.ty == *handle,
                _ => false,
            },
            Self::List(items) => match ty {
                Type::List(item_ty) => items.iter().all(|item| item.is_a(item_ty)),
                _ => false,
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(v) => fmt::Display::fmt(v, f),
            Self::Enum(v) => fmt::Display::fmt(v, f),
            Self::F64(v) => fmt::Display::fmt(v, f),
            Self::I8(v) => fmt::Display::fmt(v, f),
            Self::I16(v) => fmt::Display::fmt(v, f),
            Self::I32(v) => fmt::Display::fmt(v, f),
            Self::I64(v) => fmt::Display::fmt(v, f),
            Self::List(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                f.write_str("]")
            }
            Self::Null => f.write_str("null"),
            Self::Object(v) => fmt::Display::fmt(v, f),
            Self::String(v) => f.write_str(v),
            Self::U8(v) => fmt::Display::fmt(v, f),
            Self::U16(v) => fmt::Display::fmt(v, f),
            Self::U32(v) => fmt::Display::fmt(v, f),
            Self::U64(v) => fmt::Display::fmt(v, f),
        }
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<f32> for Value {
    fn from(src: f32) -> Self {
        Self::F64(src.into())
    }
}

impl From<usize> for Value {
    fn from(src: usize) -> Self {
        Self::U64(src as u64)
    }
}

impl From<isize> for Value {
    fn from(src: isize) -> Self {
        Self::I64(src as i64)
    }
}

impl From<char> for Value {
    fn from(src: char) -> Self {
        Self::String(src.to_string())
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<&String> for Value {
    fn from(src: &String) -> Self {
        Self::String(src.clone())
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl<T> From<Vec<T>> for Value
where
    Self: From<T>,
{
    fn from(items: Vec<T>) -> Self {
        Self::List(items.into_iter().map(Self::from).collect())
    }
}

impl<T> From<Option<T>> for Value
where
    Self: From<T>,
{
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::from(value),
            None => Self::Null,
        }
    }
}

impl TryFrom<Value> for bool {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Bool(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "bool")),
        }
    }
}

impl TryFrom<Value> for String {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::String(v) => Ok(v),
            _ => Err(Error::type_conversion(value, "String")),
        }
    }
}

impl TryFrom<Value> for f64 {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::F64(v) => Ok(v),
            Value::I8(v) => Ok(v.into()),
            Value::I16(v) => Ok(v.into()),
            Value::I32(v) => Ok(v.into()),
            Value::U8(v) => Ok(v.into()),
            Value::U16(v) => Ok(v.into()),
            Value::U32(v) => Ok(v.into()),
            _ => Err(Error::type_conversion(value, "f64")),
        }
    }
}
