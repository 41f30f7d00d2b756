use crate::TypeHandle;

/// The shape of a payload value.
///
/// Variant declarations list one `Type` per payload position. Construction
/// through an [`EnumDef`](crate::EnumDef) checks each value against it with
/// [`Value::is_a`](crate::Value::is_a).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Type {
    /// Accepts any value
    Any,

    /// Boolean value
    Bool,

    /// String type
    String,

    /// Signed 8-bit integer
    I8,

    /// Signed 16-bit integer
    I16,

    /// Signed 32-bit integer
    I32,

    /// Signed 64-bit integer
    I64,

    /// Unsigned 8-bit integer
    U8,

    /// Unsigned 16-bit integer
    U16,

    /// Unsigned 32-bit integer
    U32,

    /// Unsigned 64-bit integer
    U64,

    /// 64-bit floating point number
    F64,

    /// A list of a single type
    List(Box<Type>),

    /// A value of the tagged enum identified by the handle
    Enum(TypeHandle),

    /// An opaque shared object
    Object,

    /// The null type can be cast to any type.
    Null,

    /// A type that could not be inferred (e.g., empty list)
    Unknown,
}

impl Type {
    pub fn list(ty: impl Into<Self>) -> Self {
        Self::List(Box::new(ty.into()))
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool)
    }

    pub fn is_string(&self) -> bool {
        matches!(self, Self::String)
    }

    pub fn is_f64(&self) -> bool {
        matches!(self, Self::F64)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object)
    }
}
