use crate::{Error, Type, Value};

macro_rules! impl_num {
    (
        $(
            $variant:ident($ty:ty) {
                $is:ident
            } )*
    ) => {
        impl Type {
            $(
                pub fn $is(&self) -> bool {
                    matches!(self, Self::$variant)
                }
            )*
        }

        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Self::$variant(value)
                }
            }

            impl From<&$ty> for Value {
                fn from(value: &$ty) -> Self {
                    Self::$variant(*value)
                }
            }

            // Integers convert across widths as long as the value fits. A value
            // that does not fit is a type conversion error whose context
            // carries the range message.
            impl TryFrom<Value> for $ty {
                type Error = Error;

                fn try_from(value: Value) -> Result<Self, Self::Error> {
                    match value {
                        Value::I8(val) => try_convert!(value, val, $ty),
                        Value::I16(val) => try_convert!(value, val, $ty),
                        Value::I32(val) => try_convert!(value, val, $ty),
                        Value::I64(val) => try_convert!(value, val, $ty),
                        Value::U8(val) => try_convert!(value, val, $ty),
                        Value::U16(val) => try_convert!(value, val, $ty),
                        Value::U32(val) => try_convert!(value, val, $ty),
                        Value::U64(val) => try_convert!(value, val, $ty),
                        _ => Err(Error::type_conversion(value, stringify!($ty))),
                    }
                }
            }
        )*
    };
}

macro_rules! try_convert {
    ($value:expr, $val:expr, $target_ty:ty) => {
        <$target_ty>::try_from($val).map_err(|_| {
            Error::type_conversion($value, stringify!($target_ty)).context(crate::err!(
                "value {} is out of range for {}",
                $val,
                stringify!($target_ty)
            ))
        })
    };
}

impl_num! {
    I8(i8) {
        is_i8
    }
    I16(i16) {
        is_i16
    }
    I32(i32) {
        is_i32
    }
    I64(i64) {
        is_i64
    }
    U8(u8) {
        is_u8
    }
    U16(u16) {
        is_u16
    }
    U32(u32) {
        is_u32
    }
    U64(u64) {
        is_u64
    }
}
