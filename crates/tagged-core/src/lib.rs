#[macro_use]
mod macros;

mod dyn_enum;
pub use dyn_enum::DynEnum;

mod enum_def;
pub use enum_def::{EnumDef, EnumDefBuilder, VariantDef, VariantFactory};

mod enumerated;
pub use enumerated::Enum;

mod error;
pub use error::{Error, IntoError};

pub mod pattern;
pub use pattern::{Handler, Patterns};

mod payload;
pub use payload::{Fields, FromPayload, IntoPayload, Payload};

mod primitive;
pub use primitive::Primitive;

mod ty;
pub use ty::Type;

mod type_handle;
pub use type_handle::{generate_type_handle, type_id, TypeHandle};

pub mod value;
pub use value::{Object, ObjectValue, Value, ValueEnum};

mod variant;
pub use variant::Variant;

/// A Result type alias that uses the crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
