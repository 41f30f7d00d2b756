//! Common imports for test files
//!
//! `use tests::prelude::*;` brings in the tagged API, the shared fixtures,
//! and the test macros.

pub use crate::fixtures::{Shape, Status};
pub use crate::{assert_err, tests};

pub use tagged::{
    payload, type_id, DynEnum, Enum, EnumDef, Error, Object, Patterns, Primitive, Type,
    TypeHandle, Value, Variant,
};
