//! Tagged unions with a runtime view.
//!
//! `#[derive(Enum)]` turns an ordinary Rust enum into a tagged enum: every
//! value can be inspected by variant name, unwrapped positionally, and
//! dispatched through a [`Patterns`] table, while native `match` keeps its
//! compile-time exhaustiveness checks.
//!
//! ```
//! use tagged::{Enum, Patterns};
//!
//! #[derive(Debug, PartialEq, tagged::Enum)]
//! enum Status {
//!     Active,
//!     Failed(i64),
//! }
//!
//! let status = Status::construct("Failed", [404i64]).unwrap();
//! assert!(status.is("Failed"));
//! assert!(status.is_failed());
//! assert_eq!(status.to_string(), "Failed(404)");
//! assert_eq!(status.unwrap::<i64>().unwrap(), 404);
//!
//! let message = status
//!     .match_with(
//!         Patterns::new()
//!             .on("Active", || "ok".to_string())
//!             .on("Failed", |code: i64| format!("err:{code}")),
//!     )
//!     .unwrap();
//! assert_eq!(message, "err:404");
//! ```
//!
//! Enums that are only known at runtime are declared with
//! [`EnumDef::builder`] and produce [`DynEnum`] values.

extern crate self as tagged;

pub use tagged_core::{
    bail, err, generate_type_handle, pattern, payload, type_id, value, DynEnum, Enum, EnumDef,
    EnumDefBuilder, Error, Fields, FromPayload, Handler, IntoError, IntoPayload, Object,
    ObjectValue, Patterns, Payload, Primitive, Result, Type, TypeHandle, Value, ValueEnum,
    Variant, VariantDef, VariantFactory,
};

pub use tagged_macros::Enum;

#[doc(hidden)]
pub mod codegen_support {
    pub use tagged_core::{
        generate_type_handle, Enum, EnumDef, Error, Payload, Primitive, Result, Type, TypeHandle,
        Value, ValueEnum, Variant, VariantDef,
    };
}
