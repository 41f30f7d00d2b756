use crate::{EnumDef, FromPayload, IntoPayload, Patterns, Primitive, Result, TypeHandle, Variant};

use std::borrow::Cow;

/// A closed set of named variants.
///
/// Usually implemented with `#[derive(Enum)]` on a Rust enum. The native
/// `match` expression remains the exhaustive, compile-time checked way to
/// inspect a value; the methods here expose the same value through its
/// variant name and payload for dynamic consumers.
pub trait Enum: Sized {
    /// Names of the declared variants, in declaration order.
    const VARIANTS: &'static [&'static str];

    /// Unique identifier for this enum type.
    fn id() -> TypeHandle;

    /// The declaration of this enum.
    fn def() -> &'static EnumDef;

    /// Name of the active variant.
    fn variant_name(&self) -> &'static str;

    /// Copies the active variant and its payload into a descriptor.
    fn to_variant(&self) -> Variant;

    fn into_variant(self) -> Variant {
        self.to_variant()
    }

    /// Rebuilds a value from a descriptor through the matching Rust variant.
    ///
    /// Fails for names the enum does not declare and for payloads that do not
    /// fit the variant's fields.
    fn from_variant(variant: Variant) -> Result<Self>;

    /// Constructs the variant called `name` from `payload`.
    fn construct(name: impl Into<Cow<'static, str>>, payload: impl IntoPayload) -> Result<Self> {
        Self::from_variant(Variant::new(name, payload))
    }

    /// Handle of this value's enum type.
    fn type_handle(&self) -> TypeHandle {
        Self::id()
    }

    fn is(&self, name: &str) -> bool {
        self.variant_name() == name
    }

    /// Returns the first payload value; see [`Variant::unwrap`].
    fn unwrap<T: Primitive>(&self) -> Result<T> {
        self.to_variant().unwrap()
    }

    /// Returns the whole payload as a tuple; see [`Variant::unwrap_tuple`].
    fn unwrap_tuple<T: FromPayload>(&self) -> Result<T> {
        self.to_variant().unwrap_tuple()
    }

    /// Runtime-checked dispatch; see [`Variant::match_with`].
    fn match_with<U>(self, patterns: Patterns<'_, U>) -> Result<U> {
        self.into_variant().match_with(patterns)
    }

    fn match_with_default<U>(
        self,
        patterns: Patterns<'_, U>,
        defaults: Patterns<'_, U>,
    ) -> Result<U> {
        self.into_variant().match_with_default(patterns, defaults)
    }
}
