use crate::{pattern, Error, FromPayload, IntoPayload, Patterns, Payload, Primitive, Result};

use std::{borrow::Cow, fmt};

/// The active state of a tagged value: a variant name and its payload.
///
/// A `Variant` exposes no mutable access; once built it stays as it is.
#[derive(Debug, Clone, PartialEq)]
pub struct Variant {
    name: Cow<'static, str>,
    payload: Payload,
}

impl Variant {
    /// Creates a variant descriptor.
    ///
    /// The name is not validated here: a bare descriptor has no declaring
    /// type. Declared construction goes through [`Enum::construct`] or
    /// [`EnumDef::construct`], which reject unknown names.
    ///
    /// [`Enum::construct`]: crate::Enum::construct
    /// [`EnumDef::construct`]: crate::EnumDef::construct
    pub fn new(name: impl Into<Cow<'static, str>>, payload: impl IntoPayload) -> Variant {
        Variant {
            name: name.into(),
            payload: payload.into_payload(),
        }
    }

    /// Creates a variant without a payload.
    pub fn unit(name: impl Into<Cow<'static, str>>) -> Variant {
        Variant::new(name, Payload::new())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    pub fn into_parts(self) -> (Cow<'static, str>, Payload) {
        (self.name, self.payload)
    }

    /// Returns `true` if this is the variant called `name`.
    pub fn is(&self, name: &str) -> bool {
        self.name == name
    }

    /// Returns the first payload value as a `T`.
    ///
    /// The variant name is not checked; call [`Variant::is`] first. Fails when
    /// the payload is empty.
    pub fn unwrap<T: Primitive>(&self) -> Result<T> {
        let Some(first) = self.payload.first() else {
            return Err(Error::empty_payload(&*self.name));
        };

        T::load(first.clone())
    }

    /// Returns the whole payload as a tuple.
    ///
    /// Fails when the payload is empty or its length differs from the tuple's.
    pub fn unwrap_tuple<T: FromPayload>(&self) -> Result<T> {
        if self.payload.is_empty() {
            return Err(Error::empty_payload(&*self.name));
        }

        T::from_payload(&self.name, self.payload.clone())
    }

    /// Invokes the handler registered for this variant.
    ///
    /// The payload is spread over the handler's arguments. Fails with a
    /// non-exhaustive match error when no handler is registered.
    pub fn match_with<U>(self, patterns: Patterns<'_, U>) -> Result<U> {
        pattern::dispatch(self, patterns, None)
    }

    /// Like [`Variant::match_with`], but falls back to `defaults` when
    /// `patterns` has no handler for this variant.
    pub fn match_with_default<U>(
        self,
        patterns: Patterns<'_, U>,
        defaults: Patterns<'_, U>,
    ) -> Result<U> {
        pattern::dispatch(self, patterns, Some(defaults))
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)?;

        if !self.payload.is_empty() {
            write!(f, "({})", self.payload)?;
        }

        Ok(())
    }
}
