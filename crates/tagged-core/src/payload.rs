use crate::{err, Error, Primitive, Result, Value};

use std::{fmt, ops, vec};

/// The ordered values attached to a variant.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Payload {
    values: Vec<Value>,
}

impl Payload {
    pub const fn new() -> Payload {
        Payload { values: Vec::new() }
    }

    pub fn from_vec(values: Vec<Value>) -> Payload {
        Payload { values }
    }

    pub fn into_vec(self) -> Vec<Value> {
        self.values
    }

    /// Consumes the payload, checking that it holds exactly `expected` values.
    ///
    /// The returned [`Fields`] loads the values in order.
    pub fn into_fields(self, variant: &str, expected: usize) -> Result<Fields> {
        if self.values.len() != expected {
            return Err(Error::payload_arity(variant, expected, self.values.len()));
        }

        Ok(Fields {
            variant: variant.into(),
            index: 0,
            values: self.values.into_iter(),
        })
    }
}

impl ops::Deref for Payload {
    type Target = [Value];

    fn deref(&self) -> &Self::Target {
        &self.values[..]
    }
}

impl IntoIterator for Payload {
    type Item = Value;
    type IntoIter = vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a Payload {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Value> for Payload {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Payload::from_vec(iter.into_iter().collect())
    }
}

impl fmt::Display for Payload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, value) in self.values.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            fmt::Display::fmt(value, f)?;
        }
        Ok(())
    }
}

/// Positional loader over a payload whose arity was already checked.
#[derive(Debug)]
pub struct Fields {
    variant: Box<str>,
    index: usize,
    values: vec::IntoIter<Value>,
}

impl Fields {
    /// Loads the next value as `T`.
    pub fn load<T: Primitive>(&mut self) -> Result<T> {
        let index = self.index;
        let Some(value) = self.values.next() else {
            return Err(Error::payload_arity(&*self.variant, index + 1, index));
        };
        self.index += 1;

        T::load(value).map_err(|e| e.context(err!("field {index} of `{}`", self.variant)))
    }
}

/// Values that can be used as the payload of a new variant.
pub trait IntoPayload {
    fn into_payload(self) -> Payload;
}

impl IntoPayload for Payload {
    fn into_payload(self) -> Payload {
        self
    }
}

impl<T: Into<Value>> IntoPayload for Vec<T> {
    fn into_payload(self) -> Payload {
        self.into_iter().map(Into::into).collect()
    }
}

impl<T: Into<Value>, const N: usize> IntoPayload for [T; N] {
    fn into_payload(self) -> Payload {
        self.into_iter().map(Into::into).collect()
    }
}

impl IntoPayload for () {
    fn into_payload(self) -> Payload {
        Payload::new()
    }
}

/// Types that can be rebuilt from a whole, non-empty payload.
pub trait FromPayload: Sized {
    fn from_payload(variant: &str, payload: Payload) -> Result<Self>;
}

impl FromPayload for Payload {
    fn from_payload(_variant: &str, payload: Payload) -> Result<Self> {
        Ok(payload)
    }
}

impl FromPayload for Vec<Value> {
    fn from_payload(_variant: &str, payload: Payload) -> Result<Self> {
        Ok(payload.into_vec())
    }
}

macro_rules! impl_tuple {
    ( $( $len:literal => ( $( $ty:ident ),+ ) )* ) => {
        $(
            impl< $( $ty: Into<Value> ),+ > IntoPayload for ( $( $ty, )+ ) {
                #[allow(non_snake_case)]
                fn into_payload(self) -> Payload {
                    let ( $( $ty, )+ ) = self;
                    Payload::from_vec(vec![ $( $ty.into() ),+ ])
                }
            }

            impl< $( $ty: Primitive ),+ > FromPayload for ( $( $ty, )+ ) {
                fn from_payload(variant: &str, payload: Payload) -> Result<Self> {
                    let mut fields = payload.into_fields(variant, $len)?;
                    Ok(( $( fields.load::<$ty>()?, )+ ))
                }
            }
        )*
    };
}

impl_tuple! {
    1 => (A)
    2 => (A, B)
    3 => (A, B, C)
    4 => (A, B, C, D)
    5 => (A, B, C, D, E)
    6 => (A, B, C, D, E, F)
    7 => (A, B, C, D, E, F, G)
    8 => (A, B, C, D, E, F, G, H)
}
