use crate::{Error, Payload, Primitive, Result};

/// A function that can handle a variant, receiving its payload values as
/// positional arguments.
///
/// Implemented for closures and functions of up to eight arguments whose
/// argument types are [`Primitive`]. A zero-argument handler only accepts an
/// empty payload.
pub trait Handler<Args, U> {
    fn call(self, variant: &str, payload: Payload) -> Result<U>;
}

impl<F, U> Handler<(), U> for F
where
    F: FnOnce() -> U,
{
    fn call(self, variant: &str, payload: Payload) -> Result<U> {
        if !payload.is_empty() {
            return Err(Error::payload_arity(variant, 0, payload.len()));
        }

        Ok(self())
    }
}

macro_rules! impl_handler {
    ( $( $len:literal => ( $( $ty:ident $arg:ident ),+ ) )* ) => {
        $(
            impl<F, U, $( $ty ),+> Handler<( $( $ty, )+ ), U> for F
            where
                F: FnOnce( $( $ty ),+ ) -> U,
                $( $ty: Primitive, )+
            {
                fn call(self, variant: &str, payload: Payload) -> Result<U> {
                    let mut fields = payload.into_fields(variant, $len)?;
                    $(
                        let $arg = fields.load::<$ty>()?;
                    )+
                    Ok(self( $( $arg ),+ ))
                }
            }
        )*
    };
}

impl_handler! {
    1 => (A a)
    2 => (A a, B b)
    3 => (A a, B b, C c)
    4 => (A a, B b, C c, D d)
    5 => (A a, B b, C c, D d, E e)
    6 => (A a, B b, C c, D d, E e, F2 f)
    7 => (A a, B b, C c, D d, E e, F2 f, G g)
    8 => (A a, B b, C c, D d, E e, F2 f, G g, H h)
}
