use super::{Error, ErrorKind};

/// Error when a payload has a different number of values than its consumer expects.
#[derive(Debug)]
pub(super) struct PayloadArityError {
    variant: Box<str>,
    expected: usize,
    actual: usize,
}

impl std::error::Error for PayloadArityError {}

impl core::fmt::Display for PayloadArityError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "variant `{}` expects {} payload value(s), found {}",
            self.variant, self.expected, self.actual
        )
    }
}

impl Error {
    /// Creates a payload arity error.
    pub fn payload_arity(variant: impl Into<Box<str>>, expected: usize, actual: usize) -> Error {
        Error::from(ErrorKind::PayloadArity(PayloadArityError {
            variant: variant.into(),
            expected,
            actual,
        }))
    }

    /// Returns `true` if this error is a payload arity error.
    pub fn is_payload_arity(&self) -> bool {
        matches!(self.root_kind(), ErrorKind::PayloadArity(_))
    }
}
