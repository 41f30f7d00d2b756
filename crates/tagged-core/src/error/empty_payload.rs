use super::{Error, ErrorKind};

/// Error when a payload value is requested from a variant that carries none.
#[derive(Debug)]
pub(super) struct EmptyPayloadError {
    variant: Box<str>,
}

impl std::error::Error for EmptyPayloadError {}

impl core::fmt::Display for EmptyPayloadError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "cannot unwrap `{}`: payload is empty", self.variant)
    }
}

impl Error {
    /// Creates an empty payload error for the named variant.
    ///
    /// Raised by the unwrap operations whenever the payload is empty, whatever
    /// the variant is.
    pub fn empty_payload(variant: impl Into<Box<str>>) -> Error {
        Error::from(ErrorKind::EmptyPayload(EmptyPayloadError {
            variant: variant.into(),
        }))
    }

    /// Returns `true` if this error is an empty payload error.
    pub fn is_empty_payload(&self) -> bool {
        matches!(self.root_kind(), ErrorKind::EmptyPayload(_))
    }
}
