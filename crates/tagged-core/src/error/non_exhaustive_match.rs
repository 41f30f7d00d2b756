use super::{Error, ErrorKind};

/// Error when neither the patterns nor the defaults handle the active variant.
#[derive(Debug)]
pub(super) struct NonExhaustiveMatchError {
    variant: Box<str>,
}

impl std::error::Error for NonExhaustiveMatchError {}

impl core::fmt::Display for NonExhaustiveMatchError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "non-exhaustive match: no pattern for variant `{}`",
            self.variant
        )
    }
}

impl Error {
    /// Creates a non-exhaustive match error naming the unmatched variant.
    pub fn non_exhaustive_match(variant: impl Into<Box<str>>) -> Error {
        Error::from(ErrorKind::NonExhaustiveMatch(NonExhaustiveMatchError {
            variant: variant.into(),
        }))
    }

    /// Returns `true` if this error is a non-exhaustive match error.
    pub fn is_non_exhaustive_match(&self) -> bool {
        matches!(self.root_kind(), ErrorKind::NonExhaustiveMatch(_))
    }
}
