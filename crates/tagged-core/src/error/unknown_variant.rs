use super::{Error, ErrorKind};

/// Error when a variant is constructed by a name its enum never declared.
#[derive(Debug)]
pub(super) struct UnknownVariantError {
    ty: Box<str>,
    variant: Box<str>,
}

impl std::error::Error for UnknownVariantError {}

impl core::fmt::Display for UnknownVariantError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "unknown variant `{}` for enum `{}`",
            self.variant, self.ty
        )
    }
}

impl Error {
    /// Creates an unknown variant error.
    pub fn unknown_variant(ty: impl Into<Box<str>>, variant: impl Into<Box<str>>) -> Error {
        Error::from(ErrorKind::UnknownVariant(UnknownVariantError {
            ty: ty.into(),
            variant: variant.into(),
        }))
    }

    /// Returns `true` if this error is an unknown variant error.
    pub fn is_unknown_variant(&self) -> bool {
        matches!(self.root_kind(), ErrorKind::UnknownVariant(_))
    }
}
