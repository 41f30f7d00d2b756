use quote::ToTokens;

/// Errors found while reading a `#[derive(Enum)]` input.
///
/// Reading continues past the first problem, so one compile reports every
/// malformed attribute and clashing variant. Each error keeps the span of the
/// tokens it is about.
#[derive(Debug, Default)]
pub(crate) struct Diagnostics {
    error: Option<syn::Error>,
}

impl Diagnostics {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(&mut self, err: syn::Error) {
        if let Some(existing) = &mut self.error {
            existing.combine(err);
        } else {
            self.error = Some(err);
        }
    }

    /// Records `message` at the span of `tokens`.
    pub(crate) fn error_at(&mut self, tokens: impl ToTokens, message: &str) {
        self.push(syn::Error::new_spanned(tokens, message));
    }

    /// Records the error of `result`, if any, and passes its value through.
    pub(crate) fn check<T>(&mut self, result: syn::Result<T>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(err) => {
                self.push(err);
                None
            }
        }
    }

    /// Two variants resolve to the same runtime name.
    pub(crate) fn duplicate_variant(&mut self, ident: &syn::Ident, runtime_name: &str) {
        self.error_at(ident, &format!("duplicate variant name `{runtime_name}`"));
    }

    /// An enum-level option appeared on a variant.
    pub(crate) fn enum_only(&mut self, tokens: impl ToTokens, option: &str) {
        self.error_at(
            tokens,
            &format!("`{option}` is only supported on the enum"),
        );
    }

    /// `value` if nothing was recorded, otherwise every recorded error.
    pub(crate) fn finish<T>(self, value: T) -> syn::Result<T> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(value),
        }
    }
}
