use super::Diagnostics;

/// Arguments of `#[tagged(...)]` attributes.
#[derive(Debug, Default)]
pub(crate) struct TaggedAttr {
    /// Runtime name replacing the Rust identifier
    pub(crate) rename: Option<syn::LitStr>,

    /// Do not generate a `Display` implementation (enum level only)
    pub(crate) skip_display: Option<kw::skip_display>,
}

impl TaggedAttr {
    /// Merges every `#[tagged(...)]` attribute in `attrs`.
    pub(crate) fn from_attrs(attrs: &[syn::Attribute]) -> syn::Result<TaggedAttr> {
        let mut result = TaggedAttr::default();
        let mut diagnostics = Diagnostics::new();

        for attr in attrs {
            if !attr.path().is_ident("tagged") {
                continue;
            }

            if let Some(parsed) = diagnostics.check(attr.parse_args::<TaggedAttr>()) {
                let merged = result.merge(parsed);
                diagnostics.check(merged);
            }
        }

        diagnostics.finish(result)
    }

    fn merge(&mut self, other: TaggedAttr) -> syn::Result<()> {
        if let Some(rename) = other.rename {
            if self.rename.is_some() {
                return Err(syn::Error::new_spanned(rename, "duplicate `rename`"));
            }
            self.rename = Some(rename);
        }

        if let Some(skip_display) = other.skip_display {
            if self.skip_display.is_some() {
                return Err(syn::Error::new_spanned(
                    skip_display,
                    "duplicate `skip_display`",
                ));
            }
            self.skip_display = Some(skip_display);
        }

        Ok(())
    }
}

impl syn::parse::Parse for TaggedAttr {
    fn parse(input: syn::parse::ParseStream) -> syn::Result<Self> {
        let mut result = Self::default();

        // Allowed syntax:
        //
        // #[tagged(rename = "name")]
        // #[tagged(skip_display)]
        // #[tagged(rename = "name", skip_display)]
        loop {
            let lookahead = input.lookahead1();

            if lookahead.peek(kw::rename) {
                if result.rename.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate `rename`"));
                }
                let _kw: kw::rename = input.parse()?;
                let _eq_token: syn::Token![=] = input.parse()?;
                let lit: syn::LitStr = input.parse()?;
                if lit.value().is_empty() {
                    return Err(syn::Error::new_spanned(lit, "`rename` cannot be empty"));
                }
                result.rename = Some(lit);
            } else if lookahead.peek(kw::skip_display) {
                if result.skip_display.is_some() {
                    return Err(syn::Error::new(input.span(), "duplicate `skip_display`"));
                }
                result.skip_display = Some(input.parse()?);
            } else {
                return Err(lookahead.error());
            }

            if input.is_empty() {
                break;
            }
            let _comma_token: syn::Token![,] = input.parse()?;
            if input.is_empty() {
                break;
            }
        }

        Ok(result)
    }
}

pub(crate) mod kw {
    syn::custom_keyword!(rename);
    syn::custom_keyword!(skip_display);
}
