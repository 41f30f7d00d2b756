use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_display_impl(&self) -> TokenStream {
        if self.tagged_enum.skip_display {
            return quote!();
        }

        let tagged = &self.tagged;
        let enum_ident = &self.tagged_enum.ident;

        quote! {
            impl ::core::fmt::Display for #enum_ident {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    ::core::fmt::Display::fmt(&<Self as #tagged::Enum>::to_variant(self), f)
                }
            }
        }
    }
}
