use super::Expand;

use proc_macro2::TokenStream;
use quote::{format_ident, quote};

impl Expand<'_> {
    /// Generates one `is_<variant>()` method per variant.
    pub(super) fn expand_predicates(&self) -> TokenStream {
        let enum_ident = &self.tagged_enum.ident;
        let vis = &self.tagged_enum.vis;

        let methods = self.tagged_enum.variants.iter().map(|variant| {
            let ident = &variant.ident;
            let method = format_ident!("is_{}", variant.name.snake);
            let doc = format!(
                "Returns `true` if this is the `{}` variant.",
                variant.name.runtime
            );

            quote! {
                #[doc = #doc]
                #vis fn #method(&self) -> bool {
                    matches!(self, Self::#ident { .. })
                }
            }
        });

        quote! {
            impl #enum_ident {
                #( #methods )*
            }
        }
    }
}
