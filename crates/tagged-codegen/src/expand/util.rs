use proc_macro2::TokenStream;

/// Unsuffixed integer literal.
pub(crate) fn int(v: usize) -> TokenStream {
    let lit = proc_macro2::Literal::usize_unsuffixed(v);
    quote::quote!(#lit)
}
