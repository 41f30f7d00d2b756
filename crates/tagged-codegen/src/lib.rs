mod expand;
mod schema;

use proc_macro2::TokenStream;

/// Expands `#[derive(Enum)]` for the given enum item.
pub fn generate(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemEnum = syn::parse2(input)?;
    let tagged_enum = schema::TaggedEnum::from_ast(&item)?;

    Ok(expand::tagged_enum(&tagged_enum))
}
