use heck::ToSnakeCase;
use syn::ext::IdentExt;

#[derive(Debug)]
pub(crate) struct Name {
    /// Name exposed at runtime (variant name, enum name)
    pub(crate) runtime: String,

    /// snake_case identifier used for generated methods
    pub(crate) snake: syn::Ident,
}

impl Name {
    pub(crate) fn from_ident(ident: &syn::Ident, rename: Option<&syn::LitStr>) -> Self {
        let ident_str = ident.unraw().to_string();
        let runtime = match rename {
            Some(lit) => lit.value(),
            None => ident_str.clone(),
        };

        // Generated method names always follow the Rust identifier, so a
        // rename never changes the API.
        let snake = ident_str.to_snake_case();
        let snake = syn::Ident::new(&snake, ident.span());

        Self { runtime, snake }
    }
}
