extern crate proc_macro;

use proc_macro::TokenStream;

/// Derives `tagged::Enum` for a Rust enum.
///
/// Supported attributes:
///
/// * `#[tagged(rename = "Name")]` on the enum or a variant changes the name
///   exposed at runtime.
/// * `#[tagged(skip_display)]` on the enum suppresses the generated
///   `Display` implementation.
///
/// Every field type must implement `tagged::Primitive`. That covers the
/// integer and float scalars (including `usize`, `isize` and `f32`), `bool`,
/// `char`, `String`, `Value`, `Object`, `Arc<T>` for shared objects, other
/// derived enums, and `Option`, `Box` and `Vec` of those. Any other struct
/// goes in an `Arc` or an `Object`. `Option<Option<T>>` collapses: `Some(None)`
/// loads back as `None`.
#[proc_macro_derive(Enum, attributes(tagged))]
pub fn derive_enum(input: TokenStream) -> TokenStream {
    match tagged_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
