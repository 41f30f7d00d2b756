mod display;
mod enumerated;
mod predicates;
mod primitive;
mod util;

use crate::schema::TaggedEnum;

use proc_macro2::TokenStream;
use quote::quote;

struct Expand<'a> {
    /// The enum being expanded
    tagged_enum: &'a TaggedEnum,

    /// Path prefix for tagged types
    tagged: TokenStream,
}

impl Expand<'_> {
    fn expand(&self) -> TokenStream {
        let enum_impl = self.expand_enum_impl();
        let primitive_impl = self.expand_primitive_impl();
        let display_impl = self.expand_display_impl();
        let predicates = self.expand_predicates();

        wrap_in_const(quote! {
            #enum_impl
            #primitive_impl
            #display_impl
            #predicates
        })
    }
}

pub(super) fn tagged_enum(tagged_enum: &TaggedEnum) -> TokenStream {
    Expand {
        tagged_enum,
        tagged: quote!(_tagged::codegen_support),
    }
    .expand()
}

fn wrap_in_const(code: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            use tagged as _tagged;
            #code
        };
    }
}
