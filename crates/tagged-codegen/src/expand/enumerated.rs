use super::{util, Expand};
use crate::schema::{VariantDef, VariantShape};

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    pub(super) fn expand_enum_impl(&self) -> TokenStream {
        let tagged = &self.tagged;
        let enum_ident = &self.tagged_enum.ident;
        let enum_name = &self.tagged_enum.name.runtime;
        let variant_names = self
            .tagged_enum
            .variants
            .iter()
            .map(|variant| &variant.name.runtime);
        let variant_defs = self.expand_variant_defs();
        let variant_name_arms = self.expand_variant_name_arms();
        let to_variant_arms = self.expand_to_variant_arms(false);
        let into_variant_arms = self.expand_to_variant_arms(true);
        let from_variant_arms = self.expand_from_variant_arms();

        quote! {
            impl #tagged::Enum for #enum_ident {
                const VARIANTS: &'static [&'static str] = &[ #( #variant_names ),* ];

                fn id() -> #tagged::TypeHandle {
                    static ID: std::sync::OnceLock<#tagged::TypeHandle> = std::sync::OnceLock::new();
                    *ID.get_or_init(|| #tagged::generate_type_handle())
                }

                fn def() -> &'static #tagged::EnumDef {
                    static DEF: std::sync::OnceLock<#tagged::EnumDef> = std::sync::OnceLock::new();
                    DEF.get_or_init(|| {
                        #tagged::EnumDef::from_parts(
                            #enum_name,
                            <Self as #tagged::Enum>::id(),
                            vec![ #( #variant_defs ),* ],
                        )
                    })
                }

                fn variant_name(&self) -> &'static str {
                    match self {
                        #( #variant_name_arms )*
                    }
                }

                fn to_variant(&self) -> #tagged::Variant {
                    match self {
                        #( #to_variant_arms )*
                    }
                }

                fn into_variant(self) -> #tagged::Variant {
                    match self {
                        #( #into_variant_arms )*
                    }
                }

                fn from_variant(variant: #tagged::Variant) -> #tagged::Result<Self> {
                    let (name, payload) = variant.into_parts();

                    match &*name {
                        #( #from_variant_arms )*
                        _ => Err(#tagged::Error::unknown_variant(#enum_name, &*name)),
                    }
                }
            }
        }
    }

    /// Generates the `VariantDef` entries of `Enum::def`.
    fn expand_variant_defs(&self) -> Vec<TokenStream> {
        let tagged = &self.tagged;

        self.tagged_enum
            .variants
            .iter()
            .map(|variant| {
                let name = &variant.name.runtime;
                let discriminant = util::int(variant.discriminant);
                let field_tys = variant.fields.iter().map(|field| {
                    let ty = &field.ty;
                    quote!(<#ty as #tagged::Primitive>::ty())
                });

                quote! {
                    #tagged::VariantDef::new(#name, #discriminant, vec![ #( #field_tys ),* ])
                }
            })
            .collect()
    }

    fn expand_variant_name_arms(&self) -> Vec<TokenStream> {
        self.tagged_enum
            .variants
            .iter()
            .map(|variant| {
                let ident = &variant.ident;
                let name = &variant.name.runtime;
                quote!(Self::#ident { .. } => #name,)
            })
            .collect()
    }

    /// Generates the arms of `to_variant` (by reference) or `into_variant`
    /// (by value). Match ergonomics bind fields as `&T` in the former case.
    fn expand_to_variant_arms(&self, by_value: bool) -> Vec<TokenStream> {
        let tagged = &self.tagged;

        self.tagged_enum
            .variants
            .iter()
            .map(|variant| {
                let pattern = variant_pattern(variant);
                let name = &variant.name.runtime;

                if variant.fields.is_empty() {
                    return quote!(#pattern => #tagged::Variant::unit(#name),);
                }

                let values = variant.fields.iter().map(|field| {
                    let binding = &field.binding;
                    if by_value {
                        quote!(#tagged::Primitive::into_value(#binding))
                    } else {
                        quote!(#tagged::Primitive::to_value(#binding))
                    }
                });

                quote! {
                    #pattern => #tagged::Variant::new(
                        #name,
                        #tagged::Payload::from_vec(vec![ #( #values ),* ]),
                    ),
                }
            })
            .collect()
    }

    /// Generates the arms of `from_variant`. Payload values are loaded in
    /// declaration order, so a struct-like variant reads its fields in the
    /// order they are written.
    fn expand_from_variant_arms(&self) -> Vec<TokenStream> {
        self.tagged_enum
            .variants
            .iter()
            .map(|variant| {
                let ident = &variant.ident;
                let name = &variant.name.runtime;
                let arity = util::int(variant.fields.len());

                let loads = variant.fields.iter().map(|field| {
                    let ty = &field.ty;
                    let load = quote!(fields.load::<#ty>()?);
                    match &field.member {
                        Some(member) => quote!(#member: #load),
                        None => load,
                    }
                });

                let ctor = match variant.shape {
                    VariantShape::Unit => quote!(Self::#ident),
                    VariantShape::Tuple => quote!(Self::#ident( #( #loads ),* )),
                    VariantShape::Struct => quote!(Self::#ident { #( #loads ),* }),
                };

                if variant.fields.is_empty() {
                    quote! {
                        #name => {
                            payload.into_fields(#name, 0)?;
                            Ok(#ctor)
                        }
                    }
                } else {
                    quote! {
                        #name => {
                            let mut fields = payload.into_fields(#name, #arity)?;
                            Ok(#ctor)
                        }
                    }
                }
            })
            .collect()
    }
}

/// Pattern binding every field of `variant` to its `fieldN` binding.
pub(super) fn variant_pattern(variant: &VariantDef) -> TokenStream {
    let ident = &variant.ident;

    match variant.shape {
        VariantShape::Unit => quote!(Self::#ident),
        VariantShape::Tuple => {
            let bindings = variant.fields.iter().map(|field| &field.binding);
            quote!(Self::#ident( #( #bindings ),* ))
        }
        VariantShape::Struct => {
            let bindings = variant.fields.iter().map(|field| {
                let binding = &field.binding;
                let member = &field.member;
                quote!(#member: #binding)
            });
            quote!(Self::#ident { #( #bindings ),* })
        }
    }
}
