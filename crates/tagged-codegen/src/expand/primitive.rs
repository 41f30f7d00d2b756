use super::Expand;

use proc_macro2::TokenStream;
use quote::quote;

impl Expand<'_> {
    /// Lets the enum appear in payload positions of other enums.
    pub(super) fn expand_primitive_impl(&self) -> TokenStream {
        let tagged = &self.tagged;
        let enum_ident = &self.tagged_enum.ident;
        let enum_name = &self.tagged_enum.name.runtime;

        quote! {
            impl #tagged::Primitive for #enum_ident {
                fn ty() -> #tagged::Type {
                    #tagged::Type::Enum(<Self as #tagged::Enum>::id())
                }

                fn load(value: #tagged::Value) -> #tagged::Result<Self> {
                    let value = value.into_enum()?;

                    if value.ty != <Self as #tagged::Enum>::id() {
                        return Err(#tagged::Error::type_conversion(
                            #tagged::Value::Enum(value),
                            #enum_name,
                        ));
                    }

                    <Self as #tagged::Enum>::from_variant(value.variant)
                }

                fn to_value(&self) -> #tagged::Value {
                    #tagged::Value::Enum(#tagged::ValueEnum::new(
                        <Self as #tagged::Enum>::id(),
                        <Self as #tagged::Enum>::to_variant(self),
                    ))
                }

                fn into_value(self) -> #tagged::Value {
                    #tagged::Value::Enum(#tagged::ValueEnum::new(
                        <Self as #tagged::Enum>::id(),
                        <Self as #tagged::Enum>::into_variant(self),
                    ))
                }
            }

            impl From<#enum_ident> for #tagged::Value {
                fn from(value: #enum_ident) -> Self {
                    #tagged::Primitive::into_value(value)
                }
            }
        }
    }
}
