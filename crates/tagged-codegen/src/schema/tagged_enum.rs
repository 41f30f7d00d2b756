use super::{Diagnostics, Name, TaggedAttr};

#[derive(Debug)]
pub(crate) struct TaggedEnum {
    /// Enum name
    pub(crate) name: Name,

    /// Rust identifier of the enum
    pub(crate) ident: syn::Ident,

    /// Enum visibility, applied to generated inherent methods
    pub(crate) vis: syn::Visibility,

    /// Declared variants, in declaration order
    pub(crate) variants: Vec<VariantDef>,

    /// When set, no `Display` implementation is generated
    pub(crate) skip_display: bool,
}

#[derive(Debug)]
pub(crate) struct VariantDef {
    /// Rust identifier for this variant (e.g., `Failed`)
    pub(crate) ident: syn::Ident,

    /// Runtime and method names
    pub(crate) name: Name,

    /// Position of the variant in the enum
    pub(crate) discriminant: usize,

    /// Payload fields, in declaration order
    pub(crate) fields: Vec<VariantField>,

    pub(crate) shape: VariantShape,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum VariantShape {
    Unit,
    Tuple,
    Struct,
}

#[derive(Debug)]
pub(crate) struct VariantField {
    /// Field identifier as written for struct-like variants
    pub(crate) member: Option<syn::Ident>,

    /// Local binding used in generated patterns
    pub(crate) binding: syn::Ident,

    /// The Rust type of the field
    pub(crate) ty: syn::Type,
}

impl TaggedEnum {
    pub(crate) fn from_ast(ast: &syn::ItemEnum) -> syn::Result<Self> {
        if !ast.generics.params.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.generics,
                "enum generics are not supported",
            ));
        }

        if ast.variants.is_empty() {
            return Err(syn::Error::new_spanned(
                &ast.ident,
                "tagged enums must declare at least one variant",
            ));
        }

        let mut diagnostics = Diagnostics::new();

        let attr = diagnostics
            .check(TaggedAttr::from_attrs(&ast.attrs))
            .unwrap_or_default();

        let mut variants: Vec<VariantDef> = vec![];

        for (discriminant, variant) in ast.variants.iter().enumerate() {
            let Some(variant_attr) = diagnostics.check(TaggedAttr::from_attrs(&variant.attrs))
            else {
                continue;
            };

            if let Some(skip_display) = &variant_attr.skip_display {
                diagnostics.enum_only(skip_display, "skip_display");
            }

            let name = Name::from_ident(&variant.ident, variant_attr.rename.as_ref());

            if variants.iter().any(|prev| prev.name.runtime == name.runtime) {
                diagnostics.duplicate_variant(&variant.ident, &name.runtime);
                continue;
            }

            let (shape, fields) = match &variant.fields {
                syn::Fields::Unit => (VariantShape::Unit, vec![]),
                syn::Fields::Named(named) => {
                    let fields = named
                        .named
                        .iter()
                        .enumerate()
                        .map(|(i, f)| VariantField {
                            member: f.ident.clone(),
                            binding: syn::Ident::new(&format!("field{i}"), variant.ident.span()),
                            ty: f.ty.clone(),
                        })
                        .collect();
                    (VariantShape::Struct, fields)
                }
                syn::Fields::Unnamed(unnamed) => {
                    let fields = unnamed
                        .unnamed
                        .iter()
                        .enumerate()
                        .map(|(i, f)| VariantField {
                            member: None,
                            binding: syn::Ident::new(&format!("field{i}"), variant.ident.span()),
                            ty: f.ty.clone(),
                        })
                        .collect();
                    (VariantShape::Tuple, fields)
                }
            };

            variants.push(VariantDef {
                ident: variant.ident.clone(),
                name,
                discriminant,
                fields,
                shape,
            });
        }

        diagnostics.finish(Self {
            name: Name::from_ident(&ast.ident, attr.rename.as_ref()),
            ident: ast.ident.clone(),
            vis: ast.vis.clone(),
            variants,
            skip_display: attr.skip_display.is_some(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn parse(item: syn::ItemEnum) -> syn::Result<TaggedEnum> {
        TaggedEnum::from_ast(&item)
    }

    #[test]
    fn collects_variants_in_order() {
        let tagged = parse(syn::parse_quote! {
            enum Status {
                Active,
                Failed(i64),
                Moved { code: i64, location: String },
            }
        })
        .unwrap();

        let names: Vec<_> = tagged
            .variants
            .iter()
            .map(|v| v.name.runtime.as_str())
            .collect();
        assert_eq!(names, ["Active", "Failed", "Moved"]);

        let moved = &tagged.variants[2];
        assert_eq!(moved.discriminant, 2);
        assert_eq!(moved.shape, VariantShape::Struct);
        assert_eq!(moved.fields.len(), 2);
        assert_eq!(moved.fields[1].member.as_ref().unwrap().to_string(), "location");
        assert_eq!(tagged.variants[1].shape, VariantShape::Tuple);
        assert!(!tagged.skip_display);
    }

    #[test]
    fn applies_renames() {
        let tagged = parse(syn::parse_quote! {
            #[tagged(rename = "HttpStatus", skip_display)]
            enum Status {
                #[tagged(rename = "ok")]
                Active,
            }
        })
        .unwrap();

        assert_eq!(tagged.name.runtime, "HttpStatus");
        assert_eq!(tagged.variants[0].name.runtime, "ok");
        assert_eq!(tagged.variants[0].name.snake.to_string(), "active");
        assert!(tagged.skip_display);
    }

    #[test]
    fn rejects_generics() {
        let err = parse(syn::parse_quote! {
            enum Wrapper<T> { Some(T) }
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "enum generics are not supported");
    }

    #[test]
    fn rejects_empty_enums() {
        let err = parse(syn::parse_quote! { enum Never {} }).unwrap_err();
        assert_eq!(
            err.to_string(),
            "tagged enums must declare at least one variant"
        );
    }

    #[test]
    fn rejects_duplicate_runtime_names() {
        let err = parse(syn::parse_quote! {
            enum Status {
                Active,
                #[tagged(rename = "Active")]
                Enabled,
            }
        })
        .unwrap_err();
        assert_eq!(err.to_string(), "duplicate variant name `Active`");
    }

    #[test]
    fn rejects_skip_display_on_variants() {
        let err = parse(syn::parse_quote! {
            enum Status {
                #[tagged(skip_display)]
                Active,
            }
        })
        .unwrap_err();
        assert_eq!(
            err.to_string(),
            "`skip_display` is only supported on the enum"
        );
    }
}
