use crate::{
    bail, generate_type_handle, DynEnum, Error, IntoPayload, Payload, Result, Type, TypeHandle,
    Variant,
};

use std::{borrow::Cow, sync::Arc};

/// The declaration of a tagged enum: its name, type handle, and variants.
///
/// Built at runtime with [`EnumDef::builder`], or generated by
/// `#[derive(Enum)]` for native Rust enums. A definition is never mutated
/// after it is built.
#[derive(Debug, PartialEq)]
pub struct EnumDef {
    /// Enum name
    pub name: Cow<'static, str>,

    /// Handle identifying the enum type
    pub id: TypeHandle,

    /// Declared variants, in declaration order
    pub variants: Vec<VariantDef>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct VariantDef {
    /// Variant name
    pub name: Cow<'static, str>,

    /// Position of the variant in its enum
    pub discriminant: usize,

    /// Payload shape, one type per position
    pub fields: Vec<Type>,
}

impl EnumDef {
    pub fn builder(name: impl Into<Cow<'static, str>>) -> EnumDefBuilder {
        EnumDefBuilder {
            name: name.into(),
            id: None,
            variants: vec![],
        }
    }

    /// Assembles a definition from parts that are already known to be valid.
    ///
    /// Used by generated code, where the compiler has already rejected
    /// duplicate variants.
    #[doc(hidden)]
    pub fn from_parts(
        name: impl Into<Cow<'static, str>>,
        id: TypeHandle,
        variants: Vec<VariantDef>,
    ) -> EnumDef {
        EnumDef {
            name: name.into(),
            id,
            variants,
        }
    }

    pub fn variant(&self, name: &str) -> Option<&VariantDef> {
        self.variants.iter().find(|variant| variant.name == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.variant(name).is_some()
    }

    /// Names of the declared variants, in declaration order.
    pub fn variant_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.variants.iter().map(|variant| &*variant.name)
    }

    /// Looks up the declaration of `name`, failing for undeclared names.
    pub fn resolve(&self, name: &str) -> Result<&VariantDef> {
        self.variant(name)
            .ok_or_else(|| Error::unknown_variant(&*self.name, name))
    }

    /// Checks `variant` against its declaration: the name must be declared
    /// and the payload must match the declared arity and field types.
    pub fn validate(&self, variant: &Variant) -> Result<()> {
        self.resolve(variant.name())?.check(variant.payload())
    }

    /// Constructs a value of this enum.
    pub fn construct(self: &Arc<Self>, name: &str, payload: impl IntoPayload) -> Result<DynEnum> {
        let index = self.resolve(name)?.discriminant;
        self.construct_at(index, payload.into_payload())
    }

    /// Returns the factory for the variant called `name`.
    pub fn factory(self: &Arc<Self>, name: &str) -> Result<VariantFactory> {
        let index = self.resolve(name)?.discriminant;
        Ok(VariantFactory {
            def: self.clone(),
            index,
        })
    }

    /// Returns one factory per declared variant, in declaration order.
    pub fn factories(self: &Arc<Self>) -> Vec<VariantFactory> {
        (0..self.variants.len())
            .map(|index| VariantFactory {
                def: self.clone(),
                index,
            })
            .collect()
    }

    fn construct_at(self: &Arc<Self>, index: usize, payload: Payload) -> Result<DynEnum> {
        let variant_def = &self.variants[index];
        variant_def.check(&payload)?;

        let variant = Variant::new(variant_def.name.clone(), payload);
        Ok(DynEnum::from_parts(self.clone(), variant))
    }
}

impl VariantDef {
    pub fn new(
        name: impl Into<Cow<'static, str>>,
        discriminant: usize,
        fields: Vec<Type>,
    ) -> VariantDef {
        VariantDef {
            name: name.into(),
            discriminant,
            fields,
        }
    }

    pub fn is_unit(&self) -> bool {
        self.fields.is_empty()
    }

    /// Checks that `payload` has this variant's arity and field types.
    pub fn check(&self, payload: &Payload) -> Result<()> {
        if payload.len() != self.fields.len() {
            return Err(Error::payload_arity(
                &*self.name,
                self.fields.len(),
                payload.len(),
            ));
        }

        for (index, (value, ty)) in payload.iter().zip(&self.fields).enumerate() {
            if !value.is_a(ty) {
                let err = Error::type_conversion(value.clone(), format!("{ty:?}"));
                return Err(err.context(crate::err!("field {index} of `{}`", self.name)));
            }
        }

        Ok(())
    }
}

/// Builds an [`EnumDef`] one variant at a time.
#[derive(Debug)]
pub struct EnumDefBuilder {
    name: Cow<'static, str>,
    id: Option<TypeHandle>,
    variants: Vec<VariantDef>,
}

impl EnumDefBuilder {
    /// Declares a variant without a payload.
    pub fn unit(self, name: impl Into<Cow<'static, str>>) -> Self {
        self.variant(name, Vec::new())
    }

    /// Declares a variant whose payload has the given field types.
    pub fn variant(
        mut self,
        name: impl Into<Cow<'static, str>>,
        fields: impl IntoIterator<Item = Type>,
    ) -> Self {
        let discriminant = self.variants.len();
        self.variants.push(VariantDef {
            name: name.into(),
            discriminant,
            fields: fields.into_iter().collect(),
        });
        self
    }

    /// Uses `id` instead of allocating a fresh handle.
    pub fn id(mut self, id: TypeHandle) -> Self {
        self.id = Some(id);
        self
    }

    pub fn build(self) -> Result<Arc<EnumDef>> {
        if self.variants.is_empty() {
            bail!("enum `{}` must declare at least one variant", self.name);
        }

        for (index, variant) in self.variants.iter().enumerate() {
            if self.variants[..index]
                .iter()
                .any(|prev| prev.name == variant.name)
            {
                bail!(
                    "duplicate variant `{}` in enum `{}`",
                    variant.name,
                    self.name
                );
            }
        }

        let id = self.id.unwrap_or_else(generate_type_handle);
        Ok(Arc::new(EnumDef::from_parts(self.name, id, self.variants)))
    }
}

/// Constructs values of one declared variant.
#[derive(Debug, Clone)]
pub struct VariantFactory {
    def: Arc<EnumDef>,
    index: usize,
}

impl VariantFactory {
    pub fn name(&self) -> &str {
        &self.def.variants[self.index].name
    }

    pub fn def(&self) -> &Arc<EnumDef> {
        &self.def
    }

    pub fn call(&self, payload: impl IntoPayload) -> Result<DynEnum> {
        self.def.construct_at(self.index, payload.into_payload())
    }
}
