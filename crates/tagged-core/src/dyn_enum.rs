use crate::{
    EnumDef, FromPayload, Patterns, Primitive, Result, TypeHandle, Value, ValueEnum, Variant,
};

use std::{fmt, sync::Arc};

/// A value of an enum declared at runtime through [`EnumDef::builder`].
///
/// Values are only produced by [`EnumDef::construct`] and
/// [`VariantFactory::call`](crate::VariantFactory::call), so the active
/// variant is always one of the definition's declared variants.
#[derive(Debug, Clone)]
pub struct DynEnum {
    def: Arc<EnumDef>,
    variant: Variant,
}

impl DynEnum {
    pub(crate) fn from_parts(def: Arc<EnumDef>, variant: Variant) -> DynEnum {
        DynEnum { def, variant }
    }

    pub fn def(&self) -> &Arc<EnumDef> {
        &self.def
    }

    pub fn variant(&self) -> &Variant {
        &self.variant
    }

    pub fn into_variant(self) -> Variant {
        self.variant
    }

    pub fn type_handle(&self) -> TypeHandle {
        self.def.id
    }

    pub fn variant_name(&self) -> &str {
        self.variant.name()
    }

    /// Position of the active variant in the declaration.
    pub fn discriminant(&self) -> usize {
        self.def
            .variant(self.variant.name())
            .map(|variant| variant.discriminant)
            .unwrap_or_default()
    }

    pub fn is(&self, name: &str) -> bool {
        self.variant.is(name)
    }

    pub fn unwrap<T: Primitive>(&self) -> Result<T> {
        self.variant.unwrap()
    }

    pub fn unwrap_tuple<T: FromPayload>(&self) -> Result<T> {
        self.variant.unwrap_tuple()
    }

    pub fn match_with<U>(self, patterns: Patterns<'_, U>) -> Result<U> {
        self.variant.match_with(patterns)
    }

    pub fn match_with_default<U>(
        self,
        patterns: Patterns<'_, U>,
        defaults: Patterns<'_, U>,
    ) -> Result<U> {
        self.variant.match_with_default(patterns, defaults)
    }

    /// Converts this value into a payload value tagged with its type handle.
    pub fn to_value(&self) -> Value {
        Value::Enum(ValueEnum::new(self.def.id, self.variant.clone()))
    }
}

impl PartialEq for DynEnum {
    fn eq(&self, other: &Self) -> bool {
        self.def.id == other.def.id && self.variant == other.variant
    }
}

impl fmt::Display for DynEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.variant, f)
    }
}

impl From<DynEnum> for Value {
    fn from(value: DynEnum) -> Self {
        Value::Enum(ValueEnum::new(value.def.id, value.variant))
    }
}
