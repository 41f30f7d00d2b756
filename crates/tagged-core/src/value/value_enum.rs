use super::Value;
use crate::{TypeHandle, Variant};

use std::fmt;

/// A tagged enum value nested inside a payload.
///
/// Carries the type handle of the declaring enum so that typed loads can
/// reject values of an unrelated enum that happens to share variant names.
#[derive(Debug, Clone, PartialEq)]
pub struct ValueEnum {
    pub ty: TypeHandle,
    pub variant: Variant,
}

impl ValueEnum {
    pub fn new(ty: TypeHandle, variant: Variant) -> ValueEnum {
        ValueEnum { ty, variant }
    }
}

impl fmt::Display for ValueEnum {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.variant, f)
    }
}

impl From<ValueEnum> for Value {
    fn from(value: ValueEnum) -> Self {
        Self::Enum(value)
    }
}
