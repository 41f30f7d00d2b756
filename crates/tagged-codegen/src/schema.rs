mod attr;
pub(crate) use attr::TaggedAttr;

mod diagnostics;
pub(crate) use diagnostics::Diagnostics;

mod name;
pub(crate) use name::Name;

mod tagged_enum;
pub(crate) use tagged_enum::{TaggedEnum, VariantDef, VariantShape};
