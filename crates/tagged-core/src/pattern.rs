mod handler;
pub use handler::Handler;

use crate::{Error, Payload, Result, Variant};

use indexmap::IndexMap;

type BoxedHandler<'a, U> = Box<dyn FnOnce(&str, Payload) -> Result<U> + 'a>;

/// Handlers keyed by variant name, consumed by a single match.
///
/// ```
/// use tagged_core::{Patterns, Variant};
///
/// let status = Variant::new("Failed", [404i64]);
/// let message = status
///     .match_with(
///         Patterns::new()
///             .on("Active", || "ok".to_string())
///             .on("Failed", |code: i64| format!("err:{code}")),
///     )
///     .unwrap();
///
/// assert_eq!(message, "err:404");
/// ```
pub struct Patterns<'a, U> {
    arms: IndexMap<Box<str>, BoxedHandler<'a, U>>,
}

impl<'a, U> Patterns<'a, U> {
    pub fn new() -> Self {
        Patterns {
            arms: IndexMap::new(),
        }
    }

    /// Registers `handler` for the variant called `variant`, replacing any
    /// earlier handler for the same name.
    pub fn on<Args, H>(mut self, variant: impl Into<Box<str>>, handler: H) -> Self
    where
        H: Handler<Args, U> + 'a,
    {
        self.insert(variant, handler);
        self
    }

    pub fn insert<Args, H>(&mut self, variant: impl Into<Box<str>>, handler: H)
    where
        H: Handler<Args, U> + 'a,
    {
        self.arms.insert(
            variant.into(),
            Box::new(move |variant: &str, payload: Payload| handler.call(variant, payload)),
        );
    }

    pub fn contains(&self, variant: &str) -> bool {
        self.arms.contains_key(variant)
    }

    pub fn len(&self) -> usize {
        self.arms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arms.is_empty()
    }

    /// Variant names in registration order.
    pub fn variants(&self) -> impl Iterator<Item = &str> + '_ {
        self.arms.keys().map(|name| &**name)
    }

    fn take(&mut self, variant: &str) -> Option<BoxedHandler<'a, U>> {
        self.arms.swap_remove(variant)
    }
}

impl<U> Default for Patterns<'_, U> {
    fn default() -> Self {
        Patterns::new()
    }
}

impl<U> std::fmt::Debug for Patterns<'_, U> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.variants()).finish()
    }
}

/// Resolves the handler for `variant` and invokes it.
///
/// `patterns` is consulted first, then `defaults`. Exactly one handler runs.
pub(crate) fn dispatch<U>(
    variant: Variant,
    mut patterns: Patterns<'_, U>,
    defaults: Option<Patterns<'_, U>>,
) -> Result<U> {
    let (name, payload) = variant.into_parts();

    if let Some(handler) = patterns.take(&name) {
        return handler(&*name, payload);
    }

    if let Some(handler) = defaults.and_then(|mut defaults| defaults.take(&name)) {
        log::trace!("variant `{name}` matched by default patterns");
        return handler(&*name, payload);
    }

    Err(Error::non_exhaustive_match(name))
}
