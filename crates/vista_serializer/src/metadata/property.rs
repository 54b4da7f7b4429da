use alloc::string::String;
use alloc::sync::Arc;
use alloc::vec::Vec;
use core::fmt;

use vista_reflect::object::Dynamic;
use vista_reflect::value::Value;
use vista_reflect::{BoxedError, Object};

use crate::Context;
use crate::metadata::Coercion;

// -----------------------------------------------------------------------------
// Denormalizer

type DenormalizeFn =
    dyn Fn(&Value, &dyn Object, Option<&Context>) -> Result<Dynamic, BoxedError> + Send + Sync;

/// A user function that rebuilds a property from its raw value.
///
/// It receives the raw value, the object being populated and the context
/// of the call.
#[derive(Clone)]
pub struct Denormalizer(Arc<DenormalizeFn>);

impl Denormalizer {
    pub fn new<F>(func: F) -> Self
    where
        F: Fn(&Value, &dyn Object, Option<&Context>) -> Result<Dynamic, BoxedError>
            + Send
            + Sync
            + 'static,
    {
        Self(Arc::new(func))
    }

    #[inline]
    pub fn call(
        &self,
        raw: &Value,
        target: &dyn Object,
        context: Option<&Context>,
    ) -> Result<Dynamic, BoxedError> {
        (self.0)(raw, target, context)
    }
}

impl fmt::Debug for Denormalizer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Denormalizer(..)")
    }
}

// -----------------------------------------------------------------------------
// PropertyConfiguration

/// The configuration of one property of a class.
///
/// # Examples
///
/// ```
/// use vista_serializer::metadata::{Coercion, PropertyConfiguration};
///
/// let config = PropertyConfiguration::new()
///     .with_type("int")
///     .in_view("public");
///
/// assert_eq!(config.coercion(), Some(&Coercion::Int));
/// assert_eq!(config.views(), ["public"]);
/// assert!(config.getter().is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PropertyConfiguration {
    getter: Option<String>,
    class: Option<String>,
    denormalizer: Option<Denormalizer>,
    coercion: Option<Coercion>,
    views: Vec<String>,
}

impl PropertyConfiguration {
    #[inline]
    pub const fn new() -> Self {
        Self {
            getter: None,
            class: None,
            denormalizer: None,
            coercion: None,
            views: Vec::new(),
        }
    }

    /// Reads the property through a public zero-argument method instead of the field.
    pub fn with_getter(mut self, method: impl Into<String>) -> Self {
        self.getter = Some(method.into());
        self
    }

    /// Denormalizes record-shaped values into a new instance of `class`,
    /// named by type path or short name.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.class = Some(class.into());
        self
    }

    pub fn with_denormalizer<F>(mut self, func: F) -> Self
    where
        F: Fn(&Value, &dyn Object, Option<&Context>) -> Result<Dynamic, BoxedError>
            + Send
            + Sync
            + 'static,
    {
        self.denormalizer = Some(Denormalizer::new(func));
        self
    }

    /// Sets an already constructed (possibly shared) denormalizer.
    pub fn with_shared_denormalizer(mut self, denormalizer: Denormalizer) -> Self {
        self.denormalizer = Some(denormalizer);
        self
    }

    pub fn with_coercion(mut self, coercion: Coercion) -> Self {
        self.coercion = Some(coercion);
        self
    }

    /// Sets the coercion from a configuration tag such as `"int"`.
    pub fn with_type(self, tag: &str) -> Self {
        let coercion = Coercion::from_tag(tag);
        if coercion.is_unknown() {
            log::warn!("unknown coercion tag `{tag}`, values will be written unchanged");
        }
        self.with_coercion(coercion)
    }

    /// Adds the property to the named view.
    pub fn in_view(mut self, view: impl Into<String>) -> Self {
        let view = view.into();
        if !self.views.contains(&view) {
            self.views.push(view);
        }
        self
    }

    #[inline]
    pub fn getter(&self) -> Option<&str> {
        self.getter.as_deref()
    }

    #[inline]
    pub fn class(&self) -> Option<&str> {
        self.class.as_deref()
    }

    #[inline]
    pub fn denormalizer(&self) -> Option<&Denormalizer> {
        self.denormalizer.as_ref()
    }

    #[inline]
    pub fn coercion(&self) -> Option<&Coercion> {
        self.coercion.as_ref()
    }

    #[inline]
    pub fn views(&self) -> &[String] {
        &self.views
    }
}
