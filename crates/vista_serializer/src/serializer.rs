use alloc::boxed::Box;
use core::fmt;

use vista_reflect::registry::ClassRegistry;
use vista_reflect::value::{Record, Value};
use vista_reflect::{Class, InstantiateError, Object};

use crate::normalizer::{Normalizer, NormalizerRegistry, ObjectNormalizer};
use crate::{Context, Error, Scope};

// -----------------------------------------------------------------------------
// Serializer

/// Coordinates the [`ObjectNormalizer`] with the user normalizers and the
/// classes available for nested instantiation.
///
/// A serializer is read-only once built and can be shared between threads.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use vista_reflect::derive::Object;
/// use vista_serializer::metadata::{ClassMetadata, MetadataCollection, PropertyConfiguration};
/// use vista_serializer::{Context, Serializer};
///
/// #[derive(Object, Default)]
/// #[object(default)]
/// struct Address {
///     city: String,
/// }
///
/// #[derive(Object, Default)]
/// #[object(default)]
/// struct Person {
///     name: String,
///     address: Option<Address>,
/// }
///
/// let serializer = Serializer::builder()
///     .with_class::<Address>()
///     .build();
///
/// let metadata = MetadataCollection::new().with(
///     ClassMetadata::new("Person")
///         .with_property("address", PropertyConfiguration::new().with_class("Address")),
/// );
/// let context = Context::new().with_metadata(Arc::new(metadata));
///
/// let record = serde_json::from_str(r#"{"name": "Ann", "address": {"city": "Oslo"}}"#).unwrap();
/// let person: Person = serializer.denormalize_into(&record, Some(&context)).unwrap();
/// assert_eq!(person.address.unwrap().city, "Oslo");
/// ```
pub struct Serializer {
    normalizers: NormalizerRegistry,
    classes: ClassRegistry,
}

impl Default for Serializer {
    /// See [`Serializer::new`].
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Serializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Serializer")
            .field("normalizers", &self.normalizers.len())
            .field("classes", &self.classes.len())
            .finish()
    }
}

impl Serializer {
    /// Creates a serializer without user normalizers, knowing every
    /// automatically registered class.
    #[inline]
    pub fn new() -> Self {
        SerializerBuilder::new().build()
    }

    #[inline]
    pub fn builder() -> SerializerBuilder {
        SerializerBuilder::new()
    }

    /// Normalizes `value` into a [`Record`].
    ///
    /// The root object is always walked property by property; user
    /// normalizers apply to nested values.
    #[inline]
    pub fn normalize(&self, value: &dyn Object, context: Option<&Context>) -> Result<Record, Error> {
        ObjectNormalizer::new(self).normalize(value, context)
    }

    /// Normalizes a nested value with its registered normalizer, or walks it
    /// as an object.
    pub fn normalize_value(&self, value: &dyn Object, scope: Scope<'_>) -> Result<Value, Error> {
        if let Some(normalizer) = self.normalizers.get(value) {
            log::debug!(
                "`{}` at `{}` handled by a registered normalizer",
                value.class_info().type_name(),
                scope.navigator(),
            );
            return normalizer.normalize(value, scope);
        }

        ObjectNormalizer::new(self)
            .normalize_scoped(value, scope)
            .map(Value::Map)
    }

    /// Populates `target` from `record`.
    #[inline]
    pub fn denormalize(
        &self,
        record: &Record,
        target: &mut dyn Object,
        context: Option<&Context>,
    ) -> Result<(), Error> {
        ObjectNormalizer::new(self).denormalize(record, target, context)
    }

    /// Populates a default `T` from `record`.
    pub fn denormalize_into<T: Object + Default>(
        &self,
        record: &Record,
        context: Option<&Context>,
    ) -> Result<T, Error> {
        let mut target = T::default();
        self.denormalize(record, &mut target, context)?;
        Ok(target)
    }

    /// Creates a bare instance of a registered class, named by type path or
    /// short name.
    #[inline]
    pub fn instantiate(&self, class: &str) -> Result<Box<dyn Object>, InstantiateError> {
        self.classes.instantiate(class)
    }

    #[inline]
    pub fn classes(&self) -> &ClassRegistry {
        &self.classes
    }

    #[inline]
    pub fn normalizers(&self) -> &NormalizerRegistry {
        &self.normalizers
    }
}

// -----------------------------------------------------------------------------
// SerializerBuilder

/// Builds a [`Serializer`].
pub struct SerializerBuilder {
    normalizers: NormalizerRegistry,
    classes: ClassRegistry,
}

impl Default for SerializerBuilder {
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SerializerBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SerializerBuilder")
            .field("normalizers", &self.normalizers.len())
            .field("classes", &self.classes.len())
            .finish()
    }
}

impl SerializerBuilder {
    /// Starts from the automatically registered classes.
    pub fn new() -> Self {
        Self {
            normalizers: NormalizerRegistry::new(),
            classes: ClassRegistry::new(),
        }
    }

    /// Uses `normalizer` for nested values of type `T`.
    pub fn with_normalizer<T: Object>(mut self, normalizer: impl Normalizer) -> Self {
        self.normalizers.register::<T>(normalizer);
        self
    }

    /// Uses a closure for nested values of type `T`.
    pub fn with_normalizer_fn<T: Object>(
        mut self,
        func: impl Fn(&dyn Object, Scope<'_>) -> Result<Value, Error> + Send + Sync + 'static,
    ) -> Self {
        self.normalizers.register_fn::<T>(func);
        self
    }

    /// Makes `T` available for nested instantiation.
    pub fn with_class<T: Class>(mut self) -> Self {
        self.classes.register::<T>();
        self
    }

    /// Replaces the class registry.
    pub fn with_classes(mut self, classes: ClassRegistry) -> Self {
        self.classes = classes;
        self
    }

    pub fn build(self) -> Serializer {
        Serializer {
            normalizers: self.normalizers,
            classes: self.classes,
        }
    }
}

#[cfg(test)]
mod tests {
    use vista_reflect::InstantiateError;
    use vista_reflect::derive::Object;
    use vista_reflect::registry::ClassRegistry;

    use super::Serializer;

    #[derive(Object, Default)]
    #[object(default)]
    struct Plain {
        id: u32,
    }

    #[derive(Object)]
    struct Opaque {
        id: u32,
    }

    #[test]
    fn instantiate_registered_classes() {
        let serializer = Serializer::builder()
            .with_classes(ClassRegistry::empty())
            .with_class::<Plain>()
            .with_class::<Opaque>()
            .build();
        assert_eq!(serializer.classes().len(), 2);

        assert!(serializer.instantiate("Plain").unwrap().is::<Plain>());
        assert_eq!(
            serializer.instantiate("Opaque").unwrap_err(),
            InstantiateError::NotInstantiable("Opaque")
        );
        assert_eq!(
            serializer.instantiate("Ghost").unwrap_err(),
            InstantiateError::Unknown("Ghost".into())
        );
    }

    #[cfg(feature = "auto_register")]
    mod auto {
        use vista_reflect::derive::Object;
        use vista_reflect::registry::ClassRegistry;

        use crate::Serializer;

        #[derive(Object, Default)]
        #[object(default, auto_register)]
        struct Registered {
            id: u32,
        }

        #[test]
        fn auto_registered_classes() {
            // Static registration is not available on every platform.
            if !ClassRegistry::empty().auto_register() {
                return;
            }
            let serializer = Serializer::new();
            assert!(serializer.instantiate("Registered").is_ok());
        }
    }
}
