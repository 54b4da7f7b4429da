use alloc::boxed::Box;
use core::any::TypeId;
use core::fmt;

use vista_reflect::Object;
use vista_reflect::value::Value;
use vista_utils::TypeIdMap;

use crate::{Error, Scope};

// -----------------------------------------------------------------------------
// Normalizer

/// Converts values of one concrete type, replacing the generic object walk.
///
/// Implemented for every `Fn(&dyn Object, Scope<'_>) -> Result<Value, Error>`.
/// A normalizer with nested objects of its own hands them back to
/// [`Serializer::normalize_value`](crate::Serializer::normalize_value) with a
/// [`down`](Scope::down) scope.
pub trait Normalizer: Send + Sync + 'static {
    fn normalize(&self, value: &dyn Object, scope: Scope<'_>) -> Result<Value, Error>;
}

impl<F> Normalizer for F
where
    F: Fn(&dyn Object, Scope<'_>) -> Result<Value, Error> + Send + Sync + 'static,
{
    #[inline]
    fn normalize(&self, value: &dyn Object, scope: Scope<'_>) -> Result<Value, Error> {
        self(value, scope)
    }
}

// -----------------------------------------------------------------------------
// NormalizerRegistry

/// User normalizers, keyed by the concrete type they handle.
///
/// Lookups use the exact type of the value: a normalizer never applies to
/// other types, wrappers included.
///
/// # Examples
///
/// ```
/// use vista_reflect::{Object, derive::Object};
/// use vista_reflect::value::Value;
/// use vista_serializer::{Error, NormalizerRegistry, Scope};
///
/// #[derive(Object)]
/// struct Timestamp {
///     secs: i64,
/// }
///
/// #[derive(Object)]
/// struct Event {
///     at: Timestamp,
/// }
///
/// let mut registry = NormalizerRegistry::new();
/// registry.register_fn::<Timestamp>(|value, _| {
///     let ts = value.downcast_ref::<Timestamp>().ok_or_else(|| Error::custom("not a timestamp"))?;
///     Ok(Value::Int(ts.secs * 1000))
/// });
///
/// let ts = Timestamp { secs: 3 };
/// assert!(registry.get(&ts).is_some());
///
/// let event = Event { at: Timestamp { secs: 3 } };
/// assert!(registry.get(&event).is_none());
/// ```
#[derive(Default)]
pub struct NormalizerRegistry {
    normalizers: TypeIdMap<Box<dyn Normalizer>>,
}

impl NormalizerRegistry {
    #[inline]
    pub const fn new() -> Self {
        Self {
            normalizers: TypeIdMap::new(),
        }
    }

    /// Sets the normalizer of `T`, replacing any previous one.
    pub fn register<T: Object>(&mut self, normalizer: impl Normalizer) {
        self.register_boxed(TypeId::of::<T>(), Box::new(normalizer));
    }

    /// Sets a closure as the normalizer of `T`.
    ///
    /// Unlike [`register`](Self::register), the closure signature is inferred
    /// from this bound, so parameter types need not be spelled out.
    pub fn register_fn<T: Object>(
        &mut self,
        func: impl Fn(&dyn Object, Scope<'_>) -> Result<Value, Error> + Send + Sync + 'static,
    ) {
        self.register::<T>(func);
    }

    pub fn register_boxed(&mut self, type_id: TypeId, normalizer: Box<dyn Normalizer>) {
        self.normalizers.insert(type_id, normalizer);
    }

    /// Returns the normalizer for the concrete type of `value`, if any.
    #[inline]
    pub fn get(&self, value: &dyn Object) -> Option<&dyn Normalizer> {
        self.normalizers
            .get(&value.as_any().type_id())
            .map(|normalizer| &**normalizer)
    }

    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.normalizers.contains(&type_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.normalizers.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.normalizers.is_empty()
    }
}

impl fmt::Debug for NormalizerRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NormalizerRegistry")
            .field("len", &self.normalizers.len())
            .finish()
    }
}
