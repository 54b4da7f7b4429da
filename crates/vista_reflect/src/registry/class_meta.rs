use alloc::boxed::Box;
use core::any::TypeId;
use core::fmt;

use crate::info::{Class, ClassInfo};
use crate::{InstantiateError, Object};

/// Registration entry of a class.
///
/// A class with a factory can be instantiated from its name alone, which is
/// how nested records are turned back into objects.
///
/// # Examples
///
/// ```
/// use vista_reflect::derive::Object;
/// use vista_reflect::registry::ClassMeta;
///
/// #[derive(Object, Default)]
/// struct Address {
///     city: String,
/// }
///
/// let meta = ClassMeta::instantiable::<Address>();
/// let obj = meta.instantiate().unwrap();
/// assert!(obj.is::<Address>());
///
/// assert!(!ClassMeta::of::<Address>().is_instantiable());
/// ```
#[derive(Clone, Copy)]
pub struct ClassMeta {
    type_id: TypeId,
    info: &'static ClassInfo,
    factory: Option<fn() -> Box<dyn Object>>,
}

fn make<T: Class + Default>() -> Box<dyn Object> {
    Box::new(T::default())
}

impl ClassMeta {
    /// Creates an entry without a factory.
    #[inline]
    pub fn of<T: Class>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            info: T::info(),
            factory: None,
        }
    }

    /// Creates an entry whose factory is `T::default`.
    #[inline]
    pub fn instantiable<T: Class + Default>() -> Self {
        Self::of::<T>().with_factory(make::<T>)
    }

    /// Replaces the factory.
    #[inline]
    pub fn with_factory(mut self, factory: fn() -> Box<dyn Object>) -> Self {
        self.factory = Some(factory);
        self
    }

    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    #[inline]
    pub fn info(&self) -> &'static ClassInfo {
        self.info
    }

    #[inline]
    pub fn is_instantiable(&self) -> bool {
        self.factory.is_some()
    }

    /// Creates a new bare instance of the class.
    pub fn instantiate(&self) -> Result<Box<dyn Object>, InstantiateError> {
        match self.factory {
            Some(factory) => Ok(factory()),
            None => Err(InstantiateError::NotInstantiable(self.info.type_name())),
        }
    }
}

impl fmt::Debug for ClassMeta {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClassMeta")
            .field("type_path", &self.info.type_path())
            .field("instantiable", &self.is_instantiable())
            .finish()
    }
}
