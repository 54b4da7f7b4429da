use alloc::boxed::Box;
use alloc::string::ToString;
use core::any::TypeId;

use vista_utils::TypeIdMap;
use vista_utils::hash::{FixedHashState, HashMap, HashSet};

use crate::info::Class;
use crate::registry::ClassMeta;
use crate::{InstantiateError, Object};

// -----------------------------------------------------------------------------
// ClassRegistry

/// A registry of [`Object`] classes.
///
/// Classes are indexed by [`TypeId`], by full type path and by short type
/// name. Short names shared by several registered classes are ambiguous and
/// only reachable through their full path.
///
/// # Examples
///
/// ```
/// use vista_reflect::derive::Object;
/// use vista_reflect::registry::ClassRegistry;
///
/// #[derive(Object, Default)]
/// #[object(default)]
/// struct User {
///     id: u64,
/// }
///
/// let mut registry = ClassRegistry::empty();
/// registry.register::<User>();
///
/// let user = registry.instantiate("User").unwrap();
/// assert!(user.is::<User>());
///
/// assert!(registry.instantiate("Nobody").is_err());
/// ```
pub struct ClassRegistry {
    metas: TypeIdMap<ClassMeta>,
    path_to_id: HashMap<&'static str, TypeId>,
    name_to_id: HashMap<&'static str, TypeId>,
    ambiguous_names: HashSet<&'static str>,
    pub(crate) auto_registered: bool,
}

impl Default for ClassRegistry {
    /// See [`ClassRegistry::new`] .
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl ClassRegistry {
    /// Creates an empty [`ClassRegistry`].
    #[inline]
    pub const fn empty() -> Self {
        Self {
            metas: TypeIdMap::new(),
            path_to_id: HashMap::with_hasher(FixedHashState),
            name_to_id: HashMap::with_hasher(FixedHashState),
            ambiguous_names: HashSet::with_hasher(FixedHashState),
            auto_registered: false,
        }
    }

    /// Creates a registry holding every automatically registered class.
    ///
    /// See [`ClassRegistry::auto_register`].
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.auto_register();
        registry
    }

    // The class must **not** already exist.
    fn add_indices(&mut self, meta: &ClassMeta) {
        let info = meta.info();
        let name = info.type_name();

        if !self.ambiguous_names.contains(name) {
            if self.name_to_id.contains_key(name) {
                self.name_to_id.remove(name);
                self.ambiguous_names.insert(name);
            } else {
                self.name_to_id.insert(name, meta.type_id());
            }
        }

        self.path_to_id.insert(info.type_path(), meta.type_id());
    }

    /// Registers `T` if it is not registered yet.
    ///
    /// Returns `false` if it was already present.
    pub fn register<T: Class>(&mut self) -> bool {
        let type_id = TypeId::of::<T>();
        if self.metas.contains(&type_id) {
            return false;
        }
        self.insert(T::class_meta());
        true
    }

    /// Inserts or **overwrites** an entry.
    ///
    /// Overwriting keeps the name indices of the first insertion.
    pub fn insert(&mut self, meta: ClassMeta) {
        if !self.metas.contains(&meta.type_id()) {
            self.add_indices(&meta);
        }
        self.metas.insert(meta.type_id(), meta);
    }

    /// Registers every class marked `#[object(auto_register)]` or listed in
    /// `impl_auto_register!`.
    ///
    /// Returns `true` if static registration is available on this platform.
    /// Always returns `false` when the `auto_register` feature is disabled.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use vista_reflect::derive::Object;
    /// use vista_reflect::registry::ClassRegistry;
    ///
    /// #[derive(Object, Default)]
    /// #[object(default, auto_register)]
    /// struct Customer {
    ///     name: String,
    /// }
    ///
    /// let mut registry = ClassRegistry::empty();
    /// assert!(registry.auto_register());
    /// assert!(registry.get_with_type_name("Customer").is_some());
    /// ```
    #[cfg_attr(not(feature = "auto_register"), inline(always))]
    pub fn auto_register(&mut self) -> bool {
        #[cfg(feature = "auto_register")]
        {
            if !self.auto_registered {
                crate::__macro_exports::auto_register::__register_types(self);
            }
            self.auto_registered
        }
        #[cfg(not(feature = "auto_register"))]
        {
            false
        }
    }

    #[inline]
    pub fn get(&self, type_id: TypeId) -> Option<&ClassMeta> {
        self.metas.get(&type_id)
    }

    /// Looks up a class by full type path, e.g. `my_app::model::User`.
    pub fn get_with_type_path(&self, type_path: &str) -> Option<&ClassMeta> {
        self.path_to_id
            .get(type_path)
            .and_then(|id| self.metas.get(id))
    }

    /// Looks up a class by short name, e.g. `User`.
    ///
    /// Returns `None` for ambiguous names.
    pub fn get_with_type_name(&self, type_name: &str) -> Option<&ClassMeta> {
        self.name_to_id
            .get(type_name)
            .and_then(|id| self.metas.get(id))
    }

    /// Returns `true` if `type_name` is shared by several registered classes.
    #[inline]
    pub fn is_ambiguous(&self, type_name: &str) -> bool {
        self.ambiguous_names.contains(type_name)
    }

    /// Looks up a class by full path, then by short name.
    #[inline]
    pub fn resolve(&self, name: &str) -> Option<&ClassMeta> {
        self.get_with_type_path(name)
            .or_else(|| self.get_with_type_name(name))
    }

    /// Creates a new bare instance of the class called `name`.
    pub fn instantiate(&self, name: &str) -> Result<Box<dyn Object>, InstantiateError> {
        match self.resolve(name) {
            Some(meta) => meta.instantiate(),
            None if self.is_ambiguous(name) => Err(InstantiateError::Ambiguous(name.to_string())),
            None => Err(InstantiateError::Unknown(name.to_string())),
        }
    }

    #[inline]
    pub fn contains(&self, type_id: TypeId) -> bool {
        self.metas.contains(&type_id)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.metas.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.metas.is_empty()
    }

    /// Iterates over all registered classes, in no particular order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &ClassMeta> {
        self.metas.values()
    }
}

#[cfg(test)]
mod tests {
    use core::any::TypeId;

    use super::ClassRegistry;
    use crate::InstantiateError;
    use crate::derive::Object;

    mod first {
        use crate::derive::Object;

        #[derive(Object, Default)]
        #[object(default)]
        pub struct Item {
            pub id: u32,
        }
    }

    mod second {
        use crate::derive::Object;

        #[derive(Object, Default)]
        #[object(default)]
        pub struct Item {
            pub sku: u32,
        }
    }

    #[derive(Object)]
    struct Opaque {
        id: u32,
    }

    #[test]
    fn ambiguous_short_names() {
        let mut registry = ClassRegistry::empty();
        assert!(registry.register::<first::Item>());
        assert!(!registry.register::<first::Item>());
        assert!(registry.get_with_type_name("Item").is_some());

        registry.register::<second::Item>();
        assert_eq!(registry.len(), 2);
        assert!(registry.get_with_type_name("Item").is_none());
        assert!(registry.is_ambiguous("Item"));
        assert_eq!(
            registry.instantiate("Item").unwrap_err(),
            InstantiateError::Ambiguous("Item".into())
        );

        let path = <second::Item as crate::Class>::info().type_path();
        let item = registry.instantiate(path).unwrap();
        assert!(item.is::<second::Item>());
    }

    #[test]
    fn not_instantiable() {
        let mut registry = ClassRegistry::empty();
        registry.register::<Opaque>();
        assert!(registry.contains(TypeId::of::<Opaque>()));
        assert_eq!(
            registry.instantiate("Opaque").unwrap_err(),
            InstantiateError::NotInstantiable("Opaque")
        );
    }
}
