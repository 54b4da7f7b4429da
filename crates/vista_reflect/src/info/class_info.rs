use crate::Object;
use crate::info::{MethodInfo, PropertyInfo};
use crate::registry::ClassMeta;

// -----------------------------------------------------------------------------
// ClassInfo

/// A container for compile-time class information.
///
/// Properties keep their **declaration order**, which is the order used when
/// an object is normalized.
///
/// # Examples
///
/// ```
/// use vista_reflect::{Class, derive::Object};
///
/// #[derive(Object)]
/// #[object(method(display_name))]
/// struct User {
///     id: u64,
///     #[object(private)]
///     password: String,
/// }
///
/// impl User {
///     fn display_name(&self) -> String {
///         format!("user #{}", self.id)
///     }
/// }
///
/// let info = User::info();
///
/// assert_eq!(info.type_name(), "User");
/// assert_eq!(info.property_names().collect::<Vec<_>>(), ["id", "password"]);
/// assert!(!info.property("password").unwrap().is_public());
/// assert!(info.has_method("display_name"));
/// assert!(info.is_public("display_name"));
/// ```
#[derive(Debug)]
pub struct ClassInfo {
    type_name: &'static str,
    type_path: &'static str,
    properties: &'static [PropertyInfo],
    methods: &'static [MethodInfo],
}

impl ClassInfo {
    /// Creates a new [`ClassInfo`].
    ///
    /// Used by the proc-macro crate.
    #[inline]
    pub const fn new(
        type_name: &'static str,
        type_path: &'static str,
        properties: &'static [PropertyInfo],
        methods: &'static [MethodInfo],
    ) -> Self {
        Self {
            type_name,
            type_path,
            properties,
            methods,
        }
    }

    /// Returns the short class name, e.g. `User`.
    #[inline]
    pub const fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the full path of the class, e.g. `my_app::model::User`.
    #[inline]
    pub const fn type_path(&self) -> &'static str {
        self.type_path
    }

    /// Returns the properties in declaration order.
    #[inline]
    pub const fn properties(&self) -> &'static [PropertyInfo] {
        self.properties
    }

    /// Returns the property names in declaration order.
    #[inline]
    pub fn property_names(&self) -> impl ExactSizeIterator<Item = &'static str> {
        self.properties.iter().map(PropertyInfo::name)
    }

    /// Returns the [`PropertyInfo`] for the given `name`, if present.
    ///
    /// This is O(N) complexity.
    pub fn property(&self, name: &str) -> Option<&'static PropertyInfo> {
        self.properties.iter().find(|p| p.name() == name)
    }

    #[inline]
    pub fn has_property(&self, name: &str) -> bool {
        self.property(name).is_some()
    }

    #[inline]
    pub const fn methods(&self) -> &'static [MethodInfo] {
        self.methods
    }

    /// Returns the [`MethodInfo`] for the given `name`, if present.
    pub fn method(&self, name: &str) -> Option<&'static MethodInfo> {
        self.methods.iter().find(|m| m.name() == name)
    }

    /// Returns `true` if the class declares a method called `name`,
    /// whatever its visibility.
    #[inline]
    pub fn has_method(&self, name: &str) -> bool {
        self.method(name).is_some()
    }

    /// Returns `true` if `name` is a declared **public** method.
    ///
    /// Undeclared methods are not public.
    #[inline]
    pub fn is_public(&self, name: &str) -> bool {
        self.method(name).is_some_and(MethodInfo::is_public)
    }
}

// -----------------------------------------------------------------------------
// Class

/// The static side of an [`Object`].
///
/// Implemented by [`#[derive(Object)]`](crate::derive::Object).
pub trait Class: Object + Sized {
    /// Returns the static class information.
    fn info() -> &'static ClassInfo;

    /// Returns the registration entry of this class.
    ///
    /// The default entry cannot be instantiated; the derive macro overrides
    /// it for `#[object(default)]` types.
    fn class_meta() -> ClassMeta {
        ClassMeta::of::<Self>()
    }
}
