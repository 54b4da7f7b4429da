use alloc::string::String;
use alloc::vec::Vec;

use crate::context::{ViewData, ViewEntry};
use crate::metadata::PropertyConfiguration;

/// The metadata of one class: property configurations and named views.
///
/// A view is the union of the entries given with
/// [`with_view`](Self::with_view) and the properties that declare
/// membership through [`PropertyConfiguration::in_view`]. Explicit entries
/// come first, memberships follow in property order.
///
/// # Examples
///
/// ```
/// use vista_serializer::metadata::{ClassMetadata, PropertyConfiguration};
/// use vista_serializer::ViewData;
///
/// let metadata = ClassMetadata::new("User")
///     .with_view("public", ViewData::from_iter(["id"]))
///     .with_property("name", PropertyConfiguration::new().in_view("public"))
///     .with_property("ssn", PropertyConfiguration::new().in_view("internal"));
///
/// let public = metadata.view("public").unwrap();
/// assert!(public.includes("id"));
/// assert!(public.includes("name"));
/// assert!(!public.includes("ssn"));
///
/// assert!(metadata.view("internal").unwrap().includes("ssn"));
/// assert!(metadata.view("admin").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct ClassMetadata {
    class_name: String,
    properties: Vec<(String, PropertyConfiguration)>,
    explicit_views: Vec<(String, ViewData)>,
    // Explicit views merged with property memberships.
    views: Vec<(String, ViewData)>,
}

impl ClassMetadata {
    /// Creates empty metadata for a class, named by type path or short name.
    pub fn new(class_name: impl Into<String>) -> Self {
        Self {
            class_name: class_name.into(),
            properties: Vec::new(),
            explicit_views: Vec::new(),
            views: Vec::new(),
        }
    }

    #[inline]
    pub fn class_name(&self) -> &str {
        &self.class_name
    }

    /// Sets the configuration of a property, replacing any previous one.
    pub fn with_property(mut self, name: impl Into<String>, config: PropertyConfiguration) -> Self {
        self.insert_property(name, config);
        self
    }

    pub fn insert_property(&mut self, name: impl Into<String>, config: PropertyConfiguration) {
        let name = name.into();
        match self.properties.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = config,
            None => self.properties.push((name, config)),
        }
        self.rebuild_views();
    }

    /// Defines a named view, replacing any previous definition.
    pub fn with_view(mut self, name: impl Into<String>, view: ViewData) -> Self {
        self.insert_view(name, view);
        self
    }

    pub fn insert_view(&mut self, name: impl Into<String>, view: ViewData) {
        let name = name.into();
        match self.explicit_views.iter_mut().find(|(key, _)| *key == name) {
            Some((_, slot)) => *slot = view,
            None => self.explicit_views.push((name, view)),
        }
        self.rebuild_views();
    }

    fn rebuild_views(&mut self) {
        let mut views = self.explicit_views.clone();
        for (property, config) in &self.properties {
            for view_name in config.views() {
                let index = match views.iter().position(|(key, _)| key == view_name) {
                    Some(index) => index,
                    None => {
                        views.push((view_name.clone(), ViewData::new()));
                        views.len() - 1
                    }
                };
                let view = &mut views[index].1;
                if !view.includes(property) {
                    view.push(ViewEntry::Field(property.clone()));
                }
            }
        }
        self.views = views;
    }

    /// Returns the configuration of `property`, if any.
    ///
    /// This is O(N) complexity.
    pub fn attribute(&self, property: &str) -> Option<&PropertyConfiguration> {
        self.properties
            .iter()
            .find_map(|(key, config)| (key == property).then_some(config))
    }

    /// Returns the named view, if defined.
    ///
    /// This is O(N) complexity.
    pub fn view(&self, name: &str) -> Option<&ViewData> {
        self.views
            .iter()
            .find_map(|(key, view)| (key == name).then_some(view))
    }

    /// Iterates over the configured properties in insertion order.
    pub fn properties(&self) -> impl ExactSizeIterator<Item = (&str, &PropertyConfiguration)> {
        self.properties
            .iter()
            .map(|(name, config)| (name.as_str(), config))
    }

    /// Iterates over the view names.
    pub fn view_names(&self) -> impl ExactSizeIterator<Item = &str> {
        self.views.iter().map(|(name, _)| name.as_str())
    }
}
