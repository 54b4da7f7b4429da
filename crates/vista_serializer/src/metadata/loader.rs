use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use alloc::vec::Vec;

use serde::{Deserialize, Serialize};
use vista_reflect::object::Dynamic;
use vista_reflect::value::Value;
use vista_reflect::{BoxedError, Object};
use vista_utils::hash::{FixedHashState, HashMap};

use crate::context::ViewData;
use crate::metadata::{
    ClassMetadata, Denormalizer, MetadataCollection, PropertyConfiguration,
};
use crate::{Context, LoadError};

// -----------------------------------------------------------------------------
// Documents

/// The configuration of one property in a [`MetadataDocument`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PropertyDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub getter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub class: Option<String>,
    /// The name of a denormalizer given to [`MetadataLoader::with_denormalizer`].
    #[serde(skip_serializing_if = "Option::is_none")]
    pub denormalizer: Option<String>,
    /// A coercion tag, see [`Coercion::from_tag`](crate::metadata::Coercion::from_tag).
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub coercion: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub views: Vec<String>,
}

/// The configuration of one class in a [`MetadataDocument`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassDocument {
    pub properties: BTreeMap<String, PropertyDocument>,
    pub views: BTreeMap<String, ViewData>,
}

/// A serializable description of a [`MetadataCollection`], keyed by class name.
///
/// ```json
/// {
///   "User": {
///     "properties": {
///       "age": { "type": "int", "views": ["public"] },
///       "total": { "getter": "compute_total" },
///       "address": { "class": "Address" }
///     },
///     "views": { "public": ["id", "name"] }
///   }
/// }
/// ```
///
/// Properties are processed in name order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MetadataDocument {
    pub classes: BTreeMap<String, ClassDocument>,
}

// -----------------------------------------------------------------------------
// MetadataLoader

/// Turns a [`MetadataDocument`] into a [`MetadataCollection`].
///
/// Denormalizers are functions and cannot be written in a document, so the
/// document refers to them by name and the loader resolves the names.
///
/// # Examples
///
/// ```
/// use vista_serializer::metadata::{MetadataDocument, MetadataLoader};
/// use vista_reflect::object::Dynamic;
///
/// let document: MetadataDocument = serde_json::from_str(r#"{
///     "User": {
///         "properties": {
///             "age": { "type": "int" },
///             "tags": { "denormalizer": "split" }
///         },
///         "views": { "public": ["id", "name"] }
///     }
/// }"#).unwrap();
///
/// let collection = MetadataLoader::new()
///     .with_denormalizer("split", |raw, _, _| Ok(Dynamic::Data(raw.clone())))
///     .load(document)
///     .unwrap();
///
/// let user = collection.get("User").unwrap();
/// assert!(user.attribute("tags").unwrap().denormalizer().is_some());
/// assert!(user.view("public").unwrap().includes("name"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetadataLoader {
    denormalizers: HashMap<String, Denormalizer>,
}

impl MetadataLoader {
    #[inline]
    pub const fn new() -> Self {
        Self {
            denormalizers: HashMap::with_hasher(FixedHashState),
        }
    }

    /// Makes a denormalizer available to documents under `name`.
    pub fn with_denormalizer<F>(mut self, name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Value, &dyn Object, Option<&Context>) -> Result<Dynamic, BoxedError>
            + Send
            + Sync
            + 'static,
    {
        self.denormalizers
            .insert(name.into(), Denormalizer::new(func));
        self
    }

    /// Builds the collection.
    ///
    /// Fails with [`LoadError::UnknownDenormalizer`] if a property names a
    /// denormalizer that was not provided.
    pub fn load(&self, document: MetadataDocument) -> Result<MetadataCollection, LoadError> {
        let mut collection = MetadataCollection::new();

        for (class_name, class) in document.classes {
            let mut metadata = ClassMetadata::new(class_name.as_str());

            for (view_name, view) in class.views {
                metadata.insert_view(view_name, view);
            }

            for (property, doc) in class.properties {
                let config = self.property(&class_name, &property, doc)?;
                metadata.insert_property(property, config);
            }

            collection.insert(metadata);
        }

        Ok(collection)
    }

    fn property(
        &self,
        class_name: &str,
        property: &str,
        doc: PropertyDocument,
    ) -> Result<PropertyConfiguration, LoadError> {
        let mut config = PropertyConfiguration::new();

        if let Some(getter) = doc.getter {
            config = config.with_getter(getter);
        }
        if let Some(class) = doc.class {
            config = config.with_class(class);
        }
        if let Some(name) = doc.denormalizer {
            let Some(denormalizer) = self.denormalizers.get(&name) else {
                return Err(LoadError::UnknownDenormalizer {
                    class: class_name.to_string(),
                    property: property.to_string(),
                    name,
                });
            };
            config = config.with_shared_denormalizer(denormalizer.clone());
        }
        if let Some(tag) = doc.coercion {
            config = config.with_type(&tag);
        }
        for view in doc.views {
            config = config.in_view(view);
        }

        Ok(config)
    }

    /// Parses a JSON document and builds the collection.
    #[cfg(feature = "json")]
    pub fn load_json(&self, json: &str) -> Result<MetadataCollection, LoadError> {
        let document: MetadataDocument =
            serde_json::from_str(json).map_err(|err| LoadError::Parse(err.to_string()))?;
        self.load(document)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use super::{MetadataDocument, MetadataLoader};
    use crate::LoadError;
    use crate::metadata::{Coercion, MetadataCollection};

    const JSON: &str = r#"{
        "Order": {
            "properties": {
                "total": { "getter": "compute_total" },
                "customer": { "class": "User", "views": ["summary"] },
                "count": { "type": "integer" }
            },
            "views": { "summary": ["id", {"customer": ["name"]}] }
        },
        "User": {}
    }"#;

    const RON: &str = r#"{
        "Order": (
            properties: {
                "total": (getter: Some("compute_total")),
                "customer": (class: Some("User"), views: ["summary"]),
                "count": (type: Some("integer")),
            },
            views: { "summary": ["id", {"customer": ["name"]}] },
        ),
        "User": (),
    }"#;

    fn check(collection: &MetadataCollection) {
        assert_eq!(collection.len(), 2);
        assert!(collection.get("User").is_some());

        let order = collection.get("Order").unwrap();
        assert_eq!(order.attribute("total").unwrap().getter(), Some("compute_total"));
        assert_eq!(order.attribute("customer").unwrap().class(), Some("User"));
        assert_eq!(order.attribute("count").unwrap().coercion(), Some(&Coercion::Int));

        // `customer` is already listed by the explicit view and not repeated.
        let summary = order.view("summary").unwrap();
        let names: Vec<_> = summary.entries().iter().map(|e| e.name()).collect();
        assert_eq!(names, ["id", "customer"]);
        assert!(summary.nested("customer").unwrap().includes("name"));
    }

    #[test]
    fn json_and_ron_agree() {
        let from_json: MetadataDocument = serde_json::from_str(JSON).unwrap();
        let from_ron: MetadataDocument = ron::from_str(RON).unwrap();
        assert_eq!(from_json, from_ron);

        let loader = MetadataLoader::new();
        check(&loader.load(from_json).unwrap());
        check(&loader.load(from_ron).unwrap());
    }

    #[test]
    fn unknown_denormalizer() {
        let document: MetadataDocument =
            serde_json::from_str(r#"{"User": {"properties": {"tags": {"denormalizer": "csv"}}}}"#)
                .unwrap();
        let err = MetadataLoader::new().load(document).unwrap_err();
        assert_eq!(
            err,
            LoadError::UnknownDenormalizer {
                class: "User".into(),
                property: "tags".into(),
                name: "csv".into(),
            }
        );
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = serde_json::from_str::<MetadataDocument>(r#"{"User": {"getters": {}}}"#);
        assert!(result.is_err());
    }
}
