use alloc::string::String;

use vista_reflect::info::ClassInfo;
use vista_utils::hash::{FixedHashState, HashMap};

use crate::metadata::ClassMetadata;

/// Class metadata indexed by class name.
///
/// Populated once at setup and shared, read-only, by every call.
///
/// # Examples
///
/// ```
/// use vista_reflect::{Class, derive::Object};
/// use vista_serializer::metadata::{ClassMetadata, MetadataCollection};
///
/// #[derive(Object)]
/// struct User {
///     id: u64,
/// }
///
/// let collection = MetadataCollection::new().with(ClassMetadata::new("User"));
///
/// assert!(collection.for_class(User::info()).is_some());
/// assert!(collection.get("Order").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub struct MetadataCollection {
    classes: HashMap<String, ClassMetadata>,
}

impl MetadataCollection {
    #[inline]
    pub const fn new() -> Self {
        Self {
            classes: HashMap::with_hasher(FixedHashState),
        }
    }

    /// Adds metadata, returning the previous metadata of the same class name.
    pub fn insert(&mut self, metadata: ClassMetadata) -> Option<ClassMetadata> {
        self.classes
            .insert(metadata.class_name().into(), metadata)
    }

    /// Builder form of [`insert`](Self::insert).
    #[inline]
    pub fn with(mut self, metadata: ClassMetadata) -> Self {
        self.insert(metadata);
        self
    }

    /// Looks up metadata by the name it was registered under.
    #[inline]
    pub fn get(&self, class_name: &str) -> Option<&ClassMetadata> {
        self.classes.get(class_name)
    }

    /// Looks up the metadata of a class, by full type path first, then by short name.
    pub fn for_class(&self, info: &ClassInfo) -> Option<&ClassMetadata> {
        self.get(info.type_path())
            .or_else(|| self.get(info.type_name()))
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Iterates over all class metadata, in no particular order.
    #[inline]
    pub fn iter(&self) -> impl ExactSizeIterator<Item = &ClassMetadata> {
        self.classes.values()
    }
}
