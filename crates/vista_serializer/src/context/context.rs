use alloc::sync::Arc;

use crate::Serializer;
use crate::context::{Navigator, View};
use crate::metadata::MetadataCollection;

// -----------------------------------------------------------------------------
// Context

/// The options of one normalize or denormalize call.
///
/// A context is immutable, so a single instance may be reused across calls
/// and threads. Without a context, no view filtering happens and no metadata
/// is consulted.
///
/// # Examples
///
/// ```
/// use std::sync::Arc;
/// use vista_serializer::metadata::{ClassMetadata, MetadataCollection};
/// use vista_serializer::{Context, View};
///
/// let metadata = MetadataCollection::new().with(ClassMetadata::new("User"));
/// let context = Context::new()
///     .with_view("public")
///     .with_metadata(Arc::new(metadata));
///
/// assert_eq!(context.view(), Some(&View::Named("public".into())));
/// assert!(context.metadata().unwrap().get("User").is_some());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Context {
    view: Option<View>,
    metadata: Option<Arc<MetadataCollection>>,
}

impl Context {
    #[inline]
    pub const fn new() -> Self {
        Self {
            view: None,
            metadata: None,
        }
    }

    /// Sets the view selector: a view name or inline [`ViewData`](crate::ViewData).
    #[inline]
    pub fn with_view(mut self, view: impl Into<View>) -> Self {
        self.view = Some(view.into());
        self
    }

    #[inline]
    pub fn with_metadata(mut self, metadata: Arc<MetadataCollection>) -> Self {
        self.metadata = Some(metadata);
        self
    }

    #[inline]
    pub fn view(&self) -> Option<&View> {
        self.view.as_ref()
    }

    #[inline]
    pub fn metadata(&self) -> Option<&MetadataCollection> {
        self.metadata.as_deref()
    }
}

// -----------------------------------------------------------------------------
// Scope

/// The position of a value inside a normalization.
///
/// Registered [`Normalizer`](crate::Normalizer)s receive a scope and pass a
/// [`down`](Scope::down) scope to [`Serializer::normalize_value`] for their
/// own nested values.
#[derive(Debug, Clone, Copy)]
pub struct Scope<'a> {
    serializer: &'a Serializer,
    context: Option<&'a Context>,
    navigator: Navigator<'a>,
}

impl<'a> Scope<'a> {
    /// A scope at the root of a call.
    #[inline]
    pub fn new(serializer: &'a Serializer, context: Option<&'a Context>) -> Self {
        Self {
            serializer,
            context,
            navigator: Navigator::root(),
        }
    }

    /// The scope of the property `name` of the current object.
    #[inline]
    pub fn down<'b>(&'b self, name: &'b str) -> Scope<'b> {
        Scope {
            serializer: self.serializer,
            context: self.context,
            navigator: self.navigator.down(name),
        }
    }

    #[inline]
    pub fn serializer(&self) -> &'a Serializer {
        self.serializer
    }

    #[inline]
    pub fn context(&self) -> Option<&'a Context> {
        self.context
    }

    #[inline]
    pub fn navigator(&self) -> &Navigator<'a> {
        &self.navigator
    }
}
