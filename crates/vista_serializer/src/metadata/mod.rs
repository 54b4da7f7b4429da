//! Per-class configuration of the normalizer.
//!
//! ## Menu
//!
//! - [`PropertyConfiguration`]: getter, nested class, denormalizer, coercion and
//!   view membership of one property.
//! - [`ClassMetadata`]: the property configurations and named views of a class.
//! - [`MetadataCollection`]: class metadata by class name.
//! - [`Coercion`]: scalar conversions applied while denormalizing.
//! - [`Denormalizer`]: a user function rebuilding a property from raw data.
//! - [`MetadataLoader`]: builds a collection from a serde [`MetadataDocument`].

// -----------------------------------------------------------------------------
// Modules

mod class;
mod coercion;
mod collection;
mod loader;
mod property;

// -----------------------------------------------------------------------------
// Exports

pub use class::ClassMetadata;
pub use coercion::Coercion;
pub use collection::MetadataCollection;
pub use loader::{ClassDocument, MetadataDocument, MetadataLoader, PropertyDocument};
pub use property::{Denormalizer, PropertyConfiguration};
