#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

pub use vista_reflect as reflect;
pub use vista_serializer as serializer;
pub use vista_utils as utils;

/// The items needed to declare classes and run the serializer.
pub mod prelude {
    pub use vista_reflect::derive::Object;
    pub use vista_reflect::value::{Record, Value};
    pub use vista_reflect::{Class, Object};
    pub use vista_serializer::metadata::{ClassMetadata, MetadataCollection, PropertyConfiguration};
    pub use vista_serializer::{Context, Error, Serializer, View, ViewData};
}
