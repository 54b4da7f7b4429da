#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;
mod serializer;

pub mod context;
pub mod metadata;
pub mod normalizer;

// -----------------------------------------------------------------------------
// Top-Level exports

pub use context::{Context, Navigator, Scope, View, ViewData};
pub use error::{Error, LoadError, MethodFault};
pub use normalizer::{Normalizer, NormalizerRegistry, ObjectNormalizer};
pub use serializer::{Serializer, SerializerBuilder};
