//! Object walking and per-type overrides.
//!
//! ## Menu
//!
//! - [`ObjectNormalizer`]: the generic object ↔ [`Record`](vista_reflect::value::Record)
//!   conversion, driven by class metadata and views.
//! - [`Normalizer`]: a user conversion for a specific type, e.g. a timestamp
//!   rendered as a string.
//! - [`NormalizerRegistry`]: the user normalizers, by concrete type.

// -----------------------------------------------------------------------------
// Modules

mod object_normalizer;
mod registry;

// -----------------------------------------------------------------------------
// Exports

pub use object_normalizer::ObjectNormalizer;
pub use registry::{Normalizer, NormalizerRegistry};
