//! Runtime lookup of classes by name.
//!
//! ## Menu
//!
//! - [`ClassMeta`]: the [`ClassInfo`](crate::info::ClassInfo) of a class plus an optional factory.
//! - [`ClassRegistry`]: maps type paths and short names to [`ClassMeta`]s, and
//!   instantiates classes named only in configuration.
//!
//! ## auto_register
//!
//! See [`ClassRegistry::auto_register`] .
//!
//! We use the [`inventory`] crate for static registration. Not every platform
//! supports it; there, `auto_register` returns `false` and registers nothing.
//!
//! [`inventory`]: https://docs.rs/inventory

// -----------------------------------------------------------------------------
// Modules

mod class_meta;
mod class_registry;

// -----------------------------------------------------------------------------
// Exports

pub use class_meta::ClassMeta;
pub use class_registry::ClassRegistry;
