//! Static descriptions of object classes.
//!
//! - [`ClassInfo`]: name, type path, properties and methods of a class.
//! - [`PropertyInfo`] / [`MethodInfo`]: a single member and its [`Visibility`].
//! - [`Class`]: the static side of [`Object`](crate::Object), implemented by the derive macro.

// -----------------------------------------------------------------------------
// Modules

mod class_info;
mod member_info;

// -----------------------------------------------------------------------------
// Exports

pub use class_info::{Class, ClassInfo};
pub use member_info::{MethodInfo, PropertyInfo, Visibility};
