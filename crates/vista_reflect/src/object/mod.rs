//! The runtime side of a class.
//!
//! - [`Object`]: read, write and call members by name.
//! - [`Exposed`]: what a read or a method call returns.
//! - [`Dynamic`]: what a write accepts.

// -----------------------------------------------------------------------------
// Modules

mod dynamic;
mod exposed;
mod object;

// -----------------------------------------------------------------------------
// Exports

pub use dynamic::Dynamic;
pub use exposed::{Exposed, ObjectRef};
pub use object::Object;
