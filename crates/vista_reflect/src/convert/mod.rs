//! Conversions between field types and the accessor unions.
//!
//! - [`Expose`]: `&T -> Exposed<'_>`, used when a property is read.
//! - [`IntoExposed`]: `T -> Exposed<'static>`, used for method results.
//! - [`FromDynamic`]: `Dynamic -> T`, used when a property is written.
//!
//! Implemented for primitives, `String`, [`Value`](crate::value::Value),
//! [`Record`](crate::value::Record), `Option<T>`, `Box<T>`, `Vec<T>` and
//! every type deriving [`Object`](crate::derive::Object).

// -----------------------------------------------------------------------------
// Modules

mod containers;
mod primitives;

// -----------------------------------------------------------------------------
// Traits

use crate::ConvertError;
use crate::object::{Dynamic, Exposed};

/// Borrows a field as an [`Exposed`] value.
pub trait Expose {
    fn expose(&self) -> Exposed<'_>;
}

/// Converts an owned value, typically a method result, into an [`Exposed`] value.
pub trait IntoExposed {
    fn into_exposed(self) -> Exposed<'static>;
}

/// Builds a field value from a [`Dynamic`].
///
/// # Examples
///
/// ```
/// use vista_reflect::convert::FromDynamic;
/// use vista_reflect::object::Dynamic;
/// use vista_reflect::value::Value;
///
/// assert_eq!(u8::from_dynamic(Value::Int(200).into()), Ok(200));
/// assert!(u8::from_dynamic(Value::Int(300).into()).is_err());
/// assert_eq!(f64::from_dynamic(Value::Int(2).into()), Ok(2.0));
/// assert_eq!(Option::<String>::from_dynamic(Dynamic::Data(Value::Null)), Ok(None));
/// ```
pub trait FromDynamic: Sized {
    fn from_dynamic(value: Dynamic) -> Result<Self, ConvertError>;
}

// -----------------------------------------------------------------------------
// Object helpers

pub use containers::object_from_dynamic;
