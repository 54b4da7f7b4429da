#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![no_std]

// -----------------------------------------------------------------------------
// Extern Self

// The derive macro emits `::vista_reflect::...` paths, which must also resolve
// inside this crate (tests and doc examples).
extern crate self as vista_reflect;

// -----------------------------------------------------------------------------
// no_std support

#[cfg(feature = "std")]
extern crate std;

extern crate alloc;

// -----------------------------------------------------------------------------
// Modules

mod error;

pub mod convert;
pub mod info;
pub mod object;
pub mod registry;
pub mod value;

// -----------------------------------------------------------------------------
// Top-Level exports

#[doc(hidden)]
pub mod __macro_exports;

pub use error::{AccessError, BoxedError, ConvertError, InstantiateError};
pub use info::Class;
pub use object::Object;
pub use vista_reflect_derive as derive;
