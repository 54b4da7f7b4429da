use alloc::boxed::Box;
use alloc::string::{String, ToString};

use thiserror::Error;

use crate::info::ClassInfo;
use crate::value::ValueKind;

/// A type-erased error raised by user code (fallible methods, custom functions).
pub type BoxedError = Box<dyn core::error::Error + Send + Sync + 'static>;

// -----------------------------------------------------------------------------
// AccessError

/// An error returned by the [`Object`](crate::Object) accessors.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AccessError {
    #[error("property `{class}::{property}` is not accessible")]
    PrivateProperty {
        class: &'static str,
        property: String,
    },

    #[error("class `{class}` has no property `{property}`")]
    MissingProperty {
        class: &'static str,
        property: String,
    },

    #[error("method `{class}::{method}` is not public")]
    PrivateMethod { class: &'static str, method: String },

    #[error("class `{class}` has no method `{method}`")]
    MissingMethod { class: &'static str, method: String },

    #[error("cannot write property `{class}::{property}`: {source}")]
    Convert {
        class: &'static str,
        property: String,
        source: ConvertError,
    },

    #[error("method `{class}::{method}` failed: {source}")]
    Failed {
        class: &'static str,
        method: String,
        source: BoxedError,
    },
}

impl AccessError {
    #[inline]
    pub fn private_property(info: &ClassInfo, property: &str) -> Self {
        Self::PrivateProperty {
            class: info.type_name(),
            property: property.to_string(),
        }
    }

    #[inline]
    pub fn missing_property(info: &ClassInfo, property: &str) -> Self {
        Self::MissingProperty {
            class: info.type_name(),
            property: property.to_string(),
        }
    }

    #[inline]
    pub fn private_method(info: &ClassInfo, method: &str) -> Self {
        Self::PrivateMethod {
            class: info.type_name(),
            method: method.to_string(),
        }
    }

    #[inline]
    pub fn missing_method(info: &ClassInfo, method: &str) -> Self {
        Self::MissingMethod {
            class: info.type_name(),
            method: method.to_string(),
        }
    }

    #[inline]
    pub fn convert(info: &ClassInfo, property: &str, source: ConvertError) -> Self {
        Self::Convert {
            class: info.type_name(),
            property: property.to_string(),
            source,
        }
    }

    #[inline]
    pub fn failed(info: &ClassInfo, method: &str, source: impl Into<BoxedError>) -> Self {
        Self::Failed {
            class: info.type_name(),
            method: method.to_string(),
            source: source.into(),
        }
    }

    /// Returns `true` for [`AccessError::PrivateProperty`].
    #[inline]
    pub fn is_private_property(&self) -> bool {
        matches!(self, Self::PrivateProperty { .. })
    }
}

// -----------------------------------------------------------------------------
// ConvertError

/// An error converting a [`Dynamic`](crate::object::Dynamic) into a concrete field type.
#[derive(Debug, Error, Clone, PartialEq)]
#[non_exhaustive]
pub enum ConvertError {
    #[error("expected {expected}, found {found}")]
    Mismatch {
        expected: &'static str,
        found: ValueKind,
    },

    #[error("{value} is out of range for {target}")]
    OutOfRange { target: &'static str, value: i64 },

    #[error("expected an object of class `{expected}`, found `{found}`")]
    ObjectMismatch {
        expected: &'static str,
        found: &'static str,
    },
}

// -----------------------------------------------------------------------------
// InstantiateError

/// An error returned by [`ClassRegistry::instantiate`](crate::registry::ClassRegistry::instantiate).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum InstantiateError {
    #[error("class `{0}` is not registered")]
    Unknown(String),

    #[error("class name `{0}` is ambiguous, use the full type path")]
    Ambiguous(String),

    #[error("class `{0}` cannot be instantiated, derive it with `#[object(default)]`")]
    NotInstantiable(&'static str),
}
