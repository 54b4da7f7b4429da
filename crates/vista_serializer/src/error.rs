use alloc::string::{String, ToString};
use core::fmt;

use thiserror::Error;
use vista_reflect::value::Value;
use vista_reflect::{AccessError, BoxedError, InstantiateError};

use crate::metadata::Coercion;

// -----------------------------------------------------------------------------
// MethodFault

/// Why a configured getter cannot be called.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodFault {
    /// The class declares no such method.
    Missing,
    /// The method exists but is not public.
    NotPublic,
}

impl fmt::Display for MethodFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Missing => "is not declared",
            Self::NotPublic => "is not public",
        })
    }
}

// -----------------------------------------------------------------------------
// Error

/// An error raised while normalizing or denormalizing.
///
/// Apart from reading a private property during normalization, which only
/// omits that property, every failure aborts the whole call.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A configured getter is missing or not public.
    #[error("getter `{getter}` configured for `{class}::{property}` {fault}")]
    Method {
        getter: String,
        class: &'static str,
        property: String,
        fault: MethodFault,
    },

    /// The property accessor refused a read or write.
    #[error(transparent)]
    Access(#[from] AccessError),

    /// The `class` configured for a property could not be instantiated.
    #[error("cannot instantiate `{class}` for property `{property}`: {source}")]
    Instantiate {
        class: String,
        property: String,
        source: InstantiateError,
    },

    /// A raw value does not fit the configured coercion.
    #[error("cannot coerce {found:?} to {coercion} for `{class}::{property}`")]
    Coercion {
        class: &'static str,
        property: String,
        coercion: Coercion,
        found: Value,
    },

    /// Raised by user code: a getter, a denormalizer or a registered normalizer.
    #[error(transparent)]
    User(BoxedError),

    #[error("{0}")]
    Custom(String),
}

impl Error {
    /// Creates an [`Error::Custom`] from any displayable message.
    #[inline]
    pub fn custom(msg: impl fmt::Display) -> Self {
        Self::Custom(msg.to_string())
    }

    /// Wraps an error raised by user code.
    #[inline]
    pub fn user(err: impl Into<BoxedError>) -> Self {
        Self::User(err.into())
    }
}

// -----------------------------------------------------------------------------
// LoadError

/// An error turning a metadata document into a
/// [`MetadataCollection`](crate::metadata::MetadataCollection).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LoadError {
    #[error("unknown denormalizer `{name}` configured for `{class}::{property}`")]
    UnknownDenormalizer {
        class: String,
        property: String,
        name: String,
    },

    #[error("invalid metadata document: {0}")]
    Parse(String),
}
