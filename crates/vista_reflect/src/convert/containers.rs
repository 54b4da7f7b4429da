use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::convert::{Expose, FromDynamic, IntoExposed};
use crate::object::{Dynamic, Exposed};
use crate::value::Value;
use crate::{Class, ConvertError};

// -----------------------------------------------------------------------------
// Option

impl<T: Expose> Expose for Option<T> {
    #[inline]
    fn expose(&self) -> Exposed<'_> {
        match self {
            Some(value) => value.expose(),
            None => Exposed::Data(Value::Null),
        }
    }
}

impl<T: IntoExposed> IntoExposed for Option<T> {
    #[inline]
    fn into_exposed(self) -> Exposed<'static> {
        match self {
            Some(value) => value.into_exposed(),
            None => Exposed::Data(Value::Null),
        }
    }
}

impl<T: FromDynamic> FromDynamic for Option<T> {
    #[inline]
    fn from_dynamic(value: Dynamic) -> Result<Self, ConvertError> {
        if value.is_null() {
            Ok(None)
        } else {
            T::from_dynamic(value).map(Some)
        }
    }
}

// -----------------------------------------------------------------------------
// Box

impl<T: Expose> Expose for Box<T> {
    #[inline]
    fn expose(&self) -> Exposed<'_> {
        (**self).expose()
    }
}

impl<T: IntoExposed> IntoExposed for Box<T> {
    #[inline]
    fn into_exposed(self) -> Exposed<'static> {
        (*self).into_exposed()
    }
}

impl<T: FromDynamic> FromDynamic for Box<T> {
    #[inline]
    fn from_dynamic(value: Dynamic) -> Result<Self, ConvertError> {
        T::from_dynamic(value).map(Box::new)
    }
}

// -----------------------------------------------------------------------------
// Vec

impl<T: Expose> Expose for Vec<T> {
    fn expose(&self) -> Exposed<'_> {
        Exposed::List(self.iter().map(Expose::expose).collect())
    }
}

impl<T: IntoExposed> IntoExposed for Vec<T> {
    fn into_exposed(self) -> Exposed<'static> {
        Exposed::List(self.into_iter().map(IntoExposed::into_exposed).collect())
    }
}

impl<T: FromDynamic> FromDynamic for Vec<T> {
    /// Accepts a list of dynamics as well as a plain data list.
    fn from_dynamic(value: Dynamic) -> Result<Self, ConvertError> {
        match value {
            Dynamic::List(items) => items.into_iter().map(T::from_dynamic).collect(),
            Dynamic::Data(Value::List(items)) => items
                .into_iter()
                .map(|item| T::from_dynamic(Dynamic::Data(item)))
                .collect(),
            other => Err(ConvertError::Mismatch {
                expected: "list",
                found: other.kind(),
            }),
        }
    }
}

// -----------------------------------------------------------------------------
// Objects

/// Extracts a `T` from `Dynamic::Object`.
///
/// Plain data is rejected: turning a record into an object is the job of
/// the serializer, which knows which class to instantiate.
pub fn object_from_dynamic<T: Class>(value: Dynamic) -> Result<T, ConvertError> {
    match value {
        Dynamic::Object(obj) => obj.take::<T>().map_err(|obj| ConvertError::ObjectMismatch {
            expected: T::info().type_name(),
            found: obj.class_info().type_name(),
        }),
        other => Err(ConvertError::Mismatch {
            expected: T::info().type_name(),
            found: other.kind(),
        }),
    }
}
