use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ops::Deref;

use crate::Object;
use crate::value::{Value, ValueKind};

// -----------------------------------------------------------------------------
// ObjectRef

/// An object handed out by a read: borrowed from a field, or produced by a method.
#[derive(Debug)]
pub enum ObjectRef<'a> {
    Borrowed(&'a dyn Object),
    Owned(Box<dyn Object>),
}

impl ObjectRef<'_> {
    #[inline]
    pub fn as_object(&self) -> &dyn Object {
        match self {
            Self::Borrowed(obj) => *obj,
            Self::Owned(obj) => &**obj,
        }
    }
}

impl Deref for ObjectRef<'_> {
    type Target = dyn Object;

    #[inline]
    fn deref(&self) -> &Self::Target {
        self.as_object()
    }
}

// -----------------------------------------------------------------------------
// Exposed

/// The result of reading a property or calling a method.
///
/// The shape is decided once, when the value leaves the object, so callers
/// switch on the variant instead of inspecting runtime types.
#[derive(Debug)]
pub enum Exposed<'a> {
    /// Plain data, including `Value::Map` for record-typed fields.
    Data(Value),
    Object(ObjectRef<'a>),
    /// A sequential list whose items may be objects.
    List(Vec<Exposed<'a>>),
}

impl<'a> Exposed<'a> {
    /// Wraps a borrowed object.
    #[inline]
    pub fn borrowed(obj: &'a dyn Object) -> Self {
        Self::Object(ObjectRef::Borrowed(obj))
    }

    /// Wraps an owned object.
    #[inline]
    pub fn owned(obj: Box<dyn Object>) -> Self {
        Self::Object(ObjectRef::Owned(obj))
    }

    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Data(value) => value.kind(),
            Self::Object(_) => ValueKind::Object,
            Self::List(_) => ValueKind::List,
        }
    }

    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Data(Value::Null))
    }

    #[inline]
    pub fn as_object(&self) -> Option<&dyn Object> {
        match self {
            Self::Object(obj) => Some(obj.as_object()),
            _ => None,
        }
    }

    /// Converts to plain data if no object is involved.
    pub fn into_value(self) -> Option<Value> {
        match self {
            Self::Data(value) => Some(value),
            Self::Object(_) => None,
            Self::List(items) => items
                .into_iter()
                .map(Exposed::into_value)
                .collect::<Option<Vec<_>>>()
                .map(Value::List),
        }
    }
}

impl From<Value> for Exposed<'_> {
    #[inline]
    fn from(value: Value) -> Self {
        Self::Data(value)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::Exposed;
    use crate::value::{Value, ValueKind};

    #[test]
    fn into_value() {
        let exposed = Exposed::List(vec![Exposed::Data(Value::Int(1)), Value::from("a").into()]);
        assert_eq!(exposed.kind(), ValueKind::List);
        assert_eq!(
            exposed.into_value(),
            Some(Value::List(vec![Value::Int(1), Value::from("a")]))
        );
    }
}
