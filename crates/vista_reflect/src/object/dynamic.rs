use alloc::boxed::Box;
use alloc::vec::Vec;

use crate::Object;
use crate::value::{Value, ValueKind};

/// A value being written into a property.
///
/// Denormalization produces `Dynamic::Object` for nested records that were
/// instantiated as a class, and `Dynamic::Data` for everything else.
#[derive(Debug)]
pub enum Dynamic {
    Data(Value),
    Object(Box<dyn Object>),
    List(Vec<Dynamic>),
}

impl Dynamic {
    /// Boxes a concrete object.
    #[inline]
    pub fn object<T: Object>(obj: T) -> Self {
        Self::Object(Box::new(obj))
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
}

impl From<Value> for Dynamic {
    #[inline]
    fn from(value: Value) -> Self {
        Self::Data(value)
    }
}

impl From<Box<dyn Object>> for Dynamic {
    #[inline]
    fn from(obj: Box<dyn Object>) -> Self {
        Self::Object(obj)
    }
}
