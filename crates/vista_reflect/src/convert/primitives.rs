use alloc::string::String;

use crate::ConvertError;
use crate::convert::{Expose, FromDynamic, IntoExposed};
use crate::object::{Dynamic, Exposed};
use crate::value::{Record, Value};

#[inline]
fn mismatch(expected: &'static str, found: &Dynamic) -> ConvertError {
    ConvertError::Mismatch {
        expected,
        found: found.kind(),
    }
}

// -----------------------------------------------------------------------------
// Owned data: Expose clones, IntoExposed moves.

macro_rules! impl_data {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Expose for $ty {
                #[inline]
                fn expose(&self) -> Exposed<'_> {
                    Exposed::Data(Value::from(self.clone()))
                }
            }

            impl IntoExposed for $ty {
                #[inline]
                fn into_exposed(self) -> Exposed<'static> {
                    Exposed::Data(Value::from(self))
                }
            }
        )*
    };
}

impl_data!(bool, i8, i16, i32, i64, u8, u16, u32, f32, f64, String, Record);

// -----------------------------------------------------------------------------
// Wide integers: out-of-range values are exposed as floats.

macro_rules! impl_wide_int {
    ($($ty:ty),*) => {
        $(
            impl Expose for $ty {
                #[inline]
                fn expose(&self) -> Exposed<'_> {
                    (*self).into_exposed()
                }
            }

            impl IntoExposed for $ty {
                #[inline]
                fn into_exposed(self) -> Exposed<'static> {
                    Exposed::Data(i64::try_from(self).map_or(Value::Float(self as f64), Value::Int))
                }
            }
        )*
    };
}

impl_wide_int!(u64, usize, isize);

impl Expose for char {
    #[inline]
    fn expose(&self) -> Exposed<'_> {
        (*self).into_exposed()
    }
}

impl IntoExposed for char {
    #[inline]
    fn into_exposed(self) -> Exposed<'static> {
        let mut buf = [0_u8; 4];
        Exposed::Data(Value::from(&*self.encode_utf8(&mut buf)))
    }
}

impl Expose for &'static str {
    #[inline]
    fn expose(&self) -> Exposed<'_> {
        Exposed::Data(Value::from(*self))
    }
}

impl IntoExposed for &'static str {
    #[inline]
    fn into_exposed(self) -> Exposed<'static> {
        Exposed::Data(Value::from(self))
    }
}

impl Expose for Value {
    #[inline]
    fn expose(&self) -> Exposed<'_> {
        Exposed::Data(self.clone())
    }
}

impl IntoExposed for Value {
    #[inline]
    fn into_exposed(self) -> Exposed<'static> {
        Exposed::Data(self)
    }
}

// -----------------------------------------------------------------------------
// FromDynamic

macro_rules! impl_from_int {
    ($($ty:ty),*) => {
        $(
            impl FromDynamic for $ty {
                fn from_dynamic(value: Dynamic) -> Result<Self, ConvertError> {
                    match value {
                        Dynamic::Data(Value::Int(v)) => <$ty>::try_from(v).map_err(|_| {
                            ConvertError::OutOfRange {
                                target: stringify!($ty),
                                value: v,
                            }
                        }),
                        other => Err(mismatch(stringify!($ty), &other)),
                    }
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize);

impl FromDynamic for f64 {
    fn from_dynamic(value: Dynamic) -> Result<Self, ConvertError> {
        match value {
            Dynamic::Data(Value::Float(v)) => Ok(v),
            Dynamic::Data(Value::Int(v)) => Ok(v as f64),
            other => Err(mismatch("f64", &other)),
        }
    }
}

impl FromDynamic for f32 {
    fn from_dynamic(value: Dynamic) -> Result<Self, ConvertError> {
        match value {
            Dynamic::Data(Value::Float(v)) => Ok(v as f32),
            Dynamic::Data(Value::Int(v)) => Ok(v as f32),
            other => Err(mismatch("f32", &other)),
        }
    }
}

impl FromDynamic for bool {
    fn from_dynamic(value: Dynamic) -> Result<Self, ConvertError> {
        match value {
            Dynamic::Data(Value::Bool(v)) => Ok(v),
            other => Err(mismatch("bool", &other)),
        }
    }
}

impl FromDynamic for String {
    fn from_dynamic(value: Dynamic) -> Result<Self, ConvertError> {
        match value {
            Dynamic::Data(Value::String(v)) => Ok(v),
            other => Err(mismatch("string", &other)),
        }
    }
}

impl FromDynamic for char {
    fn from_dynamic(value: Dynamic) -> Result<Self, ConvertError> {
        if let Dynamic::Data(Value::String(s)) = &value {
            let mut chars = s.chars();
            if let (Some(c), None) = (chars.next(), chars.next()) {
                return Ok(c);
            }
        }
        Err(mismatch("char", &value))
    }
}

impl FromDynamic for Record {
    fn from_dynamic(value: Dynamic) -> Result<Self, ConvertError> {
        match value {
            Dynamic::Data(Value::Map(v)) => Ok(v),
            other => Err(mismatch("map", &other)),
        }
    }
}

impl FromDynamic for Value {
    /// Accepts any plain data, including lists of plain data.
    fn from_dynamic(value: Dynamic) -> Result<Self, ConvertError> {
        match value {
            Dynamic::Data(v) => Ok(v),
            Dynamic::List(items) => items
                .into_iter()
                .map(Value::from_dynamic)
                .collect::<Result<_, _>>()
                .map(Value::List),
            other @ Dynamic::Object(_) => Err(mismatch("plain data", &other)),
        }
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::String;

    use crate::ConvertError;
    use crate::convert::{FromDynamic, IntoExposed};
    use crate::object::{Dynamic, Exposed};
    use crate::value::{Value, ValueKind};

    #[test]
    fn integer_ranges() {
        assert_eq!(i8::from_dynamic(Value::Int(-128).into()), Ok(-128));
        assert_eq!(
            u16::from_dynamic(Value::Int(-1).into()),
            Err(ConvertError::OutOfRange {
                target: "u16",
                value: -1
            })
        );
        assert_eq!(
            i32::from_dynamic(Value::Float(1.0).into()),
            Err(ConvertError::Mismatch {
                expected: "i32",
                found: ValueKind::Float
            })
        );
    }

    #[test]
    fn wide_integers() {
        assert!(matches!(u64::MAX.into_exposed(), Exposed::Data(Value::Float(_))));
        assert!(matches!(7_usize.into_exposed(), Exposed::Data(Value::Int(7))));
    }

    #[test]
    fn chars() {
        assert_eq!(char::from_dynamic(Value::from("é").into()), Ok('é'));
        assert!(char::from_dynamic(Value::from("ab").into()).is_err());
        assert!(matches!('x'.into_exposed(), Exposed::Data(Value::String(s)) if s == "x"));
    }

    #[test]
    fn strings() {
        assert_eq!(
            String::from_dynamic(Dynamic::Data(Value::from("a"))),
            Ok(String::from("a"))
        );
        assert!(String::from_dynamic(Dynamic::Data(Value::Null)).is_err());
    }
}
