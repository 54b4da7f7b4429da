use alloc::string::{String, ToString};
use core::fmt;

use vista_reflect::value::Value;

/// A scalar conversion applied to a raw value before it is written.
///
/// [`Value::Null`] passes through every coercion unchanged; lists and maps
/// cannot be coerced.
///
/// # Examples
///
/// ```
/// use vista_serializer::metadata::Coercion;
/// use vista_reflect::value::Value;
///
/// let int = Coercion::from_tag("int");
/// assert_eq!(int.apply(Value::from("42")), Ok(Value::Int(42)));
/// assert_eq!(int.apply(Value::Int(42)), Ok(Value::Int(42)));
/// assert_eq!(int.apply(Value::from(" 3.7 ")), Ok(Value::Int(3)));
/// assert!(int.apply(Value::from("abc")).is_err());
///
/// let unknown = Coercion::from_tag("datetime");
/// assert_eq!(unknown.apply(Value::from("abc")), Ok(Value::from("abc")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Coercion {
    Int,
    Float,
    /// An unrecognized tag; values are left unchanged.
    Unknown(String),
}

impl Coercion {
    /// Parses a configuration tag. Unrecognized tags become [`Coercion::Unknown`].
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "int" | "integer" => Self::Int,
            "float" | "double" => Self::Float,
            other => Self::Unknown(other.to_string()),
        }
    }

    #[inline]
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown(_))
    }

    /// Converts `value`, returning it back as the error if it does not fit.
    pub fn apply(&self, value: Value) -> Result<Value, Value> {
        if value.is_null() {
            return Ok(value);
        }
        match self {
            Self::Int => to_int(value),
            Self::Float => to_float(value),
            Self::Unknown(_) => Ok(value),
        }
    }
}

impl fmt::Display for Coercion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int => f.write_str("int"),
            Self::Float => f.write_str("float"),
            Self::Unknown(tag) => write!(f, "`{tag}`"),
        }
    }
}

// -----------------------------------------------------------------------------
// Conversions

fn truncate(v: f64) -> Option<i64> {
    // `i64::MAX as f64` rounds up to 2^63, which is already out of range.
    (v.is_finite() && v >= i64::MIN as f64 && v < i64::MAX as f64).then_some(v as i64)
}

fn to_int(value: Value) -> Result<Value, Value> {
    if matches!(value, Value::Int(_)) {
        return Ok(value);
    }
    let int = match &value {
        Value::Float(v) => truncate(*v),
        Value::Bool(v) => Some(i64::from(*v)),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>()
                .ok()
                .or_else(|| s.parse::<f64>().ok().and_then(truncate))
        }
        _ => None,
    };
    int.map(Value::Int).ok_or(value)
}

fn to_float(value: Value) -> Result<Value, Value> {
    if matches!(value, Value::Float(_)) {
        return Ok(value);
    }
    let float = match &value {
        Value::Int(v) => Some(*v as f64),
        Value::Bool(v) => Some(if *v { 1.0 } else { 0.0 }),
        Value::String(s) => s.trim().parse::<f64>().ok(),
        _ => None,
    };
    float.map(Value::Float).ok_or(value)
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use super::Coercion;
    use vista_reflect::value::Value;

    #[test]
    fn tags() {
        assert_eq!(Coercion::from_tag("integer"), Coercion::Int);
        assert_eq!(Coercion::from_tag("double"), Coercion::Float);
        assert!(Coercion::from_tag("Int").is_unknown());
    }

    #[test]
    fn null_passes_through() {
        for coercion in [Coercion::Int, Coercion::Float] {
            assert_eq!(coercion.apply(Value::Null), Ok(Value::Null));
        }
    }

    #[test]
    fn containers_fail() {
        let list = Value::from(vec![1]);
        assert_eq!(Coercion::Int.apply(list.clone()), Err(list));
    }

    #[test]
    fn conversions() {
        assert_eq!(Coercion::Float.apply(Value::from("2.5")), Ok(Value::Float(2.5)));
        assert_eq!(Coercion::Float.apply(Value::Int(2)), Ok(Value::Float(2.0)));
        assert_eq!(Coercion::Int.apply(Value::Float(-1.9)), Ok(Value::Int(-1)));
        assert!(Coercion::Int.apply(Value::Float(f64::NAN)).is_err());
    }

    #[test]
    fn other_tags_leave_values_unchanged() {
        for tag in ["bool", "boolean", "string"] {
            let coercion = Coercion::from_tag(tag);
            assert!(coercion.is_unknown());
            assert_eq!(coercion.apply(Value::Int(42)), Ok(Value::Int(42)));
            assert_eq!(coercion.apply(Value::from("maybe")), Ok(Value::from("maybe")));
        }
    }
}
