use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::{self, Formatter};

use serde_core::de::{Deserialize, Deserializer, Error, MapAccess, SeqAccess, Visitor};

use crate::value::{Record, Value};

// -----------------------------------------------------------------------------
// Value

struct ValueVisitor;

impl<'de> Visitor<'de> for ValueVisitor {
    type Value = Value;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("any plain data value")
    }

    #[inline]
    fn visit_bool<E: Error>(self, v: bool) -> Result<Value, E> {
        Ok(Value::Bool(v))
    }

    #[inline]
    fn visit_i64<E: Error>(self, v: i64) -> Result<Value, E> {
        Ok(Value::Int(v))
    }

    /// Integers beyond `i64::MAX` fall back to a float.
    #[inline]
    fn visit_u64<E: Error>(self, v: u64) -> Result<Value, E> {
        Ok(i64::try_from(v).map_or(Value::Float(v as f64), Value::Int))
    }

    #[inline]
    fn visit_f64<E: Error>(self, v: f64) -> Result<Value, E> {
        Ok(Value::Float(v))
    }

    #[inline]
    fn visit_char<E: Error>(self, v: char) -> Result<Value, E> {
        let mut buf = [0_u8; 4];
        Ok(Value::String(v.encode_utf8(&mut buf).into()))
    }

    #[inline]
    fn visit_str<E: Error>(self, v: &str) -> Result<Value, E> {
        Ok(Value::String(v.into()))
    }

    #[inline]
    fn visit_string<E: Error>(self, v: String) -> Result<Value, E> {
        Ok(Value::String(v))
    }

    #[inline]
    fn visit_unit<E: Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    #[inline]
    fn visit_none<E: Error>(self) -> Result<Value, E> {
        Ok(Value::Null)
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<Value, D::Error> {
        Value::deserialize(deserializer)
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Value, A::Error> {
        let mut items = Vec::with_capacity(seq.size_hint().unwrap_or_default().min(256));
        while let Some(item) = seq.next_element::<Value>()? {
            items.push(item);
        }
        Ok(Value::List(items))
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Value, A::Error> {
        RecordVisitor.visit_map(map).map(Value::Map)
    }
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(ValueVisitor)
    }
}

// -----------------------------------------------------------------------------
// Record

struct RecordVisitor;

impl<'de> Visitor<'de> for RecordVisitor {
    type Value = Record;

    fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str("a map with string keys")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Record, A::Error> {
        let mut record = Record::with_capacity(map.size_hint().unwrap_or_default().min(256));
        while let Some((key, value)) = map.next_entry::<String, Value>()? {
            record.insert(key, value);
        }
        Ok(record)
    }
}

impl<'de> Deserialize<'de> for Record {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(RecordVisitor)
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec::Vec;

    use crate::value::{Record, Value};

    #[test]
    fn from_json() {
        let value: Value =
            serde_json::from_str(r#"{"b": 1, "a": [1.5, "x", null, true], "c": {"d": -2}}"#)
                .unwrap();

        let record = value.as_map().unwrap();
        assert_eq!(record.keys().collect::<Vec<_>>(), ["b", "a", "c"]);
        assert_eq!(record.get("b"), Some(&Value::Int(1)));

        let list = record.get("a").unwrap().as_list().unwrap();
        assert_eq!(list[0], Value::Float(1.5));
        assert_eq!(list[1], Value::from("x"));
        assert!(list[2].is_null());
        assert_eq!(list[3], Value::Bool(true));

        let nested = record.get("c").unwrap().as_map().unwrap();
        assert_eq!(nested.get("d"), Some(&Value::Int(-2)));
    }

    #[test]
    fn huge_unsigned_becomes_float() {
        let value: Value = serde_json::from_str("18446744073709551615").unwrap();
        assert_eq!(value, Value::Float(u64::MAX as f64));
    }

    #[test]
    fn from_ron() {
        let record: Record = ron::from_str(r#"{ "id": 3, "name": "Ada" }"#).unwrap();
        assert_eq!(record.get("id"), Some(&Value::Int(3)));
        assert_eq!(record.get("name"), Some(&Value::from("Ada")));
    }
}
