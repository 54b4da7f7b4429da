use serde_core::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::value::{Record, Value};

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::Null => serializer.serialize_unit(),
            Value::Bool(v) => serializer.serialize_bool(*v),
            Value::Int(v) => serializer.serialize_i64(*v),
            Value::Float(v) => serializer.serialize_f64(*v),
            Value::String(v) => serializer.serialize_str(v),
            Value::List(items) => {
                let mut state = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    state.serialize_element(item)?;
                }
                state.end()
            }
            Value::Map(record) => record.serialize(serializer),
        }
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self.iter() {
            state.serialize_entry(key, value)?;
        }
        state.end()
    }
}

#[cfg(test)]
mod tests {
    use alloc::vec;

    use crate::value::{Record, Value};

    #[test]
    fn json_keeps_order() {
        let mut record = Record::new();
        record.insert("z", 1);
        record.insert("a", vec![Value::Bool(true), Value::Null]);
        record.insert("m", 1.5);

        let json = serde_json::to_string(&Value::Map(record)).unwrap();
        assert_eq!(json, r#"{"z":1,"a":[true,null],"m":1.5}"#);
    }
}
