//! Conversions into `Value` from plain Rust types and `serde_json`

use std::collections::BTreeMap;

use crate::value::Value;

impl From<bool> for Value {
    fn from(b: bool) -> Value {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Value {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Value {
        Value::Int(i64::from(i))
    }
}

impl From<u32> for Value {
    fn from(i: u32) -> Value {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Value {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Value {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Value {
        Value::Str(s)
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Value {
        Value::seq_from(items)
    }
}

impl From<BTreeMap<String, Value>> for Value {
    fn from(entries: BTreeMap<String, Value>) -> Value {
        Value::map_from(entries)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Value {
        match opt {
            Some(v) => v.into(),
            None => Value::Null,
        }
    }
}

/// In-memory conversion from a parsed JSON document.
///
/// Objects become mapping containers, arrays become sequence containers,
/// numbers become `Int` when representable as `i64` and `Float` otherwise.
/// Text parsing and serialization stay outside this crate.
impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => match n.as_i64() {
                Some(i) => Value::Int(i),
                None => n.as_f64().map_or(Value::Null, Value::Float),
            },
            serde_json::Value::String(s) => Value::Str(s),
            serde_json::Value::Array(items) => {
                Value::seq_from(items.into_iter().map(Value::from))
            }
            serde_json::Value::Object(entries) => {
                Value::map_from(entries.into_iter().map(|(k, v)| (k, Value::from(v))))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::Kind;
    use serde_json::json;

    #[test]
    fn scalar_conversions() {
        assert_eq!(Value::from(true), Value::Bool(true));
        assert_eq!(Value::from(7i64), Value::Int(7));
        assert_eq!(Value::from(7i32), Value::Int(7));
        assert_eq!(Value::from(1.5), Value::Float(1.5));
        assert_eq!(Value::from("hi"), Value::Str("hi".to_string()));
        assert_eq!(Value::from(None::<i64>), Value::Null);
        assert_eq!(Value::from(Some("x")), Value::Str("x".to_string()));
    }

    #[test]
    fn json_objects_become_mappings() {
        let v = Value::from(json!({"a": 1, "b": [true, null]}));

        assert_eq!(v.kind(), Kind::Mapping);
        let map = v.as_map().unwrap().borrow();
        assert_eq!(map.get("a"), Some(&Value::Int(1)));
        let b = map.get("b").unwrap();
        assert_eq!(b.kind(), Kind::Sequence);
        assert_eq!(
            *b.as_seq().unwrap().borrow(),
            vec![Value::Bool(true), Value::Null]
        );
    }

    #[test]
    fn json_numbers_prefer_int() {
        assert_eq!(Value::from(json!(42)), Value::Int(42));
        assert_eq!(Value::from(json!(-42)), Value::Int(-42));
        assert_eq!(Value::from(json!(0.25)), Value::Float(0.25));
        // u64 beyond i64 range degrades to float
        assert_eq!(
            Value::from(json!(u64::MAX)),
            Value::Float(u64::MAX as f64)
        );
    }

    #[test]
    fn nested_json_converts_recursively() {
        let v = Value::from(json!({"outer": {"inner": [{"leaf": "x"}]}}));

        let outer = v.as_map().unwrap().borrow().get("outer").cloned().unwrap();
        let inner = outer
            .as_map()
            .unwrap()
            .borrow()
            .get("inner")
            .cloned()
            .unwrap();
        let first = inner.as_seq().unwrap().borrow()[0].clone();
        assert_eq!(
            first.as_map().unwrap().borrow().get("leaf"),
            Some(&Value::Str("x".to_string()))
        );
    }
}
