//! Dynamic values
//!
//! A [`Value`] is what a dynamically-typed slot can hold at runtime: the
//! fixed-width scalars the store understands, plus strings, byte payloads,
//! timestamps, lists and nested mappings. A [`Mapping`] is an ordered list of
//! `Value → Value` entries; keys are themselves dynamic so that a mapping
//! with non-string keys is representable (and rejected at inference time)
//! rather than impossible to express.

use chrono::{DateTime, Utc};

/// A dynamically-typed value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent value
    Null,
    /// Boolean (carried by dynamic data, not representable as a column)
    Bool(bool),
    /// 8-bit signed integer
    Int8(i8),
    /// 16-bit signed integer
    Int16(i16),
    /// 32-bit signed integer
    Int32(i32),
    /// 64-bit signed integer
    Int64(i64),
    /// 8-bit unsigned integer
    Uint8(u8),
    /// 16-bit unsigned integer
    Uint16(u16),
    /// 32-bit unsigned integer
    Uint32(u32),
    /// 64-bit unsigned integer
    Uint64(u64),
    /// Floating point (carried by dynamic data, not representable as a column)
    Float64(f64),
    /// UTF-8 text
    String(String),
    /// Raw byte payload
    Bytes(Vec<u8>),
    /// Wall-clock timestamp
    Timestamp(DateTime<Utc>),
    /// List of dynamic values
    List(Vec<Value>),
    /// Nested mapping
    Map(Mapping),
}

impl Value {
    /// Human-readable name of this value's runtime kind
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int8(_) => "int8",
            Value::Int16(_) => "int16",
            Value::Int32(_) => "int32",
            Value::Int64(_) => "int64",
            Value::Uint8(_) => "uint8",
            Value::Uint16(_) => "uint16",
            Value::Uint32(_) => "uint32",
            Value::Uint64(_) => "uint64",
            Value::Float64(_) => "float64",
            Value::String(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Timestamp(_) => "timestamp",
            Value::List(_) => "list",
            Value::Map(_) => "map",
        }
    }

    /// Borrow the mapping inside, if this value is one
    pub fn as_mapping(&self) -> Option<&Mapping> {
        match self {
            Value::Map(mapping) => Some(mapping),
            _ => None,
        }
    }
}

// ============================================================================
// Mapping
// ============================================================================

/// An ordered list of dynamic key/value entries
///
/// Entry order is insertion order; it carries no meaning for schema
/// inference, which canonicalizes by sorting column names.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mapping {
    entries: Vec<(Value, Value)>,
}

impl Mapping {
    /// Create an empty mapping
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an entry
    pub fn insert(&mut self, key: impl Into<Value>, value: impl Into<Value>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Iterate entries in insertion order
    pub fn entries(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    /// Look up the first entry with the given string key
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.entries.iter().find_map(|(k, v)| match k {
            Value::String(s) if s == key => Some(v),
            _ => None,
        })
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for Mapping {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

// ============================================================================
// Conversions
// ============================================================================

macro_rules! value_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::$variant(v)
                }
            }
        )*
    };
}

value_from! {
    bool => Bool,
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    u8 => Uint8,
    u16 => Uint16,
    u32 => Uint32,
    u64 => Uint64,
    f64 => Float64,
    String => String,
    Vec<u8> => Bytes,
    DateTime<Utc> => Timestamp,
    Vec<Value> => List,
    Mapping => Map,
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<&[u8]> for Value {
    fn from(v: &[u8]) -> Self {
        Value::Bytes(v.to_vec())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Value::Int64(i)
                } else if let Some(u) = n.as_u64() {
                    Value::Uint64(u)
                } else {
                    Value::Float64(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => {
                Value::List(items.into_iter().map(Value::from).collect())
            }
            serde_json::Value::Object(map) => {
                Value::Map(map.into_iter().map(|(k, v)| (k, Value::from(v))).collect())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_mapping_insert_and_get() {
        let mut map = Mapping::new();
        map.insert("a", 1i64);
        map.insert("b", "text");

        assert_eq!(map.len(), 2);
        assert_eq!(map.get("a"), Some(&Value::Int64(1)));
        assert_eq!(map.get("b"), Some(&Value::String("text".to_string())));
        assert_eq!(map.get("missing"), None);
    }

    #[test]
    fn test_value_kind() {
        assert_eq!(Value::Null.kind(), "null");
        assert_eq!(Value::Int32(7).kind(), "int32");
        assert_eq!(Value::Bytes(vec![0xff]).kind(), "bytes");
        assert_eq!(Value::Map(Mapping::new()).kind(), "map");
    }

    #[test]
    fn test_from_json_scalars() {
        assert_eq!(Value::from(json!(null)), Value::Null);
        assert_eq!(Value::from(json!(42)), Value::Int64(42));
        assert_eq!(Value::from(json!(-1)), Value::Int64(-1));
        assert_eq!(Value::from(json!(u64::MAX)), Value::Uint64(u64::MAX));
        assert_eq!(Value::from(json!(1.5)), Value::Float64(1.5));
        assert_eq!(Value::from(json!("x")), Value::String("x".to_string()));
    }

    #[test]
    fn test_from_json_object() {
        let value = Value::from(json!({"id": 1, "tags": ["a", "b"]}));
        let map = value.as_mapping().unwrap();

        assert_eq!(map.get("id"), Some(&Value::Int64(1)));
        assert_eq!(
            map.get("tags"),
            Some(&Value::List(vec![
                Value::String("a".to_string()),
                Value::String("b".to_string()),
            ]))
        );
    }
}
