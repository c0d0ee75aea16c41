//! Conversions between [`PackValue`] and `serde_json::Value`.
//!
//! JSON has no binary, extension, or non-string-key notion, so the mapping
//! is lossy in one direction: `Bin` and `Ext` payloads render as
//! `data:application/octet-stream;base64,` URI strings, non-string map
//! keys are stringified through their JSON rendering, and `Str` payloads
//! that are not valid UTF-8 render with U+FFFD replacements.

use base64::Engine;

use crate::{OrderedMap, PackValue};

const BIN_URI_START: &str = "data:application/octet-stream;base64,";

fn data_uri(bytes: &[u8]) -> serde_json::Value {
    let b64 = base64::engine::general_purpose::STANDARD.encode(bytes);
    serde_json::Value::String(format!("{BIN_URI_START}{b64}"))
}

impl From<serde_json::Value> for PackValue {
    fn from(v: serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => PackValue::Nil,
            serde_json::Value::Bool(b) => PackValue::Bool(b),
            serde_json::Value::Number(n) => {
                if let Some(u) = n.as_u64() {
                    PackValue::UInt(u)
                } else if let Some(i) = n.as_i64() {
                    PackValue::Int(i)
                } else {
                    PackValue::Float64(n.as_f64().unwrap_or(0.0))
                }
            }
            serde_json::Value::String(s) => PackValue::Str(s.into()),
            serde_json::Value::Array(items) => {
                PackValue::Array(items.into_iter().map(PackValue::from).collect())
            }
            serde_json::Value::Object(fields) => {
                let mut map = OrderedMap::new();
                for (k, v) in fields {
                    map.push_back(PackValue::Str(k.into()), PackValue::from(v))
                        .expect("JSON object keys are unique");
                }
                PackValue::Map(map)
            }
        }
    }
}

impl From<PackValue> for serde_json::Value {
    fn from(v: PackValue) -> Self {
        match v {
            PackValue::Nil => serde_json::Value::Null,
            PackValue::Bool(b) => serde_json::Value::Bool(b),
            PackValue::Int(i) => serde_json::json!(i),
            PackValue::UInt(u) => serde_json::json!(u),
            PackValue::Float32(f) => serde_json::json!(f),
            PackValue::Float64(f) => serde_json::json!(f),
            PackValue::Str(s) => serde_json::Value::String(s.to_string_lossy().into_owned()),
            PackValue::Bin(b) => data_uri(&b),
            PackValue::Array(items) => {
                serde_json::Value::Array(items.into_iter().map(serde_json::Value::from).collect())
            }
            PackValue::Map(map) => {
                let mut fields = serde_json::Map::with_capacity(map.len());
                for (k, v) in map {
                    let key = match k {
                        PackValue::Str(s) => s.to_string_lossy().into_owned(),
                        other => serde_json::Value::from(other).to_string(),
                    };
                    fields.insert(key, serde_json::Value::from(v));
                }
                serde_json::Value::Object(fields)
            }
            PackValue::Ext(ext) => data_uri(&ext.data),
        }
    }
}
