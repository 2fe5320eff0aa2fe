//! Conversion between plain JSON and Firestore's typed value encoding.
//!
//! Firestore wraps every value in a single-key object naming its type:
//! `{"stringValue": "a"}`, `{"integerValue": "42"}`, `{"mapValue": {"fields": {..}}}`.
//! Encoding never produces `timestampValue`: RFC 3339 strings stay strings,
//! which is how the portal writes its own timestamps. Decoding accepts it and
//! yields the timestamp string.

use serde_json::{Map, Number, Value};

/// JSON object -> Firestore `fields` map.
pub fn encode_fields(object: &Map<String, Value>) -> Map<String, Value> {
    object
        .iter()
        .map(|(key, value)| (key.clone(), encode_value(value)))
        .collect()
}

pub fn encode_value(value: &Value) -> Value {
    let mut typed = Map::new();

    match value {
        Value::Null => {
            typed.insert("nullValue".into(), Value::Null);
        }
        Value::Bool(b) => {
            typed.insert("booleanValue".into(), Value::Bool(*b));
        }
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                typed.insert("integerValue".into(), Value::String(i.to_string()));
            } else if let Some(u) = n.as_u64() {
                typed.insert("integerValue".into(), Value::String(u.to_string()));
            } else {
                typed.insert("doubleValue".into(), value.clone());
            }
        }
        Value::String(s) => {
            typed.insert("stringValue".into(), Value::String(s.clone()));
        }
        Value::Array(items) => {
            let values = items.iter().map(encode_value).collect();
            let mut array = Map::new();
            array.insert("values".into(), Value::Array(values));
            typed.insert("arrayValue".into(), Value::Object(array));
        }
        Value::Object(object) => {
            let mut map = Map::new();
            map.insert("fields".into(), Value::Object(encode_fields(object)));
            typed.insert("mapValue".into(), Value::Object(map));
        }
    }

    Value::Object(typed)
}

/// Firestore `fields` map -> JSON object. A missing map decodes as empty.
pub fn decode_fields(fields: Option<&Value>) -> Map<String, Value> {
    fields
        .and_then(Value::as_object)
        .map(|fields| {
            fields
                .iter()
                .map(|(key, value)| (key.clone(), decode_value(value)))
                .collect()
        })
        .unwrap_or_default()
}

/// Unknown or malformed type wrappers decode as `null`.
pub fn decode_value(value: &Value) -> Value {
    let Some((kind, inner)) = value.as_object().and_then(|o| o.iter().next()) else {
        return Value::Null;
    };

    match kind.as_str() {
        "stringValue" | "timestampValue" | "referenceValue" => inner.clone(),
        "booleanValue" => inner.clone(),
        "integerValue" => match inner {
            Value::String(s) => s
                .parse::<i64>()
                .map(|i| Value::Number(i.into()))
                .unwrap_or(Value::Null),
            Value::Number(_) => inner.clone(),
            _ => Value::Null,
        },
        "doubleValue" => match inner {
            Value::Number(_) => inner.clone(),
            // NaN and infinities arrive as strings and have no JSON form
            Value::String(s) => s
                .parse::<f64>()
                .ok()
                .and_then(Number::from_f64)
                .map(Value::Number)
                .unwrap_or(Value::Null),
            _ => Value::Null,
        },
        "mapValue" => Value::Object(decode_fields(inner.get("fields"))),
        "arrayValue" => Value::Array(
            inner
                .get("values")
                .and_then(Value::as_array)
                .map(|values| values.iter().map(decode_value).collect())
                .unwrap_or_default(),
        ),
        _ => Value::Null,
    }
}

/// Last path segment of a document name: `projects/p/.../institutions/abc` -> `abc`.
pub fn document_id(name: &str) -> &str {
    name.rsplit('/').next().unwrap_or(name)
}
