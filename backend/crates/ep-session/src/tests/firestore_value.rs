use crate::adapters::firestore_value::{
    decode_fields, decode_value, document_id, encode_fields, encode_value,
};

use googletest::assert_that;
use googletest::prelude::*;
use serde_json::{Value, json};

#[test]
fn given_scalars_when_encoded_then_typed_wrappers() {
    assert_eq!(encode_value(&json!("a")), json!({ "stringValue": "a" }));
    assert_eq!(encode_value(&json!(true)), json!({ "booleanValue": true }));
    assert_eq!(encode_value(&json!(42)), json!({ "integerValue": "42" }));
    assert_eq!(encode_value(&json!(1.5)), json!({ "doubleValue": 1.5 }));
    assert_eq!(encode_value(&Value::Null), json!({ "nullValue": null }));
}

#[test]
fn given_timestamp_string_when_encoded_then_stays_string_value() {
    let encoded = encode_value(&json!("2024-05-01T10:00:00Z"));

    assert_eq!(encoded, json!({ "stringValue": "2024-05-01T10:00:00Z" }));
}

#[test]
fn given_nested_profile_when_encoded_then_map_and_array_values() {
    let object = json!({
        "role": "student",
        "profile": { "firstName": "Ada", "tags": ["x", 1] }
    });

    let fields = encode_fields(object.as_object().unwrap());

    assert_eq!(
        Value::Object(fields),
        json!({
            "role": { "stringValue": "student" },
            "profile": { "mapValue": { "fields": {
                "firstName": { "stringValue": "Ada" },
                "tags": { "arrayValue": { "values": [
                    { "stringValue": "x" },
                    { "integerValue": "1" }
                ] } }
            } } }
        })
    );
}

#[test]
fn given_firestore_document_when_decoded_then_plain_json() {
    let fields = json!({
        "uid": { "stringValue": "u1" },
        "emailVerified": { "booleanValue": false },
        "createdAt": { "timestampValue": "2024-05-01T10:00:00.123456Z" },
        "count": { "integerValue": "7" },
        "score": { "doubleValue": 2.5 },
        "profile": { "mapValue": { "fields": { "fullName": { "stringValue": "Root" } } } },
        "list": { "arrayValue": {} },
        "gone": { "nullValue": null }
    });

    let decoded = Value::Object(decode_fields(Some(&fields)));

    assert_eq!(
        decoded,
        json!({
            "uid": "u1",
            "emailVerified": false,
            "createdAt": "2024-05-01T10:00:00.123456Z",
            "count": 7,
            "score": 2.5,
            "profile": { "fullName": "Root" },
            "list": [],
            "gone": null
        })
    );
}

#[test]
fn given_empty_map_value_when_decoded_then_empty_object() {
    let decoded = decode_value(&json!({ "mapValue": {} }));

    assert_eq!(decoded, json!({}));
}

#[test]
fn given_unknown_wrapper_when_decoded_then_null() {
    assert_eq!(decode_value(&json!({ "geoPointValue": { "latitude": 1 } })), Value::Null);
    assert_eq!(decode_value(&json!("bare")), Value::Null);
}

#[test]
fn given_missing_fields_when_decoded_then_empty() {
    assert_that!(decode_fields(None).len(), eq(0));
}

#[test]
fn given_document_name_then_last_segment_is_id() {
    assert_that!(
        document_id("projects/p/databases/(default)/documents/institutions/abc"),
        eq("abc")
    );
    assert_that!(document_id("abc"), eq("abc"));
}
