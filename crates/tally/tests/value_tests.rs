//! Value conversions, display and serialization

use pretty_assertions::assert_eq;
use tally::error::type_name;
use tally::*;

#[test]
fn test_from_conversions() {
    assert_eq!(Value::from(3), Value::Int(3));
    assert_eq!(Value::from(3i64), Value::Int(3));
    assert_eq!(Value::from(1.5), Value::Float(1.5));
    assert_eq!(Value::from("a"), Value::text("a"));
    assert_eq!(Value::from(String::from("b")), Value::text("b"));
}

#[test]
fn test_type_name() {
    assert_eq!(type_name(&Value::Int(0)), "int");
    assert_eq!(type_name(&Value::Float(0.0)), "float");
    assert_eq!(type_name(&Value::text("")), "str");
}

#[test]
fn test_extractors() {
    assert_eq!(Value::Int(2).as_f64(), Some(2.0));
    assert_eq!(Value::Float(2.0).as_i64(), None);
    assert_eq!(Value::text("x").as_str(), Some("x"));
    assert!(Value::Float(1.0).is_numeric());
    assert!(!Value::text("1").is_numeric());
}

#[test]
fn test_serialize_untagged() {
    assert_eq!(serde_json::to_string(&Value::Int(15)).unwrap(), "15");
    assert_eq!(serde_json::to_string(&Value::Float(5.0)).unwrap(), "5.0");
    assert_eq!(serde_json::to_string(&Value::text("a")).unwrap(), "\"a\"");
}

#[test]
fn test_deserialize_untagged() {
    let v: Value = serde_json::from_str("7").unwrap();
    assert_eq!(v, Value::Int(7));
    let v: Value = serde_json::from_str("7.5").unwrap();
    assert_eq!(v, Value::Float(7.5));
}
