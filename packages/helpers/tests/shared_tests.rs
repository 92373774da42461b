//! Debug formatting of shared handles

use saslmech_helpers::{Record, Shared, Value};

#[test]
fn test_self_referencing_record_formats() {
    let config = Shared::new(Record::new());
    config.write().insert("self", Value::Record(config.clone()));
    config.write().insert("user", "alice");

    let rendered = format!("{config:?}");
    assert!(rendered.contains("[Circular]"));
    assert!(rendered.contains("alice"));
}

#[test]
fn test_repeated_handle_is_not_circular() {
    let inner = Shared::new(Record::from_iter([("n", 1)]));
    let outer = Shared::new(Record::from_iter([
        ("a", Value::Record(inner.clone())),
        ("b", Value::Record(inner)),
    ]));

    let rendered = format!("{outer:?}");
    assert!(!rendered.contains("[Circular]"));
    assert_eq!(rendered.matches("Number(1.0)").count(), 2);
}

#[test]
fn test_mutually_referencing_arrays_format() {
    let left = Shared::new(Vec::new());
    let right = Shared::new(vec![Value::Array(left.clone())]);
    left.write().push(Value::Array(right.clone()));

    let rendered = format!("{left:?}");
    assert_eq!(rendered.matches("[Circular]").count(), 1);
}
