//! Coercion of values into sequences

use saslmech_helpers::{make_array, Pattern, Record, Value};

#[test]
fn test_falsy_inputs_give_empty_sequence() {
    for falsy in [
        Value::Undefined,
        Value::Null,
        Value::Bool(false),
        Value::from(0),
        Value::Number(f64::NAN),
        Value::from(""),
    ] {
        assert!(make_array(&falsy).is_empty(), "{falsy:?}");
    }
}

#[test]
fn test_array_gives_same_elements() {
    let items = vec![Value::from(1), Value::from("two"), Value::Null];
    let array = Value::array(items.clone());

    let result = make_array(&array);
    assert_eq!(result.len(), 3);
    assert_eq!(result, items);
}

#[test]
fn test_empty_array_is_truthy_and_stays_empty() {
    assert!(make_array(&Value::array(Vec::new())).is_empty());
}

#[test]
fn test_array_elements_keep_identity() {
    let nested = Value::record(Record::new());
    let result = make_array(&Value::array(vec![nested.clone()]));
    assert_eq!(result[0], nested);
}

#[test]
fn test_array_like_record_is_materialized() {
    let record: Record = [
        ("0", Value::from("a")),
        ("1", Value::from("b")),
        ("length", Value::from(3)),
        ("extra", Value::from(true)),
    ]
    .into_iter()
    .collect();

    let result = make_array(&Value::record(record));
    assert_eq!(
        result,
        vec![Value::from("a"), Value::from("b"), Value::Undefined]
    );
}

#[test]
fn test_bytes_are_array_like() {
    let result = make_array(&Value::from(vec![1u8, 255]));
    assert_eq!(result, vec![Value::from(1), Value::from(255)]);
}

#[test]
fn test_scalars_are_wrapped() {
    let cases = [
        Value::from(42),
        Value::from("text"),
        Value::Bool(true),
        Value::function(|_, _| Ok(Value::Null)),
    ];
    for scalar in cases {
        let result = make_array(&scalar);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0], scalar);
    }
}

#[test]
fn test_plain_record_is_wrapped_not_sliced() {
    let record = Value::record(Record::from_iter([("a", 1)]));
    let result = make_array(&record);
    assert_eq!(result, vec![record]);
}

#[test]
fn test_pattern_is_wrapped() -> saslmech_helpers::Result<()> {
    let pattern = Value::pattern(Pattern::new("^n=", "")?);
    assert_eq!(make_array(&pattern), vec![pattern]);
    Ok(())
}

#[test]
fn test_unmaterializable_length_wraps_record() {
    for length in [
        Value::Number(f64::INFINITY),
        Value::from(1e18),
        Value::from("1e18"),
    ] {
        let record = Value::record(Record::from_iter([
            ("0", Value::from("a")),
            ("length", length),
        ]));
        assert_eq!(make_array(&record), vec![record]);
    }
}
