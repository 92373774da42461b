//! One-level cloning and record merging for layered configuration

use crate::value::{Record, Shared, Value};
use saslmech_common::LoggingTransformer;

/// Copy a value so the copy shares no top-level mutable state with it
///
/// | input                      | result                                     |
/// |----------------------------|--------------------------------------------|
/// | scalars, strings           | returned as-is                             |
/// | resolvers, deferreds       | the same function / computation            |
/// | binary buffers             | copied                                     |
/// | arrays, records            | new container, elements **shared**         |
/// | dates                      | new date, same instant                     |
/// | patterns                   | new pattern, same source, flags and `last_index` |
///
/// Containers are copied one level deep only: a record nested inside a
/// cloned record is the same record in both.
#[must_use]
pub fn clone_value(orig: &Value) -> Value {
    match orig {
        Value::Array(items) => Value::array(items.snapshot()),
        Value::Record(record) => Value::record(record.snapshot()),
        Value::Date(at) => Value::date(*at.read()),
        Value::Pattern(pattern) => Value::pattern(pattern.snapshot()),
        other => other.clone(),
    }
}

/// Apply every key of `source` onto `target` and return `target`
///
/// Keys bound to [`Value::Undefined`] in `source` are removed from
/// `target`; all others are set to [`clone_value`] of the source value.
/// Keys only present in `target` are untouched and `source` is never
/// modified. A missing `target` starts from an empty record.
pub fn extend(target: Option<Shared<Record>>, source: Option<&Shared<Record>>) -> Shared<Record> {
    let target = target.unwrap_or_default();
    let Some(source) = source else {
        return target;
    };

    // no lock may be held while cloning: a value can be `target` itself
    let entries: Vec<(String, Value)> = source
        .read()
        .iter()
        .map(|(key, value)| (key.to_string(), value.clone()))
        .collect();
    let updates: Vec<(String, Value)> = entries
        .into_iter()
        .map(|(key, value)| (key, clone_value(&value)))
        .collect();

    let mut record = target.write();
    for (key, value) in updates {
        if value.is_undefined() {
            if record.remove(&key).is_some() {
                LoggingTransformer::log_key_removed(&key);
            }
        } else {
            record.insert(key, value);
        }
    }
    drop(record);

    target
}
