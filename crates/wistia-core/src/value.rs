use serde_json::{Map, Value};

use crate::Payload;

/// Integer field. Floats, booleans and numeric strings do not count.
pub fn int(map: &Payload, key: &str) -> Option<i64> {
    match map.get(key)? {
        Value::Number(n) => n.as_i64(),
        _ => None,
    }
}

/// Any JSON number, integral or not.
pub fn float(map: &Payload, key: &str) -> Option<f64> {
    match map.get(key)? {
        Value::Number(n) => n.as_f64(),
        _ => None,
    }
}

pub fn string<'a>(map: &'a Payload, key: &str) -> Option<&'a str> {
    map.get(key)?.as_str()
}

/// Owned copy of a string field, for record construction.
pub fn owned_string(map: &Payload, key: &str) -> Option<String> {
    string(map, key).map(str::to_string)
}

pub fn boolean(map: &Payload, key: &str) -> Option<bool> {
    map.get(key)?.as_bool()
}

pub fn object<'a>(map: &'a Payload, key: &str) -> Option<&'a Map<String, Value>> {
    map.get(key)?.as_object()
}

/// A list field, keeping only the elements that are maps.
///
/// Returns `None` when the key is missing or does not hold an array, so callers
/// can tell "absent" apart from "present but empty".
pub fn object_list<'a>(map: &'a Payload, key: &str) -> Option<Vec<&'a Payload>> {
    let items = map.get(key)?.as_array()?;
    Some(items.iter().filter_map(Value::as_object).collect())
}

/// Try each alias in order with the given extractor; first hit wins.
pub fn first_of<'a, T>(
    map: &'a Payload,
    aliases: &[&str],
    extract: impl Fn(&'a Payload, &str) -> Option<T>,
) -> Option<T> {
    aliases.iter().find_map(|key| extract(map, key))
}
