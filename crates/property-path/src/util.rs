//! Property path utility helpers.

use serde_json::Value;

use crate::types::{PropertyPath, Segment};

/// Check if a string represents a valid non-negative integer sequence position.
///
/// # Example
///
/// ```
/// use property_path::is_valid_index;
///
/// assert!(is_valid_index("0"));
/// assert!(is_valid_index("123"));
/// assert!(!is_valid_index("-1"));
/// assert!(!is_valid_index("01"));
/// assert!(!is_valid_index("abc"));
/// ```
pub fn is_valid_index(index: &str) -> bool {
    if index.is_empty() {
        return false;
    }
    let bytes = index.as_bytes();
    // No leading zero unless it's just "0"
    if bytes.len() > 1 && bytes[0] == b'0' {
        return false;
    }
    bytes.iter().all(|&b| b.is_ascii_digit())
}

/// Read a filter literal as a JSON scalar.
///
/// `1`, `-2.5`, `true`, `null` and quoted strings keep their JSON meaning;
/// anything else, including JSON arrays and objects, is taken as plain text.
pub fn typed_literal(text: &str) -> Value {
    match serde_json::from_str::<Value>(text) {
        Ok(value @ (Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_))) => value,
        _ => Value::String(text.to_string()),
    }
}

/// Typed equality between two JSON values. Numbers compare by numeric value,
/// so `1` equals `1.0`. Two integers compare exactly.
pub fn json_scalar_equals(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Number(a), Value::Number(b)) => {
            if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
                return a == b;
            }
            if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
                return a == b;
            }
            if !a.is_f64() && !b.is_f64() {
                // One side is negative, the other above i64::MAX.
                return false;
            }
            match (a.as_f64(), b.as_f64()) {
                (Some(a), Some(b)) => a == b,
                _ => a == b,
            }
        }
        _ => left == right,
    }
}

/// Field names read by a path, in order: plain names, filter fields and
/// result fields.
pub fn get_accessed_fields(path: &PropertyPath) -> Vec<String> {
    let mut fields = Vec::new();

    for segment in path.segments() {
        fields.push(segment.name().to_string());
        if let Segment::Filtered {
            filter_field,
            result_field,
            ..
        } = segment
        {
            fields.push(filter_field.clone());
            fields.push(result_field.clone());
        }
    }

    fields
}
