//! [`Reflect`] for `serde_json::Value`, the dynamic keyed-map representation.
//!
//! Object keys act as field names, arrays are sequences indexed by position,
//! and `null` is an absent value.

use std::borrow::Cow;

use serde_json::Value;

use crate::reflect::{KeyLookup, Reflect};
use crate::util::is_valid_index;

impl Reflect for Value {
    fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
            Value::Array(_) => "array",
            Value::Object(_) => "object",
        }
    }

    fn field(&self, name: &str) -> Option<&dyn Reflect> {
        match self {
            Value::Object(map) => map.get(name).map(|value| value as &dyn Reflect),
            _ => None,
        }
    }

    fn is_absent(&self) -> bool {
        self.is_null()
    }

    fn lookup_key(&self, key: &str) -> KeyLookup<'_> {
        match self {
            Value::Object(map) => match map.get(key) {
                Some(value) => KeyLookup::Found(value),
                None => KeyLookup::Missing,
            },
            Value::Array(arr) => {
                if !is_valid_index(key) {
                    return KeyLookup::Missing;
                }
                match key.parse::<usize>().ok().and_then(|idx| arr.get(idx)) {
                    Some(value) => KeyLookup::Found(value),
                    None => KeyLookup::Missing,
                }
            }
            _ => KeyLookup::Unsupported,
        }
    }

    fn elements(&self) -> Option<Box<dyn Iterator<Item = &dyn Reflect> + '_>> {
        match self {
            Value::Array(arr) => Some(Box::new(arr.iter().map(|value| value as &dyn Reflect))),
            _ => None,
        }
    }

    fn as_text(&self) -> Option<Cow<'_, str>> {
        match self {
            Value::String(s) => Some(Cow::Borrowed(s.as_str())),
            Value::Number(n) => Some(Cow::Owned(n.to_string())),
            Value::Bool(b) => Some(Cow::Owned(b.to_string())),
            Value::Null | Value::Array(_) | Value::Object(_) => None,
        }
    }

    fn to_json(&self) -> Value {
        self.clone()
    }
}
