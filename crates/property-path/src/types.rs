//! Property path types.

use std::fmt;

use serde_json::Value;

use crate::reflect::Reflect;

/// One dot-delimited unit of a property path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Plain field read: `Name`
    Plain { name: String },
    /// Field read followed by a keyed index: `Items[3]`
    Keyed { name: String, key: String },
    /// Equality-filtered projection over a sequence: `Items[Name==Foo].Value`
    Filtered {
        name: String,
        filter_field: String,
        filter_value: String,
        result_field: String,
    },
}

impl Segment {
    /// Field name read off the current object before any clause applies.
    pub fn name(&self) -> &str {
        match self {
            Segment::Plain { name } | Segment::Keyed { name, .. } | Segment::Filtered { name, .. } => {
                name
            }
        }
    }

    pub fn is_filtered(&self) -> bool {
        matches!(self, Segment::Filtered { .. })
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Segment::Plain { name } => f.write_str(name),
            Segment::Keyed { name, key } => write!(f, "{name}[{key}]"),
            Segment::Filtered {
                name,
                filter_field,
                filter_value,
                result_field,
            } => write!(f, "{name}[{filter_field}=={filter_value}].{result_field}"),
        }
    }
}

/// Parsed property path expression.
///
/// Always holds at least one segment; a [`Segment::Filtered`] may only appear
/// last.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropertyPath {
    pub(crate) segments: Vec<Segment>,
}

impl PropertyPath {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl fmt::Display for PropertyPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{segment}")?;
        }
        Ok(())
    }
}

/// Result of a successful, non-absent resolution.
///
/// Values borrow from the object graph the path was resolved against.
#[derive(Clone)]
pub enum Resolved<'a> {
    /// A single value: a field read, a keyed element, or the sole match of a
    /// filter clause.
    One(&'a dyn Reflect),
    /// Projected values of a filter clause that matched zero or several
    /// elements, in sequence order. `None` marks an absent projected value.
    Many(Vec<Option<&'a dyn Reflect>>),
}

impl<'a> Resolved<'a> {
    /// The single value, if this is not a multi-match projection.
    pub fn as_one(&self) -> Option<&'a dyn Reflect> {
        match self {
            Resolved::One(value) => Some(*value),
            Resolved::Many(_) => None,
        }
    }

    /// The projected values, if this is a multi-match projection.
    pub fn as_many(&self) -> Option<&[Option<&'a dyn Reflect>]> {
        match self {
            Resolved::One(_) => None,
            Resolved::Many(values) => Some(values),
        }
    }

    pub fn is_many(&self) -> bool {
        matches!(self, Resolved::Many(_))
    }

    /// JSON snapshot of the resolved value(s). Absent projected values become
    /// `null`.
    pub fn to_json(&self) -> Value {
        match self {
            Resolved::One(value) => value.to_json(),
            Resolved::Many(values) => Value::Array(
                values
                    .iter()
                    .map(|v| v.map_or(Value::Null, |v| v.to_json()))
                    .collect(),
            ),
        }
    }
}

impl fmt::Debug for Resolved<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Resolved::One(value) => f.debug_tuple("One").field(&value.to_json()).finish(),
            Resolved::Many(_) => f.debug_tuple("Many").field(&self.to_json()).finish(),
        }
    }
}

impl PartialEq for Resolved<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.is_many() == other.is_many() && self.to_json() == other.to_json()
    }
}
