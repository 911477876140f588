//! Runtime introspection capability.
//!
//! Every value taking part in path resolution implements [`Reflect`]. Field
//! names are discovered by string at runtime, without compile-time knowledge
//! of the value's shape. Structs register their field-accessor table with
//! [`reflect_struct!`](crate::reflect_struct); dynamic data goes through the
//! keyed-map implementations (JSON objects, string-keyed maps).

use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::hash::{BuildHasher, Hash};
use std::rc::Rc;
use std::sync::Arc;

use indexmap::IndexMap;
use serde_json::{Map, Number, Value};

use crate::util::is_valid_index;

/// Outcome of indexing a container by a raw key token.
#[derive(Clone, Copy)]
pub enum KeyLookup<'a> {
    Found(&'a dyn Reflect),
    /// The container has no entry for the key, or cannot convert the token
    /// to its key type.
    Missing,
    /// The value is not a keyed container.
    Unsupported,
}

/// Field access by name, plus the container capabilities clauses rely on.
pub trait Reflect {
    /// Type name used in error messages.
    fn type_name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Look up a field by name.
    ///
    /// `None` means the field does not exist on this type. A field that exists
    /// but holds no value returns `Some` of a value whose
    /// [`is_absent`](Reflect::is_absent) is true.
    fn field(&self, _name: &str) -> Option<&dyn Reflect> {
        None
    }

    /// Whether this value stands for null / `None`.
    fn is_absent(&self) -> bool {
        false
    }

    /// Index the value as a keyed container, using `key` verbatim.
    fn lookup_key(&self, _key: &str) -> KeyLookup<'_> {
        KeyLookup::Unsupported
    }

    /// Elements of the value when it is a sequence.
    fn elements(&self) -> Option<Box<dyn Iterator<Item = &dyn Reflect> + '_>> {
        None
    }

    /// Canonical text form of a scalar value. Containers and objects have none.
    fn as_text(&self) -> Option<Cow<'_, str>> {
        None
    }

    /// JSON snapshot of the value.
    fn to_json(&self) -> Value;
}

/// Map key types that can be built from a raw key token.
pub trait MapKey: Sized {
    fn from_token(token: &str) -> Option<Self>;

    fn to_key_string(&self) -> String;
}

impl MapKey for String {
    fn from_token(token: &str) -> Option<Self> {
        Some(token.to_string())
    }

    fn to_key_string(&self) -> String {
        self.clone()
    }
}

macro_rules! integer_key {
    ($($t:ty),*) => {
        $(
            impl MapKey for $t {
                fn from_token(token: &str) -> Option<Self> {
                    token.parse().ok()
                }

                fn to_key_string(&self) -> String {
                    self.to_string()
                }
            }
        )*
    };
}

integer_key!(i8, i16, i32, i64, u8, u16, u32, u64, isize, usize);

// ── Scalars ───────────────────────────────────────────────────────────────

impl Reflect for str {
    fn type_name(&self) -> &'static str {
        "str"
    }

    fn as_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self))
    }

    fn to_json(&self) -> Value {
        Value::String(self.to_string())
    }
}

impl Reflect for String {
    fn type_name(&self) -> &'static str {
        "String"
    }

    fn as_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed(self.as_str()))
    }

    fn to_json(&self) -> Value {
        Value::String(self.clone())
    }
}

macro_rules! scalar {
    ($($t:ty),*) => {
        $(
            impl Reflect for $t {
                fn type_name(&self) -> &'static str {
                    stringify!($t)
                }

                fn as_text(&self) -> Option<Cow<'_, str>> {
                    Some(Cow::Owned(self.to_string()))
                }

                fn to_json(&self) -> Value {
                    Value::from(*self)
                }
            }
        )*
    };
}

scalar!(bool, i8, i16, i32, i64, u8, u16, u32, u64, isize, usize, f64);

// Snapshot through the shortest decimal form, matching `as_text`.
impl Reflect for f32 {
    fn type_name(&self) -> &'static str {
        "f32"
    }

    fn as_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.to_string()))
    }

    fn to_json(&self) -> Value {
        self.to_string()
            .parse::<f64>()
            .ok()
            .and_then(Number::from_f64)
            .map_or(Value::Null, Value::Number)
    }
}

impl Reflect for char {
    fn type_name(&self) -> &'static str {
        "char"
    }

    fn as_text(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Owned(self.to_string()))
    }

    fn to_json(&self) -> Value {
        Value::String(self.to_string())
    }
}

// ── Wrappers ──────────────────────────────────────────────────────────────

impl<T: Reflect> Reflect for Option<T> {
    fn type_name(&self) -> &'static str {
        match self {
            Some(inner) => inner.type_name(),
            None => "None",
        }
    }

    fn field(&self, name: &str) -> Option<&dyn Reflect> {
        self.as_ref()?.field(name)
    }

    fn is_absent(&self) -> bool {
        self.as_ref().map_or(true, Reflect::is_absent)
    }

    fn lookup_key(&self, key: &str) -> KeyLookup<'_> {
        match self {
            Some(inner) => inner.lookup_key(key),
            None => KeyLookup::Unsupported,
        }
    }

    fn elements(&self) -> Option<Box<dyn Iterator<Item = &dyn Reflect> + '_>> {
        self.as_ref()?.elements()
    }

    fn as_text(&self) -> Option<Cow<'_, str>> {
        self.as_ref()?.as_text()
    }

    fn to_json(&self) -> Value {
        self.as_ref().map_or(Value::Null, Reflect::to_json)
    }
}

/// Pointer types are transparent: they behave exactly like their pointee.
macro_rules! transparent {
    ($($ptr:ident),*) => {
        $(
            impl<T: Reflect + ?Sized> Reflect for $ptr<T> {
                fn type_name(&self) -> &'static str {
                    (**self).type_name()
                }

                fn field(&self, name: &str) -> Option<&dyn Reflect> {
                    (**self).field(name)
                }

                fn is_absent(&self) -> bool {
                    (**self).is_absent()
                }

                fn lookup_key(&self, key: &str) -> KeyLookup<'_> {
                    (**self).lookup_key(key)
                }

                fn elements(&self) -> Option<Box<dyn Iterator<Item = &dyn Reflect> + '_>> {
                    (**self).elements()
                }

                fn as_text(&self) -> Option<Cow<'_, str>> {
                    (**self).as_text()
                }

                fn to_json(&self) -> Value {
                    (**self).to_json()
                }
            }
        )*
    };
}

transparent!(Box, Rc, Arc);

impl<T: Reflect + ?Sized> Reflect for &T {
    fn type_name(&self) -> &'static str {
        (**self).type_name()
    }

    fn field(&self, name: &str) -> Option<&dyn Reflect> {
        (**self).field(name)
    }

    fn is_absent(&self) -> bool {
        (**self).is_absent()
    }

    fn lookup_key(&self, key: &str) -> KeyLookup<'_> {
        (**self).lookup_key(key)
    }

    fn elements(&self) -> Option<Box<dyn Iterator<Item = &dyn Reflect> + '_>> {
        (**self).elements()
    }

    fn as_text(&self) -> Option<Cow<'_, str>> {
        (**self).as_text()
    }

    fn to_json(&self) -> Value {
        (**self).to_json()
    }
}

// ── Sequences ─────────────────────────────────────────────────────────────

fn position(key: &str) -> Option<usize> {
    if !is_valid_index(key) {
        return None;
    }
    key.parse().ok()
}

fn sequence_lookup<'a, T: Reflect>(items: &'a [T], key: &str) -> KeyLookup<'a> {
    match position(key).and_then(|idx| items.get(idx)) {
        Some(item) => KeyLookup::Found(item),
        None => KeyLookup::Missing,
    }
}

impl<T: Reflect> Reflect for [T] {
    fn type_name(&self) -> &'static str {
        "slice"
    }

    fn lookup_key(&self, key: &str) -> KeyLookup<'_> {
        sequence_lookup(self, key)
    }

    fn elements(&self) -> Option<Box<dyn Iterator<Item = &dyn Reflect> + '_>> {
        Some(Box::new(self.iter().map(|item| item as &dyn Reflect)))
    }

    fn to_json(&self) -> Value {
        Value::Array(self.iter().map(Reflect::to_json).collect())
    }
}

impl<T: Reflect, const N: usize> Reflect for [T; N] {
    fn type_name(&self) -> &'static str {
        "array"
    }

    fn lookup_key(&self, key: &str) -> KeyLookup<'_> {
        sequence_lookup(self, key)
    }

    fn elements(&self) -> Option<Box<dyn Iterator<Item = &dyn Reflect> + '_>> {
        Some(Box::new(self.iter().map(|item| item as &dyn Reflect)))
    }

    fn to_json(&self) -> Value {
        Value::Array(self.iter().map(Reflect::to_json).collect())
    }
}

impl<T: Reflect> Reflect for Vec<T> {
    fn type_name(&self) -> &'static str {
        "Vec"
    }

    fn lookup_key(&self, key: &str) -> KeyLookup<'_> {
        sequence_lookup(self, key)
    }

    fn elements(&self) -> Option<Box<dyn Iterator<Item = &dyn Reflect> + '_>> {
        Some(Box::new(self.iter().map(|item| item as &dyn Reflect)))
    }

    fn to_json(&self) -> Value {
        Value::Array(self.iter().map(Reflect::to_json).collect())
    }
}

impl<T: Reflect> Reflect for VecDeque<T> {
    fn type_name(&self) -> &'static str {
        "VecDeque"
    }

    fn lookup_key(&self, key: &str) -> KeyLookup<'_> {
        match position(key).and_then(|idx| self.get(idx)) {
            Some(item) => KeyLookup::Found(item),
            None => KeyLookup::Missing,
        }
    }

    fn elements(&self) -> Option<Box<dyn Iterator<Item = &dyn Reflect> + '_>> {
        Some(Box::new(self.iter().map(|item| item as &dyn Reflect)))
    }

    fn to_json(&self) -> Value {
        Value::Array(self.iter().map(Reflect::to_json).collect())
    }
}

// ── Keyed maps ────────────────────────────────────────────────────────────
//
// Maps answer both keyed indexing and field lookup by key, which makes a
// string-keyed map usable as a dynamic object.

fn map_json<'a, K, V>(entries: impl Iterator<Item = (&'a K, &'a V)>) -> Value
where
    K: MapKey + 'a,
    V: Reflect + 'a,
{
    let mut map = Map::new();
    for (key, value) in entries {
        map.insert(key.to_key_string(), value.to_json());
    }
    Value::Object(map)
}

impl<K, V, S> Reflect for HashMap<K, V, S>
where
    K: MapKey + Eq + Hash,
    V: Reflect,
    S: BuildHasher,
{
    fn type_name(&self) -> &'static str {
        "HashMap"
    }

    fn field(&self, name: &str) -> Option<&dyn Reflect> {
        let key = K::from_token(name)?;
        self.get(&key).map(|value| value as &dyn Reflect)
    }

    fn lookup_key(&self, key: &str) -> KeyLookup<'_> {
        match self.field(key) {
            Some(value) => KeyLookup::Found(value),
            None => KeyLookup::Missing,
        }
    }

    fn to_json(&self) -> Value {
        map_json(self.iter())
    }
}

impl<K, V> Reflect for BTreeMap<K, V>
where
    K: MapKey + Ord,
    V: Reflect,
{
    fn type_name(&self) -> &'static str {
        "BTreeMap"
    }

    fn field(&self, name: &str) -> Option<&dyn Reflect> {
        let key = K::from_token(name)?;
        self.get(&key).map(|value| value as &dyn Reflect)
    }

    fn lookup_key(&self, key: &str) -> KeyLookup<'_> {
        match self.field(key) {
            Some(value) => KeyLookup::Found(value),
            None => KeyLookup::Missing,
        }
    }

    fn to_json(&self) -> Value {
        map_json(self.iter())
    }
}

impl<K, V, S> Reflect for IndexMap<K, V, S>
where
    K: MapKey + Eq + Hash,
    V: Reflect,
    S: BuildHasher,
{
    fn type_name(&self) -> &'static str {
        "IndexMap"
    }

    fn field(&self, name: &str) -> Option<&dyn Reflect> {
        let key = K::from_token(name)?;
        self.get(&key).map(|value| value as &dyn Reflect)
    }

    fn lookup_key(&self, key: &str) -> KeyLookup<'_> {
        match self.field(key) {
            Some(value) => KeyLookup::Found(value),
            None => KeyLookup::Missing,
        }
    }

    fn to_json(&self) -> Value {
        map_json(self.iter())
    }
}
