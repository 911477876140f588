//! Dynamic property path resolution.
//!
//! This crate resolves dotted, bracket-qualified path expressions against
//! in-memory object graphs whose shape is only known at runtime:
//!
//! - `A.B.C` reads nested fields,
//! - `Items[3]` indexes a keyed container by the raw token `3`,
//! - `Items[Name==Foo].Value` keeps the elements whose `Name` equals `Foo`
//!   and projects their `Value`. A single match is returned unwrapped.
//!
//! Values take part in resolution through the [`Reflect`] capability. It is
//! implemented for `serde_json::Value`, std scalars and collections, and for
//! structs registered with [`reflect_struct!`].
//!
//! # Example
//!
//! ```
//! use property_path::{reflect_struct, resolve};
//!
//! struct Entry {
//!     name: String,
//!     value: i64,
//! }
//!
//! struct Doc {
//!     entries: Vec<Entry>,
//! }
//!
//! reflect_struct!(Entry { name as "Name", value as "Value" });
//! reflect_struct!(Doc { entries as "Entries" });
//!
//! let doc = Doc {
//!     entries: vec![
//!         Entry { name: "a".into(), value: 1 },
//!         Entry { name: "b".into(), value: 2 },
//!     ],
//! };
//!
//! let found = resolve(&doc, "Entries[Name==b].Value").unwrap().unwrap();
//! assert_eq!(found.to_json(), serde_json::json!(2));
//!
//! let none = resolve(&doc, "Entries[Name==zzz].Value").unwrap().unwrap();
//! assert_eq!(none.to_json(), serde_json::json!([]));
//! ```

mod types;
pub use types::{PropertyPath, Resolved, Segment};

mod parser;
pub use parser::{split_segment, ParseError, PathParser};

mod error;
pub use error::{ErrorKind, PathError};

pub mod reflect;
pub use reflect::{KeyLookup, MapKey, Reflect};

mod json;

mod eval;
pub use eval::{Comparison, ResolveOptions, Resolver};

mod util;
pub use util::{get_accessed_fields, is_valid_index, json_scalar_equals, typed_literal};

pub mod cli;

#[doc(hidden)]
pub mod __private {
    pub use serde_json;
}

/// Resolve `path` against `root` with default options.
///
/// Returns `Ok(None)` when an absent value (null, `None`) is reached, and an
/// error when the path names something that does not exist.
///
/// # Example
///
/// ```
/// use property_path::{resolve, PathError};
/// use serde_json::json;
///
/// let doc = json!({"a": {"b": [10, 20, 30]}, "n": null});
///
/// let value = resolve(&doc, "a.b[1]").unwrap().unwrap();
/// assert_eq!(value.to_json(), json!(20));
///
/// assert!(resolve(&doc, "n.anything").unwrap().is_none());
/// assert!(matches!(resolve(&doc, "a.c"), Err(PathError::PropertyNotFound { .. })));
/// ```
pub fn resolve<'a>(root: &'a dyn Reflect, path: &str) -> Result<Option<Resolved<'a>>, PathError> {
    Resolver::default().resolve(root, path)
}

/// Resolve an optional path; `None` resolves to `Ok(None)`.
pub fn resolve_optional<'a>(
    root: &'a dyn Reflect,
    path: Option<&str>,
) -> Result<Option<Resolved<'a>>, PathError> {
    Resolver::default().resolve_optional(root, path)
}

/// Resolve an already parsed path with default options.
pub fn resolve_path<'a>(
    root: &'a dyn Reflect,
    path: &PropertyPath,
) -> Result<Option<Resolved<'a>>, PathError> {
    Resolver::default().resolve_path(root, path)
}

/// Implement [`Reflect`] for a struct by registering its field-accessor table.
///
/// Each entry names a struct field; `as "Name"` exposes it under a different
/// path name. Every field type must implement [`Reflect`].
///
/// ```
/// use property_path::{reflect_struct, resolve};
///
/// struct Point {
///     x: i32,
///     y: i32,
///     label: Option<String>,
/// }
///
/// reflect_struct!(Point { x, y, label as "Label" });
///
/// let p = Point { x: 1, y: 2, label: None };
/// assert_eq!(resolve(&p, "y").unwrap().unwrap().to_json(), serde_json::json!(2));
/// assert!(resolve(&p, "Label").unwrap().is_none());
/// ```
#[macro_export]
macro_rules! reflect_struct {
    (@name $field:ident $name:literal) => {
        $name
    };
    (@name $field:ident) => {
        stringify!($field)
    };
    ($ty:ident { $($field:ident $(as $name:literal)?),* $(,)? }) => {
        impl $crate::Reflect for $ty {
            fn type_name(&self) -> &'static str {
                stringify!($ty)
            }

            fn field(&self, name: &str) -> ::core::option::Option<&dyn $crate::Reflect> {
                $(
                    if name == $crate::reflect_struct!(@name $field $($name)?) {
                        return ::core::option::Option::Some(&self.$field as &dyn $crate::Reflect);
                    }
                )*
                ::core::option::Option::None
            }

            fn to_json(&self) -> $crate::__private::serde_json::Value {
                let mut map = $crate::__private::serde_json::Map::new();
                $(
                    map.insert(
                        $crate::reflect_struct!(@name $field $($name)?).to_string(),
                        $crate::Reflect::to_json(&self.$field),
                    );
                )*
                $crate::__private::serde_json::Value::Object(map)
            }
        }
    };
}
