//! Property path resolver.

use crate::error::PathError;
use crate::reflect::{KeyLookup, Reflect};
use crate::types::{PropertyPath, Resolved, Segment};
use crate::util::{json_scalar_equals, typed_literal};

/// How a filter clause compares an element's field with its literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Comparison {
    /// Compare canonical text forms. Values without one (objects,
    /// sequences, absent values) never match.
    #[default]
    Text,
    /// Read the literal as a JSON scalar and compare it with the field's JSON
    /// value, so `1` matches the number one but not the string `"1"`.
    Typed,
}

/// Options for [`Resolver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolveOptions {
    pub comparison: Comparison,
}

/// Resolves property paths against [`Reflect`] values.
#[derive(Debug, Clone, Default)]
pub struct Resolver {
    options: ResolveOptions,
}

impl Resolver {
    pub fn new(options: ResolveOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &ResolveOptions {
        &self.options
    }

    /// Parse `path` and resolve it against `root`.
    ///
    /// An absent root resolves to `Ok(None)` without looking at the path.
    pub fn resolve<'a>(
        &self,
        root: &'a dyn Reflect,
        path: &str,
    ) -> Result<Option<Resolved<'a>>, PathError> {
        if root.is_absent() {
            return Ok(None);
        }
        let path = PropertyPath::parse(path)?;
        self.resolve_path(root, &path)
    }

    /// Like [`resolve`](Resolver::resolve), with an absent path resolving to
    /// `Ok(None)`.
    pub fn resolve_optional<'a>(
        &self,
        root: &'a dyn Reflect,
        path: Option<&str>,
    ) -> Result<Option<Resolved<'a>>, PathError> {
        match path {
            Some(path) => self.resolve(root, path),
            None => Ok(None),
        }
    }

    /// Resolve an already parsed path against `root`.
    pub fn resolve_path<'a>(
        &self,
        root: &'a dyn Reflect,
        path: &PropertyPath,
    ) -> Result<Option<Resolved<'a>>, PathError> {
        self.resolve_segments(root, path.segments())
    }

    fn resolve_segments<'a>(
        &self,
        current: &'a dyn Reflect,
        segments: &[Segment],
    ) -> Result<Option<Resolved<'a>>, PathError> {
        if current.is_absent() {
            return Ok(None);
        }
        let Some((head, rest)) = segments.split_first() else {
            return Ok(Some(Resolved::One(current)));
        };

        let name = head.name();
        let Some(value) = current.field(name) else {
            return Err(if rest.is_empty() {
                PathError::PropertyNotFound {
                    field: name.to_string(),
                    type_name: current.type_name(),
                }
            } else {
                PathError::InvalidPath {
                    segment: name.to_string(),
                    type_name: current.type_name(),
                }
            });
        };
        log::trace!("read `{}` on {}", name, current.type_name());

        if value.is_absent() {
            return Ok(None);
        }

        match head {
            Segment::Plain { .. } => self.resolve_segments(value, rest),
            Segment::Keyed { key, .. } => {
                let element = Self::index(value, key)?;
                self.resolve_segments(element, rest)
            }
            Segment::Filtered {
                filter_field,
                filter_value,
                result_field,
                ..
            } => {
                debug_assert!(rest.is_empty(), "filter clause must end the path");
                self.filter(value, filter_field, filter_value, result_field)
            }
        }
    }

    fn index<'a>(container: &'a dyn Reflect, key: &str) -> Result<&'a dyn Reflect, PathError> {
        match container.lookup_key(key) {
            KeyLookup::Found(element) => Ok(element),
            KeyLookup::Missing => Err(PathError::KeyNotFound {
                key: key.to_string(),
                type_name: container.type_name(),
            }),
            KeyLookup::Unsupported => Err(PathError::UnsupportedIndex {
                type_name: container.type_name(),
            }),
        }
    }

    fn filter<'a>(
        &self,
        sequence: &'a dyn Reflect,
        filter_field: &str,
        filter_value: &str,
        result_field: &str,
    ) -> Result<Option<Resolved<'a>>, PathError> {
        let elements = sequence
            .elements()
            .ok_or_else(|| PathError::UnsupportedFilter {
                type_name: sequence.type_name(),
            })?;

        let mut projected = Vec::new();
        for element in elements {
            if element.is_absent() {
                continue;
            }
            let Some(candidate) = element.field(filter_field) else {
                continue;
            };
            if !self.matches(candidate, filter_value) {
                continue;
            }
            let result = element
                .field(result_field)
                .ok_or_else(|| PathError::PropertyNotFound {
                    field: result_field.to_string(),
                    type_name: element.type_name(),
                })?;
            projected.push((!result.is_absent()).then_some(result));
        }
        log::debug!(
            "filter {}=={} matched {} element(s)",
            filter_field,
            filter_value,
            projected.len()
        );

        // A single match is returned unwrapped; zero or several stay a sequence.
        if projected.len() == 1 {
            return Ok(projected.pop().flatten().map(Resolved::One));
        }
        Ok(Some(Resolved::Many(projected)))
    }

    fn matches(&self, candidate: &dyn Reflect, literal: &str) -> bool {
        match self.options.comparison {
            Comparison::Text => candidate
                .as_text()
                .is_some_and(|text| text == literal),
            Comparison::Typed => json_scalar_equals(&candidate.to_json(), &typed_literal(literal)),
        }
    }
}
