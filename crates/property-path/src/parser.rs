//! Property path parser.
//!
//! Splits a path into typed segments. Each segment is a field name, optionally
//! followed by one bracket clause: a literal key (`Items[3]`) or an equality
//! filter with its result field (`Items[Name==Foo].Value`).

use thiserror::Error;

use crate::types::{PropertyPath, Segment};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unclosed '[' at position {0}")]
    UnclosedBracket(usize),
    #[error("Unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },
    #[error("Empty key in '[]'")]
    EmptyKey,
    #[error("Filter clause needs a field and a value around '=='")]
    EmptyFilterOperand,
    #[error("Filter clause must be followed by '.<field>'")]
    MissingResultField,
    #[error("Nothing may follow the result field of a filter clause")]
    TrailingAfterFilter,
}

const FILTER_OPERATOR: &str = "==";

/// Property path parser.
pub struct PathParser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> PathParser<'a> {
    /// Parse a complete property path.
    pub fn parse(input: &'a str) -> Result<PropertyPath, ParseError> {
        let mut parser = Self { input, pos: 0 };
        let mut segments = Vec::new();

        loop {
            let segment = parser.parse_segment()?;
            let more = parser.parse_separator(&segment)?;
            segments.push(segment);
            if !more {
                break;
            }
        }

        log::trace!("parsed {:?} into {} segment(s)", input, segments.len());
        Ok(PropertyPath { segments })
    }

    /// Parse the leading segment and return it with the unparsed remainder
    /// after the separating `.`.
    pub fn split(input: &'a str) -> Result<(Segment, Option<&'a str>), ParseError> {
        let mut parser = Self { input, pos: 0 };
        let segment = parser.parse_segment()?;
        let rest = if parser.parse_separator(&segment)? {
            Some(&input[parser.pos..])
        } else {
            None
        };
        Ok((segment, rest))
    }

    fn parse_segment(&mut self) -> Result<Segment, ParseError> {
        let name = self.parse_name();

        match self.peek() {
            Some('[') => {}
            Some(']') => {
                return Err(ParseError::UnexpectedChar {
                    ch: ']',
                    pos: self.pos,
                })
            }
            _ => return Ok(Segment::Plain { name }),
        }

        let open = self.pos;
        self.advance();
        let body_start = self.pos;
        let close = self.input[body_start..]
            .find(']')
            .map(|offset| body_start + offset)
            .ok_or(ParseError::UnclosedBracket(open))?;
        let body = &self.input[body_start..close];
        if let Some(offset) = body.find('[') {
            return Err(ParseError::UnexpectedChar {
                ch: '[',
                pos: body_start + offset,
            });
        }
        self.pos = close + 1;

        match body.split_once(FILTER_OPERATOR) {
            Some((filter_field, filter_value)) => {
                if filter_field.trim().is_empty() || filter_value.trim().is_empty() {
                    return Err(ParseError::EmptyFilterOperand);
                }
                if self.peek() != Some('.') {
                    return Err(ParseError::MissingResultField);
                }
                self.advance();
                let result_field = self.parse_name();
                if result_field.is_empty() {
                    return Err(ParseError::MissingResultField);
                }
                Ok(Segment::Filtered {
                    name,
                    filter_field: filter_field.to_string(),
                    filter_value: filter_value.to_string(),
                    result_field,
                })
            }
            None => {
                if body.is_empty() {
                    return Err(ParseError::EmptyKey);
                }
                Ok(Segment::Keyed {
                    name,
                    key: body.to_string(),
                })
            }
        }
    }

    /// Consume what follows a segment. Returns whether another segment follows.
    fn parse_separator(&mut self, segment: &Segment) -> Result<bool, ParseError> {
        match self.peek() {
            None => Ok(false),
            Some(_) if segment.is_filtered() => Err(ParseError::TrailingAfterFilter),
            Some('.') => {
                self.advance();
                Ok(true)
            }
            Some(ch) => Err(ParseError::UnexpectedChar { ch, pos: self.pos }),
        }
    }

    fn parse_name(&mut self) -> String {
        let start = self.pos;
        while let Some(c) = self.peek() {
            if matches!(c, '.' | '[' | ']') {
                break;
            }
            self.advance();
        }
        self.input[start..self.pos].to_string()
    }

    fn peek(&self) -> Option<char> {
        self.input[self.pos..].chars().next()
    }

    fn advance(&mut self) {
        if let Some(c) = self.peek() {
            self.pos += c.len_utf8();
        }
    }
}

impl PropertyPath {
    /// Parse a property path.
    ///
    /// # Example
    ///
    /// ```
    /// use property_path::{PropertyPath, Segment};
    ///
    /// let path = PropertyPath::parse("Orders[Id==7].Total").unwrap();
    /// assert_eq!(path.len(), 1);
    /// assert!(path.segments()[0].is_filtered());
    /// assert_eq!(path.to_string(), "Orders[Id==7].Total");
    /// ```
    pub fn parse(input: &str) -> Result<PropertyPath, ParseError> {
        PathParser::parse(input)
    }
}

/// Split the leading segment off a path fragment.
///
/// Returns the segment, with its bracket clause classified and stripped from
/// the field name, and the remaining fragment after the separating `.` when
/// more segments follow. Only the leading segment is examined; brackets in
/// later segments belong to later calls.
///
/// # Example
///
/// ```
/// use property_path::{split_segment, Segment};
///
/// let (segment, rest) = split_segment("Items[2].Name").unwrap();
/// assert_eq!(segment, Segment::Keyed { name: "Items".into(), key: "2".into() });
/// assert_eq!(rest, Some("Name"));
/// ```
pub fn split_segment(fragment: &str) -> Result<(Segment, Option<&str>), ParseError> {
    PathParser::split(fragment)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn plain(name: &str) -> Segment {
        Segment::Plain { name: name.into() }
    }

    #[test]
    fn test_parse_single_field() {
        let path = PropertyPath::parse("SimpleProperty").unwrap();
        assert_eq!(path.segments(), &[plain("SimpleProperty")]);
    }

    #[test]
    fn test_parse_dotted() {
        let path = PropertyPath::parse("A.B.C").unwrap();
        assert_eq!(path.segments(), &[plain("A"), plain("B"), plain("C")]);
    }

    #[test]
    fn test_parse_keyed() {
        let path = PropertyPath::parse("Items[3]").unwrap();
        assert_eq!(
            path.segments(),
            &[Segment::Keyed {
                name: "Items".into(),
                key: "3".into()
            }]
        );
    }

    #[test]
    fn test_parse_keyed_in_the_middle() {
        let path = PropertyPath::parse("Items[0].Name").unwrap();
        assert_eq!(path.len(), 2);
        assert_eq!(path.segments()[1], plain("Name"));
    }

    #[test]
    fn test_parse_filter() {
        let path = PropertyPath::parse("ListProperty[Name==SomeElementName].Value").unwrap();
        assert_eq!(
            path.segments(),
            &[Segment::Filtered {
                name: "ListProperty".into(),
                filter_field: "Name".into(),
                filter_value: "SomeElementName".into(),
                result_field: "Value".into(),
            }]
        );
    }

    #[test]
    fn test_filter_splits_at_first_operator() {
        let path = PropertyPath::parse("L[a==b==c].V").unwrap();
        match &path.segments()[0] {
            Segment::Filtered {
                filter_field,
                filter_value,
                ..
            } => {
                assert_eq!(filter_field, "a");
                assert_eq!(filter_value, "b==c");
            }
            other => panic!("unexpected segment {other:?}"),
        }
    }

    #[test]
    fn test_empty_path_is_one_empty_field() {
        let path = PropertyPath::parse("").unwrap();
        assert_eq!(path.segments(), &[plain("")]);
    }

    #[test]
    fn test_unclosed_bracket() {
        assert_eq!(
            PropertyPath::parse("Items[3"),
            Err(ParseError::UnclosedBracket(5))
        );
    }

    #[test]
    fn test_stray_closing_bracket() {
        assert_eq!(
            PropertyPath::parse("Items]"),
            Err(ParseError::UnexpectedChar { ch: ']', pos: 5 })
        );
    }

    #[test]
    fn test_filter_operands_required() {
        assert_eq!(
            PropertyPath::parse("L[==x].V"),
            Err(ParseError::EmptyFilterOperand)
        );
        assert_eq!(
            PropertyPath::parse("L[Name==].V"),
            Err(ParseError::EmptyFilterOperand)
        );
        assert_eq!(
            PropertyPath::parse("L[ == ].V"),
            Err(ParseError::EmptyFilterOperand)
        );
    }

    #[test]
    fn test_filter_result_field_required() {
        assert_eq!(
            PropertyPath::parse("L[Name==x]"),
            Err(ParseError::MissingResultField)
        );
        assert_eq!(
            PropertyPath::parse("L[Name==x]."),
            Err(ParseError::MissingResultField)
        );
    }

    #[test]
    fn test_filter_is_terminal() {
        assert_eq!(
            PropertyPath::parse("L[Name==x].Value.More"),
            Err(ParseError::TrailingAfterFilter)
        );
    }

    #[test]
    fn test_empty_key() {
        assert_eq!(PropertyPath::parse("Items[]"), Err(ParseError::EmptyKey));
    }

    #[test]
    fn test_chained_brackets_rejected() {
        assert_eq!(
            PropertyPath::parse("M[a][b]"),
            Err(ParseError::UnexpectedChar { ch: '[', pos: 4 })
        );
        assert_eq!(
            PropertyPath::parse("M[a[b]"),
            Err(ParseError::UnexpectedChar { ch: '[', pos: 3 })
        );
    }

    #[test]
    fn test_split_segment_only_looks_at_head() {
        let (segment, rest) = split_segment("Outer.Items[Name==x].Value").unwrap();
        assert_eq!(segment, plain("Outer"));
        assert_eq!(rest, Some("Items[Name==x].Value"));

        let (segment, rest) = split_segment("Items[Name==x].Value").unwrap();
        assert!(segment.is_filtered());
        assert_eq!(rest, None);
    }

    #[test]
    fn test_display_roundtrip() {
        for text in ["A", "A.B.C", "Items[3]", "Items[0].Name", "L[Name==x].Value"] {
            assert_eq!(PropertyPath::parse(text).unwrap().to_string(), text);
        }
    }

    #[test]
    fn test_multibyte_names() {
        let path = PropertyPath::parse("Café[clé==thé].Prix").unwrap();
        assert_eq!(path.to_string(), "Café[clé==thé].Prix");
    }
}
