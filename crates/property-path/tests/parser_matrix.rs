use property_path::{get_accessed_fields, split_segment, ParseError, PropertyPath, Segment};

fn parse(path: &str) -> PropertyPath {
    PropertyPath::parse(path).unwrap_or_else(|e| panic!("parse failed for '{path}': {e}"))
}

fn plain(name: &str) -> Segment {
    Segment::Plain { name: name.into() }
}

fn keyed(name: &str, key: &str) -> Segment {
    Segment::Keyed {
        name: name.into(),
        key: key.into(),
    }
}

fn filtered(name: &str, field: &str, value: &str, result: &str) -> Segment {
    Segment::Filtered {
        name: name.into(),
        filter_field: field.into(),
        filter_value: value.into(),
        result_field: result.into(),
    }
}

#[test]
fn parser_segment_shapes_matrix() {
    let cases: Vec<(&str, Vec<Segment>)> = vec![
        ("SimpleProperty", vec![plain("SimpleProperty")]),
        ("A.B.C", vec![plain("A"), plain("B"), plain("C")]),
        ("Items[3]", vec![keyed("Items", "3")]),
        ("Items[key with spaces]", vec![keyed("Items", "key with spaces")]),
        (
            "Outer.Items[2].Inner",
            vec![plain("Outer"), keyed("Items", "2"), plain("Inner")],
        ),
        (
            "ListProperty[Name==SomeElementName].Value",
            vec![filtered("ListProperty", "Name", "SomeElementName", "Value")],
        ),
        (
            "A.B[Id==7].C",
            vec![plain("A"), filtered("B", "Id", "7", "C")],
        ),
        ("L[ k == v ].R", vec![filtered("L", " k ", " v ", "R")]),
    ];

    for (input, expected) in cases {
        assert_eq!(parse(input).segments(), expected.as_slice(), "{input}");
    }
}

#[test]
fn parser_error_matrix() {
    let cases: Vec<(&str, ParseError)> = vec![
        ("Items[3", ParseError::UnclosedBracket(5)),
        ("A.Items[", ParseError::UnclosedBracket(7)),
        ("Items]", ParseError::UnexpectedChar { ch: ']', pos: 5 }),
        ("Items[0]x", ParseError::UnexpectedChar { ch: 'x', pos: 8 }),
        ("Items[]", ParseError::EmptyKey),
        ("Items[==v].R", ParseError::EmptyFilterOperand),
        ("Items[f==].R", ParseError::EmptyFilterOperand),
        ("Items[f==v]", ParseError::MissingResultField),
        ("Items[f==v].", ParseError::MissingResultField),
        ("Items[f==v].R.S", ParseError::TrailingAfterFilter),
        ("Items[f==v].R[0]", ParseError::TrailingAfterFilter),
    ];

    for (input, expected) in cases {
        assert_eq!(PropertyPath::parse(input), Err(expected), "{input}");
    }
}

#[test]
fn parser_lenient_names_matrix() {
    assert_eq!(parse("").segments(), &[plain("")]);
    assert_eq!(parse("A..B").segments(), &[plain("A"), plain(""), plain("B")]);
    assert_eq!(parse("A.").segments(), &[plain("A"), plain("")]);
}

#[test]
fn parser_display_matrix() {
    for text in [
        "SimpleProperty",
        "NesTedObject.AnotherNestedObject.YetAnotherNestedObject.NestedProperty",
        "Items[0].Name",
        "A.ListProperty[Value==AnotherElementValue].Name",
    ] {
        assert_eq!(parse(text).to_string(), text);
    }
}

#[test]
fn parser_split_segment_matrix() {
    assert_eq!(split_segment("A.B.C").unwrap(), (plain("A"), Some("B.C")));
    assert_eq!(split_segment("C").unwrap(), (plain("C"), None));
    assert_eq!(
        split_segment("Items[2].Name").unwrap(),
        (keyed("Items", "2"), Some("Name"))
    );
    assert_eq!(
        split_segment("Items[Name==x].Value").unwrap(),
        (filtered("Items", "Name", "x", "Value"), None)
    );
    assert_eq!(
        split_segment("Items[Name==x]"),
        Err(ParseError::MissingResultField)
    );
    // Only the head is examined; later segments may be malformed.
    assert_eq!(split_segment("A.B[").unwrap(), (plain("A"), Some("B[")));
}

#[test]
fn parser_accessed_fields_matrix() {
    assert_eq!(get_accessed_fields(&parse("A.B.C")), vec!["A", "B", "C"]);
    assert_eq!(get_accessed_fields(&parse("Items[3].Name")), vec!["Items", "Name"]);
    assert_eq!(
        get_accessed_fields(&parse("Outer.Items[Name==x].Value")),
        vec!["Outer", "Items", "Name", "Value"]
    );
}
