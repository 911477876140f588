#![allow(dead_code)]

use property_path::reflect_struct;
use serde_json::{json, Value};

pub struct Element {
    pub name: String,
    pub value: String,
}

pub struct YetAnotherNestedObject {
    pub nested_property: String,
}

pub struct AnotherNestedObject {
    pub yet_another_nested_object: YetAnotherNestedObject,
}

pub struct NestedObject {
    pub another_nested_object: AnotherNestedObject,
}

pub struct Sample {
    pub simple_property: String,
    pub list_property: Vec<Element>,
    pub simple_list_property: Vec<i32>,
    pub nested_object: Option<NestedObject>,
}

reflect_struct!(Element { name as "Name", value as "Value" });
reflect_struct!(YetAnotherNestedObject { nested_property as "NestedProperty" });
reflect_struct!(AnotherNestedObject { yet_another_nested_object as "YetAnotherNestedObject" });
reflect_struct!(NestedObject { another_nested_object as "AnotherNestedObject" });
reflect_struct!(Sample {
    simple_property as "SimpleProperty",
    list_property as "ListProperty",
    simple_list_property as "SimpleListProperty",
    nested_object as "NesTedObject",
});

pub fn element(name: &str, value: &str) -> Element {
    Element {
        name: name.to_string(),
        value: value.to_string(),
    }
}

pub fn sample() -> Sample {
    Sample {
        simple_property: "Some Value".to_string(),
        list_property: vec![
            element("SomeElementName", "SomeElementValue"),
            element("AnotherElementName", "AnotherElementValue"),
        ],
        simple_list_property: vec![1, 2, 3],
        nested_object: Some(NestedObject {
            another_nested_object: AnotherNestedObject {
                yet_another_nested_object: YetAnotherNestedObject {
                    nested_property: "SuperNestedPropertyValue".to_string(),
                },
            },
        }),
    }
}

/// The sample object as a JSON document.
pub fn sample_json() -> Value {
    json!({
        "SimpleProperty": "Some Value",
        "ListProperty": [
            {"Name": "SomeElementName", "Value": "SomeElementValue"},
            {"Name": "AnotherElementName", "Value": "AnotherElementValue"}
        ],
        "SimpleListProperty": [1, 2, 3],
        "NesTedObject": {
            "AnotherNestedObject": {
                "YetAnotherNestedObject": {
                    "NestedProperty": "SuperNestedPropertyValue"
                }
            }
        }
    })
}
