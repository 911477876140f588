//! `property-path-demo`: resolve paths against a sample object graph.
//!
//! Builds a typed object with a scalar, a list of name/value elements, a list
//! of integers and a deeply nested object, then prints what a handful of
//! paths resolve to.

use property_path::{reflect_struct, resolve, PathError, Reflect, Resolved};

struct Element {
    name: String,
    value: String,
}

struct YetAnotherNestedObject {
    nested_property: String,
}

struct AnotherNestedObject {
    yet_another_nested_object: YetAnotherNestedObject,
}

struct NestedObject {
    another_nested_object: AnotherNestedObject,
}

struct Sample {
    simple_property: String,
    list_property: Vec<Element>,
    simple_list_property: Vec<i32>,
    nested_object: NestedObject,
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

fn element(name: &str, value: &str) -> Element {
    Element {
        name: name.to_string(),
        value: value.to_string(),
    }
}

fn sample() -> Sample {
    Sample {
        simple_property: "Some Value".to_string(),
        list_property: vec![
            element("SomeElementName", "SomeElementValue"),
            element("AnotherElementName", "AnotherElementValue"),
        ],
        simple_list_property: vec![1, 2, 3],
        nested_object: NestedObject {
            another_nested_object: AnotherNestedObject {
                yet_another_nested_object: YetAnotherNestedObject {
                    nested_property: "SuperNestedPropertyValue".to_string(),
                },
            },
        },
    }
}

fn show(resolved: &Option<Resolved<'_>>) -> String {
    match resolved {
        Some(Resolved::One(value)) => match value.as_text() {
            Some(text) => text.into_owned(),
            None => value.to_json().to_string(),
        },
        Some(many @ Resolved::Many(_)) => many.to_json().to_string(),
        None => "<absent>".to_string(),
    }
}

fn first_element(list: &dyn Reflect) -> String {
    list.elements()
        .and_then(|mut elements| elements.next())
        .map_or_else(|| "<empty>".to_string(), |first| first.to_json().to_string())
}

fn run(obj: &Sample) -> Result<(), PathError> {
    println!(
        "Getting value of SimpleProperty: {}",
        show(&resolve(obj, "SimpleProperty")?)
    );

    if let Some(Resolved::One(list)) = resolve(obj, "SimpleListProperty")? {
        println!("Getting value of SimpleListProperty: {}", first_element(list));
    }

    println!(
        "Getting value of ListProperty through a simple filter: {}",
        show(&resolve(obj, "ListProperty[Name==SomeElementName].Value")?)
    );
    println!(
        "Getting value of ListProperty through a simple filter: {}",
        show(&resolve(obj, "ListProperty[Value==AnotherElementValue].Name")?)
    );

    match resolve(obj, "ListProperty[Value==asda].Name")? {
        Some(Resolved::Many(matches)) if matches.is_empty() => {
            println!("No values matched this filter");
        }
        other => println!("Unexpected filter result: {}", show(&other)),
    }

    match resolve(obj, "NotAvailableProperty") {
        Err(e) if e.is_not_found() => println!("The property was not found"),
        Err(e) => return Err(e),
        Ok(other) => println!("Unexpectedly resolved to {}", show(&other)),
    }

    if let Some(Resolved::One(nested)) =
        resolve(obj, "NesTedObject.AnotherNestedObject.YetAnotherNestedObject")?
    {
        println!(
            "Getting value of a nested object's property: {}",
            show(&resolve(nested, "NestedProperty")?)
        );
    }

    Ok(())
}

fn main() {
    env_logger::init();

    println!("Running test for: dynamically reading values from an object");
    println!("Creating a complex object");
    let obj = sample();

    if let Err(e) = run(&obj) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
