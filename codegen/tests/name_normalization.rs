//! Name normalization rules, checked one element at a time and through
//! complete transformations.

#![allow(clippy::unwrap_used)]

use ontouml2alloy::grammar::{FORBIDDEN_CHARACTERS, RESERVED_KEYWORDS};
use ontouml2alloy::{transform, Namer};
use ontouml_model::{Class, Element, ElementId, Model, Relation};

fn class(name: &str) -> Class {
    Class::new(ElementId::new("c"), Some(name), None)
}

fn unnamed_relation() -> Relation {
    Relation {
        id: ElementId::new("r"),
        name: Some(String::new()),
        stereotype: None,
        properties: Vec::new(),
    }
}

#[test]
fn original_name_is_kept() {
    for name in ["Person", "PERSON", "person", "PeRsoN"] {
        assert_eq!(Namer::new().normalize(&class(name)), name);
    }
}

#[test]
fn reserved_keywords_get_kind_suffix() {
    for keyword in RESERVED_KEYWORDS {
        let element = class(keyword);
        let expected = format!("{keyword}_{}", element.kind().tag());
        assert_eq!(Namer::new().normalize(&element), expected, "keyword {keyword:?}");
    }
}

#[test]
fn forbidden_characters_are_removed() {
    for c in FORBIDDEN_CHARACTERS {
        let element = class(&format!("Happy{c}Person"));
        assert_eq!(Namer::new().normalize(&element), "HappyPerson", "character {c:?}");
    }
}

#[test]
fn every_whitespace_character_is_removed() {
    for c in ['\u{b}', '\u{c}', '\u{85}', '\u{a0}', '\u{2003}', '\u{2028}', '\u{3000}'] {
        let element = class(&format!("Happy{c}Person"));
        assert_eq!(Namer::new().normalize(&element), "HappyPerson", "character {c:?}");
    }
}

#[test]
fn unnamed_elements_use_kind_tag() {
    assert_eq!(Namer::new().normalize(&class("")), "class");
    assert_eq!(Namer::new().normalize(&unnamed_relation()), "relation");
}

#[test]
fn leading_digit_gets_kind_prefix() {
    assert_eq!(Namer::new().normalize(&class("123Person")), "class_123Person");
}

#[test]
fn empty_and_forbidden_only_names_collide() {
    let mut model = Model::new("m");
    let first = model.create_kind("");
    let second = model.create_kind("!!!");

    let mut namer = Namer::new();
    assert_eq!(namer.normalize(model.find_class(&first).unwrap()), "class");
    assert_eq!(namer.normalize(model.find_class(&second).unwrap()), "class1");
}

#[test]
fn relation_between_datatypes_is_inlined() {
    let mut model = Model::new("m");
    let date = model.create_datatype("Date");
    let string = model.create_datatype("String");
    model.create_binary_relation(&date, &string, None);

    let alloy = transform(&model).unwrap();
    assert!(alloy.contains("sig Date in Datatype {\n        relation: String\n}"));
    assert!(!alloy.contains("sig String"));
}

#[test]
fn classes_with_same_name() {
    let mut model = Model::new("m");
    model.create_kind("Person");
    model.create_kind("Person");

    let alloy = transform(&model).unwrap();
    assert!(alloy.contains("fact rigid {\n        rigidity[Person,Object,exists]\n}"));
    assert!(alloy.contains("fact rigid {\n        rigidity[Person1,Object,exists]\n}"));
    assert!(alloy.contains("        Person: set exists:>Object"));
    assert!(alloy.contains("        Person1: set exists:>Object"));
    assert!(alloy.contains("        exists:>Object in Person+Person1"));
}
