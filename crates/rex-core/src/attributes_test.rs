// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

use rstest::rstest;

use super::*;

#[derive(Debug)]
struct Thing {
    bar: &'static str,
}

impl Attr for Thing {
    fn get_attr(&self, name: &str) -> Option<AttrValue> {
        match name {
            "bar" => Some(AttrValue::from(self.bar)),
            _ => None,
        }
    }
}

#[rstest]
#[case("1bad")]
#[case("has space")]
#[case("trailing.")]
#[case(".leading")]
#[case("")]
fn rejects_malformed_keys(#[case] key: &str) {
    let mut ns = AttributeNamespace::new();
    assert!(ns.insert(key, "x").is_err());
}

#[test]
fn flat_key_roundtrips() {
    let mut ns = AttributeNamespace::new();
    ns.insert("version", "1.2.3").unwrap();
    assert_eq!(ns.get("version").unwrap().as_display().unwrap(), "1.2.3");
}

#[test]
fn unknown_key_with_no_prefix_hit_fails() {
    let ns = AttributeNamespace::new();
    assert!(ns.get("nope").is_err());
}

#[test]
fn attribute_traversal_law() {
    // a.b stored with value x possessing attribute c=y:
    // lookup a.b.c -> y, lookup a.b -> x, lookup a -> fails.
    let mut ns = AttributeNamespace::new();
    ns.insert("a.b", AttrValue::Object(Arc::new(Thing { bar: "y" })))
        .unwrap();

    let c = ns.get("a.b.bar").unwrap();
    assert_eq!(c.as_display().unwrap(), "y");

    let ab = ns.get("a.b").unwrap();
    assert!(matches!(ab, AttrValue::Object(_)));

    assert!(ns.get("a").is_err());
}

#[test]
fn thing_name_and_thing_bar_scenario() {
    // From spec.md scenario 4: {"thing.name": "n", "thing": obj} where
    // obj.bar == "v"; expansion of "!{thing.name} and !{thing.bar}" -> "n and v".
    let mut ns = AttributeNamespace::new();
    ns.insert("thing.name", "n").unwrap();
    ns.insert("thing", AttrValue::Object(Arc::new(Thing { bar: "v" })))
        .unwrap();

    assert_eq!(ns.get("thing.name").unwrap().as_display().unwrap(), "n");
    assert_eq!(ns.get("thing.bar").unwrap().as_display().unwrap(), "v");
}

#[test]
fn longest_prefix_wins_over_shorter_one() {
    let mut ns = AttributeNamespace::new();
    ns.insert("a.b", "short").unwrap();
    ns.insert("a.b.c", "long").unwrap();
    assert_eq!(ns.get("a.b.c").unwrap().as_display().unwrap(), "long");
}

#[test]
fn lookup_is_case_insensitive_regardless_of_stored_or_queried_case() {
    let mut ns = AttributeNamespace::new();
    ns.insert("Thing.Name", "x").unwrap();
    assert_eq!(ns.get("thing.name").unwrap().as_display().unwrap(), "x");
    assert_eq!(ns.get("THING.NAME").unwrap().as_display().unwrap(), "x");
    assert_eq!(ns.get("Thing.Name").unwrap().as_display().unwrap(), "x");
}
