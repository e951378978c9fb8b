// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

use super::*;

#[test]
fn text_without_dollar_or_bang_is_unchanged() {
    let env = HashMap::new();
    let ns = AttributeNamespace::new();
    let text = "plain text, no templates here";
    assert_eq!(expand_env_template(text, &env), text);
    assert_eq!(expand_custom_template(text, &ns), text);
}

#[test]
fn env_template_substitutes_both_forms() {
    let mut env = HashMap::new();
    env.insert("HOME".to_string(), "/home/me".to_string());
    assert_eq!(expand_env_template("$HOME/bin", &env), "/home/me/bin");
    assert_eq!(expand_env_template("${HOME}/bin", &env), "/home/me/bin");
}

#[test]
fn env_template_leaves_unknown_names_literal() {
    let env = HashMap::new();
    assert_eq!(expand_env_template("$NOPE", &env), "$NOPE");
}

#[test]
fn custom_template_substitutes_both_forms() {
    let mut ns = AttributeNamespace::new();
    ns.insert("v1", "1").unwrap();
    assert_eq!(expand_custom_template("!v1", &ns), "1");
    assert_eq!(expand_custom_template("!{v1}", &ns), "1");
}

#[test]
fn custom_template_braced_form_supports_dots_unbraced_does_not() {
    let mut ns = AttributeNamespace::new();
    ns.insert("a.b", "ab").unwrap();
    assert_eq!(expand_custom_template("!{a.b}", &ns), "ab");
    // unbraced identifier stops before the dot, and "a" alone is unknown,
    // so it is left literal.
    assert_eq!(expand_custom_template("!a.b", &ns), "!a.b");
}

#[test]
fn dollar_and_bang_dialects_are_independent() {
    let mut env = HashMap::new();
    env.insert("X".to_string(), "env-x".to_string());
    let mut ns = AttributeNamespace::new();
    ns.insert("x", "custom-x").unwrap();

    // env pass never touches "!x"; custom pass never touches "$X".
    assert_eq!(expand_env_template("$X !x", &env), "env-x !x");
    assert_eq!(expand_custom_template("$X !x", &ns), "$X custom-x");
}

#[test]
fn scenario_3_custom_expansion_before_record() {
    // Custom namespace {V1:"1", V2:"2"}; DSL SHORT = "!V1.!V2" resolves the
    // local to "1.2", while a later $-containing value stays literal.
    let mut ns = AttributeNamespace::new();
    ns.insert("v1", "1").unwrap();
    ns.insert("v2", "2").unwrap();
    let short = expand_custom_template("!V1.!V2", &ns);
    assert_eq!(short, "1.2");

    let app_value = "/x/${SHORT}";
    assert_eq!(expand_custom_template(app_value, &ns), app_value);
}

#[test]
fn scenario_4_attribute_traversal_through_templates() {
    use crate::attributes::AttrValue;
    use std::sync::Arc;

    #[derive(Debug)]
    struct Obj;
    impl crate::attributes::Attr for Obj {
        fn get_attr(&self, name: &str) -> Option<AttrValue> {
            match name {
                "bar" => Some(AttrValue::from("v")),
                _ => None,
            }
        }
    }

    let mut ns = AttributeNamespace::new();
    ns.insert("thing.name", "n").unwrap();
    ns.insert("thing", AttrValue::Object(Arc::new(Obj))).unwrap();

    assert_eq!(
        expand_custom_template("!{thing.name} and !{thing.bar}", &ns),
        "n and v"
    );
}

#[test]
fn unknown_custom_name_left_literal() {
    let ns = AttributeNamespace::new();
    assert_eq!(expand_custom_template("!{nope}", &ns), "!{nope}");
}

#[test]
fn mixed_case_stored_key_resolves_through_an_uppercase_template() {
    // A key seeded with its original mixed case (e.g. flattened from
    // `Thing: {Name: x}`) must still resolve through an ALL-CAPS-looking
    // reference, not just the verbatim-or-all-lowercase cases.
    let mut ns = AttributeNamespace::new();
    ns.insert("Thing.Name", "x").unwrap();
    assert_eq!(expand_custom_template("!{THING.NAME}", &ns), "x");
}
