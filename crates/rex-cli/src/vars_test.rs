// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

use rex_core::AttrValue;
use rstest::rstest;

use super::load;

fn write_tmp(contents: &str) -> tempfile::NamedTempFile {
    use std::io::Write;
    let mut file = tempfile::NamedTempFile::new().expect("tmp file");
    file.write_all(contents.as_bytes()).expect("write tmp file");
    file
}

#[rstest]
fn flattens_nested_mappings() {
    let file = write_tmp("machine:\n  os: linux\n  arch: x86_64\nversion: \"1.2\"\n");
    let pairs = load(file.path()).expect("load");
    let get = |key: &str| pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v.clone());

    match get("machine.os") {
        Some(AttrValue::Str(s)) => assert_eq!(s, "linux"),
        other => panic!("unexpected: {other:?}"),
    }
    match get("machine.arch") {
        Some(AttrValue::Str(s)) => assert_eq!(s, "x86_64"),
        other => panic!("unexpected: {other:?}"),
    }
    match get("version") {
        Some(AttrValue::Str(s)) => assert_eq!(s, "1.2"),
        other => panic!("unexpected: {other:?}"),
    }
}

#[rstest]
fn flattens_sequences_of_strings() {
    let file = write_tmp("search_paths:\n  - /opt/a\n  - /opt/b\n");
    let pairs = load(file.path()).expect("load");
    let (_, value) = pairs.iter().find(|(k, _)| k == "search_paths").expect("present");
    match value {
        AttrValue::Sequence(items) => assert_eq!(items, &vec!["/opt/a".to_string(), "/opt/b".to_string()]),
        other => panic!("unexpected: {other:?}"),
    }
}

#[rstest]
fn rejects_non_mapping_top_level() {
    let file = write_tmp("- just\n- a\n- list\n");
    let err = load(file.path()).unwrap_err();
    assert!(matches!(err, crate::error::Error::VarsNotAMapping { .. }));
}
