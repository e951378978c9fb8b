// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

use rex_core::command::Value;

use super::*;

#[test]
fn set_translates_forward_slashes_for_a_known_path_var() {
    let r = CmdRenderer::new().with_path_vars(PathVars::new().with_var("PKG_ROOT"));
    let out = r.render_set("PKG_ROOT", &Value::Scalar("C:/pkg/root".into()), ";").unwrap();
    assert_eq!(out, "set PKG_ROOT=C:\\pkg\\root");
}

#[test]
fn set_leaves_a_non_path_value_untranslated() {
    let r = CmdRenderer::new();
    let out = r.render_set("URL", &Value::Scalar("http://example.com".into()), ";").unwrap();
    assert_eq!(out, "set URL=http://example.com");
}

#[test]
fn unset_clears_the_variable() {
    let r = CmdRenderer::new();
    assert_eq!(r.render_unset("FOO").unwrap(), "set FOO=");
}

#[test]
fn prepend_conditional_guards_with_if_defined() {
    let r = CmdRenderer::new();
    let out = r.render_prepend_conditional("PATH", &Value::Scalar("C:/a/bin".into()), ";").unwrap();
    assert_eq!(
        out,
        "if defined PATH (\n  set PATH=C:\\a\\bin;%PATH%\n) else (\n  set PATH=C:\\a\\bin\n)"
    );
}

#[test]
fn persist_dedups_against_existing_values_but_process_set_keeps_full_value() {
    let persist = PersistConfig::new().with_existing("PATH", vec!["C:/a".to_string()]);
    let r = CmdRenderer::new().with_persist(persist);
    let value = Value::Sequence(vec!["C:/a".to_string(), "C:/b".to_string()]);
    let out = r.render_prepend_extend("PATH", &value, ";").unwrap();
    let mut lines = out.lines();
    assert_eq!(lines.next().unwrap(), "set PATH=C:\\a;C:\\b;%PATH%");
    assert_eq!(lines.next().unwrap(), "setenv -v PATH C:\\b");
    assert!(lines.next().is_none());
}

#[test]
fn persist_emits_nothing_when_every_element_already_present() {
    let persist = PersistConfig::new().with_existing("PATH", vec!["C:/a".to_string()]);
    let r = CmdRenderer::new().with_persist(persist);
    let value = Value::Scalar("C:/a".to_string());
    let out = r.render_append_extend("PATH", &value, ";").unwrap();
    assert_eq!(out, "set PATH=%PATH%;C:\\a");
}

#[test]
fn alias_uses_doskey() {
    let r = CmdRenderer::new();
    assert_eq!(r.render_alias("ll", "dir").unwrap(), "doskey ll=dir");
}
