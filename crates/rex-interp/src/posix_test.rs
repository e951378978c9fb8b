// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

use rex_core::command::{Command, Value};

use super::*;
use crate::policy::Policy;
use crate::renderer::ShellInterpreter;

#[test]
fn set_quotes_the_value() {
    let r = PosixRenderer;
    let out = r.render_set("FOO", &Value::Scalar("bar".into()), ":").unwrap();
    assert_eq!(out, "export FOO=\"bar\"");
}

#[test]
fn prepend_references_existing_value_unconditionally() {
    let r = PosixRenderer;
    let out = r.render_prepend_conditional("PATH", &Value::Scalar("/a/bin".into()), ":").unwrap();
    assert_eq!(out, "export PATH=\"/a/bin:${PATH}\"");
}

#[test]
fn alias_defines_and_exports_a_function() {
    let r = PosixRenderer;
    let out = r.render_alias("ll", "ls -l").unwrap();
    assert_eq!(out, "ll() {\n  ls -l\n}\nexport -f ll");
}

#[test]
fn full_log_matches_scenario_one() {
    let mut interp = ShellInterpreter::new(PosixRenderer);
    let log = vec![
        Command::Setenv { key: "FOO".into(), value: Value::Scalar("1".into()) },
        Command::Prependenv { key: "PATH".into(), value: Value::Scalar("/pkg/bin".into()) },
    ];
    let out = interp.emit(&log, &Policy::default()).unwrap();
    assert_eq!(out, "export FOO=\"1\"\nexport PATH=\"/pkg/bin:${PATH}\"");
}

#[test]
fn info_error_comment_source_command() {
    let r = PosixRenderer;
    assert_eq!(r.render_info("hello").unwrap(), "echo \"hello\"");
    assert_eq!(r.render_error("oops").unwrap(), "echo \"oops\" 1>&2");
    assert_eq!(r.render_comment("note").unwrap(), "# note");
    assert_eq!(r.render_source("/pkg/setup.sh").unwrap(), "source \"/pkg/setup.sh\"");
    assert_eq!(r.render_command("echo hi").unwrap(), "echo hi");
}
