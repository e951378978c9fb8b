// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

use super::*;

#[test]
fn parses_free_function_call_with_string_args() {
    let stmts = parse(r#"setenv("X", "a")"#).unwrap();
    assert_eq!(
        stmts,
        vec![Stmt::Call {
            callee: Callee::Function("setenv".into()),
            args: vec![Expr::Str("X".into()), Expr::Str("a".into())],
        }]
    );
}

#[test]
fn parses_handle_method_call_with_list_arg() {
    let stmts = parse(r#"PATH.prepend(["b", "c"])"#).unwrap();
    assert_eq!(
        stmts,
        vec![Stmt::Call {
            callee: Callee::Method {
                target: "PATH".into(),
                method: "prepend".into(),
            },
            args: vec![Expr::List(vec![Expr::Str("b".into()), Expr::Str("c".into())])],
        }]
    );
}

#[test]
fn parses_assignment_and_comment() {
    let stmts = parse("# a comment\nshort = \"value\"").unwrap();
    assert_eq!(
        stmts,
        vec![
            Stmt::Comment("a comment".into()),
            Stmt::Assign {
                name: "short".into(),
                value: Expr::Str("value".into()),
            },
        ]
    );
}

#[test]
fn parses_single_and_double_quoted_strings_with_escapes() {
    let stmts = parse(r#"info('it\'s here')"#).unwrap();
    assert_eq!(
        stmts,
        vec![Stmt::Call {
            callee: Callee::Function("info".into()),
            args: vec![Expr::Str("it's here".into())],
        }]
    );
}

#[test]
fn multiple_statements_across_lines() {
    let stmts = parse("setenv(\"X\", \"1\")\nunsetenv(\"Y\")\n").unwrap();
    assert_eq!(stmts.len(), 2);
}

#[test]
fn unterminated_string_is_a_parse_error() {
    assert!(parse(r#"setenv("X", "a)"#).is_err());
}

#[test]
fn trailing_garbage_is_a_parse_error() {
    assert!(parse("setenv(\"X\", \"a\") !!!").is_err());
}

#[test]
fn bare_identifier_expression_is_read_as_local_reference() {
    let stmts = parse("X = short").unwrap();
    assert_eq!(
        stmts,
        vec![Stmt::Assign {
            name: "X".into(),
            value: Expr::Ident("short".into()),
        }]
    );
}
