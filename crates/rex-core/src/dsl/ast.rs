// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

/// A DSL expression: a string literal, a list literal, or a bare identifier
/// (resolved against the plain variable scope at evaluation time).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expr {
    Str(String),
    List(Vec<Expr>),
    Ident(String),
}

/// The thing a [`Stmt::Call`] invokes: either a free function bound by the
/// routing namespace (`setenv(...)`), or a method on an identifier that
/// resolves to an environment handle (`PATH.prepend(...)`).
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Callee {
    Function(String),
    Method { target: String, method: String },
}

/// A single parsed DSL statement.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Stmt {
    Comment(String),
    Assign { name: String, value: Expr },
    Call { callee: Callee, args: Vec<Expr> },
}
