// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

use nom::branch::alt;
use nom::bytes::complete::{take_while, take_while1};
use nom::character::complete::{char, multispace0};
use nom::combinator::{map, opt, recognize};
use nom::error::{context, VerboseError};
use nom::multi::{many0, separated_list0};
use nom::sequence::{delimited, pair, preceded, tuple};
use nom::IResult;
use nom_supreme::tag::complete::tag as supreme_tag;

use super::ast::{Callee, Expr, Stmt};
use crate::error::{Error, Result};

#[cfg(test)]
#[path = "./parser_test.rs"]
mod parser_test;

type PResult<'a, T> = IResult<&'a str, T, VerboseError<&'a str>>;

fn is_ident_start(c: char) -> bool {
    c == '_' || c.is_ascii_alphabetic()
}

fn is_ident_continue(c: char) -> bool {
    c == '_' || c.is_ascii_alphanumeric()
}

fn ws<'a, T>(inner: impl FnMut(&'a str) -> PResult<'a, T>) -> impl FnMut(&'a str) -> PResult<'a, T> {
    delimited(multispace0, inner, multispace0)
}

fn identifier(input: &str) -> PResult<'_, &str> {
    context(
        "identifier",
        recognize(pair(
            take_while1(is_ident_start),
            take_while(is_ident_continue),
        )),
    )(input)
}

/// A quoted string literal, single or double quoted. Supports `\\` plus a
/// backslash-escaped closing quote; no other escape sequences, since the
/// DSL's strings only need to carry literal text plus the two template
/// dialects, which this parser leaves untouched.
fn string_literal(input: &str) -> PResult<'_, String> {
    alt((quoted('"'), quoted('\'')))(input)
}

fn eof_error(input: &str) -> nom::Err<VerboseError<&str>> {
    nom::Err::Error(VerboseError::from_error_kind(
        input,
        nom::error::ErrorKind::Eof,
    ))
}

fn quoted<'a>(quote: char) -> impl FnMut(&'a str) -> PResult<'a, String> {
    move |input: &'a str| {
        let (mut rest, _) = char(quote)(input)?;
        let mut out = String::new();
        loop {
            let mut chars = rest.chars();
            match chars.next() {
                None => return Err(eof_error(rest)),
                Some('\\') => match chars.next() {
                    Some(escaped) => {
                        out.push(escaped);
                        rest = chars.as_str();
                    }
                    None => return Err(eof_error(rest)),
                },
                Some(c) if c == quote => return Ok((chars.as_str(), out)),
                Some(c) => {
                    out.push(c);
                    rest = chars.as_str();
                }
            }
        }
    }
}

fn list_literal(input: &str) -> PResult<'_, Vec<Expr>> {
    context(
        "list",
        delimited(
            char('['),
            separated_list0(ws(char(',')), expr),
            preceded(multispace0, char(']')),
        ),
    )(input)
}

fn expr(input: &str) -> PResult<'_, Expr> {
    ws(alt((
        map(string_literal, Expr::Str),
        map(list_literal, Expr::List),
        map(identifier, |s: &str| Expr::Ident(s.to_owned())),
    )))(input)
}

fn arglist(input: &str) -> PResult<'_, Vec<Expr>> {
    separated_list0(ws(char(',')), expr)(input)
}

fn call_suffix(input: &str) -> PResult<'_, Vec<Expr>> {
    delimited(
        preceded(multispace0, char('(')),
        arglist,
        preceded(multispace0, char(')')),
    )(input)
}

fn comment(input: &str) -> PResult<'_, Stmt> {
    map(
        preceded(supreme_tag("#"), take_while(|c| c != '\n')),
        |text: &str| Stmt::Comment(text.trim().to_owned()),
    )(input)
}

fn assignment(input: &str) -> PResult<'_, Stmt> {
    map(
        tuple((identifier, ws(char('=')), expr)),
        |(name, _, value)| Stmt::Assign {
            name: name.to_owned(),
            value,
        },
    )(input)
}

fn call_stmt(input: &str) -> PResult<'_, Stmt> {
    map(
        tuple((
            identifier,
            opt(preceded(char('.'), identifier)),
            call_suffix,
        )),
        |(first, method, args)| {
            let callee = match method {
                Some(method) => Callee::Method {
                    target: first.to_owned(),
                    method: method.to_owned(),
                },
                None => Callee::Function(first.to_owned()),
            };
            Stmt::Call { callee, args }
        },
    )(input)
}

fn statement(input: &str) -> PResult<'_, Stmt> {
    ws(alt((comment, call_stmt, assignment)))(input)
}

fn script(input: &str) -> PResult<'_, Vec<Stmt>> {
    many0(statement)(input)
}

/// Parse an entire DSL script into a statement list, ready for
/// [`super::eval::exec`]. Blank lines and leading/trailing whitespace around
/// each statement are ignored.
pub fn parse(source: &str) -> Result<Vec<Stmt>> {
    match script(source) {
        Ok((rest, stmts)) => {
            if !rest.trim().is_empty() {
                let offset = source.len() - rest.len();
                return Err(Error::ParseError {
                    offset,
                    message: format!("unexpected trailing input: {:?}", rest.trim()),
                });
            }
            Ok(stmts)
        }
        Err(err) => Err(Error::ParseError {
            offset: 0,
            message: err.to_string(),
        }),
    }
}
