// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

//! A small interpreted DSL for describing environment mutations.
//!
//! Rust has no equivalent of `rex.py`'s `exec(code, {}, namespace)`, so
//! "execute the script in a controlled namespace" (`spec.md` §1) is met here
//! with an explicit grammar instead of a dynamic `eval`: see `SPEC_FULL.md`
//! §5 for the grammar and the rationale.

pub mod ast;
pub mod eval;
pub mod parser;

use crate::error::Result;
use crate::namespace::RoutingNamespace;

/// Parse and execute `source` against `ns` in one call.
pub fn run(source: &str, ns: &RoutingNamespace) -> Result<()> {
    let stmts = parser::parse(source)?;
    eval::exec(&stmts, ns)
}
