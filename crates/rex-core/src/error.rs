// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while building or querying the DSL execution namespace.
///
/// The recorder itself never fails except on arity mismatches (a programmer
/// error caught by the Rust type system, not represented here); these
/// variants cover the attribute namespace and the DSL parser/evaluator.
#[derive(Diagnostic, Debug, Error)]
#[diagnostic(
    url(
        "https://docs.rs/rex-core/latest/rex_core/error/enum.Error.html#variant.{}",
        self.variant_name()
    )
)]
pub enum Error {
    /// Attribute-namespace insertion with a malformed or non-string key.
    #[error("invalid attribute key {key:?}: must match [_A-Za-z][_A-Za-z0-9]*(\\.[_A-Za-z][_A-Za-z0-9]*)*")]
    InvalidKey { key: String },

    /// Attribute-namespace lookup of a dotted path with no prefix hit, or
    /// whose attribute walk failed partway through.
    #[error("unknown key {0:?}")]
    UnknownKey(String),

    /// The DSL script failed to parse.
    #[error("failed to parse DSL script at byte {offset}: {message}")]
    ParseError { offset: usize, message: String },

    /// A DSL script referenced an undefined free function or handle method.
    #[error("undefined function or method {0:?}")]
    UndefinedCallable(String),

    /// A DSL script called a function with the wrong number of arguments.
    #[error("{function} expects {expected} argument(s), got {got}")]
    Arity {
        function: String,
        expected: usize,
        got: usize,
    },
}

impl Error {
    fn variant_name(&self) -> &'static str {
        match self {
            Self::InvalidKey { .. } => "InvalidKey",
            Self::UnknownKey(_) => "UnknownKey",
            Self::ParseError { .. } => "ParseError",
            Self::UndefinedCallable(_) => "UndefinedCallable",
            Self::Arity { .. } => "Arity",
        }
    }
}
