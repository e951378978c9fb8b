// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

use std::fmt;

#[cfg(test)]
#[path = "./command_test.rs"]
mod command_test;

/// A value recorded alongside a [`Command`].
///
/// Either a single string, or an ordered sequence that the interpreter joins
/// with a variable's separator at emission time. [`Value`] never performs the
/// join itself — see `rex-interp`'s `separator` module — so that the same
/// recorded value can be rendered differently for different targets.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Value {
    Scalar(String),
    Sequence(Vec<String>),
}

impl Value {
    /// Join this value into a single string using `sep`. A scalar is
    /// returned unchanged; a sequence is joined in order.
    pub fn joined(&self, sep: &str) -> String {
        match self {
            Self::Scalar(s) => s.clone(),
            Self::Sequence(items) => items.join(sep),
        }
    }

    /// Apply `f` to every string carried by this value, preserving shape.
    /// Used by the recorder to run record-time expansion over both scalars
    /// and each element of a sequence without flattening it early.
    pub fn map_strings(&self, mut f: impl FnMut(&str) -> String) -> Self {
        match self {
            Self::Scalar(s) => Self::Scalar(f(s)),
            Self::Sequence(items) => Self::Sequence(items.iter().map(|s| f(s.as_str())).collect()),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Scalar(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Scalar(s.to_owned())
    }
}

impl From<Vec<String>> for Value {
    fn from(items: Vec<String>) -> Self {
        Self::Sequence(items)
    }
}

/// A single recorded environment mutation.
///
/// Immutable once constructed; equality is structural. The variant name,
/// lower-cased, is the dispatch selector an [`crate::recorder::Recorder`]'s
/// caller and an interpreter both use — see the `kind_name` method and
/// `rex-interp`'s dispatch tables.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Command {
    Setenv { key: String, value: Value },
    Unsetenv { key: String },
    Prependenv { key: String, value: Value },
    Appendenv { key: String, value: Value },
    Alias { key: String, value: Value },
    Info { value: Value },
    Error { value: Value },
    Comment { value: Value },
    Source { value: Value },
    Command { value: Value },
}

impl Command {
    /// The canonical lower-case name of this command's kind, e.g.
    /// `"setenv"`, `"prependenv"`. This is the sole selector interpreters use
    /// to dispatch — no interpreter ever matches on the enum variant
    /// directly, so adding a target does not require touching the recorder.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Setenv { .. } => "setenv",
            Self::Unsetenv { .. } => "unsetenv",
            Self::Prependenv { .. } => "prependenv",
            Self::Appendenv { .. } => "appendenv",
            Self::Alias { .. } => "alias",
            Self::Info { .. } => "info",
            Self::Error { .. } => "error",
            Self::Comment { .. } => "comment",
            Self::Source { .. } => "source",
            Self::Command { .. } => "command",
        }
    }

    /// The variable name this command mutates, if it operates on a single
    /// environment variable (everything but info/error/comment/source/raw
    /// command passthrough).
    pub fn key(&self) -> Option<&str> {
        match self {
            Self::Setenv { key, .. }
            | Self::Unsetenv { key }
            | Self::Prependenv { key, .. }
            | Self::Appendenv { key, .. }
            | Self::Alias { key, .. } => Some(key.as_str()),
            Self::Info { .. }
            | Self::Error { .. }
            | Self::Comment { .. }
            | Self::Source { .. }
            | Self::Command { .. } => None,
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.kind_name())?;
        if let Some(key) = self.key() {
            write!(f, "({key})")?;
        }
        Ok(())
    }
}
