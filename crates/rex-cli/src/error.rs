// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

use miette::Diagnostic;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Top-level CLI error. Wraps the two library error types plus the I/O and
/// parsing failures that only the ambient front door can produce (reading
/// the script / vars files from disk).
#[derive(Debug, Error, Diagnostic)]
pub enum Error {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Core(#[from] rex_core::Error),

    #[error(transparent)]
    Interp(#[from] rex_interp::Error),

    #[error("failed to read {path}")]
    ReadFile {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse custom namespace file {path}")]
    ParseVars {
        path: String,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("custom namespace file {path} must contain a mapping at its top level")]
    VarsNotAMapping { path: String },

    #[error("expected KEY=VALUE, got {entry:?}")]
    InvalidSeparator { entry: String },

    #[error("unknown shell {name:?}; pass bash, sh, tcsh, csh, or cmd")]
    UnknownShell { name: String },
}
