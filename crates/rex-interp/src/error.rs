// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// An interpreter was asked to render or apply a command kind it does
    /// not implement.
    #[error("{interpreter} does not support the {kind:?} command")]
    UnsupportedCommand { interpreter: &'static str, kind: &'static str },

    /// Shell autodetection could not identify a known shell from the parent
    /// process; the caller must pass one explicitly.
    #[error("could not autodetect the calling shell from {hint:?}; pass one explicitly")]
    ShellDetectionFailed { hint: String },
}
