// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

use crate::error::{Error, Result};

#[cfg(test)]
#[path = "./shell_detect_test.rs"]
mod shell_detect_test;

/// A concrete shell target recognized by `rex-interp`'s emitters.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Shell {
    Posix,
    Tcsh,
    Cmd,
}

impl Shell {
    /// Resolve a shell name as a caller would pass it explicitly
    /// (`--shell bash`, `REX_SHELL=tcsh`, ...). Recognizes the families named
    /// in `spec.md` §6: `bash`/`sh` for POSIX, `tcsh`/`csh` for C-shell, and
    /// `cmd`/`dos` for Windows cmd.
    pub fn parse(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "bash" | "sh" | "zsh" | "dash" => Some(Self::Posix),
            "tcsh" | "csh" => Some(Self::Tcsh),
            "cmd" | "dos" | "cmd.exe" => Some(Self::Cmd),
            _ => None,
        }
    }

    /// Best-effort autodetection from the calling shell's name, as surfaced
    /// by the `SHELL` environment variable on POSIX systems or `ComSpec` on
    /// Windows. Neither variable names the *running* interactive shell
    /// precisely, but both are the conventional signal a script can read
    /// without spawning a subprocess to walk the process tree.
    pub fn detect() -> Result<Self> {
        if let Ok(shell) = std::env::var("SHELL") {
            let name = shell.rsplit(['/', '\\']).next().unwrap_or(shell.as_str());
            return Self::parse(name).ok_or(Error::ShellDetectionFailed { hint: shell });
        }
        if std::env::var("ComSpec").is_ok() || std::env::var("COMSPEC").is_ok() {
            return Ok(Self::Cmd);
        }
        Err(Error::ShellDetectionFailed { hint: "no SHELL or ComSpec set in environment".to_string() })
    }
}
