// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

#[cfg(test)]
#[path = "./separator_test.rs"]
mod separator_test;

#[cfg(windows)]
pub const DEFAULT_VAR_SEP: &str = ";";
#[cfg(not(windows))]
pub const DEFAULT_VAR_SEP: &str = ":";

/// Per-variable separator overrides, falling back to the OS path separator.
/// `CMAKE_MODULE_PATH` defaults to `;` even on POSIX, matching the teacher's
/// `DEFAULT_ENV_SEP_MAP` in `original_source/python/rez/rex.py`; callers may
/// add further overrides.
#[derive(Clone, Debug)]
pub struct SeparatorMap {
    overrides: HashMap<String, String>,
}

impl SeparatorMap {
    pub fn new() -> Self {
        let mut overrides = HashMap::new();
        overrides.insert("CMAKE_MODULE_PATH".to_string(), ";".to_string());
        Self { overrides }
    }

    pub fn with_override(mut self, key: impl Into<String>, sep: impl Into<String>) -> Self {
        self.overrides.insert(key.into(), sep.into());
        self
    }

    pub fn get(&self, key: &str) -> &str {
        self.overrides
            .get(key)
            .map(String::as_str)
            .unwrap_or(DEFAULT_VAR_SEP)
    }
}

impl Default for SeparatorMap {
    fn default() -> Self {
        Self::new()
    }
}
