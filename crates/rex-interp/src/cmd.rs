// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

use std::collections::{HashMap, HashSet};

use rex_core::command::Value;

use crate::error::Result;
use crate::renderer::ShellRenderer;

#[cfg(test)]
#[path = "./cmd_test.rs"]
mod cmd_test;

fn windows_path(value: &str) -> String {
    value.replace('/', "\\")
}

/// Which environment variables hold filesystem paths, and so need `/` to `\\`
/// translation when emitted for `cmd` (`spec.md` §4.7: "path values
/// additionally translate `/` to `\\`" — not every value, only path ones).
/// `PATH` and `CMAKE_MODULE_PATH` are recognized up front, matching
/// `SeparatorMap`'s own built-in entry for the latter; callers add any
/// package-specific variable (e.g. `PKG_ROOT`) that carries a path.
#[derive(Clone, Debug)]
pub struct PathVars {
    names: HashSet<String>,
}

impl PathVars {
    pub fn new() -> Self {
        let mut names = HashSet::new();
        names.insert("PATH".to_string());
        names.insert("CMAKE_MODULE_PATH".to_string());
        Self { names }
    }

    pub fn with_var(mut self, key: impl Into<String>) -> Self {
        self.names.insert(key.into());
        self
    }

    pub fn contains(&self, key: &str) -> bool {
        self.names.contains(key)
    }
}

impl Default for PathVars {
    fn default() -> Self {
        Self::new()
    }
}

/// The union of system + user values already present for a variable, used to
/// de-duplicate before writing a volatile registry entry (`spec.md` §4.7,
/// scenario 6). Only variables present here are subject to dedup; anything
/// else persists in full.
#[derive(Clone, Debug, Default)]
pub struct PersistConfig {
    existing: HashMap<String, HashSet<String>>,
}

impl PersistConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_existing(mut self, key: impl Into<String>, values: impl IntoIterator<Item = String>) -> Self {
        self.existing.insert(key.into(), values.into_iter().collect());
        self
    }
}

/// Windows `cmd.exe` emitter (`spec.md` §4.7, §6).
///
/// Process-local mutation always uses the full value; a `setenv -v`
/// (volatile/HKCU) line is additionally emitted when `persist` is configured,
/// with its sequence elements de-duplicated against the union of
/// already-present system and user values for that variable.
#[derive(Clone, Debug, Default)]
pub struct CmdRenderer {
    persist: Option<PersistConfig>,
    path_vars: PathVars,
}

impl CmdRenderer {
    pub fn new() -> Self {
        Self {
            persist: None,
            path_vars: PathVars::new(),
        }
    }

    pub fn with_persist(mut self, persist: PersistConfig) -> Self {
        self.persist = Some(persist);
        self
    }

    pub fn with_path_vars(mut self, path_vars: PathVars) -> Self {
        self.path_vars = path_vars;
        self
    }

    fn maybe_windows_path(&self, key: &str, value: &str) -> String {
        if self.path_vars.contains(key) {
            windows_path(value)
        } else {
            value.to_owned()
        }
    }

    fn items(value: &Value) -> Vec<&str> {
        match value {
            Value::Scalar(s) => vec![s.as_str()],
            Value::Sequence(items) => items.iter().map(String::as_str).collect(),
        }
    }

    fn persist_line(&self, key: &str, value: &Value, sep: &str) -> Option<String> {
        let persist = self.persist.as_ref()?;
        let existing = persist.existing.get(key);
        let deduped: Vec<String> = Self::items(value)
            .into_iter()
            .filter(|item| !existing.is_some_and(|e| e.contains(*item)))
            .map(|item| self.maybe_windows_path(key, item))
            .collect();
        if deduped.is_empty() {
            return None;
        }
        Some(format!("setenv -v {key} {}", deduped.join(sep)))
    }

    fn with_persist_line(&self, primary: String, key: &str, value: &Value, sep: &str) -> String {
        match self.persist_line(key, value, sep) {
            Some(line) => format!("{primary}\n{line}"),
            None => primary,
        }
    }
}

impl ShellRenderer for CmdRenderer {
    fn name(&self) -> &'static str {
        "cmd"
    }

    fn render_set(&self, key: &str, value: &Value, sep: &str) -> Result<String> {
        let primary = format!("set {key}={}", self.maybe_windows_path(key, &value.joined(sep)));
        Ok(self.with_persist_line(primary, key, value, sep))
    }

    fn render_unset(&self, key: &str) -> Result<String> {
        Ok(format!("set {key}="))
    }

    fn render_prepend_extend(&self, key: &str, value: &Value, sep: &str) -> Result<String> {
        let primary = format!("set {key}={};%{key}%", self.maybe_windows_path(key, &value.joined(sep)));
        Ok(self.with_persist_line(primary, key, value, sep))
    }

    fn render_prepend_conditional(&self, key: &str, value: &Value, sep: &str) -> Result<String> {
        let joined = self.maybe_windows_path(key, &value.joined(sep));
        let primary = conditional_block(key, &format!("set {key}={joined};%{key}%"), &format!("set {key}={joined}"));
        Ok(self.with_persist_line(primary, key, value, sep))
    }

    fn render_append_extend(&self, key: &str, value: &Value, sep: &str) -> Result<String> {
        let primary = format!("set {key}=%{key}%;{}", self.maybe_windows_path(key, &value.joined(sep)));
        Ok(self.with_persist_line(primary, key, value, sep))
    }

    fn render_append_conditional(&self, key: &str, value: &Value, sep: &str) -> Result<String> {
        let joined = self.maybe_windows_path(key, &value.joined(sep));
        let primary = conditional_block(key, &format!("set {key}=%{key}%;{joined}"), &format!("set {key}={joined}"));
        Ok(self.with_persist_line(primary, key, value, sep))
    }

    fn render_alias(&self, key: &str, value: &str) -> Result<String> {
        Ok(format!("doskey {key}={value}"))
    }

    fn render_info(&self, value: &str) -> Result<String> {
        Ok(format!("echo {value}"))
    }

    fn render_error(&self, value: &str) -> Result<String> {
        Ok(format!("echo {value} 1>&2"))
    }

    fn render_comment(&self, value: &str) -> Result<String> {
        Ok(format!(":: {value}"))
    }

    fn render_source(&self, value: &str) -> Result<String> {
        Ok(format!("call \"{}\"", windows_path(value)))
    }

    fn render_command(&self, value: &str) -> Result<String> {
        Ok(value.to_owned())
    }
}

fn conditional_block(key: &str, when_defined: &str, when_undefined: &str) -> String {
    vec![
        format!("if defined {key} ("),
        format!("  {when_defined}"),
        ") else (".to_string(),
        format!("  {when_undefined}"),
        ")".to_string(),
    ]
    .join("\n")
}
