// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashSet;

use rex_core::command::{Command, Value};

use crate::error::{Error, Result};
use crate::policy::Policy;

#[cfg(test)]
#[path = "./renderer_test.rs"]
mod renderer_test;

fn unsupported(interpreter: &'static str, kind: &'static str) -> Error {
    Error::UnsupportedCommand { interpreter, kind }
}

/// One render method per [`Command`] kind. A shell target implements only
/// the kinds it supports; the default methods return `UnsupportedCommand`,
/// so a new target (fish, PowerShell, ...) can be added by implementing this
/// trait without touching the recorder or any existing renderer — see the
/// "Interpreter extensibility" design note.
///
/// The `extend`/`conditional` split on prepend/append mirrors the table in
/// `spec.md` §4.7: `extend` is used once a variable has already been set in
/// this command log, `conditional` only the first time, when
/// `respect_parent_env` is true.
pub trait ShellRenderer {
    fn name(&self) -> &'static str;

    fn render_set(&self, _key: &str, _value: &Value, _sep: &str) -> Result<String> {
        Err(unsupported(self.name(), "setenv"))
    }
    fn render_unset(&self, _key: &str) -> Result<String> {
        Err(unsupported(self.name(), "unsetenv"))
    }
    fn render_prepend_extend(&self, _key: &str, _value: &Value, _sep: &str) -> Result<String> {
        Err(unsupported(self.name(), "prependenv"))
    }
    fn render_prepend_conditional(&self, _key: &str, _value: &Value, _sep: &str) -> Result<String> {
        Err(unsupported(self.name(), "prependenv"))
    }
    fn render_append_extend(&self, _key: &str, _value: &Value, _sep: &str) -> Result<String> {
        Err(unsupported(self.name(), "appendenv"))
    }
    fn render_append_conditional(&self, _key: &str, _value: &Value, _sep: &str) -> Result<String> {
        Err(unsupported(self.name(), "appendenv"))
    }
    fn render_alias(&self, _key: &str, _value: &str) -> Result<String> {
        Err(unsupported(self.name(), "alias"))
    }
    fn render_info(&self, _value: &str) -> Result<String> {
        Err(unsupported(self.name(), "info"))
    }
    fn render_error(&self, _value: &str) -> Result<String> {
        Err(unsupported(self.name(), "error"))
    }
    fn render_comment(&self, _value: &str) -> Result<String> {
        Err(unsupported(self.name(), "comment"))
    }
    fn render_source(&self, _value: &str) -> Result<String> {
        Err(unsupported(self.name(), "source"))
    }
    fn render_command(&self, _value: &str) -> Result<String> {
        Err(unsupported(self.name(), "command"))
    }
}

/// Drives a [`ShellRenderer`] over a command log, one pass, left to right.
///
/// Carries the one piece of state the contract requires between commands:
/// `set_env_vars`, the set of variable names already touched by
/// SETENV/PREPENDENV/APPENDENV earlier in *this* command log. This is the
/// sole mechanism distinguishing "already set by us" from "inherited from
/// the parent" — see `spec.md` §4.7 and §9's resolution of the
/// `respect_parent_env` open question.
pub struct ShellInterpreter<R> {
    renderer: R,
    set_env_vars: HashSet<String>,
}

impl<R: ShellRenderer> ShellInterpreter<R> {
    pub fn new(renderer: R) -> Self {
        Self {
            renderer,
            set_env_vars: HashSet::new(),
        }
    }

    /// Clear per-execution state. Required before reusing this interpreter
    /// for another command log; concurrent executions need distinct
    /// instances instead.
    pub fn reset(&mut self) {
        self.set_env_vars.clear();
    }

    pub fn emit(&mut self, log: &[Command], policy: &Policy) -> Result<String> {
        self.reset();
        let mut lines = Vec::with_capacity(log.len());
        for command in log {
            lines.push(self.emit_one(command, policy)?);
        }
        Ok(lines.join("\n"))
    }

    fn emit_one(&mut self, command: &Command, policy: &Policy) -> Result<String> {
        tracing::debug!(kind = command.kind_name(), target = self.renderer.name(), "rendering command");
        match command {
            Command::Setenv { key, value } => {
                let sep = policy.separators.get(key);
                let rendered = self.renderer.render_set(key, value, sep)?;
                self.set_env_vars.insert(key.clone());
                Ok(rendered)
            }
            Command::Unsetenv { key } => {
                self.set_env_vars.remove(key);
                self.renderer.render_unset(key)
            }
            Command::Prependenv { key, value } => self.emit_extend(key, value, policy, true),
            Command::Appendenv { key, value } => self.emit_extend(key, value, policy, false),
            Command::Alias { key, value } => {
                self.renderer.render_alias(key, &value.joined(policy.separators.get(key)))
            }
            Command::Info { value } => self.renderer.render_info(&value.joined(" ")),
            Command::Error { value } => self.renderer.render_error(&value.joined(" ")),
            Command::Comment { value } => self.renderer.render_comment(&value.joined(" ")),
            Command::Source { value } => self.renderer.render_source(&value.joined(" ")),
            Command::Command { value } => self.renderer.render_command(&value.joined(" ")),
        }
    }

    fn emit_extend(&mut self, key: &str, value: &Value, policy: &Policy, prepend: bool) -> Result<String> {
        let sep = policy.separators.get(key);
        let already_set = self.set_env_vars.contains(key);
        let result = if already_set {
            if prepend {
                self.renderer.render_prepend_extend(key, value, sep)
            } else {
                self.renderer.render_append_extend(key, value, sep)
            }
        } else if policy.respect_parent_env {
            if prepend {
                self.renderer.render_prepend_conditional(key, value, sep)
            } else {
                self.renderer.render_append_conditional(key, value, sep)
            }
        } else {
            self.renderer.render_set(key, value, sep)
        };
        self.set_env_vars.insert(key.to_owned());
        result
    }
}
