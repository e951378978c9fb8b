// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

use crate::command::{Command, Value};

#[cfg(test)]
#[path = "./recorder_test.rs"]
mod recorder_test;

/// A callback run over every string carried by a recorded value at the
/// moment it becomes a [`Command`] argument. Installed by the routing
/// namespace to perform custom-template expansion; left unset the log
/// records values verbatim.
pub type ExpandFn = Box<dyn Fn(&str) -> String>;

/// Append-only log of [`Command`] values.
///
/// Every public method appends exactly one command and returns nothing.
/// Keys are never expanded — only the custom namespace is known at record
/// time, the environment namespace is not, so `$NAME` references must
/// survive into whatever interpreter eventually runs the log.
#[derive(Default)]
pub struct Recorder {
    log: Vec<Command>,
    expand: Option<ExpandFn>,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install the record-time expansion callback. Replaces any previous one.
    pub fn set_expand_fn(&mut self, expand: ExpandFn) {
        self.expand = Some(expand);
    }

    fn expand_value(&self, value: impl Into<Value>) -> Value {
        let value = value.into();
        match &self.expand {
            Some(f) => value.map_strings(|s| f(s)),
            None => value,
        }
    }

    fn push(&mut self, command: Command) {
        tracing::trace!(kind = command.kind_name(), "recording command");
        self.log.push(command);
    }

    pub fn setenv(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let value = self.expand_value(value);
        self.push(Command::Setenv {
            key: key.into(),
            value,
        });
    }

    pub fn unsetenv(&mut self, key: impl Into<String>) {
        self.push(Command::Unsetenv { key: key.into() });
    }

    pub fn prependenv(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let value = self.expand_value(value);
        self.push(Command::Prependenv {
            key: key.into(),
            value,
        });
    }

    pub fn appendenv(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let value = self.expand_value(value);
        self.push(Command::Appendenv {
            key: key.into(),
            value,
        });
    }

    pub fn alias(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let value = self.expand_value(value);
        self.push(Command::Alias {
            key: key.into(),
            value,
        });
    }

    pub fn info(&mut self, value: impl Into<Value>) {
        let value = self.expand_value(value);
        self.push(Command::Info { value });
    }

    pub fn error(&mut self, value: impl Into<Value>) {
        let value = self.expand_value(value);
        self.push(Command::Error { value });
    }

    pub fn comment(&mut self, value: impl Into<Value>) {
        let value = self.expand_value(value);
        self.push(Command::Comment { value });
    }

    pub fn source(&mut self, value: impl Into<Value>) {
        let value = self.expand_value(value);
        self.push(Command::Source { value });
    }

    pub fn command(&mut self, value: impl Into<Value>) {
        let value = self.expand_value(value);
        self.push(Command::Command { value });
    }

    /// Clear the log. Does not remove the installed expansion callback.
    pub fn reset(&mut self) {
        self.log.clear();
    }

    /// A defensive copy of the log; never a live alias, safe to hand to
    /// another thread or a reused interpreter.
    pub fn snapshot(&self) -> Vec<Command> {
        self.log.clone()
    }
}
