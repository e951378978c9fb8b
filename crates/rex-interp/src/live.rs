// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

use std::collections::{HashMap, HashSet};

use rex_core::command::Command;

use crate::error::{Error, Result};
use crate::policy::Policy;

#[cfg(test)]
#[path = "./live_test.rs"]
mod live_test;

/// Replays a command log directly against an in-process environment map,
/// rather than emitting shell source (`spec.md` §4.7, §6).
///
/// Aliases, comments and source statements are legal no-ops here: there is
/// no shell to define a function in or a file to source. A raw `command` has
/// nowhere to execute, so it is the one kind this target refuses.
#[derive(Debug, Default)]
pub struct LiveExecutor {
    set_env_vars: HashSet<String>,
}

impl LiveExecutor {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reset(&mut self) {
        self.set_env_vars.clear();
    }

    pub fn exec(&mut self, log: &[Command], policy: &Policy, env: &mut HashMap<String, String>) -> Result<()> {
        self.reset();
        for command in log {
            self.exec_one(command, policy, env)?;
        }
        Ok(())
    }

    fn exec_one(&mut self, command: &Command, policy: &Policy, env: &mut HashMap<String, String>) -> Result<()> {
        tracing::debug!(kind = command.kind_name(), "applying command to live environment");
        match command {
            Command::Setenv { key, value } => {
                let sep = policy.separators.get(key);
                env.insert(key.clone(), value.joined(sep));
                self.set_env_vars.insert(key.clone());
                Ok(())
            }
            Command::Unsetenv { key } => {
                env.remove(key);
                self.set_env_vars.remove(key);
                Ok(())
            }
            Command::Prependenv { key, value } => {
                self.extend(key, value, policy, env, true);
                Ok(())
            }
            Command::Appendenv { key, value } => {
                self.extend(key, value, policy, env, false);
                Ok(())
            }
            Command::Alias { .. } | Command::Comment { .. } | Command::Source { .. } => Ok(()),
            Command::Info { value } => {
                println!("{}", value.joined(" "));
                Ok(())
            }
            Command::Error { value } => {
                eprintln!("{}", value.joined(" "));
                Ok(())
            }
            Command::Command { .. } => Err(Error::UnsupportedCommand { interpreter: "live", kind: "command" }),
        }
    }

    fn extend(
        &mut self,
        key: &str,
        value: &rex_core::command::Value,
        policy: &Policy,
        env: &mut HashMap<String, String>,
        prepend: bool,
    ) {
        let sep = policy.separators.get(key);
        let joined = value.joined(sep);
        let extend_existing = self.set_env_vars.contains(key) || policy.respect_parent_env;
        let new_value = match (extend_existing, env.get(key)) {
            (true, Some(base)) if prepend => format!("{joined}{sep}{base}"),
            (true, Some(base)) => format!("{base}{sep}{joined}"),
            _ => joined,
        };
        env.insert(key.to_owned(), new_value);
        self.set_env_vars.insert(key.to_owned());
    }
}
