// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

use rex_core::command::Value;

use crate::error::Result;
use crate::renderer::ShellRenderer;

#[cfg(test)]
#[path = "./tcsh_test.rs"]
mod tcsh_test;

/// C-shell (`tcsh`/`csh`) emitter (`spec.md` §4.7, §6).
///
/// Unlike POSIX sh, tcsh raises an error referencing an unset variable, so
/// the first touch of a variable guards the reference with `if ( ! $?K )`;
/// once we know we set it ourselves earlier in this log, later touches emit
/// the bare form. Compare `original_source/python/rez/rex.py`'s tcsh
/// generation, which performs the same guard for the same reason.
#[derive(Clone, Copy, Debug, Default)]
pub struct TcshRenderer;

impl ShellRenderer for TcshRenderer {
    fn name(&self) -> &'static str {
        "tcsh"
    }

    fn render_set(&self, key: &str, value: &Value, sep: &str) -> Result<String> {
        Ok(format!("setenv {key} \"{}\"", value.joined(sep)))
    }

    fn render_unset(&self, key: &str) -> Result<String> {
        Ok(format!("unsetenv {key}"))
    }

    fn render_prepend_extend(&self, key: &str, value: &Value, sep: &str) -> Result<String> {
        Ok(format!("setenv {key} \"{}{sep}${key}\"", value.joined(sep)))
    }

    fn render_prepend_conditional(&self, key: &str, value: &Value, sep: &str) -> Result<String> {
        Ok(conditional_block(key, &format!("setenv {key} \"{}{sep}${key}\"", value.joined(sep)), &format!("setenv {key} \"{}\"", value.joined(sep))))
    }

    fn render_append_extend(&self, key: &str, value: &Value, sep: &str) -> Result<String> {
        Ok(format!("setenv {key} \"${key}{sep}{}\"", value.joined(sep)))
    }

    fn render_append_conditional(&self, key: &str, value: &Value, sep: &str) -> Result<String> {
        Ok(conditional_block(key, &format!("setenv {key} \"${key}{sep}{}\"", value.joined(sep)), &format!("setenv {key} \"{}\"", value.joined(sep))))
    }

    fn render_alias(&self, key: &str, value: &str) -> Result<String> {
        Ok(format!("alias {key} '{value}';"))
    }

    fn render_info(&self, value: &str) -> Result<String> {
        Ok(format!("echo \"{value}\""))
    }

    fn render_error(&self, value: &str) -> Result<String> {
        Ok(format!("echo \"{value}\" 1>&2"))
    }

    fn render_comment(&self, value: &str) -> Result<String> {
        Ok(format!("# {value}"))
    }

    fn render_source(&self, value: &str) -> Result<String> {
        Ok(format!("source \"{value}\""))
    }

    fn render_command(&self, value: &str) -> Result<String> {
        Ok(value.to_owned())
    }
}

fn conditional_block(key: &str, when_defined: &str, when_undefined: &str) -> String {
    vec![
        format!("if ( ! $?{key} ) then"),
        when_undefined.to_string(),
        "else".to_string(),
        when_defined.to_string(),
        "endif".to_string(),
    ]
    .join("\n")
}
