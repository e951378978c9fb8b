// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

use rex_core::command::Value;

use crate::error::Result;
use crate::renderer::ShellRenderer;

#[cfg(test)]
#[path = "./posix_test.rs"]
mod posix_test;

/// POSIX sh/bash emitter (`spec.md` §4.7, §6).
///
/// An undefined shell variable expands to the empty string under `set -u`-free
/// POSIX semantics, so unlike the C-shell emitter, the "conditional" and
/// "extend" forms of prepend/append are identical here: both simply reference
/// `$K`.
#[derive(Clone, Copy, Debug, Default)]
pub struct PosixRenderer;

impl PosixRenderer {
    fn prepend(&self, key: &str, value: &Value, sep: &str) -> String {
        format!("export {key}=\"{}{sep}${{{key}}}\"", value.joined(sep))
    }

    fn append(&self, key: &str, value: &Value, sep: &str) -> String {
        format!("export {key}=\"${{{key}}}{sep}{}\"", value.joined(sep))
    }
}

impl ShellRenderer for PosixRenderer {
    fn name(&self) -> &'static str {
        "sh"
    }

    fn render_set(&self, key: &str, value: &Value, sep: &str) -> Result<String> {
        Ok(format!("export {key}=\"{}\"", value.joined(sep)))
    }

    fn render_unset(&self, key: &str) -> Result<String> {
        Ok(format!("unset {key}"))
    }

    fn render_prepend_extend(&self, key: &str, value: &Value, sep: &str) -> Result<String> {
        Ok(self.prepend(key, value, sep))
    }

    fn render_prepend_conditional(&self, key: &str, value: &Value, sep: &str) -> Result<String> {
        Ok(self.prepend(key, value, sep))
    }

    fn render_append_extend(&self, key: &str, value: &Value, sep: &str) -> Result<String> {
        Ok(self.append(key, value, sep))
    }

    fn render_append_conditional(&self, key: &str, value: &Value, sep: &str) -> Result<String> {
        Ok(self.append(key, value, sep))
    }

    fn render_alias(&self, key: &str, value: &str) -> Result<String> {
        Ok(format!("{key}() {{\n  {value}\n}}\nexport -f {key}"))
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
