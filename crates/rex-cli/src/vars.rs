// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

use rex_core::AttrValue;

use crate::error::{Error, Result};

#[cfg(test)]
#[path = "./vars_test.rs"]
mod vars_test;

/// Read a YAML (or JSON, which is valid YAML) document of custom-namespace
/// facts and flatten it into `(dotted.key, AttrValue)` pairs ready to seed a
/// `RoutingNamespace` via `seed_custom`. Nested mappings become dotted keys
/// (`machine: {os: linux}` -> `machine.os`); lists of strings become a
/// `Sequence`; anything else is rendered with its YAML scalar form.
///
/// This is deliberately flat rather than wiring in `rex_core::attributes::Attr`
/// for nested objects: the CLI has no live Rust objects to expose attribute
/// reads on, only data, so every nested path the file names is stored
/// directly under its own key instead of relying on the attribute walk.
pub fn load(path: &std::path::Path) -> Result<Vec<(String, AttrValue)>> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::ReadFile {
        path: path.display().to_string(),
        source,
    })?;
    let value: serde_yaml::Value = serde_yaml::from_str(&text).map_err(|source| Error::ParseVars {
        path: path.display().to_string(),
        source,
    })?;
    let mapping = value.as_mapping().ok_or_else(|| Error::VarsNotAMapping {
        path: path.display().to_string(),
    })?;
    let mut out = Vec::new();
    for (key, value) in mapping {
        let Some(key) = key.as_str() else { continue };
        flatten(key.to_owned(), value, &mut out);
    }
    Ok(out)
}

fn flatten(prefix: String, value: &serde_yaml::Value, out: &mut Vec<(String, AttrValue)>) {
    match value {
        serde_yaml::Value::Mapping(map) => {
            for (key, value) in map {
                let Some(key) = key.as_str() else { continue };
                flatten(format!("{prefix}.{key}"), value, out);
            }
        }
        serde_yaml::Value::Sequence(items) => {
            let strings = items
                .iter()
                .map(scalar_to_string)
                .collect::<Vec<_>>();
            out.push((prefix, AttrValue::Sequence(strings)));
        }
        other => out.push((prefix, AttrValue::Str(scalar_to_string(other)))),
    }
}

fn scalar_to_string(value: &serde_yaml::Value) -> String {
    match value {
        serde_yaml::Value::String(s) => s.clone(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Null => String::new(),
        other => serde_yaml::to_string(other).unwrap_or_default().trim().to_owned(),
    }
}
