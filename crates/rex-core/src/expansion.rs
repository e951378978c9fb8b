// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::attributes::AttributeNamespace;

#[cfg(test)]
#[path = "./expansion_test.rs"]
mod expansion_test;

/// `$NAME` or `${NAME}`, matching a live environment mapping. Only used by
/// the in-process live interpreter; shell emitters deliberately leave these
/// untouched so the target shell performs the substitution itself.
static ENV_TEMPLATE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\$(?:\{([_A-Za-z][_A-Za-z0-9]*)\}|([_A-Za-z][_A-Za-z0-9]*))").unwrap());

/// `!name` or `!{dotted.path}`. Unbraced form is a single identifier; only
/// the braced form may contain dots. Case-insensitive match, case-preserving
/// substitution (the matched text, not a re-cased form, is looked up).
static CUSTOM_TEMPLATE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)!(?:\{([_A-Za-z][_A-Za-z0-9]*(?:\.[_A-Za-z][_A-Za-z0-9]*)*)\}|([_A-Za-z][_A-Za-z0-9]*))").unwrap()
});

/// Substitute `$NAME` / `${NAME}` references in `text` from `env`. Unknown
/// names are left literal: this dialect is only ever run by the live
/// interpreter, against a real environment map, where an unresolved name
/// would be a genuine environment problem, but policy (per spec) is still
/// "safe substitution" here, matching the custom dialect's behavior.
pub fn expand_env_template(text: &str, env: &HashMap<String, String>) -> String {
    ENV_TEMPLATE
        .replace_all(text, |caps: &regex::Captures| {
            let name = caps.get(1).or_else(|| caps.get(2)).unwrap().as_str();
            match env.get(name) {
                Some(value) => value.clone(),
                None => caps.get(0).unwrap().as_str().to_owned(),
            }
        })
        .into_owned()
}

/// Substitute `!name` / `!{dotted.path}` references in `text` from the
/// custom namespace. Independent of [`expand_env_template`] — an occurrence
/// of `$` is never treated as a custom delimiter and vice versa, since the
/// two regexes only ever see the literal `!` or `$` prefix they each match.
/// Unknown names are left literal (never a failure): this is what lets
/// `$PATH` style references, and genuinely undefined custom names, survive
/// into whatever renders the value next.
pub fn expand_custom_template(text: &str, namespace: &AttributeNamespace) -> String {
    CUSTOM_TEMPLATE
        .replace_all(text, |caps: &regex::Captures| {
            let name = caps.get(1).or_else(|| caps.get(2)).unwrap().as_str();
            let resolved = namespace.get(name).ok().and_then(|v| v.as_display());
            match resolved {
                Some(value) => value,
                None => caps.get(0).unwrap().as_str().to_owned(),
            }
        })
        .into_owned()
}
