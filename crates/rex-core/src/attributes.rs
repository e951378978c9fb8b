// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

use std::collections::BTreeMap;
use std::sync::Arc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};

#[cfg(test)]
#[path = "./attributes_test.rs"]
mod attributes_test;

static KEY_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[_A-Za-z][_A-Za-z0-9]*(\.[_A-Za-z][_A-Za-z0-9]*)*$").expect("valid regex")
});

/// Capability an opaque value in the [`AttributeNamespace`] exposes for the
/// forward attribute walk that follows a longest-prefix hit. Mirrors
/// `rex.py`'s reliance on Python's `getattr`, made explicit: anything placed
/// in the namespace that isn't a plain string must implement this to be
/// reachable by dotted paths longer than its own stored key.
pub trait Attr: std::fmt::Debug {
    /// Resolve a single attribute segment, or `None` if it doesn't exist.
    fn get_attr(&self, name: &str) -> Option<AttrValue>;
}

/// A value stored in, or produced by looking up, the attribute namespace.
///
/// This is also the storage slot for the routing namespace's plain variable
/// scope (`spec.md` §4.6), so a DSL-assigned list (e.g. a local built up for
/// later use as a sequence argument) needs a home too — hence `Sequence`,
/// which is opaque to template substitution the same way `Object` is.
#[derive(Clone, Debug)]
pub enum AttrValue {
    Str(String),
    Sequence(Vec<String>),
    Object(Arc<dyn Attr + Send + Sync>),
}

impl AttrValue {
    fn get_attr(&self, name: &str) -> Option<AttrValue> {
        match self {
            Self::Str(_) | Self::Sequence(_) => None,
            Self::Object(obj) => obj.get_attr(name),
        }
    }

    /// Render this value as a string for template substitution. Sequences
    /// and objects without a string representation are not substitutable
    /// and are treated as an unknown name by the expansion engine.
    pub fn as_display(&self) -> Option<String> {
        match self {
            Self::Str(s) => Some(s.clone()),
            Self::Sequence(_) | Self::Object(_) => None,
        }
    }

    pub fn as_sequence(&self) -> Option<&[String]> {
        match self {
            Self::Sequence(items) => Some(items),
            _ => None,
        }
    }
}

impl From<String> for AttrValue {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<&str> for AttrValue {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<Vec<String>> for AttrValue {
    fn from(items: Vec<String>) -> Self {
        Self::Sequence(items)
    }
}

impl From<crate::command::Value> for AttrValue {
    fn from(value: crate::command::Value) -> Self {
        match value {
            crate::command::Value::Scalar(s) => Self::Str(s),
            crate::command::Value::Sequence(items) => Self::Sequence(items),
        }
    }
}

impl TryFrom<AttrValue> for crate::command::Value {
    type Error = ();

    fn try_from(value: AttrValue) -> std::result::Result<Self, Self::Error> {
        match value {
            AttrValue::Str(s) => Ok(Self::Scalar(s)),
            AttrValue::Sequence(items) => Ok(Self::Sequence(items)),
            AttrValue::Object(_) => Err(()),
        }
    }
}

/// Dotted-key map with longest-prefix + attribute-walk lookup.
///
/// Keys are validated against `[_A-Za-z][_A-Za-z0-9]*(\.[_A-Za-z][_A-Za-z0-9]*)*`
/// on insert, then folded to lower case before being stored: lookup is
/// case-insensitive end to end (`spec.md` §4.3), so both the stored key and
/// every prefix probed during a walk are normalized the same way rather than
/// relying on a caller happening to store or query in lower case. Lookup of
/// `a.b.c` probes the map for `a.b.c`, then `a.b`, then `a`; on the first hit
/// it walks the popped segments (in the order they were popped, i.e. forwards
/// through the path) as attribute reads on the resolved value. This lets DSL
/// authors reference live objects (`!{machine.os}`) and flat string keys
/// (`!{version}`) through identical syntax — see `rex.py`'s `AttrDict` in
/// `original_source/`, which this mirrors directly.
#[derive(Clone, Debug, Default)]
pub struct AttributeNamespace {
    entries: BTreeMap<String, AttrValue>,
}

impl AttributeNamespace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `value` under `key`. Fails if `key` does not match the dotted
    /// identifier grammar. The key is stored case-folded; a later insert
    /// differing only by case overwrites the earlier one, the same as it
    /// would if both inserts used identical case.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<AttrValue>) -> Result<()> {
        let key = key.into();
        if !KEY_PATTERN.is_match(&key) {
            return Err(Error::InvalidKey { key });
        }
        self.entries.insert(key.to_lowercase(), value.into());
        Ok(())
    }

    /// Look up a dotted path, performing the longest-prefix + attribute-walk
    /// search described above. `key` is matched case-insensitively against
    /// stored keys; the attribute walk past the prefix hit is left as-is,
    /// since that traverses capability implementations rather than the map.
    pub fn get(&self, key: &str) -> Result<AttrValue> {
        let lower = key.to_lowercase();
        let segments: Vec<&str> = lower.split('.').collect();
        let mut stash = Vec::new();
        let mut remaining = segments.len();
        loop {
            if remaining == 0 {
                return Err(Error::UnknownKey(key.to_owned()));
            }
            let prefix = segments[..remaining].join(".");
            if let Some(found) = self.entries.get(&prefix) {
                let mut value = found.clone();
                for attr in stash.iter().rev() {
                    value = value
                        .get_attr(attr)
                        .ok_or_else(|| Error::UnknownKey(key.to_owned()))?;
                }
                return Ok(value);
            }
            stash.push(segments[remaining - 1]);
            remaining -= 1;
        }
    }

    pub fn contains_prefix(&self, key: &str) -> bool {
        self.get(key).is_ok()
    }
}
