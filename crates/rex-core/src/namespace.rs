// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::rc::Rc;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::attributes::AttributeNamespace;
use crate::environment_view::{EnvHandle, EnvironmentView};
use crate::expansion::expand_custom_template;
use crate::recorder::Recorder;

#[cfg(test)]
#[path = "./namespace_test.rs"]
mod namespace_test;

static ALL_CAPS_KEY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[_A-Z][_A-Z0-9]*$").unwrap());

/// `true` for keys the DSL routes to the environment (ALL-CAPS convention),
/// `false` for keys routed to the plain local / custom-template scope.
pub fn is_environment_key(name: &str) -> bool {
    ALL_CAPS_KEY.is_match(name)
}

/// The execution scope for a single DSL evaluation: an environment view for
/// ALL-CAPS keys, and a plain variable scope that doubles as the custom
/// namespace the expansion engine reads from. One `RoutingNamespace` and its
/// `Recorder` live exactly as long as one activation evaluation.
pub struct RoutingNamespace {
    recorder: Rc<RefCell<Recorder>>,
    environment: EnvironmentView,
    /// Backing store for both local DSL variables and `!name` / `!{a.b}`
    /// template lookups — the same object, not two synchronized copies, per
    /// `spec.md` §4.6.
    locals: Rc<RefCell<AttributeNamespace>>,
}

impl RoutingNamespace {
    /// Build a namespace with its own fresh [`Recorder`], wiring the
    /// recorder's expansion callback to run custom-template substitution
    /// against this namespace's locals, exactly as `spec.md` §4.6 requires.
    pub fn new() -> Self {
        let recorder = Rc::new(RefCell::new(Recorder::new()));
        let locals: Rc<RefCell<AttributeNamespace>> = Rc::new(RefCell::new(AttributeNamespace::new()));
        let expand_locals = locals.clone();
        recorder
            .borrow_mut()
            .set_expand_fn(Box::new(move |s| expand_custom_template(s, &expand_locals.borrow())));
        let environment = EnvironmentView::new(recorder.clone());
        Self {
            recorder,
            environment,
            locals,
        }
    }

    pub fn recorder(&self) -> Rc<RefCell<Recorder>> {
        self.recorder.clone()
    }

    pub fn environment(&self) -> &EnvironmentView {
        &self.environment
    }

    pub fn locals(&self) -> Rc<RefCell<AttributeNamespace>> {
        self.locals.clone()
    }

    /// Resolve `name` as routed by the ALL-CAPS convention, returning the
    /// handle the DSL's `ENV_NAME.method(...)` / `ENV_NAME = value` forms
    /// operate on.
    pub fn env_handle(&self, name: &str) -> EnvHandle {
        self.environment.get(name)
    }

    /// Seed the custom namespace before running a script, e.g. with
    /// host-provided facts like `machine.os`. Insertion validates the key
    /// shape the same way direct DSL assignment does.
    pub fn seed_custom(
        &self,
        key: impl Into<String>,
        value: impl Into<crate::attributes::AttrValue>,
    ) -> crate::error::Result<()> {
        self.locals.borrow_mut().insert(key, value)
    }
}

impl Default for RoutingNamespace {
    fn default() -> Self {
        Self::new()
    }
}
