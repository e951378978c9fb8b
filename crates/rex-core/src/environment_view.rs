// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::command::Value;
use crate::recorder::Recorder;

#[cfg(test)]
#[path = "./environment_view_test.rs"]
mod environment_view_test;

/// Per-variable handle returned by [`EnvironmentView`]. Stateless beyond its
/// name: every operation forwards straight to the shared recorder. A handle
/// never reads current environment state, it only records intent — that is
/// the whole point of deferring expansion and parent-env decisions to the
/// interpreter.
#[derive(Clone)]
pub struct EnvHandle {
    name: String,
    recorder: Rc<RefCell<Recorder>>,
}

impl EnvHandle {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Assigning a value to `ENV_NAME` in the DSL is sugar for this.
    pub fn set(&self, value: impl Into<Value>) {
        self.recorder.borrow_mut().setenv(self.name.clone(), value);
    }

    pub fn prepend(&self, value: impl Into<Value>) {
        self.recorder
            .borrow_mut()
            .prependenv(self.name.clone(), value);
    }

    pub fn append(&self, value: impl Into<Value>) {
        self.recorder
            .borrow_mut()
            .appendenv(self.name.clone(), value);
    }

    pub fn unset(&self) {
        self.recorder.borrow_mut().unsetenv(self.name.clone());
    }
}

/// Mapping from variable name to [`EnvHandle`]. Handles are created on first
/// access and memoized, matching the routing namespace's ALL-CAPS key
/// dispatch in `spec.md` §4.6: `ENV.FOO` and a later `ENV.FOO` reference the
/// same handle object.
pub struct EnvironmentView {
    recorder: Rc<RefCell<Recorder>>,
    handles: RefCell<HashMap<String, EnvHandle>>,
}

impl EnvironmentView {
    pub fn new(recorder: Rc<RefCell<Recorder>>) -> Self {
        Self {
            recorder,
            handles: RefCell::new(HashMap::new()),
        }
    }

    pub fn get(&self, name: &str) -> EnvHandle {
        if let Some(handle) = self.handles.borrow().get(name) {
            return handle.clone();
        }
        let handle = EnvHandle {
            name: name.to_owned(),
            recorder: self.recorder.clone(),
        };
        self.handles
            .borrow_mut()
            .insert(name.to_owned(), handle.clone());
        handle
    }
}
