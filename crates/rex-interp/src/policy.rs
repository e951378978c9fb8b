// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

use crate::separator::SeparatorMap;

/// Policy inputs shared by every interpreter (`spec.md` §4.7).
#[derive(Clone, Debug)]
pub struct Policy {
    /// When `true`, prepend/append to a variable not seen earlier in this
    /// command log must consult the inherited parent environment. When
    /// `false`, such an operation is promoted to a plain set.
    pub respect_parent_env: bool,
    pub separators: SeparatorMap,
}

impl Policy {
    pub fn new(respect_parent_env: bool) -> Self {
        Self {
            respect_parent_env,
            separators: SeparatorMap::new(),
        }
    }

    pub fn with_separators(mut self, separators: SeparatorMap) -> Self {
        self.separators = separators;
        self
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self::new(true)
    }
}
