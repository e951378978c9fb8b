// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

use super::*;

#[test]
fn set_prepend_append_unset_forward_to_recorder() {
    let recorder = Rc::new(RefCell::new(Recorder::new()));
    let view = EnvironmentView::new(recorder.clone());

    let x = view.get("X");
    x.set("a");
    x.prepend("b");
    x.append("c");
    x.unset();

    let log = recorder.borrow().snapshot();
    let kinds: Vec<_> = log.iter().map(|c| c.kind_name()).collect();
    assert_eq!(kinds, vec!["setenv", "prependenv", "appendenv", "unsetenv"]);
}

#[test]
fn handle_is_memoized_by_name() {
    let recorder = Rc::new(RefCell::new(Recorder::new()));
    let view = EnvironmentView::new(recorder);
    let a = view.get("X");
    let b = view.get("X");
    assert_eq!(a.name(), b.name());
}
