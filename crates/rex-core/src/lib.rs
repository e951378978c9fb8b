// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

//! Core of a package-environment command recorder: a small
//! programmable-environment virtual machine.
//!
//! A package author writes a DSL script describing how the runtime
//! environment should change on activation. This crate executes that script
//! in a controlled namespace ([`namespace::RoutingNamespace`]), records the
//! mutations as an ordered [`command::Command`] log ([`recorder::Recorder`]),
//! and leaves rendering that log to any target to the `rex-interp` crate.

pub mod attributes;
pub mod command;
pub mod dsl;
pub mod environment_view;
pub mod error;
pub mod expansion;
pub mod namespace;
pub mod recorder;

pub use attributes::{AttrValue, AttributeNamespace};
pub use command::{Command, Value};
pub use environment_view::{EnvHandle, EnvironmentView};
pub use error::Error;
pub use namespace::RoutingNamespace;
pub use recorder::Recorder;
