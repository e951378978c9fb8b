// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

//! Interpreters that consume a `rex_core::command::Command` log (`spec.md`
//! §4.7): one [`ShellRenderer`] per concrete shell target, driven by the
//! shared [`renderer::ShellInterpreter`], plus [`live::LiveExecutor`] for
//! replaying a log directly against an in-process environment map.

pub mod cmd;
pub mod error;
pub mod live;
pub mod policy;
pub mod posix;
pub mod renderer;
pub mod separator;
pub mod shell_detect;
pub mod tcsh;

pub use cmd::{CmdRenderer, PathVars, PersistConfig};
pub use error::Error;
pub use live::LiveExecutor;
pub use policy::Policy;
pub use posix::PosixRenderer;
pub use renderer::{ShellInterpreter, ShellRenderer};
pub use separator::SeparatorMap;
pub use shell_detect::Shell;
pub use tcsh::TcshRenderer;
