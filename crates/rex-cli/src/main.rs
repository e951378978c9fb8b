// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

//! Ambient front door over `rex-core` and `rex-interp`: read a DSL script
//! and an optional custom-namespace document from disk, execute it in a
//! fresh `RoutingNamespace`, and either render the resulting command log as
//! source for a concrete shell or apply it directly to a live environment
//! map. This is the thin analogue of `rez`'s `rez-context`/`rez-env`
//! consumers (`SPEC_FULL.md` §2) -- release-workflow orchestration stays out
//! of scope.

mod error;
mod logging;
mod vars;

use std::collections::HashMap;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use miette::IntoDiagnostic;
use rex_core::{Command, RoutingNamespace};
use rex_interp::{CmdRenderer, LiveExecutor, PersistConfig, Policy, PosixRenderer, SeparatorMap, Shell, ShellInterpreter, TcshRenderer};

use error::{Error, Result};

#[derive(Parser)]
#[command(name = "rex", author, version, about = "Run a package-environment DSL script and render or apply its recorded mutations")]
struct Cli {
    #[command(flatten)]
    verbosity: logging::Verbosity,

    #[command(subcommand)]
    command: Mode,
}

#[derive(Subcommand)]
enum Mode {
    /// Render the recorded command log as source code for a shell.
    Render(RenderArgs),
    /// Apply the recorded command log directly to a live environment map and print the result.
    Apply(ApplyArgs),
}

#[derive(clap::Args)]
struct ScriptArgs {
    /// Path to the DSL script to execute.
    script: PathBuf,

    /// YAML or JSON document of facts to seed the custom namespace with
    /// (nested mappings become dotted keys, e.g. `machine: {os: linux}` is
    /// reachable as `!{machine.os}`).
    #[clap(long, value_name = "FILE")]
    vars: Option<PathBuf>,

    /// When an untouched variable is prepended/appended to, consult the
    /// inherited parent environment instead of promoting the operation to a
    /// plain set.
    #[clap(long, default_value_t = true, action = clap::ArgAction::Set)]
    respect_parent_env: bool,

    /// Override the join separator for a variable, as `KEY=SEP`. May be
    /// given more than once.
    #[clap(long = "sep", value_name = "KEY=SEP")]
    separators: Vec<String>,
}

impl ScriptArgs {
    fn policy(&self) -> Result<Policy> {
        let mut separators = SeparatorMap::new();
        for entry in &self.separators {
            let (key, sep) = entry.split_once('=').ok_or_else(|| Error::InvalidSeparator {
                entry: entry.clone(),
            })?;
            separators = separators.with_override(key, sep);
        }
        Ok(Policy::new(self.respect_parent_env).with_separators(separators))
    }

    /// Parse and run the script, returning its recorded command log.
    fn record(&self) -> Result<Vec<Command>> {
        let source = std::fs::read_to_string(&self.script).map_err(|source| Error::ReadFile {
            path: self.script.display().to_string(),
            source,
        })?;
        let namespace = RoutingNamespace::new();
        if let Some(vars_path) = &self.vars {
            for (key, value) in vars::load(vars_path)? {
                namespace.seed_custom(key, value)?;
            }
        }
        rex_core::dsl::run(&source, &namespace)?;
        Ok(namespace.recorder().borrow().snapshot())
    }
}

#[derive(clap::Args)]
struct RenderArgs {
    #[command(flatten)]
    script: ScriptArgs,

    /// Target shell: bash/sh, tcsh/csh, or cmd/dos. Autodetected from the
    /// calling process (`$SHELL`/`%ComSpec%`) when omitted.
    #[clap(long, env = "REX_SHELL")]
    shell: Option<String>,

    /// For the `cmd` target, also emit `setenv -v` lines persisting
    /// `PATH`-like variables to the volatile (HKCU) registry, de-duplicated
    /// against `existing` (`KEY=VALUE,VALUE` overrides, may be given more
    /// than once).
    #[clap(long)]
    persist: bool,

    /// Existing system+user values for a persisted variable, as
    /// `KEY=VALUE,VALUE`, used to de-duplicate the volatile-registry line.
    /// Only meaningful with `--persist`.
    #[clap(long = "existing", value_name = "KEY=VALUE,...")]
    existing: Vec<String>,
}

#[derive(clap::Args)]
struct ApplyArgs {
    #[command(flatten)]
    script: ScriptArgs,

    /// Start from an empty environment instead of the current process
    /// environment.
    #[clap(long)]
    no_inherit: bool,
}


fn resolve_shell(name: Option<&str>) -> Result<Shell> {
    match name {
        Some(name) => Shell::parse(name).ok_or_else(|| Error::UnknownShell { name: name.to_owned() }),
        None => Ok(Shell::detect()?),
    }
}

fn render(args: &RenderArgs) -> Result<String> {
    let log = args.script.record()?;
    let policy = args.script.policy()?;
    let shell = resolve_shell(args.shell.as_deref())?;
    let output = match shell {
        Shell::Posix => ShellInterpreter::new(PosixRenderer).emit(&log, &policy)?,
        Shell::Tcsh => ShellInterpreter::new(TcshRenderer).emit(&log, &policy)?,
        Shell::Cmd => {
            let mut renderer = CmdRenderer::new();
            if args.persist {
                let mut persist = PersistConfig::new();
                for entry in &args.existing {
                    let (key, values) = entry.split_once('=').ok_or_else(|| Error::InvalidSeparator {
                        entry: entry.clone(),
                    })?;
                    persist = persist.with_existing(key, values.split(',').map(str::to_owned));
                }
                renderer = renderer.with_persist(persist);
            }
            ShellInterpreter::new(renderer).emit(&log, &policy)?
        }
    };
    Ok(output)
}

fn apply(args: &ApplyArgs) -> Result<HashMap<String, String>> {
    let log = args.script.record()?;
    let policy = args.script.policy()?;
    let mut env: HashMap<String, String> = if args.no_inherit {
        HashMap::new()
    } else {
        std::env::vars().collect()
    };
    LiveExecutor::new().exec(&log, &policy, &mut env)?;
    Ok(env)
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbosity.level()).into_diagnostic()?;

    match &cli.command {
        Mode::Render(args) => {
            let output = render(args)?;
            println!("{output}");
        }
        Mode::Apply(args) => {
            let mut env: Vec<_> = apply(args)?.into_iter().collect();
            env.sort_by(|a, b| a.0.cmp(&b.0));
            for (key, value) in env {
                println!("{key}={value}");
            }
        }
    }
    Ok(())
}
