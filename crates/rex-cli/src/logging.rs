// Copyright (c) The rex-rs Contributors
// SPDX-License-Identifier: Apache-2.0

use tracing_subscriber::layer::SubscriberExt;

/// `-v`/`-vv`/`-vvv`, matching the teacher's `spk` CLI convention of
/// counting occurrences into a log-level tier rather than naming levels
/// directly.
#[derive(clap::Args)]
pub struct Verbosity {
    #[clap(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Verbosity {
    pub fn level(&self) -> u8 {
        self.verbose
    }
}

/// Install a stderr-writing `tracing` subscriber, with `RUST_LOG`
/// overriding the verbosity-derived default directives exactly as
/// `spk-cli-common::env::configure_logging` does.
pub fn init(verbosity: u8) -> Result<(), tracing::subscriber::SetGlobalDefaultError> {
    let mut directives = match verbosity {
        0 => "rex_cli=info,rex_core=warn,rex_interp=warn",
        1 => "rex_cli=debug,rex_core=info,rex_interp=info",
        2 => "rex_cli=trace,rex_core=debug,rex_interp=debug",
        _ => "rex_cli=trace,rex_core=trace,rex_interp=trace",
    }
    .to_string();
    if let Ok(overrides) = std::env::var("RUST_LOG") {
        directives = overrides;
    }

    let env_filter = tracing_subscriber::filter::EnvFilter::new(directives);
    let registry = tracing_subscriber::Registry::default().with(env_filter);
    let mut fmt_layer = tracing_subscriber::fmt::layer().with_writer(std::io::stderr).without_time();
    if verbosity < 3 {
        fmt_layer = fmt_layer.with_target(false);
    }
    let subscriber = registry.with(fmt_layer);
    tracing::subscriber::set_global_default(subscriber)
}
