//! Diagnostic logging setup.
//!
//! Installs a global `tracing` subscriber writing to stderr, so stdout stays
//! clean for rendered views and `--json` output.

use std::sync::OnceLock;

use tracing_subscriber::{EnvFilter, Registry, fmt, prelude::*};

/// Environment variable holding an `EnvFilter` directive.
pub const LOG_ENV: &str = "LQO_LOG";

static INSTALLED: OnceLock<()> = OnceLock::new();

/// Requested diagnostic verbosity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// Errors only.
    Quiet,
    #[default]
    Normal,
    /// Debug output from this crate.
    Verbose,
}

impl Verbosity {
    #[must_use]
    pub const fn from_flags(verbose: bool, quiet: bool) -> Self {
        if quiet {
            Self::Quiet
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Filter directive used when `LQO_LOG` is unset.
    #[must_use]
    pub const fn default_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "llm_quality_observer=debug,warn",
        }
    }
}

/// Install the global subscriber. Subsequent calls are no-ops, including calls
/// that lose a race to install it.
pub fn init(verbosity: Verbosity) {
    if INSTALLED.get().is_some() {
        return;
    }

    let filter = build_env_filter(std::env::var(LOG_ENV).ok().as_deref(), verbosity);
    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);

    let subscriber = Registry::default().with(filter).with(stderr_layer);
    // Losing the race to a concurrent `init` or an embedding host is fine.
    let outcome = tracing::subscriber::set_global_default(subscriber);
    let _ = INSTALLED.set(());
    match outcome {
        Ok(()) => tracing::debug!(?verbosity, "logging initialized"),
        Err(err) => tracing::debug!(error = %err, "tracing subscriber already installed"),
    }
}

fn build_env_filter(env_directive: Option<&str>, verbosity: Verbosity) -> EnvFilter {
    env_directive
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .and_then(|raw| EnvFilter::try_new(raw).ok())
        .unwrap_or_else(|| EnvFilter::new(verbosity.default_directive()))
}
