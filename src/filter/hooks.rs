//! Diagnostic message sinks for a [`Filter`](super::Filter).

use std::fmt;
use std::sync::Arc;

/// A printf-like message sink.
pub type Formatter = Arc<dyn Fn(fmt::Arguments<'_>) + Send + Sync>;

/// Discards every message.
pub fn noop() -> Formatter {
    Arc::new(|_: fmt::Arguments<'_>| {})
}

/// Forwards messages to `tracing` at INFO.
pub fn tracing_verbose() -> Formatter {
    Arc::new(|args: fmt::Arguments<'_>| tracing::info!("{}", args))
}

/// Forwards messages to `tracing` at DEBUG.
pub fn tracing_debug() -> Formatter {
    Arc::new(|args: fmt::Arguments<'_>| tracing::debug!("{}", args))
}

#[derive(Clone)]
pub(crate) struct Hooks {
    pub verbose: Formatter,
    pub debug: Formatter,
}

impl Hooks {
    pub fn new(verbose: Option<Formatter>, debug: Option<Formatter>) -> Self {
        Hooks {
            verbose: verbose.unwrap_or_else(noop),
            debug: debug.unwrap_or_else(noop),
        }
    }
}

impl fmt::Debug for Hooks {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Hooks { .. }")
    }
}
