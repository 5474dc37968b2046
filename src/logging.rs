use std::io;
use tracing::warn;
use tracing_subscriber::{
    layer::SubscriberExt, reload, util::SubscriberInitExt, EnvFilter, Registry,
};

const BOOTSTRAP_FILTER: &str = "warn";

/// Lets the filter be swapped once settings are known.
pub struct LogHandle {
    handle: reload::Handle<EnvFilter, Registry>,
    from_env: bool,
}

impl LogHandle {
    /// Replaces the bootstrap filter with `directives`. `RUST_LOG` still wins.
    pub fn apply_filter(&self, directives: &str) {
        if self.from_env {
            return;
        }
        if let Err(err) = self.handle.reload(filter_or_bootstrap(directives)) {
            warn!(%err, "could not apply log filter");
        }
    }
}

/// Parses `directives`, falling back to the bootstrap filter.
pub fn filter_or_bootstrap(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|err| {
        warn!(%err, directives, "invalid log filter, using bootstrap filter");
        EnvFilter::new(BOOTSTRAP_FILTER)
    })
}

/// Installs the global subscriber before anything else runs, so config
/// discovery is logged too. Output goes to stderr; stdout carries only the
/// transcript.
pub fn init_logger() -> LogHandle {
    let (filter, from_env) = match EnvFilter::try_from_default_env() {
        Ok(filter) => (filter, true),
        Err(_) => (EnvFilter::new(BOOTSTRAP_FILTER), false),
    };
    let (filter, handle) = reload::Layer::new(filter);

    // A second init (e.g. from tests) is ignored.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init();

    LogHandle { handle, from_env }
}
