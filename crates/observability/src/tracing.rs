//! Subscriber construction for the storefront process.

use tracing_subscriber::EnvFilter;

/// Directives used when `RUST_LOG` is unset: storefront events at `info`,
/// the HTTP stack only when it has something to warn about.
pub const DEFAULT_DIRECTIVES: &str = "info,hyper=warn,hyper_util=warn,reqwest=warn";

/// Filter built from `directives`, or plain `info` if they do not parse.
pub fn default_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|err| {
        eprintln!("storefront: ignoring log directives {directives:?}: {err}");
        EnvFilter::new("info")
    })
}

/// Install the JSON subscriber. `RUST_LOG` wins over `directives`.
///
/// Later calls are no-ops.
pub fn init(directives: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter(directives));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .json()
        .with_current_span(false)
        .with_target(true)
        .try_init();
}
