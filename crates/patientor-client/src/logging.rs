//! Log filter setup for the `patientor` binary.
//!
//! `RUST_LOG` replaces the default directives entirely when it is set and
//! parses; otherwise the client and binary log at `info`.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directives used when `RUST_LOG` is unset, blank or unparseable.
pub const DEFAULT_DIRECTIVES: &str = "patientor=info,patientor_client=info";

/// Build the filter from a raw `RUST_LOG` value.
pub fn env_filter(rust_log: Option<&str>) -> EnvFilter {
    rust_log
        .filter(|v| !v.trim().is_empty())
        .and_then(|v| EnvFilter::try_new(v).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVES))
}

/// Install the global subscriber, writing to stderr.
pub fn init() {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::registry()
        .with(env_filter(rust_log.as_deref()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}
