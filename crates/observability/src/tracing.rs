//! Tracing/logging initialization.
//!
//! Repositories emit `debug!` events for every write and search and `warn!`
//! events for updates/deletes of unknown entities. Enable them with e.g.
//! `RUST_LOG=catalog_infra=debug`.

use tracing_subscriber::EnvFilter;

/// Output format of the fmt subscriber.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// One JSON object per event.
    #[default]
    Json,
    /// Human-readable single-line output.
    Pretty,
}

impl LogFormat {
    /// Reads `CATALOG_LOG_FORMAT` (`json` or `pretty`); anything else is JSON.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env), reading the value through `get`.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        match get("CATALOG_LOG_FORMAT") {
            Some(v) if v.trim().eq_ignore_ascii_case("pretty") => Self::Pretty,
            _ => Self::Json,
        }
    }
}

/// Initialize tracing with the format from `CATALOG_LOG_FORMAT`.
///
/// Safe to call multiple times (subsequent calls are no-ops).
pub fn init() {
    init_with(LogFormat::from_env());
}

/// Initialize tracing with an explicit format. Filtering comes from `RUST_LOG`
/// and defaults to `info`.
///
/// Returns `false` if a global subscriber was already installed.
pub fn init_with(format: LogFormat) -> bool {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(tracing_subscriber::fmt::time::SystemTime)
        .with_target(false);

    match format {
        LogFormat::Json => builder.json().try_init().is_ok(),
        LogFormat::Pretty => builder.compact().try_init().is_ok(),
    }
}
