//! Tracing/logging setup shared by binaries and tests embedding the catalog.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{LogFormat, init, init_with};
