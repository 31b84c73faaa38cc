//! Tracing/logging setup shared by every storefront entry point.

/// Tracing configuration (filters, output format).
pub mod tracing;

pub use self::tracing::{LogFormat, LogSettings};

/// Initialize process-wide logging with default settings.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&LogSettings::default());
}
