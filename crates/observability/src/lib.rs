//! Tracing/logging setup shared by binaries.
//!
//! Library crates only emit `tracing` events; installing a subscriber is left
//! to whoever owns the process.

/// Initialize process-wide logging.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init(format: LogFormat) {
    self::tracing::init(format);
}

/// Tracing configuration (filters, layers).
pub mod tracing;

pub use self::tracing::LogFormat;
