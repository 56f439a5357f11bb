//! Tracing/logging setup shared by every storefront binary.

/// Initialize process-wide JSON logging with [`tracing::DEFAULT_DIRECTIVES`].
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(tracing::DEFAULT_DIRECTIVES);
}

/// Subscriber construction (filters, output format).
pub mod tracing;
