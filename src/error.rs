//! Error types.
//!
//! Cache operations never fail: a missing key is `None` and a full cache
//! evicts. The only fallible step is building a configuration.

use thiserror::Error;

/// Errors raised while building a cache configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// The requested capacity was zero.
    #[error("cache capacity must be at least 1")]
    ZeroCapacity,
}
