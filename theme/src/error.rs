//! Error types for theme persistence and listener dispatch.
//!
//! Neither error is fatal: persistence failures degrade to a session-only
//! theme and subscriber failures are logged and skipped.

/// Failure writing to (or reading from) client-local storage.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PersistenceError {
    /// Storage does not exist or has been disabled (privacy mode, SSR).
    #[error("preference storage unavailable")]
    Unavailable,

    /// The environment refused the operation.
    #[error("preference storage denied: {0}")]
    Denied(String),

    /// The write would exceed the storage quota.
    #[error("preference storage quota exceeded")]
    QuotaExceeded,
}

/// Failure raised by a theme listener during `notify`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubscriberError {
    /// The listener returned an error.
    #[error("theme listener failed: {0}")]
    Failed(String),

    /// The listener panicked; the payload message is captured when it is a string.
    #[error("theme listener panicked: {0}")]
    Panicked(String),
}
