//! Error types for hub operations.

use thiserror::Error;

/// Convenient result type for hub operations using [`HubError`] as the error type.
pub type HubResult<T> = Result<T, HubError>;

/// Errors reported by [`crate::hub::SignalHub`] operations.
///
/// Both kinds are returned to the immediate caller; the hub never panics on
/// them and performs no internal retries. A failed registration leaves the
/// registry unchanged, and a failed signal delivers nothing.
#[derive(Debug, Error)]
pub enum HubError {
    /// `register` was called with a signature that is already present.
    ///
    /// Not retryable as-is: the caller must pick a different signature or
    /// deregister the existing receiver first. Duplicate registration is
    /// caller misuse, not a transient condition.
    #[error("signature already registered: {0}")]
    DuplicateSignature(String),

    /// `signal` was called with a signature that has no listening receiver,
    /// either because it was never registered or because the receiver went
    /// away. Recoverable: the caller may retry once the intended receiver
    /// registers, or drop the signal.
    #[error("no receiver registered under signature: {0}")]
    UnknownSignature(String),
}
