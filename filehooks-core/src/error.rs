//! Error types for filehooks.
//!
//! - [`BoxError`] - Failure raised by a hook stage; propagated unchanged
//! - [`ChainError`] - Invalid arguments when composing hooks

use thiserror::Error;

/// A boxed error type for dynamic error handling.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur when composing two hooks into a chain.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChainError {
    /// The hook to run first was absent.
    #[error("invalid argument: `first` hook is absent")]
    MissingFirst,

    /// The hook to run second was absent.
    #[error("invalid argument: `second` hook is absent")]
    MissingSecond,
}
