//! # Hook Chaining
//!
//! [`Chain`] combines two hooks into one. For every lifecycle event the
//! `first` hook runs before the `second`; when a file is opened the stream
//! returned by `first` is what `second` receives, so `second` ends up as the
//! outermost wrapper.
//!
//! A chain is itself a [`FileLifecycleHooks`], so pipelines of any length
//! are built by chaining chains. Invocation order is associative:
//! `chain(chain(a, b), c)` and `chain(a, chain(b, c))` both run `a`, `b`, `c`.
//!
//! A failing stage stops the chain for that event; its error is returned to
//! the caller unchanged and later stages are not invoked.

use crate::{
    error::{BoxError, ChainError},
    hooks::FileLifecycleHooks,
    stream::{Encoding, OutputStream},
};
use std::path::Path;

/// Two hooks whose methods are called sequentially.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

impl<A, B> Chain<A, B> {
    /// Create a chain that runs `first` and then `second`.
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }

    /// Create a chain from hooks that may be absent.
    ///
    /// Fails without building anything if either side is `None`. When both
    /// are absent the missing `first` is reported.
    pub fn try_new(first: Option<A>, second: Option<B>) -> Result<Self, ChainError> {
        let first = first.ok_or(ChainError::MissingFirst)?;
        let second = second.ok_or(ChainError::MissingSecond)?;
        Ok(Self::new(first, second))
    }

    /// The hook that runs first.
    pub fn first(&self) -> &A {
        &self.first
    }

    /// The hook that runs second.
    pub fn second(&self) -> &B {
        &self.second
    }

    /// Split the chain back into its two hooks.
    pub fn into_parts(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> FileLifecycleHooks for Chain<A, B>
where
    A: FileLifecycleHooks,
    B: FileLifecycleHooks,
{
    fn on_file_opened(
        &self,
        underlying: OutputStream,
        encoding: Encoding,
    ) -> Result<OutputStream, BoxError> {
        let intermediate = self.first.on_file_opened(underlying, encoding)?;
        self.second.on_file_opened(intermediate, encoding)
    }

    fn on_file_deleting(&self, path: &Path) -> Result<(), BoxError> {
        self.first.on_file_deleting(path)?;
        self.second.on_file_deleting(path)
    }
}

/// Chain two hooks so that `first` runs before `second`.
pub const fn chain<A, B>(first: A, second: B) -> Chain<A, B>
where
    A: FileLifecycleHooks,
    B: FileLifecycleHooks,
{
    Chain::new(first, second)
}

/// Chain two hooks that may be absent, failing eagerly if either is missing.
pub fn try_chain<A, B>(first: Option<A>, second: Option<B>) -> Result<Chain<A, B>, ChainError>
where
    A: FileLifecycleHooks,
    B: FileLifecycleHooks,
{
    Chain::try_new(first, second)
}
