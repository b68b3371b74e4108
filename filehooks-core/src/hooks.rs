//! # Lifecycle Hook Capability
//!
//! The contract a log file writer programs against. A writer calls
//! [`FileLifecycleHooks::on_file_opened`] right after it opens a file and
//! writes through whatever stream comes back, and calls
//! [`FileLifecycleHooks::on_file_deleting`] when retention cleanup retires an
//! old file.
//!
//! # Use Cases
//!
//! - Wrapping the raw file stream (compression, encryption)
//! - Writing a header into every new file
//! - Removing companion files (archives, indexes) alongside a deleted log

use crate::{
    chain::Chain,
    error::BoxError,
    stream::{Encoding, OutputStream},
};
use std::{path::Path, sync::Arc};

/// Observer invoked by a log file writer at file lifecycle events.
///
/// Both methods default to identity behaviour: the stream is returned
/// unchanged and deletion is ignored. Implementors override what they need.
///
/// Hooks compose with [`chain_to`](FileLifecycleHooks::chain_to):
///
/// ```rust,ignore
/// let hooks = GzipHooks::default().chain_to(HeaderWriter::new("File Header"));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `FileLifecycleHooks`",
    label = "missing `FileLifecycleHooks` implementation",
    note = "Implement `on_file_opened` and/or `on_file_deleting` for `{Self}`."
)]
pub trait FileLifecycleHooks: Send + Sync {
    /// Called when a log file has been opened for writing.
    ///
    /// Returns the stream the writer should use from now on: either
    /// `underlying` itself or a new stream that wraps it.
    fn on_file_opened(
        &self,
        underlying: OutputStream,
        encoding: Encoding,
    ) -> Result<OutputStream, BoxError> {
        let _ = encoding;
        Ok(underlying)
    }

    /// Called when a log file is about to be deleted by retention cleanup.
    fn on_file_deleting(&self, path: &Path) -> Result<(), BoxError> {
        let _ = path;
        Ok(())
    }

    /// Chains this hook with another one.
    ///
    /// The returned hook calls `self` first and `next` second for every
    /// event, so `next` produces the outermost stream wrapper.
    fn chain_to<Next>(self, next: Next) -> Chain<Self, Next>
    where
        Self: Sized,
        Next: FileLifecycleHooks,
    {
        Chain::new(self, next)
    }

    /// Boxes the hook for runtime-assembled pipelines.
    fn boxed(self) -> BoxHooks
    where
        Self: Sized + 'static,
    {
        Box::new(self)
    }
}

/// A type-erased hook.
pub type BoxHooks = Box<dyn FileLifecycleHooks>;

impl<H: FileLifecycleHooks + ?Sized> FileLifecycleHooks for Box<H> {
    fn on_file_opened(
        &self,
        underlying: OutputStream,
        encoding: Encoding,
    ) -> Result<OutputStream, BoxError> {
        (**self).on_file_opened(underlying, encoding)
    }

    fn on_file_deleting(&self, path: &Path) -> Result<(), BoxError> {
        (**self).on_file_deleting(path)
    }
}

// Shared hooks stay usable on their own while also taking part in chains.
impl<H: FileLifecycleHooks + ?Sized> FileLifecycleHooks for Arc<H> {
    fn on_file_opened(
        &self,
        underlying: OutputStream,
        encoding: Encoding,
    ) -> Result<OutputStream, BoxError> {
        (**self).on_file_opened(underlying, encoding)
    }

    fn on_file_deleting(&self, path: &Path) -> Result<(), BoxError> {
        (**self).on_file_deleting(path)
    }
}
