//! Closure-backed hooks.

use filehooks_core::{BoxError, Encoding, FileLifecycleHooks, OutputStream};
use std::path::Path;

/// Opened callback that returns the stream unchanged.
pub type IdentityOpened = fn(OutputStream, Encoding) -> Result<OutputStream, BoxError>;

/// Deleting callback that does nothing.
pub type IgnoreDeleting = fn(&Path) -> Result<(), BoxError>;

/// A hook built from closures.
///
/// Each side defaults to identity behaviour until a closure is supplied.
///
/// # Example
///
/// ```rust,ignore
/// use filehooks::hooks::FnHooks;
///
/// // Remove the compressed sibling of every retired log file
/// let cleanup = FnHooks::new().on_deleting(|path| {
///     let archive = path.with_extension("log.gz");
///     if archive.exists() {
///         std::fs::remove_file(archive)?;
///     }
///     Ok(())
/// });
/// ```
#[derive(Clone, Copy)]
pub struct FnHooks<O = IdentityOpened, D = IgnoreDeleting> {
    opened: O,
    deleting: D,
}

impl FnHooks {
    /// Create a hook with identity behaviour on both events.
    pub fn new() -> Self {
        Self {
            opened: |underlying, _encoding| Ok(underlying),
            deleting: |_path| Ok(()),
        }
    }
}

impl Default for FnHooks {
    fn default() -> Self {
        Self::new()
    }
}

impl<O, D> FnHooks<O, D> {
    /// Use `f` when a file is opened.
    pub fn on_opened<F>(self, f: F) -> FnHooks<F, D>
    where
        F: Fn(OutputStream, Encoding) -> Result<OutputStream, BoxError> + Send + Sync,
    {
        FnHooks {
            opened: f,
            deleting: self.deleting,
        }
    }

    /// Use `f` when a file is about to be deleted.
    pub fn on_deleting<F>(self, f: F) -> FnHooks<O, F>
    where
        F: Fn(&Path) -> Result<(), BoxError> + Send + Sync,
    {
        FnHooks {
            opened: self.opened,
            deleting: f,
        }
    }
}

impl<O, D> FileLifecycleHooks for FnHooks<O, D>
where
    O: Fn(OutputStream, Encoding) -> Result<OutputStream, BoxError> + Send + Sync,
    D: Fn(&Path) -> Result<(), BoxError> + Send + Sync,
{
    fn on_file_opened(
        &self,
        underlying: OutputStream,
        encoding: Encoding,
    ) -> Result<OutputStream, BoxError> {
        (self.opened)(underlying, encoding)
    }

    fn on_file_deleting(&self, path: &Path) -> Result<(), BoxError> {
        (self.deleting)(path)
    }
}
