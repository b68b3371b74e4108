use filehooks_core::{BoxError, Encoding, FileLifecycleHooks, OutputStream};
use std::path::Path;

/// A hook wrapper that instruments the inner hook with a `tracing` span.
///
/// Each lifecycle call runs inside a `file_lifecycle` span carrying the hook
/// name and event. Failures are logged at `warn` and then returned unchanged.
/// Without the `tracing` feature the wrapper is a plain pass-through.
pub struct TracingHooks<H> {
    inner: H,
    name: &'static str,
}

impl<H> TracingHooks<H> {
    /// Create a new `TracingHooks` wrapper around a hook (or chain).
    pub const fn new(inner: H, name: &'static str) -> Self {
        Self { inner, name }
    }

    /// The name recorded on spans.
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Unwrap the inner hook.
    pub fn into_inner(self) -> H {
        self.inner
    }
}

impl<H: Clone> Clone for TracingHooks<H> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            name: self.name,
        }
    }
}

impl<H: Copy> Copy for TracingHooks<H> {}

impl<H: FileLifecycleHooks> FileLifecycleHooks for TracingHooks<H> {
    #[cfg(feature = "tracing")]
    fn on_file_opened(
        &self,
        underlying: OutputStream,
        encoding: Encoding,
    ) -> Result<OutputStream, BoxError> {
        let span = tracing::info_span!(
            "file_lifecycle",
            hook = %self.name,
            event = "opened",
            encoding = %encoding
        );
        let _guard = span.enter();

        self.inner
            .on_file_opened(underlying, encoding)
            .inspect_err(|error| tracing::warn!(%error, "Hook failed on open"))
    }

    #[cfg(not(feature = "tracing"))]
    fn on_file_opened(
        &self,
        underlying: OutputStream,
        encoding: Encoding,
    ) -> Result<OutputStream, BoxError> {
        self.inner.on_file_opened(underlying, encoding)
    }

    #[cfg(feature = "tracing")]
    fn on_file_deleting(&self, path: &Path) -> Result<(), BoxError> {
        let span = tracing::info_span!(
            "file_lifecycle",
            hook = %self.name,
            event = "deleting",
            path = %path.display()
        );
        let _guard = span.enter();

        self.inner
            .on_file_deleting(path)
            .inspect_err(|error| tracing::warn!(%error, "Hook failed on delete"))
    }

    #[cfg(not(feature = "tracing"))]
    fn on_file_deleting(&self, path: &Path) -> Result<(), BoxError> {
        self.inner.on_file_deleting(path)
    }
}
