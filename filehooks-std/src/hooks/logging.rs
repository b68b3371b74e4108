//! Logging hook for lifecycle observation.

use filehooks_core::{BoxError, Encoding, FileLifecycleHooks, OutputStream};
use std::path::Path;

/// A hook that logs lifecycle events for debugging/observation.
///
/// Streams pass through unchanged, so it can sit anywhere in a chain.
#[derive(Debug, Clone, Copy, Default)]
pub struct LoggingHooks;

impl FileLifecycleHooks for LoggingHooks {
    fn on_file_opened(
        &self,
        underlying: OutputStream,
        encoding: Encoding,
    ) -> Result<OutputStream, BoxError> {
        #[cfg(feature = "tracing")]
        {
            tracing::info!(%encoding, "Log file opened");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = encoding; // Suppress unused warning
        }
        Ok(underlying)
    }

    fn on_file_deleting(&self, path: &Path) -> Result<(), BoxError> {
        #[cfg(feature = "tracing")]
        {
            tracing::info!(path = %path.display(), "Log file deleting");
        }
        #[cfg(not(feature = "tracing"))]
        {
            let _ = path;
        }
        Ok(())
    }
}
