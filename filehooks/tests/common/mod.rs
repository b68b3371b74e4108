#![allow(dead_code)]

use filehooks::{BoxError, Encoding, FileLifecycleHooks, OutputStream, testing::SharedBuffer};
use std::{fmt, io::Write, path::Path};

// ============================================================================
// Errors
// ============================================================================

/// A distinguishable stage failure, so tests can check the error identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StageFailed(pub &'static str);

impl fmt::Display for StageFailed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "stage {} failed", self.0)
    }
}

impl std::error::Error for StageFailed {}

pub struct FailingHooks(pub &'static str);

impl FileLifecycleHooks for FailingHooks {
    fn on_file_opened(
        &self,
        _underlying: OutputStream,
        _encoding: Encoding,
    ) -> Result<OutputStream, BoxError> {
        Err(Box::new(StageFailed(self.0)))
    }

    fn on_file_deleting(&self, _path: &Path) -> Result<(), BoxError> {
        Err(Box::new(StageFailed(self.0)))
    }
}

// ============================================================================
// Helpers
// ============================================================================

/// Open through `hooks`, write `data`, and return what reached the raw stream.
pub fn write_through<H: FileLifecycleHooks + ?Sized>(hooks: &H, data: &str) -> String {
    let buffer = SharedBuffer::new();
    let mut stream = hooks
        .on_file_opened(buffer.stream(), Encoding::UTF_8)
        .unwrap();
    stream.write_all(data.as_bytes()).unwrap();
    stream.flush().unwrap();
    buffer.contents()
}
