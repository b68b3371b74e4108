//! Identity hook.

use filehooks_core::FileLifecycleHooks;

/// A hook that returns the stream unchanged and ignores deletions.
///
/// The neutral element of chaining: `chain(NoopHooks, h)` and
/// `chain(h, NoopHooks)` behave exactly like `h`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoopHooks;

impl FileLifecycleHooks for NoopHooks {}
