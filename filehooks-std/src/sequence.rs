//! N-ary hook composition.
//!
//! Binary [`Chain`] is the primitive; everything here is built from it or
//! follows exactly the same rules: stages run in order, each `opened` stage
//! receives the stream returned by the previous one, and the first failure
//! stops the pipeline for that event.
//!
//! - [`chain_hooks!`](crate::chain_hooks): static pipeline of nested chains
//! - [`chain_all`]: pairwise fold of boxed hooks
//! - [`HookSequence`]: flat, growable pipeline of boxed hooks

use crate::hooks::NoopHooks;
use filehooks_core::{BoxError, BoxHooks, Chain, Encoding, FileLifecycleHooks, OutputStream};
use std::path::Path;

// ============================================================================
// Pairwise fold
// ============================================================================

/// Chain any number of boxed hooks, in iteration order.
///
/// Builds a left-leaning tree `chain(chain(a, b), c)`. An empty input yields
/// [`NoopHooks`]; a single hook is returned as is.
pub fn chain_all<I>(hooks: I) -> BoxHooks
where
    I: IntoIterator<Item = BoxHooks>,
{
    hooks
        .into_iter()
        .reduce(|first, second| Chain::new(first, second).boxed())
        .unwrap_or_else(|| NoopHooks.boxed())
}

// ============================================================================
// Sequence
// ============================================================================

/// An ordered list of boxed hooks that behaves like a chain of all of them.
///
/// # Example
///
/// ```rust,ignore
/// let hooks = HookSequence::new()
///     .then(HeaderWriter::new("# app"))
///     .then(GzipHooks::default());
/// ```
#[derive(Default)]
pub struct HookSequence {
    hooks: Vec<BoxHooks>,
}

impl HookSequence {
    /// Create an empty sequence (identity behaviour).
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a hook, returning the sequence.
    pub fn then<H>(mut self, hook: H) -> Self
    where
        H: FileLifecycleHooks + 'static,
    {
        self.push(hook);
        self
    }

    /// Append a hook.
    pub fn push<H>(&mut self, hook: H)
    where
        H: FileLifecycleHooks + 'static,
    {
        self.hooks.push(Box::new(hook));
    }

    /// Number of stages.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// Whether the sequence has no stages.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }

    /// Collapse the sequence into nested chains.
    pub fn into_chain(self) -> BoxHooks {
        chain_all(self.hooks)
    }
}

impl FromIterator<BoxHooks> for HookSequence {
    fn from_iter<T: IntoIterator<Item = BoxHooks>>(iter: T) -> Self {
        Self {
            hooks: iter.into_iter().collect(),
        }
    }
}

impl Extend<BoxHooks> for HookSequence {
    fn extend<T: IntoIterator<Item = BoxHooks>>(&mut self, iter: T) {
        self.hooks.extend(iter);
    }
}

impl FileLifecycleHooks for HookSequence {
    fn on_file_opened(
        &self,
        underlying: OutputStream,
        encoding: Encoding,
    ) -> Result<OutputStream, BoxError> {
        self.hooks
            .iter()
            .try_fold(underlying, |stream, hook| hook.on_file_opened(stream, encoding))
    }

    fn on_file_deleting(&self, path: &Path) -> Result<(), BoxError> {
        self.hooks
            .iter()
            .try_for_each(|hook| hook.on_file_deleting(path))
    }
}

// ============================================================================
// Macro
// ============================================================================

/// Construct a pipeline of nested [`Chain`]s from a list of hooks.
///
/// `chain_hooks![a, b, c]` expands to `Chain::new(a, Chain::new(b, c))`.
/// A single hook is returned as is; an empty list yields [`NoopHooks`].
///
/// # Example
/// ```ignore
/// let hooks = chain_hooks![HeaderWriter::new("# app"), GzipHooks::default(), LoggingHooks];
/// ```
#[macro_export]
macro_rules! chain_hooks {
    () => { $crate::hooks::NoopHooks };
    ($hook:expr $(,)?) => { $hook };
    ($hook:expr, $($rest:expr),+ $(,)?) => {
        $crate::sequence::__private::Chain::new(
            $hook,
            $crate::chain_hooks!($($rest),+),
        )
    };
}

#[doc(hidden)]
pub mod __private {
    pub use filehooks_core::Chain;
}
