//! Testing utilities for filehooks.
//!
//! This module provides utilities to make testing hooks and chains easier.
//!
//! # Features
//!
//! - [`SharedBuffer`]: An in-memory stream whose contents can be inspected
//! - [`TaggingHooks`]: A hook whose wrapper makes nesting order visible
//! - [`RecordingHooks`]: A hook that records calls into a shared [`CallLog`]
//! - [`SpyHooks`]: A hook that counts calls and can be told to fail

use filehooks_core::{BoxError, Encoding, FileLifecycleHooks, OutputStream};
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
    sync::{
        Arc, Mutex,
        atomic::{AtomicUsize, Ordering},
    },
};

// ============================================================================
// Shared Buffer
// ============================================================================

/// A cloneable in-memory stream.
///
/// Hand one clone to the hook under test as the underlying stream and keep
/// the other to inspect what reached it.
#[derive(Clone, Default)]
pub struct SharedBuffer {
    bytes: Arc<Mutex<Vec<u8>>>,
}

impl SharedBuffer {
    /// Create an empty buffer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The bytes written so far.
    pub fn bytes(&self) -> Vec<u8> {
        self.bytes.lock().unwrap().clone()
    }

    /// The bytes written so far, decoded lossily as UTF-8.
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.bytes.lock().unwrap()).into_owned()
    }

    /// Boxes a clone of this buffer as an [`OutputStream`].
    pub fn stream(&self) -> OutputStream {
        Box::new(self.clone())
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.bytes.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

// ============================================================================
// Tagging Hook
// ============================================================================

/// A stream that encloses every write in `<tag>` ... `</tag>`.
pub struct TaggedWriter {
    tag: &'static str,
    inner: OutputStream,
}

impl TaggedWriter {
    /// Wrap `inner`.
    pub fn new(tag: &'static str, inner: OutputStream) -> Self {
        Self { tag, inner }
    }
}

impl Write for TaggedWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut framed = Vec::with_capacity(buf.len() + 2 * self.tag.len() + 5);
        framed.extend_from_slice(format!("<{}>", self.tag).as_bytes());
        framed.extend_from_slice(buf);
        framed.extend_from_slice(format!("</{}>", self.tag).as_bytes());
        // One write on the inner stream per outer write keeps frames intact.
        self.inner.write_all(&framed)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        self.inner.flush()
    }
}

/// A hook that wraps the stream in a [`TaggedWriter`].
///
/// Writing `x` through `chain(TaggingHooks::new("a"), TaggingHooks::new("b"))`
/// yields `<a><b>x</b></a>` in the underlying stream: `b` is the outermost
/// wrapper, so it frames the data before `a` sees it.
#[derive(Debug, Clone, Copy)]
pub struct TaggingHooks {
    tag: &'static str,
}

impl TaggingHooks {
    /// Create a tagging hook.
    pub const fn new(tag: &'static str) -> Self {
        Self { tag }
    }
}

impl FileLifecycleHooks for TaggingHooks {
    fn on_file_opened(
        &self,
        underlying: OutputStream,
        _encoding: Encoding,
    ) -> Result<OutputStream, BoxError> {
        Ok(Box::new(TaggedWriter::new(self.tag, underlying)))
    }
}

// ============================================================================
// Recording Hook
// ============================================================================

/// A lifecycle call observed by a [`RecordingHooks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    /// `on_file_opened` was called with this encoding.
    Opened(Encoding),
    /// `on_file_deleting` was called with this path.
    Deleting(PathBuf),
}

/// An ordered log of calls shared between several recording hooks.
#[derive(Clone, Default)]
pub struct CallLog {
    entries: Arc<Mutex<Vec<(&'static str, Call)>>>,
}

impl CallLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a hook that records into this log under `label`.
    pub fn hook(&self, label: &'static str) -> RecordingHooks {
        RecordingHooks {
            label,
            log: self.clone(),
        }
    }

    /// All recorded calls, in order.
    pub fn entries(&self) -> Vec<(&'static str, Call)> {
        self.entries.lock().unwrap().clone()
    }

    /// The labels of all recorded calls, in order.
    pub fn labels(&self) -> Vec<&'static str> {
        self.entries
            .lock()
            .unwrap()
            .iter()
            .map(|(label, _)| *label)
            .collect()
    }

    /// Clear all recorded calls.
    pub fn clear(&self) {
        self.entries.lock().unwrap().clear();
    }

    fn push(&self, label: &'static str, call: Call) {
        self.entries.lock().unwrap().push((label, call));
    }
}

/// A hook that records every call it receives into a [`CallLog`].
///
/// Streams pass through unchanged.
///
/// # Example
///
/// ```rust,ignore
/// let log = CallLog::new();
/// let hooks = chain(log.hook("a"), log.hook("b"));
///
/// hooks.on_file_deleting(Path::new("x.log"))?;
/// assert_eq!(log.labels(), vec!["a", "b"]);
/// ```
#[derive(Clone)]
pub struct RecordingHooks {
    label: &'static str,
    log: CallLog,
}

impl FileLifecycleHooks for RecordingHooks {
    fn on_file_opened(
        &self,
        underlying: OutputStream,
        encoding: Encoding,
    ) -> Result<OutputStream, BoxError> {
        self.log.push(self.label, Call::Opened(encoding));
        Ok(underlying)
    }

    fn on_file_deleting(&self, path: &Path) -> Result<(), BoxError> {
        self.log.push(self.label, Call::Deleting(path.to_path_buf()));
        Ok(())
    }
}

// ============================================================================
// Spy Hook
// ============================================================================

/// A hook that counts calls and can be programmed to fail.
///
/// A call that fails is still counted.
///
/// # Example
///
/// ```rust,ignore
/// let spy = SpyHooks::new();
/// spy.fail_opened("permission denied");
///
/// assert!(chain(spy.clone(), other).on_file_opened(stream, enc).is_err());
/// assert_eq!(spy.opened_count(), 1);
/// ```
#[derive(Clone, Default)]
pub struct SpyHooks {
    opened: Arc<AtomicUsize>,
    deleting: Arc<AtomicUsize>,
    opened_error: Arc<Mutex<Option<String>>>,
    deleting_error: Arc<Mutex<Option<String>>>,
}

impl SpyHooks {
    /// Create a new spy that succeeds on every call.
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `on_file_opened` fail with `error`.
    pub fn fail_opened(&self, error: impl Into<String>) {
        *self.opened_error.lock().unwrap() = Some(error.into());
    }

    /// Make `on_file_deleting` fail with `error`.
    pub fn fail_deleting(&self, error: impl Into<String>) {
        *self.deleting_error.lock().unwrap() = Some(error.into());
    }

    /// Clear error state.
    pub fn clear_errors(&self) {
        *self.opened_error.lock().unwrap() = None;
        *self.deleting_error.lock().unwrap() = None;
    }

    /// Number of `on_file_opened` calls.
    pub fn opened_count(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }

    /// Number of `on_file_deleting` calls.
    pub fn deleting_count(&self) -> usize {
        self.deleting.load(Ordering::SeqCst)
    }

    /// Reset both counters.
    pub fn reset(&self) {
        self.opened.store(0, Ordering::SeqCst);
        self.deleting.store(0, Ordering::SeqCst);
    }
}

impl FileLifecycleHooks for SpyHooks {
    fn on_file_opened(
        &self,
        underlying: OutputStream,
        _encoding: Encoding,
    ) -> Result<OutputStream, BoxError> {
        self.opened.fetch_add(1, Ordering::SeqCst);

        if let Some(ref err) = *self.opened_error.lock().unwrap() {
            return Err(err.clone().into());
        }

        Ok(underlying)
    }

    fn on_file_deleting(&self, _path: &Path) -> Result<(), BoxError> {
        self.deleting.fetch_add(1, Ordering::SeqCst);

        if let Some(ref err) = *self.deleting_error.lock().unwrap() {
            return Err(err.clone().into());
        }

        Ok(())
    }
}
