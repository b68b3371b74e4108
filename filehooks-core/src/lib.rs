//! # filehooks-core
//!
//! Core traits for composable log file lifecycle hooks.
//!
//! This crate has minimal dependencies and is designed to be imported by
//! hook implementations that don't need the full `filehooks-std` toolkit.
//!
//! # Lifecycle Events
//!
//! A log file writer notifies its hooks at two points:
//!
//! - **Opened**: a file was opened for writing. Each hook may wrap the
//!   output stream (compression, encryption, headers).
//! - **Deleting**: retention cleanup is removing an old file. Each hook may
//!   perform side effects such as removing a companion archive.
//!
//! # Composition
//!
//! [`Chain`] turns two hooks into one that behaves as if both were
//! installed, `first` before `second`. Chains nest, so any ordered pipeline
//! is a tree of chains:
//!
//! ```rust,ignore
//! use filehooks_core::{FileLifecycleHooks, chain};
//!
//! let hooks = chain(HeaderWriter::new("# app log"), GzipHooks::default());
//! let hooks = hooks.chain_to(CompanionCleanup::new("idx"));
//! ```
//!
//! # Error Types
//!
//! - [`BoxError`] - Stage failures, returned unchanged by chains
//! - [`ChainError`] - Invalid arguments when composing

#![deny(clippy::wildcard_imports)]
#![warn(missing_docs)]

mod chain;
mod error;
mod hooks;
mod stream;

// Re-exports
pub use chain::{Chain, chain, try_chain};
pub use error::{BoxError, ChainError};
pub use hooks::{BoxHooks, FileLifecycleHooks};
pub use stream::{Encoding, OutputStream};
