//! # filehooks-std
//!
//! Standard implementations for composable log file lifecycle hooks.
//!
//! This crate provides:
//! - **Standard hooks**: [`NoopHooks`](hooks::NoopHooks), [`FnHooks`](hooks::FnHooks),
//!   logging and tracing wrappers
//! - **N-ary composition**: [`chain_hooks!`], [`chain_all`](sequence::chain_all),
//!   [`HookSequence`](sequence::HookSequence)
//! - **Registry**: [`HookRegistry`](registry::HookRegistry) for name-based pipelines
//! - **Testing utilities**: spies, recorders and in-memory streams

#![deny(clippy::pub_use, clippy::wildcard_imports)]
#![warn(missing_docs)]

// Re-export core traits
pub use filehooks_core;

// Modules
pub mod hooks;
pub mod registry;
pub mod sequence;
pub mod testing;

#[cfg(feature = "inventory")]
pub use inventory;
