//! # filehooks - Composable Log File Lifecycle Hooks
//!
//! A log file writer notifies hooks when it opens a file for writing and when
//! retention cleanup deletes an old one. `filehooks` defines that contract,
//! [`FileLifecycleHooks`], and the combinator that makes hooks composable:
//! [`chain`] turns two hooks into one that runs both, in order.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use filehooks::prelude::*;
//!
//! struct HeaderWriter(&'static str);
//!
//! impl FileLifecycleHooks for HeaderWriter {
//!     fn on_file_opened(
//!         &self,
//!         mut underlying: OutputStream,
//!         _encoding: Encoding,
//!     ) -> Result<OutputStream, BoxError> {
//!         writeln!(underlying, "{}", self.0)?;
//!         Ok(underlying)
//!     }
//! }
//!
//! // The header goes in first, then the stream is compressed.
//! let hooks = HeaderWriter("# app log").chain_to(GzipHooks::default());
//! ```
//!
//! ## Ordering
//!
//! For `chain(first, second)`:
//!
//! - **Opened**: `first` wraps the raw stream, `second` wraps the result, so
//!   `second` is the outermost layer.
//! - **Deleting**: `first` is notified, then `second`.
//! - **Failure**: the first failing stage ends the event; its error reaches
//!   the caller unchanged and later stages are skipped.

#![deny(clippy::pub_use, clippy::wildcard_imports)]
#![warn(missing_docs)]

pub use filehooks_core::{
    // Error types
    BoxError,
    // Hook
    BoxHooks,
    // Composition
    Chain,
    ChainError,
    // Stream
    Encoding,
    FileLifecycleHooks,
    OutputStream,
    chain,
    try_chain,
};

// N-ary composition
pub use filehooks_std::{
    chain_hooks,
    sequence::{HookSequence, chain_all},
};

// Registry
pub use filehooks_std::registry::{HookFactory, HookRegistry, RegistryError};

#[cfg(feature = "inventory")]
pub use filehooks_std::registry::HookRegistration;

/// Standard hook implementations.
pub mod hooks {
    #![allow(clippy::wildcard_imports)]
    pub use filehooks_std::hooks::*;
}

/// Testing utilities.
pub mod testing {
    #![allow(clippy::wildcard_imports)]
    pub use filehooks_std::testing::*;
}

/// Prelude module - common imports for filehooks.
///
/// # Usage
///
/// ```rust,ignore
/// use filehooks::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        // Errors
        BoxError,
        BoxHooks,
        // Composition
        Chain,
        ChainError,
        Encoding,
        // Core trait
        FileLifecycleHooks,
        HookSequence,
        OutputStream,
        chain,
        chain_all,
        try_chain,
    };
    pub use std::io::Write;
}

#[cfg(feature = "inventory")]
pub use filehooks_std::inventory;
