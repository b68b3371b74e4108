//! Standard hook implementations.

pub mod func;
pub mod logging;
pub mod noop;
pub mod tracing;

pub use func::FnHooks;
pub use logging::LoggingHooks;
pub use noop::NoopHooks;
pub use self::tracing::TracingHooks;
