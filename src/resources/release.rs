//! # Releasable resource abstraction.
//!
//! A [`Release`] is anything the service must tear down on shutdown: a database
//! pool, a message consumer, a flush of buffered metrics. The runner releases each
//! registered resource exactly once, in registration order, after the HTTP
//! listener (if any) has been closed.

use async_trait::async_trait;

/// Error returned by a failed release.
///
/// Release failures are logged and never abort the shutdown sequence.
pub type ReleaseError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// # Resource released once on shutdown.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use service_runner::{Release, ReleaseError};
///
/// struct Pool;
///
/// #[async_trait]
/// impl Release for Pool {
///     fn name(&self) -> &str { "pool" }
///
///     async fn release(&mut self) -> Result<(), ReleaseError> {
///         // close connections...
///         Ok(())
///     }
/// }
/// ```
#[async_trait]
pub trait Release: Send + 'static {
    /// Returns a human-readable name, used in logs.
    fn name(&self) -> &str {
        "resource"
    }

    /// Releases the resource.
    async fn release(&mut self) -> Result<(), ReleaseError>;
}
