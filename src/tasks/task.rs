//! # Background work abstraction.
//!
//! This module defines the [`Background`] trait (async, cancelable, one-shot).
//! The common handle type is [`BackgroundRef`], an `Arc<dyn Background>`.
//!
//! A background task receives the run's [`CancellationToken`] and should watch it
//! to stop cooperatively during shutdown. Returning from [`Background::run`] for
//! any reason ends the whole service.

use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

/// Shared handle to a background task.
pub type BackgroundRef = Arc<dyn Background>;

/// # Asynchronous, cancelable background work.
///
/// # Example
/// ```
/// use std::time::Duration;
/// use tokio_util::sync::CancellationToken;
/// use async_trait::async_trait;
/// use service_runner::Background;
///
/// struct Ticker;
///
/// #[async_trait]
/// impl Background for Ticker {
///     fn name(&self) -> &str { "ticker" }
///
///     async fn run(&self, ctx: CancellationToken) {
///         while !ctx.is_cancelled() {
///             tokio::select! {
///                 _ = ctx.cancelled() => break,
///                 _ = tokio::time::sleep(Duration::from_secs(1)) => {}
///             }
///         }
///     }
/// }
/// ```
#[async_trait]
pub trait Background: Send + Sync + 'static {
    /// Returns a stable, human-readable name.
    fn name(&self) -> &str;

    /// Runs until the work is done or `ctx` is cancelled.
    async fn run(&self, ctx: CancellationToken);
}
