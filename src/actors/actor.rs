//! # Actor abstraction.
//!
//! An [`Actor`] is one unit of concurrent work inside an
//! [`ActorGroup`](crate::ActorGroup): a blocking [`execute`](Actor::execute) that
//! resolves to an [`Outcome`], and an [`interrupt`](Actor::interrupt) that asks a
//! running `execute` to return early.
//!
//! ## Rules
//! - `execute` is called exactly once per run.
//! - `interrupt` is called at most once, and never on the actor whose `execute`
//!   finished first.
//! - `interrupt` must not block; it only has to make `execute` return soon.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::RunnerError;

/// Terminal result of one actor's execution: `Ok(())` on success.
pub type Outcome = Result<(), RunnerError>;

/// Shared handle to an actor.
pub type ActorRef = Arc<dyn Actor>;

/// # Interruptible unit of concurrent work.
///
/// # Example
/// ```
/// use async_trait::async_trait;
/// use tokio_util::sync::CancellationToken;
/// use service_runner::{Actor, Outcome};
///
/// struct Idle(CancellationToken);
///
/// #[async_trait]
/// impl Actor for Idle {
///     fn name(&self) -> &str { "idle" }
///
///     async fn execute(&self) -> Outcome {
///         self.0.cancelled().await;
///         Ok(())
///     }
///
///     fn interrupt(&self, _trigger: &Outcome) {
///         self.0.cancel();
///     }
/// }
/// ```
#[async_trait]
pub trait Actor: Send + Sync + 'static {
    /// Returns a stable, human-readable actor name.
    fn name(&self) -> &str;

    /// Runs until the work is done or the actor is interrupted.
    async fn execute(&self) -> Outcome;

    /// Asks a running [`execute`](Actor::execute) to return.
    ///
    /// `trigger` is the outcome of the actor that finished first.
    fn interrupt(&self, trigger: &Outcome);
}
