//! # Background task actor.
//!
//! [`BackgroundActor`] runs one [`Background`](crate::Background) task with the
//! run's cancellation token. Whatever way the task ends (normal return or panic),
//! the actor reports `Ok(())`: a background task finishing is a reason to shut the
//! service down, not a service failure. Tasks that need to fail the service must
//! report it through their own channel.
//!
//! `interrupt` does nothing: background tasks learn about shutdown through the
//! shared token, which the [`WatcherActor`](crate::WatcherActor) cancels.

use std::panic::AssertUnwindSafe;

use async_trait::async_trait;
use futures::FutureExt;
use tokio_util::sync::CancellationToken;

use crate::actors::actor::{Actor, Outcome};
use crate::tasks::BackgroundRef;

/// Runs a background task as an actor.
pub struct BackgroundActor {
    task: BackgroundRef,
    ctx: CancellationToken,
}

impl BackgroundActor {
    /// Creates an actor that runs `task` with `ctx`.
    pub fn new(task: BackgroundRef, ctx: CancellationToken) -> Self {
        Self { task, ctx }
    }
}

#[async_trait]
impl Actor for BackgroundActor {
    fn name(&self) -> &str {
        self.task.name()
    }

    async fn execute(&self) -> Outcome {
        let run = AssertUnwindSafe(self.task.run(self.ctx.clone()));
        if run.catch_unwind().await.is_err() {
            tracing::error!(task = self.task.name(), "background task panicked");
        } else {
            tracing::debug!(task = self.task.name(), "background task finished");
        }
        Ok(())
    }

    fn interrupt(&self, _trigger: &Outcome) {}
}
