//! # ActorGroup: first exit wins.
//!
//! Runs every registered [`Actor`] concurrently and turns the first termination
//! into a group-wide shutdown.
//!
//! ## Flow
//! ```text
//! run(self)
//!   ├─► spawn execute() for every actor          (JoinSet, one task each)
//!   ├─► join_next() ─► trigger (idx, outcome O)
//!   ├─► interrupt(&O) on every actor except the trigger (once each)
//!   ├─► join_next() until the set is empty       (late errors are logged)
//!   └─► return O
//! ```
//!
//! ## Rules
//! - The trigger is never interrupted; every other actor exactly once.
//! - `run` returns only after every `execute` has returned.
//! - Only the trigger's outcome is returned; a panicking `execute` becomes
//!   [`RunnerError::ActorPanicked`].
//! - `run` consumes the group, so actors cannot be added once it has started.

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::task::{JoinError, JoinSet};

use crate::actors::{Actor, ActorFn, ActorRef, Outcome};
use crate::error::RunnerError;

/// Ordered set of actors run under one shutdown.
#[derive(Default)]
pub struct ActorGroup {
    actors: Vec<ActorRef>,
}

impl ActorGroup {
    /// Creates an empty group.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an actor.
    pub fn add(&mut self, actor: ActorRef) -> &mut Self {
        self.actors.push(actor);
        self
    }

    /// Registers a closure-backed actor (see [`ActorFn`]).
    pub fn add_fn<E, Fut, I>(
        &mut self,
        name: impl Into<std::borrow::Cow<'static, str>>,
        execute: E,
        interrupt: I,
    ) -> &mut Self
    where
        E: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Outcome> + Send + 'static,
        I: Fn(&Outcome) + Send + Sync + 'static,
    {
        self.add(ActorFn::arc(name, execute, interrupt))
    }

    /// Number of registered actors.
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    /// Returns `true` if no actor is registered.
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }

    /// Runs all actors until the first one returns, interrupts the rest and waits
    /// for them. Returns the first actor's outcome.
    ///
    /// An empty group returns `Ok(())` immediately.
    pub async fn run(self) -> Outcome {
        let actors = self.actors;
        let mut set = JoinSet::new();
        for (idx, actor) in actors.iter().enumerate() {
            set.spawn(execute(idx, Arc::clone(actor)));
        }

        let Some(first) = set.join_next().await else {
            return Ok(());
        };
        let (trigger, outcome) = settle(first);
        tracing::debug!(
            actor = trigger.map_or("unknown", |idx| actors[idx].name()),
            ok = outcome.is_ok(),
            "actor group trigger"
        );

        for (idx, actor) in actors.iter().enumerate() {
            if Some(idx) != trigger {
                actor.interrupt(&outcome);
            }
        }

        while let Some(done) = set.join_next().await {
            if let (idx, Err(error)) = settle(done) {
                tracing::warn!(
                    actor = idx.map_or("unknown", |idx| actors[idx].name()),
                    %error,
                    "actor failed after interrupt"
                );
            }
        }
        outcome
    }
}

/// Executes one actor, converting a panic into an error outcome.
async fn execute(idx: usize, actor: ActorRef) -> (usize, Outcome) {
    let res = AssertUnwindSafe(actor.execute()).catch_unwind().await;
    let outcome = res.unwrap_or_else(|_| {
        Err(RunnerError::ActorPanicked {
            actor: actor.name().to_string(),
        })
    });
    (idx, outcome)
}

/// Maps a join result to `(actor index, outcome)`.
///
/// Panics are caught inside [`execute`], so a join error only means the task was
/// aborted with its runtime; the index is then unknown.
fn settle(res: Result<(usize, Outcome), JoinError>) -> (Option<usize>, Outcome) {
    match res {
        Ok((idx, outcome)) => (Some(idx), outcome),
        Err(e) => (None, Err(RunnerError::fail(e.to_string()))),
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
    use std::time::Duration;

    use tokio_util::sync::CancellationToken;

    use super::*;

    /// Actor that blocks until interrupted and records what happened to it.
    #[derive(Default)]
    struct Tracked {
        stop: CancellationToken,
        interrupts: AtomicUsize,
        finished: AtomicBool,
    }

    impl Tracked {
        fn register(group: &mut ActorGroup) -> Arc<Tracked> {
            let tracked = Arc::new(Tracked::default());
            let (exec, intr) = (tracked.clone(), tracked.clone());
            group.add_fn(
                "tracked",
                move || {
                    let tracked = exec.clone();
                    async move {
                        tracked.stop.cancelled().await;
                        tokio::time::sleep(Duration::from_millis(5)).await;
                        tracked.finished.store(true, Ordering::SeqCst);
                        Err(RunnerError::fail("late failure is ignored"))
                    }
                },
                move |_| {
                    intr.interrupts.fetch_add(1, Ordering::SeqCst);
                    intr.stop.cancel();
                },
            );
            tracked
        }
    }

    #[tokio::test]
    async fn empty_group_succeeds() {
        assert!(ActorGroup::new().run().await.is_ok());
    }

    #[tokio::test]
    async fn first_failure_interrupts_everyone_else_once() {
        let mut group = ActorGroup::new();
        let tracked: Vec<_> = (0..4).map(|_| Tracked::register(&mut group)).collect();

        let failed_interrupts = Arc::new(AtomicUsize::new(0));
        let seen = failed_interrupts.clone();
        group.add_fn(
            "failing",
            || async { Err(RunnerError::fail("address in use")) },
            move |_| {
                seen.fetch_add(1, Ordering::SeqCst);
            },
        );
        assert_eq!(group.len(), 5);

        let err = group.run().await.unwrap_err();
        assert_eq!(err.to_string(), "execution failed: address in use");

        assert_eq!(failed_interrupts.load(Ordering::SeqCst), 0);
        for tracked in tracked {
            assert_eq!(tracked.interrupts.load(Ordering::SeqCst), 1);
            assert!(tracked.finished.load(Ordering::SeqCst));
        }
    }

    #[tokio::test]
    async fn interrupt_receives_trigger_outcome() {
        let mut group = ActorGroup::new();
        let got_ok = Arc::new(AtomicBool::new(false));
        let flag = got_ok.clone();
        let stop = CancellationToken::new();
        let wait = stop.clone();

        group.add_fn("done", || async { Ok(()) }, |_| {});
        group.add_fn(
            "waiter",
            move || {
                let wait = wait.clone();
                async move {
                    wait.cancelled().await;
                    Ok(())
                }
            },
            move |trigger| {
                flag.store(trigger.is_ok(), Ordering::SeqCst);
                stop.cancel();
            },
        );

        assert!(group.run().await.is_ok());
        assert!(got_ok.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn panic_becomes_the_trigger_failure() {
        let mut group = ActorGroup::new();
        let tracked = Tracked::register(&mut group);
        group.add_fn(
            "panics",
            || async {
                if true {
                    panic!("boom");
                }
                Ok(())
            },
            |_| {},
        );

        let err = group.run().await.unwrap_err();
        assert!(matches!(err, RunnerError::ActorPanicked { ref actor } if actor == "panics"));
        assert_eq!(tracked.interrupts.load(Ordering::SeqCst), 1);
    }
}
