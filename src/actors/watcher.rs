//! # Cancellation watcher actor.
//!
//! [`WatcherActor`] bridges the external cancellation signal and the group's
//! interrupt protocol. Its `execute` waits for the run token, then tears the
//! service down in a fixed order:
//!
//! ```text
//! token cancelled
//!   ├─► listener.close()
//!   ├─► listener.closed().await      (serving has stopped)
//!   ├─► cleanup[0].release()         (errors logged, never fatal)
//!   ├─► cleanup[1].release()
//!   ├─► ...
//!   └─► Ok(())
//! ```
//!
//! The run token is a child of the caller's signal, so interrupting the watcher
//! (cancelling the run token) goes through the same sequence.

use std::mem;
use std::sync::{Mutex, PoisonError};

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::actors::actor::{Actor, Outcome};
use crate::actors::listener::ListenerHandle;
use crate::resources::Release;

/// Waits for cancellation, then closes the listener and releases cleanups.
pub struct WatcherActor {
    ctx: CancellationToken,
    listener: Option<ListenerHandle>,
    cleanups: Mutex<Vec<Box<dyn Release>>>,
}

impl WatcherActor {
    /// Creates a watcher on `ctx`.
    pub fn new(
        ctx: CancellationToken,
        listener: Option<ListenerHandle>,
        cleanups: Vec<Box<dyn Release>>,
    ) -> Self {
        Self {
            ctx,
            listener,
            cleanups: Mutex::new(cleanups),
        }
    }

    async fn release_all(&self) {
        let cleanups = mem::take(
            &mut *self
                .cleanups
                .lock()
                .unwrap_or_else(PoisonError::into_inner),
        );

        for mut res in cleanups {
            let released = res.release().await;
            match released {
                Ok(()) => tracing::debug!(resource = res.name(), "resource released"),
                Err(error) => {
                    tracing::warn!(resource = res.name(), %error, "resource release failed")
                }
            }
        }
    }
}

#[async_trait]
impl Actor for WatcherActor {
    fn name(&self) -> &str {
        "cancellation-watcher"
    }

    async fn execute(&self) -> Outcome {
        self.ctx.cancelled().await;

        if let Some(listener) = &self.listener {
            listener.close();
            listener.closed().await;
        }
        self.release_all().await;
        Ok(())
    }

    fn interrupt(&self, _trigger: &Outcome) {
        self.ctx.cancel();
    }
}
