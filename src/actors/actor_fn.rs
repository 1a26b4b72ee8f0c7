//! # Function-backed actor (`ActorFn`)
//!
//! [`ActorFn`] pairs an `execute` closure (`Fn() -> Fut`) with an `interrupt`
//! closure (`Fn(&Outcome)`), so ad-hoc actors can be registered without a new type.
//!
//! ## Example
//! ```rust
//! use tokio_util::sync::CancellationToken;
//! use service_runner::{ActorFn, ActorRef};
//!
//! let stop = CancellationToken::new();
//! let wait = stop.clone();
//! let actor: ActorRef = ActorFn::arc(
//!     "waiter",
//!     move || {
//!         let wait = wait.clone();
//!         async move {
//!             wait.cancelled().await;
//!             Ok(())
//!         }
//!     },
//!     move |_trigger| stop.cancel(),
//! );
//! assert_eq!(actor.name(), "waiter");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;

use crate::actors::actor::{Actor, Outcome};

/// Function-backed actor implementation.
pub struct ActorFn<E, I> {
    name: Cow<'static, str>,
    execute: E,
    interrupt: I,
}

impl<E, Fut, I> ActorFn<E, I>
where
    E: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Outcome> + Send + 'static,
    I: Fn(&Outcome) + Send + Sync + 'static,
{
    /// Creates a new function-backed actor.
    pub fn new(name: impl Into<Cow<'static, str>>, execute: E, interrupt: I) -> Self {
        Self {
            name: name.into(),
            execute,
            interrupt,
        }
    }

    /// Creates the actor and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, execute: E, interrupt: I) -> Arc<Self> {
        Arc::new(Self::new(name, execute, interrupt))
    }
}

#[async_trait]
impl<E, Fut, I> Actor for ActorFn<E, I>
where
    E: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Outcome> + Send + 'static,
    I: Fn(&Outcome) + Send + Sync + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn execute(&self) -> Outcome {
        (self.execute)().await
    }

    fn interrupt(&self, trigger: &Outcome) {
        (self.interrupt)(trigger)
    }
}
