//! # Actors driven by an [`ActorGroup`](crate::ActorGroup).
//!
//! - [`Actor`] - trait: blocking `execute` plus non-blocking `interrupt`
//! - [`ActorFn`] - closure-backed actor
//! - [`ListenerActor`] - serves an HTTP router until closed
//! - [`WatcherActor`] - waits for cancellation, then closes the listener and releases cleanups
//! - [`BackgroundActor`] - runs a user [`Background`](crate::Background) task

mod actor;
mod actor_fn;
mod background;
mod listener;
mod watcher;

pub use actor::{Actor, ActorRef, Outcome};
pub use actor_fn::ActorFn;
pub use background::BackgroundActor;
pub use listener::{DEFAULT_DRAIN_TIMEOUT, ListenerActor, ListenerHandle};
pub use watcher::WatcherActor;
