//! # service-runner
//!
//! **service-runner** supervises the lifecycle of a small service: one HTTP
//! listener, any number of background tasks, and the resources they hold. The
//! instant any one of them stops (cleanly, with an error, or because the process
//! was asked to terminate), everything else is interrupted, awaited, and cleaned
//! up, and the run reports a single outcome.
//!
//! ## Architecture
//! ```text
//!   caller token (e.g. shutdown_token())
//!            │ child_token()
//!            ▼
//! ┌──────────────────────────────────────────────────────────────────┐
//! │  ServiceRunner::run(signal, router)                              │
//! │   ActorGroup                                                     │
//! │    ├─ ListenerActor      axum::serve(router), closed on interrupt│
//! │    ├─ WatcherActor       ctx.cancelled() → close listener        │
//! │    │                     → wait closed → release cleanups        │
//! │    ├─ BackgroundActor    task[0].run(ctx)                        │
//! │    └─ BackgroundActor    task[N-1].run(ctx)                      │
//! └──────────────────────────────────────────────────────────────────┘
//!
//! first execute() to return = trigger
//!   ├─► interrupt(&outcome) on every other actor (once each)
//!   ├─► join all
//!   └─► return trigger outcome
//! ```
//!
//! ## Features
//! | Area              | Description                                              | Key types                                 |
//! |-------------------|----------------------------------------------------------|-------------------------------------------|
//! | **Actors**        | Interruptible units of work, first exit wins.            | [`Actor`], [`ActorFn`], [`ActorGroup`]    |
//! | **Runner**        | Listener + watcher + background tasks, one shutdown.     | [`ServiceRunner`], [`RunnerBuilder`]      |
//! | **Tasks**         | Background work driven by a cancellation token.          | [`Background`], [`RunFn`]                 |
//! | **Resources**     | Released once, in order, after the listener closes.      | [`Release`], [`ReleaseFn`]                |
//! | **Configuration** | Name/host/port, explicit or from `SERVER_*` variables.   | [`ServerConfig`]                          |
//! | **Errors**        | Typed outcome errors.                                    | [`RunnerError`]                           |
//!
//! ## Example
//! ```rust
//! use tokio_util::sync::CancellationToken;
//! use service_runner::{ReleaseError, ReleaseFn, RunFn, ServerConfig, ServiceRunner};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let job = RunFn::arc("job", |ctx: CancellationToken| async move {
//!         if ctx.is_cancelled() { return; }
//!         println!("work done");
//!     });
//!
//!     ServiceRunner::builder(ServerConfig::new("svc", 8080))
//!         .with_testing_mode(true)
//!         .build()
//!         .add_runner(job)
//!         .on_close(ReleaseFn::new("db", || async { Ok::<(), ReleaseError>(()) }))
//!         .run_async(CancellationToken::new())
//!         .await?;
//!     Ok(())
//! }
//! ```

mod actors;
mod config;
mod core;
mod error;
mod resources;
mod signal;
mod tasks;

// ---- Public re-exports ----

pub use actors::{
    Actor, ActorFn, ActorRef, BackgroundActor, DEFAULT_DRAIN_TIMEOUT, ListenerActor,
    ListenerHandle, Outcome, WatcherActor,
};
pub use config::ServerConfig;
pub use crate::core::{ActorGroup, RunnerBuilder, ServiceRunner};
pub use error::RunnerError;
pub use resources::{Release, ReleaseError, ReleaseFn};
pub use signal::{shutdown_token, wait_for_shutdown_signal};
pub use tasks::{Background, BackgroundRef, RunFn};
