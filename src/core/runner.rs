//! # ServiceRunner: assembles actors and drives one shutdown.
//!
//! The [`ServiceRunner`] owns the server config, the background tasks and the
//! cleanup list. [`run`](ServiceRunner::run) / [`run_async`](ServiceRunner::run_async)
//! turn them into actors and hand them to an [`ActorGroup`].
//!
//! ## Assembly
//! ```text
//! signal (caller token)
//!   └─► ctx = signal.child_token()
//!
//! ActorGroup:
//!   ListenerActor(router)        (run only, skipped in testing mode)
//!   WatcherActor(ctx, listener, cleanups)
//!   BackgroundActor(task[0], ctx)
//!   ...
//!   BackgroundActor(task[N-1], ctx)
//! ```
//!
//! ## Shutdown paths
//! ```text
//! signal fires        ─► watcher: close listener ─► wait closed (≤ drain timeout)
//!                        ─► release cleanups ─► Ok
//!                        group interrupts listener (no-op by now) and tasks (no-op)
//! task returns        ─► group interrupts watcher ─► ctx cancelled ─► same teardown
//! listener fails      ─► group interrupts watcher ─► same teardown ─► Err(Bind/Serve)
//! ```
//!
//! ## Example
//! ```no_run
//! use axum::{Router, routing::get};
//! use tokio_util::sync::CancellationToken;
//! use service_runner::{RunFn, ServerConfig, ServiceRunner, shutdown_token};
//!
//! #[tokio::main]
//! async fn main() {
//!     let router = Router::new().route("/health", get(|| async { "ok" }));
//!     let ticker = RunFn::arc("ticker", |ctx: CancellationToken| async move {
//!         ctx.cancelled().await;
//!     });
//!
//!     ServiceRunner::new(ServerConfig::new("svc", 8080))
//!         .add_runner(ticker)
//!         .run_or_exit(shutdown_token(), router)
//!         .await;
//! }
//! ```

use std::process;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use tokio_util::sync::CancellationToken;
use tracing::{Instrument, Span};

use crate::actors::{BackgroundActor, ListenerActor, Outcome, WatcherActor};
use crate::config::ServerConfig;
use crate::error::RunnerError;
use crate::resources::Release;
use crate::tasks::BackgroundRef;

use super::builder::RunnerBuilder;
use super::group::ActorGroup;

/// Runs an HTTP service with background tasks and cleanups under one shutdown.
pub struct ServiceRunner {
    cfg: ServerConfig,
    span: Span,
    runners: Vec<BackgroundRef>,
    cleanups: Vec<Box<dyn Release>>,
    testing: bool,
    drain: Duration,
}

impl ServiceRunner {
    /// Creates a runner with default settings (testing mode off).
    pub fn new(cfg: ServerConfig) -> Self {
        RunnerBuilder::new(cfg).build()
    }

    /// Returns a builder for a runner with custom settings.
    pub fn builder(cfg: ServerConfig) -> RunnerBuilder {
        RunnerBuilder::new(cfg)
    }

    /// Creates a runner configured from `SERVER_*` environment variables.
    pub fn from_env() -> Result<Self, RunnerError> {
        ServerConfig::from_env().map(Self::new)
    }

    pub(super) fn new_internal(
        cfg: ServerConfig,
        span: Span,
        testing: bool,
        drain: Duration,
    ) -> Self {
        Self {
            cfg,
            span,
            runners: Vec::new(),
            cleanups: Vec::new(),
            testing,
            drain,
        }
    }

    /// Server configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.cfg
    }

    /// Returns `true` if the listener is disabled for tests.
    pub fn is_testing(&self) -> bool {
        self.testing
    }

    /// Adds a background task, started by [`run`](Self::run) / [`run_async`](Self::run_async).
    ///
    /// When any background task returns, for whatever reason, the whole service
    /// shuts down with a successful outcome.
    pub fn add_runner(mut self, task: BackgroundRef) -> Self {
        self.runners.push(task);
        self
    }

    /// Adds several background tasks.
    pub fn add_runners(mut self, tasks: impl IntoIterator<Item = BackgroundRef>) -> Self {
        self.runners.extend(tasks);
        self
    }

    /// Adds a resource released on shutdown, after the listener is closed.
    ///
    /// Resources are released in the order they were added.
    pub fn on_close(mut self, resource: impl Release) -> Self {
        self.cleanups.push(Box::new(resource));
        self
    }

    /// Adds several resources released on shutdown.
    pub fn on_close_all(mut self, resources: impl IntoIterator<Item = Box<dyn Release>>) -> Self {
        self.cleanups.extend(resources);
        self
    }

    /// Serves `router` and runs all background tasks until `signal` is cancelled
    /// or any of them stops.
    ///
    /// Returns after every actor has finished and every cleanup has been released.
    pub async fn run(self, signal: CancellationToken, router: Router) -> Outcome {
        self.drive(signal, Some(router)).await
    }

    /// Like [`run`](Self::run) without an HTTP listener.
    pub async fn run_async(self, signal: CancellationToken) -> Outcome {
        self.drive(signal, None).await
    }

    /// Calls [`run`](Self::run) and exits the process with status 1 on failure.
    pub async fn run_or_exit(self, signal: CancellationToken, router: Router) {
        if self.run(signal, router).await.is_err() {
            process::exit(1);
        }
    }

    /// Calls [`run_async`](Self::run_async) and exits the process with status 1 on failure.
    pub async fn run_async_or_exit(self, signal: CancellationToken) {
        if self.run_async(signal).await.is_err() {
            process::exit(1);
        }
    }

    async fn drive(self, signal: CancellationToken, router: Option<Router>) -> Outcome {
        let Self {
            cfg,
            span,
            runners,
            cleanups,
            testing,
            drain,
        } = self;
        let (mode, started) = match router {
            Some(_) => ("sync", "group runner start"),
            None => ("async", "async runner started"),
        };
        let ctx = signal.child_token();

        let mut group = ActorGroup::new();
        let listener = match router {
            Some(router) if !testing => {
                let actor = ListenerActor::new(&cfg, router).with_drain_timeout(drain);
                let handle = actor.handle();
                group.add(Arc::new(actor));
                Some(handle)
            }
            _ => None,
        };
        group.add(Arc::new(WatcherActor::new(ctx.clone(), listener, cleanups)));
        for task in runners {
            group.add(Arc::new(BackgroundActor::new(task, ctx.clone())));
        }

        async move {
            if testing {
                tracing::debug!(mode, "TESTING-MODE" = "ON", actors = group.len(), "{started}");
            } else {
                tracing::debug!(mode, actors = group.len(), "{started}");
            }
            let outcome = group.run().await;
            if let Err(error) = &outcome {
                tracing::error!(service = %cfg.name, mode, %error, "group runner failure");
            }
            outcome
        }
        .instrument(span)
        .await
    }
}
