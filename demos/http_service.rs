//! # Example: http_service
//!
//! HTTP service with one background ticker and two cleanups.
//!
//! ## Flow
//! ```text
//! ServiceRunner::run(shutdown_token(), router)
//!     ├─► ListenerActor   serves /health on SERVER_HOST:SERVER_PORT
//!     ├─► WatcherActor    waits for Ctrl-C / SIGTERM
//!     └─► BackgroundActor "ticker" logs every second
//!
//! Ctrl-C ─► listener closed ─► "cache" released ─► "db" released ─► exit 0
//! ```
//!
//! ## Run
//! ```bash
//! SERVER_NAME=demo SERVER_PORT=8080 RUST_LOG=debug cargo run --example http_service
//! ```

use std::time::Duration;

use axum::{Router, routing::get};
use service_runner::{ReleaseError, ReleaseFn, RunFn, ServiceRunner, shutdown_token};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let router = Router::new().route("/health", get(|| async { "ok" }));

    let ticker = RunFn::arc("ticker", |ctx: CancellationToken| async move {
        let mut tick = 0u64;
        loop {
            tokio::select! {
                _ = ctx.cancelled() => break,
                _ = tokio::time::sleep(Duration::from_secs(1)) => {
                    tick += 1;
                    tracing::info!(tick, "tick");
                }
            }
        }
    });

    ServiceRunner::from_env()?
        .add_runner(ticker)
        .on_close(ReleaseFn::new("cache", || async {
            tracing::info!("cache flushed");
            Ok::<(), ReleaseError>(())
        }))
        .on_close(ReleaseFn::new("db", || async {
            tracing::info!("db pool closed");
            Ok::<(), ReleaseError>(())
        }))
        .run_or_exit(shutdown_token(), router)
        .await;
    Ok(())
}
