//! # Example: async_workers
//!
//! No HTTP listener: two workers, one of which finishes its batch after three
//! seconds. Its exit stops the other worker and releases the queue handle.
//!
//! ## Run
//! ```bash
//! RUST_LOG=debug cargo run --example async_workers
//! ```

use std::time::Duration;

use service_runner::{ReleaseError, ReleaseFn, RunFn, ServerConfig, ServiceRunner, shutdown_token};
use tokio_util::sync::CancellationToken;
use tracing_subscriber::EnvFilter;

#[tokio::main(flavor = "current_thread")]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "debug".into()))
        .init();

    let batch = RunFn::arc("batch", |ctx: CancellationToken| async move {
        for i in 1..=3 {
            tokio::select! {
                _ = ctx.cancelled() => return,
                _ = tokio::time::sleep(Duration::from_secs(1)) => tracing::info!(item = i, "processed"),
            }
        }
        tracing::info!("batch complete");
    });

    let poller = RunFn::arc("poller", |ctx: CancellationToken| async move {
        ctx.cancelled().await;
        tracing::info!("poller stopped");
    });

    ServiceRunner::new(ServerConfig::new("workers", 0))
        .add_runner(batch)
        .add_runner(poller)
        .on_close(ReleaseFn::new("queue", || async {
            tracing::info!("queue handle released");
            Ok::<(), ReleaseError>(())
        }))
        .run_async_or_exit(shutdown_token())
        .await;
}
