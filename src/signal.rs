//! # Stopping a service from the OS.
//!
//! A [`ServiceRunner`](crate::ServiceRunner) stops when its caller token is
//! cancelled. [`shutdown_token`] provides such a token wired to process signals,
//! so a binary gets Ctrl-C / `kill` handling with one call.
//!
//! Unix listens for `SIGINT`, `SIGTERM` and `SIGQUIT`; other platforms for Ctrl-C.

use tokio_util::sync::CancellationToken;

/// Completes on the first `SIGINT`, `SIGTERM` or `SIGQUIT`.
#[cfg(unix)]
pub async fn wait_for_shutdown_signal() -> std::io::Result<()> {
    use tokio::signal::unix::{SignalKind, signal};

    let mut sigint = signal(SignalKind::interrupt())?;
    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigquit = signal(SignalKind::quit())?;

    tokio::select! {
        _ = sigint.recv()  => {},
        _ = sigterm.recv() => {},
        _ = sigquit.recv() => {},
    }
    Ok(())
}

/// Completes on Ctrl-C.
#[cfg(not(unix))]
pub async fn wait_for_shutdown_signal() -> std::io::Result<()> {
    tokio::signal::ctrl_c().await
}

/// Returns a token cancelled on the first termination signal.
///
/// Unlike awaiting [`wait_for_shutdown_signal`] directly, the token can be handed
/// to [`ServiceRunner::run`](crate::ServiceRunner::run) and cloned into other
/// parts of the program; the signal is watched by a spawned task and logged once.
///
/// Must be called from within a tokio runtime. If the signal handlers cannot be
/// installed the token is cancelled right away, so the service shuts down instead
/// of running without a way to stop it.
pub fn shutdown_token() -> CancellationToken {
    let token = CancellationToken::new();
    let trigger = token.clone();
    tokio::spawn(async move {
        if let Err(error) = wait_for_shutdown_signal().await {
            tracing::error!(%error, "failed to install shutdown signal handlers");
        } else {
            tracing::info!("shutdown signal received");
        }
        trigger.cancel();
    });
    token
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;

    #[tokio::test]
    async fn token_stays_live_until_a_signal_arrives() {
        let token = shutdown_token();
        tokio::time::sleep(Duration::from_millis(50)).await;
        assert!(!token.is_cancelled());
    }
}
