//! # HTTP listener actor.
//!
//! [`ListenerActor`] binds the configured address and serves an [`axum::Router`]
//! until it is closed. Closing goes through a [`ListenerHandle`], shared with the
//! [`WatcherActor`](crate::WatcherActor) so cleanups only start once serving has
//! stopped.
//!
//! ## Outcomes
//! ```text
//! close() before bind      → Ok(())   (never binds)
//! bind error               → Err(Bind)
//! close() while serving    → Ok(())   (graceful shutdown)
//! serve error              → Err(Serve)
//! ```
//!
//! After `close()` the listening socket is dropped at once; in-flight requests
//! get the drain timeout to finish. Past it `execute` returns anyway and the
//! remaining connections are left to the runtime, so a stuck handler cannot
//! hold up shutdown.

use std::net::SocketAddr;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use tokio::net::TcpListener;
use tokio_util::sync::CancellationToken;

use crate::actors::actor::{Actor, Outcome};
use crate::config::ServerConfig;
use crate::error::RunnerError;

/// Default time in-flight requests get to finish once the listener is closed.
pub const DEFAULT_DRAIN_TIMEOUT: Duration = Duration::from_secs(1);

/// Cloneable control handle for a [`ListenerActor`].
#[derive(Clone, Debug, Default)]
pub struct ListenerHandle {
    shutdown: CancellationToken,
    ready: CancellationToken,
    stopped: CancellationToken,
    addr: Arc<OnceLock<SocketAddr>>,
}

impl ListenerHandle {
    /// Asks the listener to stop. Safe to call any number of times.
    pub fn close(&self) {
        self.shutdown.cancel();
    }

    /// Resolves once the listener's `execute` has returned.
    pub async fn closed(&self) {
        self.stopped.cancelled().await
    }

    /// Returns `true` once the listener's `execute` has returned.
    pub fn is_closed(&self) -> bool {
        self.stopped.is_cancelled()
    }

    /// Waits until the listener is bound and returns its local address.
    ///
    /// Returns `None` if the listener stopped without binding.
    pub async fn local_addr(&self) -> Option<SocketAddr> {
        tokio::select! {
            biased;
            _ = self.ready.cancelled() => {}
            _ = self.stopped.cancelled() => {}
        }
        self.addr.get().copied()
    }
}

/// Serves a router on the configured address until closed.
pub struct ListenerActor {
    service: String,
    addr: String,
    router: Router,
    drain: Duration,
    handle: ListenerHandle,
}

impl ListenerActor {
    /// Creates a listener for `cfg`. Nothing is bound until `execute`.
    pub fn new(cfg: &ServerConfig, router: Router) -> Self {
        Self {
            service: cfg.name.clone(),
            addr: cfg.bind_address(),
            router,
            drain: DEFAULT_DRAIN_TIMEOUT,
            handle: ListenerHandle::default(),
        }
    }

    /// Sets how long in-flight requests may run after the listener is closed.
    pub fn with_drain_timeout(mut self, drain: Duration) -> Self {
        self.drain = drain;
        self
    }

    /// Returns a control handle for this listener.
    pub fn handle(&self) -> ListenerHandle {
        self.handle.clone()
    }

    async fn bind(&self) -> Result<TcpListener, RunnerError> {
        TcpListener::bind(&self.addr)
            .await
            .map_err(|source| RunnerError::Bind {
                addr: self.addr.clone(),
                source,
            })
    }

    async fn serve(&self) -> Outcome {
        let listener = tokio::select! {
            biased;
            _ = self.handle.shutdown.cancelled() => return Ok(()),
            res = self.bind() => res?,
        };

        if let Ok(addr) = listener.local_addr() {
            let _ = self.handle.addr.set(addr);
            tracing::info!(service = %self.service, %addr, "http server listening");
        }
        self.handle.ready.cancel();

        let shutdown = &self.handle.shutdown;
        let serve = axum::serve(listener, self.router.clone())
            .with_graceful_shutdown(shutdown.clone().cancelled_owned())
            .into_future();
        let drained = async {
            shutdown.cancelled().await;
            tokio::time::sleep(self.drain).await;
        };

        tokio::select! {
            res = serve => res.map_err(|source| RunnerError::Serve {
                service: self.service.clone(),
                source,
            }),
            _ = drained => {
                tracing::warn!(
                    service = %self.service,
                    drain = ?self.drain,
                    "in-flight requests outlived the drain timeout; abandoning them"
                );
                Ok(())
            }
        }
    }
}

#[async_trait]
impl Actor for ListenerActor {
    fn name(&self) -> &str {
        "http-listener"
    }

    async fn execute(&self) -> Outcome {
        let _stopped = self.handle.stopped.clone().drop_guard();

        let res = self.serve().await;
        match &res {
            Ok(()) => tracing::debug!(service = %self.service, "http server closed"),
            Err(error) => {
                tracing::error!(service = %self.service, %error, "http server failure")
            }
        }
        res
    }

    fn interrupt(&self, _trigger: &Outcome) {
        self.handle.close();
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use axum::routing::get;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};

    use super::*;

    fn local() -> ServerConfig {
        ServerConfig::with_host("svc", "127.0.0.1", 0)
    }

    #[tokio::test]
    async fn interrupt_closes_gracefully() {
        let router = Router::new().route("/", get(|| async { "ok" }));
        let actor = Arc::new(ListenerActor::new(&local(), router));
        let handle = actor.handle();

        let running = tokio::spawn({
            let actor = actor.clone();
            async move { actor.execute().await }
        });

        let addr = handle.local_addr().await.expect("listener bound");
        let mut conn = tokio::net::TcpStream::connect(addr).await.unwrap();
        conn.write_all(b"GET / HTTP/1.1\r\nHost: x\r\nConnection: close\r\n\r\n")
            .await
            .unwrap();
        let mut body = String::new();
        conn.read_to_string(&mut body).await.unwrap();
        assert!(body.ends_with("ok"));

        actor.interrupt(&Ok(()));
        assert!(running.await.unwrap().is_ok());
        assert!(handle.is_closed());
    }

    #[tokio::test]
    async fn stuck_request_does_not_block_close() {
        let entered = CancellationToken::new();
        let router = Router::new().route(
            "/slow",
            get({
                let entered = entered.clone();
                move || {
                    let entered = entered.clone();
                    async move {
                        entered.cancel();
                        std::future::pending::<()>().await;
                        "never"
                    }
                }
            }),
        );
        let actor = Arc::new(
            ListenerActor::new(&local(), router).with_drain_timeout(Duration::from_millis(50)),
        );
        let handle = actor.handle();

        let running = tokio::spawn({
            let actor = actor.clone();
            async move { actor.execute().await }
        });

        let addr = handle.local_addr().await.expect("listener bound");
        let mut conn = tokio::net::TcpStream::connect(addr).await.unwrap();
        conn.write_all(b"GET /slow HTTP/1.1\r\nHost: x\r\n\r\n")
            .await
            .unwrap();
        entered.cancelled().await;

        actor.interrupt(&Ok(()));
        let outcome = tokio::time::timeout(Duration::from_secs(3), running)
            .await
            .expect("listener stopped despite the stuck request")
            .unwrap();
        assert!(outcome.is_ok());
        assert!(handle.is_closed());
        assert!(tokio::net::TcpStream::connect(addr).await.is_err());
    }

    #[tokio::test]
    async fn repeated_interrupt_is_safe() {
        let actor = ListenerActor::new(&local(), Router::new());
        actor.interrupt(&Ok(()));
        actor.interrupt(&Err(RunnerError::fail("boom")));
        actor.handle().close();

        assert!(actor.execute().await.is_ok());
        assert!(actor.handle().is_closed());
        assert_eq!(actor.handle().local_addr().await, None);
    }

    #[tokio::test]
    async fn address_in_use_is_a_bind_failure() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let port = taken.local_addr().unwrap().port();
        let cfg = ServerConfig::with_host("svc", "127.0.0.1", port);

        let actor = ListenerActor::new(&cfg, Router::new());
        let err = actor.execute().await.unwrap_err();
        assert!(matches!(err, RunnerError::Bind { .. }));
        assert_eq!(err.io_kind(), Some(io::ErrorKind::AddrInUse));
        assert!(actor.handle().is_closed());
    }
}
