//! # Function-backed background task (`RunFn`)
//!
//! [`RunFn`] wraps a closure `F: Fn(CancellationToken) -> Fut`, producing a fresh
//! future per call. If shared state is needed, capture an `Arc<...>` explicitly.
//!
//! ## Example
//! ```rust
//! use tokio_util::sync::CancellationToken;
//! use service_runner::{BackgroundRef, RunFn};
//!
//! let t: BackgroundRef = RunFn::arc("worker", |ctx: CancellationToken| async move {
//!     ctx.cancelled().await;
//! });
//!
//! assert_eq!(t.name(), "worker");
//! ```

use std::borrow::Cow;
use std::future::Future;
use std::sync::Arc;

use async_trait::async_trait;
use tokio_util::sync::CancellationToken;

use crate::tasks::task::Background;

/// Function-backed background task.
#[derive(Debug)]
pub struct RunFn<F> {
    name: Cow<'static, str>,
    f: F,
}

impl<F> RunFn<F> {
    /// Creates a new function-backed task.
    ///
    /// Prefer [`RunFn::arc`] when you immediately need a [`BackgroundRef`](crate::BackgroundRef).
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f,
        }
    }

    /// Creates the task and returns it as a shared handle.
    pub fn arc(name: impl Into<Cow<'static, str>>, f: F) -> Arc<Self> {
        Arc::new(Self::new(name, f))
    }
}

#[async_trait]
impl<F, Fut> Background for RunFn<F>
where
    F: Fn(CancellationToken) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = ()> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn run(&self, ctx: CancellationToken) {
        (self.f)(ctx).await
    }
}
