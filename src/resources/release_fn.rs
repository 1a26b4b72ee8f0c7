//! # Function-backed resource (`ReleaseFn`)
//!
//! [`ReleaseFn`] wraps a closure `F: FnOnce() -> Fut` into a [`Release`]. The closure
//! is taken on the first call; later calls do nothing and return `Ok(())`.
//!
//! ## Example
//! ```rust
//! use service_runner::{ReleaseError, ReleaseFn};
//!
//! let db = ReleaseFn::new("db", || async {
//!     // pool.close().await
//!     Ok::<(), ReleaseError>(())
//! });
//! ```

use std::borrow::Cow;
use std::future::Future;

use async_trait::async_trait;

use crate::resources::release::{Release, ReleaseError};

/// Function-backed resource.
pub struct ReleaseFn<F> {
    name: Cow<'static, str>,
    f: Option<F>,
}

impl<F> ReleaseFn<F> {
    /// Creates a new function-backed resource.
    pub fn new(name: impl Into<Cow<'static, str>>, f: F) -> Self {
        Self {
            name: name.into(),
            f: Some(f),
        }
    }

    /// Returns `true` once the closure has run.
    pub fn is_released(&self) -> bool {
        self.f.is_none()
    }
}

#[async_trait]
impl<F, Fut> Release for ReleaseFn<F>
where
    F: FnOnce() -> Fut + Send + 'static,
    Fut: Future<Output = Result<(), ReleaseError>> + Send + 'static,
{
    fn name(&self) -> &str {
        &self.name
    }

    async fn release(&mut self) -> Result<(), ReleaseError> {
        match self.f.take() {
            Some(f) => f().await,
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[tokio::test]
    async fn second_release_is_a_noop() {
        let calls = Arc::new(AtomicUsize::new(0));
        let c = calls.clone();
        let mut res = ReleaseFn::new("counter", move || async move {
            c.fetch_add(1, Ordering::SeqCst);
            Ok::<(), ReleaseError>(())
        });

        assert!(!res.is_released());
        res.release().await.unwrap();
        res.release().await.unwrap();
        assert!(res.is_released());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(res.name(), "counter");
    }

    #[tokio::test]
    async fn error_is_returned_to_caller() {
        let mut res = ReleaseFn::new("broken", || async { Err::<(), ReleaseError>("gone".into()) });
        let err = res.release().await.unwrap_err();
        assert_eq!(err.to_string(), "gone");
    }
}
