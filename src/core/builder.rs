use std::time::Duration;

use tracing::Span;

use crate::actors::DEFAULT_DRAIN_TIMEOUT;
use crate::config::ServerConfig;

use super::runner::ServiceRunner;

/// Builder for constructing a [`ServiceRunner`] with optional settings.
pub struct RunnerBuilder {
    cfg: ServerConfig,
    span: Option<Span>,
    testing: bool,
    drain: Duration,
}

impl RunnerBuilder {
    /// Creates a new builder with the given configuration.
    pub fn new(cfg: ServerConfig) -> Self {
        Self {
            cfg,
            span: None,
            testing: false,
            drain: DEFAULT_DRAIN_TIMEOUT,
        }
    }

    /// Enables testing mode: the HTTP listener is never bound, everything else
    /// (background tasks, cleanups, ordering) runs as usual.
    pub fn with_testing_mode(mut self, testing: bool) -> Self {
        self.testing = testing;
        self
    }

    /// Sets how long in-flight requests may run once the listener is closed
    /// (default [`DEFAULT_DRAIN_TIMEOUT`]).
    pub fn with_drain_timeout(mut self, drain: Duration) -> Self {
        self.drain = drain;
        self
    }

    /// Sets the span all runner logs are recorded in.
    ///
    /// Defaults to `info_span!("service", name = <config name>)`.
    pub fn with_span(mut self, span: Span) -> Self {
        self.span = Some(span);
        self
    }

    /// Builds the runner.
    pub fn build(self) -> ServiceRunner {
        let span = self
            .span
            .unwrap_or_else(|| tracing::info_span!("service", name = %self.cfg.name));
        ServiceRunner::new_internal(self.cfg, span, self.testing, self.drain)
    }
}
