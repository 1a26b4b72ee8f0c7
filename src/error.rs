//! Error types used by the runner and its actors.
//!
//! [`RunnerError`] is the failure side of every actor [`Outcome`](crate::Outcome):
//! listener bind/serve failures, panicking actors, custom actor failures and
//! configuration errors all end up here.
//!
//! Cleanup failures use [`ReleaseError`](crate::ReleaseError) instead; they are
//! logged and never become the outcome of a run.

use std::io;
use thiserror::Error;

/// # Errors produced while running a service.
///
/// Only the error of the *trigger* actor (the first one to finish) is returned
/// by [`ActorGroup::run`](crate::ActorGroup::run); errors from the other actors
/// are logged and dropped.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum RunnerError {
    /// The HTTP listener could not bind its address.
    #[error("bind {addr}: {source}")]
    Bind {
        /// Address the listener tried to bind.
        addr: String,
        /// Underlying I/O error (e.g. address in use).
        #[source]
        source: io::Error,
    },

    /// The HTTP listener stopped serving because of an I/O error.
    #[error("serve {service}: {source}")]
    Serve {
        /// Name of the service that was serving.
        service: String,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },

    /// An actor panicked while executing.
    #[error("actor {actor} panicked")]
    ActorPanicked {
        /// Name of the panicking actor.
        actor: String,
    },

    /// Failure reported by a user-defined actor.
    #[error("execution failed: {error}")]
    Fail {
        /// The underlying error message.
        error: String,
    },

    /// Server configuration could not be resolved.
    #[error("invalid configuration: {error}")]
    Config {
        /// The underlying error message.
        error: String,
    },
}

impl RunnerError {
    /// Shorthand for [`RunnerError::Fail`].
    pub fn fail(error: impl Into<String>) -> Self {
        RunnerError::Fail {
            error: error.into(),
        }
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use service_runner::RunnerError;
    ///
    /// let err = RunnerError::fail("boom");
    /// assert_eq!(err.as_label(), "actor_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            RunnerError::Bind { .. } => "listener_bind",
            RunnerError::Serve { .. } => "listener_serve",
            RunnerError::ActorPanicked { .. } => "actor_panicked",
            RunnerError::Fail { .. } => "actor_failed",
            RunnerError::Config { .. } => "invalid_config",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            RunnerError::Bind { addr, source } => format!("bind failed on {addr}: {source}"),
            RunnerError::Serve { service, source } => {
                format!("service {service} stopped serving: {source}")
            }
            RunnerError::ActorPanicked { actor } => format!("panic in actor {actor}"),
            RunnerError::Fail { error } => format!("error: {error}"),
            RunnerError::Config { error } => format!("config: {error}"),
        }
    }

    /// Returns the underlying I/O error kind for listener failures.
    pub fn io_kind(&self) -> Option<io::ErrorKind> {
        match self {
            RunnerError::Bind { source, .. } | RunnerError::Serve { source, .. } => {
                Some(source.kind())
            }
            _ => None,
        }
    }
}
