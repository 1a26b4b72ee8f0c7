//! # Server configuration.
//!
//! [`ServerConfig`] describes the HTTP endpoint a [`ServiceRunner`](crate::ServiceRunner)
//! exposes: a service name (used in logs) plus the host/port to bind.
//!
//! It can be built explicitly ([`ServerConfig::new`], [`ServerConfig::with_host`])
//! or resolved from the environment with [`ServerConfig::from_env`]:
//!
//! | Variable      | Flag     | Default    |
//! |---------------|----------|------------|
//! | `SERVER_NAME` | `--name` | `server`   |
//! | `SERVER_HOST` | `--host` | *(empty)*  |
//! | `SERVER_PORT` | `--port` | `8000`     |
//!
//! An empty host means "all interfaces".

use std::ffi::OsString;

use clap::Parser;

use crate::error::RunnerError;

/// Host used for binding when the configured host is empty.
const ALL_INTERFACES: &str = "0.0.0.0";

/// HTTP service settings.
#[derive(Parser, Clone, Debug, PartialEq, Eq)]
#[command(name = "server", about = "HTTP service settings")]
pub struct ServerConfig {
    /// Service name, reported in logs.
    #[arg(long, env = "SERVER_NAME", default_value = "server")]
    pub name: String,

    /// Host to bind (empty = all interfaces).
    #[arg(long, env = "SERVER_HOST", default_value = "")]
    pub host: String,

    /// Port to bind.
    #[arg(long, env = "SERVER_PORT", default_value_t = 8000)]
    pub port: u16,
}

impl ServerConfig {
    /// Creates a config listening on all interfaces.
    pub fn new(name: impl Into<String>, port: u16) -> Self {
        Self::with_host(name, "", port)
    }

    /// Creates a config with an explicit host.
    pub fn with_host(name: impl Into<String>, host: impl Into<String>, port: u16) -> Self {
        Self {
            name: name.into(),
            host: host.into(),
            port,
        }
    }

    /// Resolves the config from `SERVER_*` environment variables.
    pub fn from_env() -> Result<Self, RunnerError> {
        Self::from_env_iter(["server"])
    }

    /// Resolves the config from command-line style arguments, falling back to
    /// `SERVER_*` environment variables and then to defaults.
    ///
    /// The first item is the program name, as with [`std::env::args_os`].
    pub fn from_env_iter<I, T>(args: I) -> Result<Self, RunnerError>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        Self::try_parse_from(args).map_err(|e| RunnerError::Config {
            error: e.to_string(),
        })
    }

    /// Returns `host:port` as configured.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Returns the address to bind; an empty host becomes `0.0.0.0`.
    pub fn bind_address(&self) -> String {
        if self.host.is_empty() {
            format!("{ALL_INTERFACES}:{}", self.port)
        } else {
            self.address()
        }
    }
}

impl Default for ServerConfig {
    /// `name = "server"`, empty host, `port = 8000`.
    fn default() -> Self {
        Self::new("server", 8000)
    }
}
