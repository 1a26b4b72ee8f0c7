//! # Scoped resources released on shutdown.
//!
//! - [`Release`] - trait for resources released once when the runner stops
//! - [`ReleaseFn`] - closure-backed implementation
//! - [`ReleaseError`] - boxed error returned by a failed release

mod release;
mod release_fn;

pub use release::{Release, ReleaseError};
pub use release_fn::ReleaseFn;
