//! Runtime core: actor group and service runner.
//!
//! Internal modules:
//! - [`group`]: runs actors concurrently, first exit interrupts the rest;
//! - [`runner`]: assembles listener, watcher and background actors;
//! - [`builder`]: optional runner settings (testing mode, log span).

mod builder;
mod group;
mod runner;

pub use builder::RunnerBuilder;
pub use group::ActorGroup;
pub use runner::ServiceRunner;
