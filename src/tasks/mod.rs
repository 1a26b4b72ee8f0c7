//! # Background tasks.
//!
//! - [`Background`] - trait for one-shot async work driven by a cancellation token
//! - [`RunFn`] - function-based implementation
//! - [`BackgroundRef`] - shared reference to a task (`Arc<dyn Background>`)

mod task;
mod task_fn;

pub use task::{Background, BackgroundRef};
pub use task_fn::RunFn;
