//! Deferred one-shot tasks run when the host event loop goes idle.

pub mod idle_queue;
pub mod task;

pub use idle_queue::IdleQueue;
pub use task::{IdleScheduler, TaskControl, TaskHandle};
