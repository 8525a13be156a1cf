use std::num::NonZeroU64;

/// Identifies a task queued on an [`IdleQueue`](super::idle_queue::IdleQueue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TaskHandle(NonZeroU64);

impl TaskHandle {
    pub(crate) fn new(id: NonZeroU64) -> Self {
        Self(id)
    }

    #[must_use]
    pub fn id(self) -> u64 {
        self.0.get()
    }
}

impl std::fmt::Display for TaskHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "idle#{}", self.0)
    }
}

/// What a dispatched idle task wants done with itself afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskControl {
    /// Run again on the next idle pass.
    Continue,
    /// One-shot: drop the task.
    Remove,
}

pub trait IdleScheduler<T> {
    fn add_idle(&mut self, task: T) -> TaskHandle;
}
