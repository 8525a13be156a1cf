use std::collections::VecDeque;
use std::num::NonZeroU64;

use crate::core::scheduling::task::{IdleScheduler, TaskControl, TaskHandle};

/// FIFO of deferred tasks that run once the host loop has nothing else to do.
///
/// The host calls [`IdleQueue::dispatch`] when its event queue is drained. Only
/// the tasks queued before the dispatch started are run; anything added while
/// dispatching waits for the next pass, so a task cannot starve the loop by
/// re-adding itself.
#[derive(Debug)]
pub struct IdleQueue<T> {
    tasks: VecDeque<(TaskHandle, T)>,
    next_id: NonZeroU64,
}

impl<T> IdleQueue<T> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: VecDeque::new(),
            next_id: NonZeroU64::MIN,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    #[must_use]
    pub fn contains(&self, handle: TaskHandle) -> bool {
        self.tasks.iter().any(|(queued, _)| *queued == handle)
    }

    /// Drops a queued task. Returns `false` if it already ran or never existed.
    pub fn remove(&mut self, handle: TaskHandle) -> bool {
        let Some(position) = self.tasks.iter().position(|(queued, _)| *queued == handle) else {
            return false;
        };

        self.tasks.remove(position);
        true
    }

    /// Runs every task queued at the time of the call, in order.
    ///
    /// Returns the number of tasks run.
    pub fn dispatch(&mut self, mut run: impl FnMut(&mut Self, TaskHandle, &mut T) -> TaskControl) -> usize {
        let mut batch = std::mem::take(&mut self.tasks);
        let ran = batch.len();
        let mut survivors = VecDeque::new();

        while let Some((handle, mut task)) = batch.pop_front() {
            if run(self, handle, &mut task) == TaskControl::Continue {
                survivors.push_back((handle, task));
            }
        }

        // Survivors keep their place ahead of tasks added during the pass.
        survivors.append(&mut self.tasks);
        self.tasks = survivors;

        ran
    }

    fn allocate_handle(&mut self) -> TaskHandle {
        let handle = TaskHandle::new(self.next_id);
        self.next_id = self.next_id.checked_add(1).unwrap_or(NonZeroU64::MIN);
        handle
    }
}

impl<T> IdleScheduler<T> for IdleQueue<T> {
    fn add_idle(&mut self, task: T) -> TaskHandle {
        let handle = self.allocate_handle();
        self.tasks.push_back((handle, task));
        tracing::trace!(%handle, queued = self.tasks.len(), "idle task added");
        handle
    }
}

impl<T> Default for IdleQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn handles_are_unique_and_increasing() {
        let mut queue = IdleQueue::new();

        let first = queue.add_idle("a");
        let second = queue.add_idle("b");

        assert_ne!(first, second);
        assert!(second.id() > first.id());
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn dispatch_runs_tasks_in_fifo_order() {
        let mut queue = IdleQueue::new();
        queue.add_idle(1);
        queue.add_idle(2);
        queue.add_idle(3);

        let mut seen = Vec::new();
        let ran = queue.dispatch(|_, _, task| {
            seen.push(*task);
            TaskControl::Remove
        });

        assert_eq!(ran, 3);
        assert_eq!(seen, vec![1, 2, 3]);
        assert!(queue.is_empty());
    }

    #[test]
    fn continue_keeps_task_for_next_pass() {
        let mut queue = IdleQueue::new();
        let handle = queue.add_idle(0u32);

        queue.dispatch(|_, _, count| {
            *count += 1;
            TaskControl::Continue
        });

        assert!(queue.contains(handle));

        let mut observed = 0;
        queue.dispatch(|_, _, count| {
            *count += 1;
            observed = *count;
            TaskControl::Remove
        });

        assert_eq!(observed, 2);
        assert!(queue.is_empty());
    }

    #[test]
    fn tasks_added_during_dispatch_wait_for_next_pass() {
        let mut queue = IdleQueue::new();
        queue.add_idle("first");

        let mut seen = Vec::new();
        queue.dispatch(|queue, _, task| {
            seen.push(*task);
            queue.add_idle("added during dispatch");
            TaskControl::Remove
        });

        assert_eq!(seen, vec!["first"]);
        assert_eq!(queue.len(), 1);

        queue.dispatch(|_, _, task| {
            seen.push(*task);
            TaskControl::Remove
        });

        assert_eq!(seen, vec!["first", "added during dispatch"]);
    }

    #[test]
    fn survivors_run_before_tasks_added_during_dispatch() {
        let mut queue = IdleQueue::new();
        queue.add_idle("repeating");

        queue.dispatch(|queue, _, _| {
            queue.add_idle("newcomer");
            TaskControl::Continue
        });

        let mut order = Vec::new();
        queue.dispatch(|_, _, task| {
            order.push(*task);
            TaskControl::Remove
        });

        assert_eq!(order, vec!["repeating", "newcomer"]);
    }

    #[test]
    fn remove_drops_queued_task() {
        let mut queue = IdleQueue::new();
        let keep = queue.add_idle("keep");
        let drop = queue.add_idle("drop");

        assert!(queue.remove(drop));
        assert!(!queue.remove(drop));
        assert!(queue.contains(keep));
        assert_eq!(queue.len(), 1);
    }

    #[test]
    fn dispatch_on_empty_queue_runs_nothing() {
        let mut queue: IdleQueue<()> = IdleQueue::default();

        let ran = queue.dispatch(|_, _, _| panic!("nothing should run"));

        assert_eq!(ran, 0);
    }
}
