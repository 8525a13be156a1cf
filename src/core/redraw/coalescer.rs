use crate::core::ports::redraw_callback::RedrawCallback;
use crate::core::ports::surface_events::SurfaceEvents;
use crate::core::redraw::state::RedrawState;
use crate::core::scheduling::task::{IdleScheduler, TaskControl};

/// The task the coalescer queues on the idle scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RedrawTask;

/// Collapses bursts of damage into a single redraw that only runs once the
/// surface is ready to present.
#[derive(Debug, Default)]
pub struct FrameCoalescer {
    state: RedrawState,
}

impl FrameCoalescer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> RedrawState {
        self.state
    }

    pub fn on_dirty(&mut self, scheduler: &mut impl IdleScheduler<RedrawTask>) {
        self.state.dirty = true;
        self.maybe_schedule(scheduler);
    }

    pub fn on_ready(&mut self, scheduler: &mut impl IdleScheduler<RedrawTask>) {
        self.state.ready = true;
        self.maybe_schedule(scheduler);
    }

    /// Runs the queued redraw. Called by the idle scheduler.
    ///
    /// State is reset before `renderer` runs so anything it reports lands in
    /// the next cycle.
    pub fn run_redraw<S, R>(&mut self, scheduler: &mut S, renderer: &mut R) -> TaskControl
    where
        S: IdleScheduler<RedrawTask>,
        R: RedrawCallback + ?Sized,
    {
        tracing::trace!(pending = ?self.state.pending, "running coalesced redraw");

        self.state = RedrawState::default();
        renderer.redraw(&mut self.bind(scheduler));

        TaskControl::Remove
    }

    /// Pairs the coalescer with a scheduler so it can be handed out as a
    /// [`SurfaceEvents`] sink.
    pub fn bind<'a, S>(&'a mut self, scheduler: &'a mut S) -> BoundCoalescer<'a, S>
    where
        S: IdleScheduler<RedrawTask>,
    {
        BoundCoalescer {
            coalescer: self,
            scheduler,
        }
    }

    fn maybe_schedule(&mut self, scheduler: &mut impl IdleScheduler<RedrawTask>) {
        if !self.state.wants_redraw() {
            return;
        }

        let handle = scheduler.add_idle(RedrawTask);
        tracing::trace!(%handle, "redraw scheduled");
        self.state.pending = Some(handle);
    }
}

/// A [`FrameCoalescer`] bound to the scheduler its notifications feed.
#[derive(Debug)]
pub struct BoundCoalescer<'a, S> {
    coalescer: &'a mut FrameCoalescer,
    scheduler: &'a mut S,
}

impl<S> SurfaceEvents for BoundCoalescer<'_, S>
where
    S: IdleScheduler<RedrawTask>,
{
    fn on_dirty(&mut self) {
        self.coalescer.on_dirty(&mut *self.scheduler);
    }

    fn on_ready(&mut self) {
        self.coalescer.on_ready(&mut *self.scheduler);
    }
}
