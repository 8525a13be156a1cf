use crate::core::ports::surface_events::SurfaceEvents;

/// Draws and presents one frame when the coalescer decides it is time.
///
/// `events` is live while the draw runs: damage or readiness reported through
/// it is recorded for the next cycle.
pub trait RedrawCallback {
    fn redraw(&mut self, events: &mut dyn SurfaceEvents);
}

impl<F> RedrawCallback for F
where
    F: FnMut(&mut dyn SurfaceEvents),
{
    fn redraw(&mut self, events: &mut dyn SurfaceEvents) {
        self(events)
    }
}
