use crate::core::ports::redraw_callback::RedrawCallback;
use crate::core::redraw::coalescer::{FrameCoalescer, RedrawTask};
use crate::core::scheduling::idle_queue::IdleQueue;

/// Runs every redraw queued on `idle`.
///
/// Returns true when the renderer queued another redraw while drawing. The
/// host must wake itself for it, since no surface event will arrive to do so.
pub fn run_idle_pass<R>(
    coalescer: &mut FrameCoalescer,
    idle: &mut IdleQueue<RedrawTask>,
    renderer: &mut R,
) -> bool
where
    R: RedrawCallback + ?Sized,
{
    let ran = idle.dispatch(|idle, _, _| coalescer.run_redraw(idle, &mut *renderer));
    let requeued = !idle.is_empty();

    if ran > 0 {
        tracing::trace!(ran, requeued, "idle pass finished");
    }

    requeued
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::ports::surface_events::SurfaceEvents;

    /// Loses the surface on its first draw, reporting damage and readiness
    /// from inside the draw like a reconfigured surface does.
    struct LosesFirstFrame {
        frames: usize,
    }

    impl RedrawCallback for LosesFirstFrame {
        fn redraw(&mut self, events: &mut dyn SurfaceEvents) {
            self.frames += 1;
            if self.frames == 1 {
                events.on_dirty();
                events.on_ready();
            }
        }
    }

    fn primed() -> (FrameCoalescer, IdleQueue<RedrawTask>) {
        let mut coalescer = FrameCoalescer::new();
        let mut idle = IdleQueue::new();
        coalescer.on_ready(&mut idle);
        coalescer.on_dirty(&mut idle);
        (coalescer, idle)
    }

    #[test]
    fn quiet_frame_leaves_nothing_to_wake_for() {
        let (mut coalescer, mut idle) = primed();
        let mut frames = 0;
        let mut renderer = |_: &mut dyn SurfaceEvents| frames += 1;

        let wake = run_idle_pass(&mut coalescer, &mut idle, &mut renderer);

        assert!(!wake);
        assert_eq!(frames, 1);
        assert!(idle.is_empty());
    }

    #[test]
    fn retry_raised_during_draw_asks_the_host_to_wake() {
        let (mut coalescer, mut idle) = primed();
        let mut renderer = LosesFirstFrame { frames: 0 };

        assert!(run_idle_pass(&mut coalescer, &mut idle, &mut renderer));
        assert_eq!(renderer.frames, 1);
        assert_eq!(idle.len(), 1);

        assert!(!run_idle_pass(&mut coalescer, &mut idle, &mut renderer));
        assert_eq!(renderer.frames, 2);
        assert!(idle.is_empty());
    }

    #[test]
    fn empty_queue_is_a_no_op() {
        let mut coalescer = FrameCoalescer::new();
        let mut idle = IdleQueue::new();
        let mut renderer = LosesFirstFrame { frames: 0 };

        assert!(!run_idle_pass(&mut coalescer, &mut idle, &mut renderer));
        assert_eq!(renderer.frames, 0);
    }
}
