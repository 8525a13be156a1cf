//! Dirty-driven redraw coalescing.
//!
//! Damage and ready notifications from the surface feed a [`FrameCoalescer`],
//! which queues at most one [`RedrawTask`] on the idle scheduler at a time.

pub mod coalescer;
pub mod idle_pass;
pub mod state;

pub use coalescer::{BoundCoalescer, FrameCoalescer, RedrawTask};
pub use idle_pass::run_idle_pass;
pub use state::RedrawState;
