use winit::event_loop::EventLoopProxy;

use crate::input::gui::events::GuiEvent;

/// Posts "frame presented" back to the event loop so the ready notification
/// is handled after the current dispatch finishes.
#[derive(Debug, Clone)]
pub struct FrameReadyNotifier {
    event_loop_proxy: EventLoopProxy<GuiEvent>,
}

impl FrameReadyNotifier {
    pub fn new(event_loop_proxy: EventLoopProxy<GuiEvent>) -> Self {
        Self { event_loop_proxy }
    }

    pub fn notify_ready(&self) {
        if self.event_loop_proxy.send_event(GuiEvent::FrameReady).is_err() {
            tracing::trace!("event loop closed before frame ready was delivered");
        }
    }
}
