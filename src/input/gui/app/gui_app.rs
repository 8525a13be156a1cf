use winit::{
    event::{Event, WindowEvent},
    event_loop::{ControlFlow, EventLoop, EventLoopWindowTarget},
    window::Window,
};

use crate::core::ports::surface_events::SurfaceEvents;
use crate::core::redraw::{run_idle_pass, FrameCoalescer, RedrawTask};
use crate::core::scheduling::IdleQueue;
use crate::errors::ViewerError;
use crate::input::gui::app::overlay::{wants_immediate_repaint, FilterLabelOverlay};
use crate::input::gui::app::ports::presenter::GuiPresenterPort;
use crate::input::gui::events::GuiEvent;

/// Routes window notifications into the frame coalescer and runs queued
/// redraws once the event loop has drained its pending events.
pub struct GuiApp<T: GuiPresenterPort> {
    window: &'static Window,
    presenter: T,
    overlay: FilterLabelOverlay,
    coalescer: FrameCoalescer,
    idle: IdleQueue<RedrawTask>,
    fatal_error: Option<ViewerError>,
}

impl<T: GuiPresenterPort> GuiApp<T> {
    pub fn new(window: &'static Window, presenter: T, overlay: FilterLabelOverlay) -> Self {
        Self {
            window,
            presenter,
            overlay,
            coalescer: FrameCoalescer::new(),
            idle: IdleQueue::new(),
            fatal_error: None,
        }
    }

    /// Runs until the window closes or presenting fails.
    pub fn run(mut self, event_loop: EventLoop<GuiEvent>) -> Result<(), ViewerError> {
        event_loop.run(|event, elwt| {
            elwt.set_control_flow(ControlFlow::Wait);

            match event {
                // A freshly shown window has never been drawn.
                Event::Resumed => self.surface_damaged(),
                Event::WindowEvent { event, window_id } if window_id == self.window.id() => {
                    self.handle_window_event(&event, elwt);
                }
                Event::UserEvent(GuiEvent::FrameReady) => {
                    self.coalescer.on_ready(&mut self.idle);
                }
                Event::AboutToWait => {
                    // A redraw queued mid-draw has no event of its own to wake the loop.
                    if self.run_idle_tasks() {
                        self.window.request_redraw();
                    }

                    if self.fatal_error.is_some() {
                        elwt.exit();
                    }
                }
                _ => {}
            }
        })?;

        match self.fatal_error.take() {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    fn handle_window_event(&mut self, event: &WindowEvent, elwt: &EventLoopWindowTarget<GuiEvent>) {
        let egui_repaint = self.overlay.on_window_event(self.window, event);

        match event {
            WindowEvent::CloseRequested => elwt.exit(),
            WindowEvent::Resized(size) => {
                self.presenter.resize(size.width, size.height);
                self.surface_damaged();
            }
            WindowEvent::ScaleFactorChanged { .. } => {
                let size = self.window.inner_size();
                self.presenter.resize(size.width, size.height);
                self.surface_damaged();
            }
            WindowEvent::RedrawRequested | WindowEvent::Occluded(false) => self.surface_damaged(),
            _ if egui_repaint => self.surface_damaged(),
            _ => {}
        }
    }

    fn surface_damaged(&mut self) {
        self.coalescer.on_dirty(&mut self.idle);
    }

    /// Returns true if a redraw is still queued afterwards.
    fn run_idle_tasks(&mut self) -> bool {
        let window = self.window;
        let Self {
            presenter,
            overlay,
            coalescer,
            idle,
            fatal_error,
            ..
        } = self;

        let mut redraw = |events: &mut dyn SurfaceEvents| {
            let output = overlay.run(window);
            let egui_repaint = wants_immediate_repaint(&output);

            match presenter.render(output, overlay.context(), events) {
                Ok(()) if egui_repaint => events.on_dirty(),
                Ok(()) => {}
                Err(error) => {
                    tracing::error!(%error, "failed to present frame");
                    *fatal_error = Some(error);
                }
            }
        };

        run_idle_pass(coalescer, idle, &mut redraw)
    }
}
