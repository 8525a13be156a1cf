use std::marker::PhantomData;

use winit::{dpi::PhysicalSize, event_loop::EventLoopBuilder, window::{Window, WindowBuilder}};

use crate::config::{ViewerConfig, WINDOW_TITLE};
use crate::core::data::rgba_image::RgbaImage;
use crate::errors::ViewerError;
use crate::input::gui::{
    app::{gui_app::GuiApp, overlay::FilterLabelOverlay, ports::presenter::GuiPresenterPort},
    commands::ports::presenter_factory::GuiPresenterFactoryPort,
    events::GuiEvent,
};

pub struct RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    presenter_factory: F,
    _phantom: PhantomData<fn() -> P>,
}

impl<F, P> RunGuiCommand<F, P>
where
    P: GuiPresenterPort,
    F: GuiPresenterFactoryPort<P>,
{
    pub fn new(presenter_factory: F) -> Self {
        Self { presenter_factory, _phantom: PhantomData }
    }

    /// Opens the window, uploads `image` and runs until the window closes.
    pub fn execute(&self, config: ViewerConfig, image: RgbaImage) -> Result<(), ViewerError> {
        let event_loop = EventLoopBuilder::<GuiEvent>::with_user_event().build()?;
        let event_loop_proxy = event_loop.create_proxy();

        // Leak the window to get a 'static reference for pixels
        let window: &'static Window = Box::leak(Box::new(
            WindowBuilder::new()
                .with_title(WINDOW_TITLE)
                .with_inner_size(PhysicalSize::new(config.window_width, config.window_height))
                .build(&event_loop)?,
        ));

        tracing::info!(
            window_width = config.window_width,
            window_height = config.window_height,
            filter = %config.filter_mode,
            "window created"
        );

        let presenter: P = self
            .presenter_factory
            .build(window, event_loop_proxy.clone(), &config, &image)?;
        let overlay = FilterLabelOverlay::new(
            window,
            &event_loop,
            config.filter_mode,
            (image.width(), image.height()),
        );
        drop(image);

        // The new surface has no frame in flight, so it is ready immediately.
        if event_loop_proxy.send_event(GuiEvent::FrameReady).is_err() {
            tracing::warn!("event loop closed before the first frame");
        }

        GuiApp::new(window, presenter, overlay).run(event_loop)
    }
}
