use winit::{event_loop::EventLoopProxy, window::Window};

use crate::core::data::rgba_image::RgbaImage;
use crate::config::ViewerConfig;
use crate::errors::ViewerError;
use crate::input::gui::{app::ports::presenter::GuiPresenterPort, events::GuiEvent};

pub trait GuiPresenterFactoryPort<T: GuiPresenterPort> {
    fn build(
        &self,
        window: &'static Window,
        event_loop_proxy: EventLoopProxy<GuiEvent>,
        config: &ViewerConfig,
        image: &RgbaImage,
    ) -> Result<T, ViewerError>;
}
