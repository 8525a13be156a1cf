use egui::Context as EguiContext;

use crate::core::ports::surface_events::SurfaceEvents;
use crate::errors::ViewerError;

pub trait GuiPresenterPort {
    /// Clears, draws the image and overlay, and presents.
    ///
    /// Surface problems the presenter can recover from are reported through
    /// `events` instead of failing.
    fn render(
        &mut self,
        overlay: egui::FullOutput,
        egui_ctx: &EguiContext,
        events: &mut dyn SurfaceEvents,
    ) -> Result<(), ViewerError>;

    fn resize(&mut self, width: u32, height: u32);
}
