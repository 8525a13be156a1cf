use egui::Context;
use egui_winit::State as EguiWinitState;
use winit::{event::WindowEvent, event_loop::EventLoop, window::Window};

use crate::core::filtering::FilterMode;
use crate::input::gui::events::GuiEvent;

/// Text shown in the corner of the window.
#[must_use]
pub fn filter_label(filter_mode: FilterMode, image_width: u32, image_height: u32) -> String {
    format!(
        "{}: {}  ({}x{})",
        filter_mode.index(),
        filter_mode.display_name(),
        image_width,
        image_height
    )
}

/// True if egui asked to be drawn again straight away.
#[must_use]
pub fn wants_immediate_repaint(output: &egui::FullOutput) -> bool {
    output
        .viewport_output
        .values()
        .any(|viewport| viewport.repaint_delay.is_zero())
}

/// egui state for the filter-name label drawn over the image.
pub struct FilterLabelOverlay {
    egui_ctx: Context,
    egui_state: EguiWinitState,
    label: String,
}

impl FilterLabelOverlay {
    pub fn new(
        window: &Window,
        event_loop: &EventLoop<GuiEvent>,
        filter_mode: FilterMode,
        image_size: (u32, u32),
    ) -> Self {
        let egui_ctx = Context::default();
        let egui_state = EguiWinitState::new(
            egui_ctx.clone(),
            egui_ctx.viewport_id(),
            event_loop,
            Some(window.scale_factor() as f32),
            None, // max_texture_side, use default
        );

        Self {
            egui_ctx,
            egui_state,
            label: filter_label(filter_mode, image_size.0, image_size.1),
        }
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.egui_ctx
    }

    /// Forwards a window event to egui. Returns true if egui wants a repaint.
    pub fn on_window_event(&mut self, window: &Window, event: &WindowEvent) -> bool {
        self.egui_state.on_window_event(window, event).repaint
    }

    /// Runs one egui frame and applies its platform output.
    pub fn run(&mut self, window: &Window) -> egui::FullOutput {
        let raw_input = self.egui_state.take_egui_input(window);
        let label = &self.label;

        let mut output = self.egui_ctx.run(raw_input, |ctx| {
            egui::Window::new("Filter")
                .title_bar(false)
                .resizable(false)
                .anchor(egui::Align2::LEFT_TOP, [8.0, 8.0])
                .show(ctx, |ui| {
                    ui.label(label.as_str());
                });
        });

        let platform_output = std::mem::take(&mut output.platform_output);
        self.egui_state.handle_platform_output(window, platform_output);

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_names_filter_and_image_size() {
        let label = filter_label(FilterMode::LinearMipmapLinear, 640, 480);

        assert_eq!(label, "5: LINEAR_MIPMAP_LINEAR  (640x480)");
    }

    #[test]
    fn default_output_does_not_request_repaint() {
        assert!(!wants_immediate_repaint(&egui::FullOutput::default()));
    }
}
