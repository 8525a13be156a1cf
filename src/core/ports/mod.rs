pub mod image_decoder;
pub mod redraw_callback;
pub mod surface_events;
