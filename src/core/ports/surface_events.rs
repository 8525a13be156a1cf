/// Notifications a presentation surface raises about itself.
pub trait SurfaceEvents {
    /// Displayed content is stale. Region information is not carried: any
    /// damage means a full redraw.
    fn on_dirty(&mut self);

    /// The surface can accept another frame.
    fn on_ready(&mut self);
}
