/// Custom user events for the GUI event loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuiEvent {
    /// The surface finished presenting and can accept another frame.
    ///
    /// Note: Receiving this event does NOT draw anything by itself. It only
    /// marks the surface ready; a redraw still needs outstanding damage.
    FrameReady,
}
