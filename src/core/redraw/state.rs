use crate::core::scheduling::task::TaskHandle;

/// Redraw bookkeeping for one surface.
///
/// `pending` is only ever set while `dirty` and `ready` are both true, and is
/// cleared together with them when the redraw runs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RedrawState {
    /// Damage has been reported since the last completed draw.
    pub dirty: bool,
    /// The surface signalled it can accept a new frame.
    pub ready: bool,
    /// The queued redraw, if any.
    pub pending: Option<TaskHandle>,
}

impl RedrawState {
    #[must_use]
    pub fn wants_redraw(&self) -> bool {
        self.dirty && self.ready && self.pending.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle() {
        let state = RedrawState::default();

        assert!(!state.dirty);
        assert!(!state.ready);
        assert_eq!(state.pending, None);
        assert!(!state.wants_redraw());
    }

    #[test]
    fn wants_redraw_needs_both_flags() {
        let dirty_only = RedrawState { dirty: true, ..RedrawState::default() };
        let ready_only = RedrawState { ready: true, ..RedrawState::default() };
        let both = RedrawState { dirty: true, ready: true, pending: None };

        assert!(!dirty_only.wants_redraw());
        assert!(!ready_only.wants_redraw());
        assert!(both.wants_redraw());
    }
}
