//! Window events the viewer reacts to.

/// An event emitted by the window.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WindowEvent {
    /// The user asked to close the window.
    Close,
}

impl WindowEvent {
    /// Whether this event asks the application to quit.
    #[inline]
    pub fn is_quit(&self) -> bool {
        matches!(self, WindowEvent::Close)
    }
}
