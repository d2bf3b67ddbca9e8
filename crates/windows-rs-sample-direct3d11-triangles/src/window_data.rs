use std::cell::Cell;

use crate::resize_state::ResizeState;

/// Messages the window procedure cares about, already decoded from Win32.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowMessage {
    EscapePressed,
    KeyPressed,
    SizeChanged,
    Destroyed,
}

/// What the window procedure should do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageOutcome {
    /// Destroy the window; WM_DESTROY follows.
    CloseWindow,
    /// Post WM_QUIT with this exit code.
    Quit(i32),
    Handled,
}

/// State shared between the window procedure and the main loop.
///
/// Both run on the window's thread; the procedure only runs inside message dispatch,
/// so a `Cell` is enough.
#[derive(Debug, Default)]
pub struct WindowData {
    resize: Cell<ResizeState>,
    destroyed: Cell<bool>,
    tearing_down: Cell<bool>,
}

impl WindowData {
    pub fn handle(&self, message: WindowMessage) -> MessageOutcome {
        match message {
            WindowMessage::EscapePressed => MessageOutcome::CloseWindow,
            WindowMessage::KeyPressed => MessageOutcome::Handled,
            WindowMessage::SizeChanged => {
                let mut resize = self.resize.get();
                resize.on_size_changed();
                self.resize.set(resize);
                MessageOutcome::Handled
            }
            WindowMessage::Destroyed => {
                self.destroyed.set(true);
                if self.tearing_down.get() {
                    MessageOutcome::Handled
                } else {
                    MessageOutcome::Quit(0)
                }
            }
        }
    }

    pub fn resize_state(&self) -> ResizeState {
        self.resize.get()
    }

    pub fn set_resize_state(&self, state: ResizeState) {
        self.resize.set(state);
    }

    /// The owner is destroying the window itself, e.g. after a failed startup.
    /// The resulting WM_DESTROY must not post WM_QUIT, or a following modal dialog
    /// would close as soon as it opens.
    pub fn begin_teardown(&self) {
        self.tearing_down.set(true);
    }

    /// True once WM_DESTROY has been seen; the handle must not be destroyed again.
    pub fn is_destroyed(&self) -> bool {
        self.destroyed.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_closes_and_destroy_quits_cleanly() {
        let data = WindowData::default();
        assert_eq!(data.handle(WindowMessage::EscapePressed), MessageOutcome::CloseWindow);
        assert!(!data.is_destroyed());
        assert_eq!(data.handle(WindowMessage::Destroyed), MessageOutcome::Quit(0));
        assert!(data.is_destroyed());
    }

    #[test]
    fn teardown_destroy_does_not_quit() {
        let data = WindowData::default();
        data.begin_teardown();
        assert_eq!(data.handle(WindowMessage::Destroyed), MessageOutcome::Handled);
        assert!(data.is_destroyed());
    }

    #[test]
    fn other_keys_are_ignored() {
        let data = WindowData::default();
        assert_eq!(data.handle(WindowMessage::KeyPressed), MessageOutcome::Handled);
        assert_eq!(data.resize_state(), ResizeState::Stable);
    }

    #[test]
    fn size_messages_mark_resize_pending() {
        let data = WindowData::default();
        data.handle(WindowMessage::SizeChanged);
        data.handle(WindowMessage::SizeChanged);
        assert_eq!(data.resize_state(), ResizeState::ResizePending);
        data.set_resize_state(ResizeState::Stable);
        assert_eq!(data.resize_state(), ResizeState::Stable);
    }
}
