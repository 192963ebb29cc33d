//! Shell events.
//!
//! The platform adapter turns window-system messages into these and hands them
//! to an [`EventHandler`].

use crate::core::AppControl;
use crate::input::{ButtonEvent, KeyEvent, MouseMoveEvent};

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ShellEvent {
    KeyDown(KeyEvent),
    KeyUp(KeyEvent),
    MouseMove(MouseMoveEvent),
    ButtonDown(ButtonEvent),
    /// The window wants a new frame.
    Paint,
    /// The window is going away. Sent once, right before the loop exits.
    Destroy,
}

/// Receiver for shell events.
pub trait EventHandler {
    fn handle(&mut self, event: ShellEvent) -> AppControl;
}
