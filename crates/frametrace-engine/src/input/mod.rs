//! Input subsystem.
//!
//! Public types are platform-agnostic. `platform` holds the translation from
//! window-system events into `ShellEvent`s.

pub mod platform;

mod state;
mod types;

pub use state::InputState;
pub use types::{
    ButtonEvent,
    HeldButtons,
    Key,
    KeyEvent,
    KeyState,
    Modifiers,
    MouseButton,
    MouseMoveEvent,
};
