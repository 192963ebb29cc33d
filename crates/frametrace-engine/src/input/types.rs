use std::fmt;

/// Keyboard key identifier.
///
/// Platform keys without a variant map to `Key::Unknown(code)`.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Key {
    Escape,
    Enter,
    Tab,
    Backspace,
    Space,

    Insert,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,

    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    Shift,
    Control,
    Alt,
    Meta,

    A, B, C, D, E, F, G, H, I, J, K, L, M,
    N, O, P, Q, R, S, T, U, V, W, X, Y, Z,

    Digit0, Digit1, Digit2, Digit3, Digit4,
    Digit5, Digit6, Digit7, Digit8, Digit9,

    F1, F2, F3, F4, F5, F6,
    F7, F8, F9, F10, F11, F12,

    Unknown(u32),
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum KeyState {
    Pressed,
    Released,
}

#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Back,
    Forward,
    Other(u16),
}

/// Modifier keys state.
///
/// Plain booleans rather than bitflags.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct Modifiers {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl Modifiers {
    pub fn any(&self) -> bool {
        self.shift || self.ctrl || self.alt || self.meta
    }
}

/// Mouse buttons held while the pointer moves.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct HeldButtons {
    pub left: bool,
    pub right: bool,
    pub middle: bool,
}

impl HeldButtons {
    pub fn any(&self) -> bool {
        self.left || self.right || self.middle
    }
}

/// Key press or release.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct KeyEvent {
    pub key: Key,
    /// Stable platform code when available.
    pub code: u32,
    pub modifiers: Modifiers,
    /// True for auto-repeat presses.
    pub repeat: bool,
}

impl KeyEvent {
    pub fn new(key: Key) -> Self {
        Self {
            key,
            code: 0,
            modifiers: Modifiers::default(),
            repeat: false,
        }
    }
}

/// Pointer position in logical pixels, plus held buttons.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct MouseMoveEvent {
    pub x: f32,
    pub y: f32,
    pub held: HeldButtons,
    pub modifiers: Modifiers,
}

/// Mouse button press at a position in logical pixels.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct ButtonEvent {
    pub button: MouseButton,
    pub x: f32,
    pub y: f32,
    pub modifiers: Modifiers,
}
