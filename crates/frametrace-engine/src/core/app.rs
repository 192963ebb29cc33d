use anyhow::Result;

use crate::input::{ButtonEvent, KeyEvent, MouseMoveEvent};

use super::ctx::FrameCtx;

/// Control directive returned by sample callbacks.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum AppControl {
    Continue,
    Exit,
}

/// Contract implemented by the hosted sample.
///
/// The shell calls `on_init` once before the window is shown, then
/// `on_update` + `on_render` once per frame, and `on_destroy` once at
/// shutdown. Input callbacks default to no-ops.
pub trait Sample {
    fn title(&self) -> &str {
        "frametrace"
    }

    /// Client-area width in logical pixels.
    fn width(&self) -> u32 {
        1280
    }

    /// Client-area height in logical pixels.
    fn height(&self) -> u32 {
        720
    }

    fn on_init(&mut self) -> Result<()> {
        Ok(())
    }

    fn on_update(&mut self, ctx: &FrameCtx<'_>) -> AppControl;

    fn on_render(&mut self, ctx: &FrameCtx<'_>) -> AppControl;

    fn on_destroy(&mut self) {}

    fn on_key_down(&mut self, event: &KeyEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    fn on_key_up(&mut self, event: &KeyEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    fn on_mouse_move(&mut self, event: &MouseMoveEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }

    fn on_button_down(&mut self, event: &ButtonEvent) -> AppControl {
        let _ = event;
        AppControl::Continue
    }
}
