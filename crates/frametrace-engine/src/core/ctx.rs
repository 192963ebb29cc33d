use crate::input::InputState;
use crate::time::FrameTick;

/// Per-frame context passed to `Sample::on_update` and `Sample::on_render`.
pub struct FrameCtx<'a> {
    pub tick: FrameTick,
    pub input: &'a InputState,
    /// Whether this frame's duration will be recorded.
    pub recording: bool,
}

impl<'a> FrameCtx<'a> {
    pub fn frame_number(&self) -> u64 {
        self.tick.frame_number
    }

    /// Seconds since the previous frame started.
    pub fn dt(&self) -> f32 {
        self.tick.dt
    }
}
