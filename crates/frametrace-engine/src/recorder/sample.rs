/// One recorded frame measurement.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameSample {
    /// Monotonic frame counter.
    pub frame_number: u64,

    /// Wall-clock time spent in update + render, in milliseconds.
    pub frame_time_ms: f64,
}

impl FrameSample {
    pub fn new(frame_number: u64, frame_time_ms: f64) -> Self {
        Self { frame_number, frame_time_ms }
    }
}
