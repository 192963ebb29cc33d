use std::time::{Duration, Instant};

/// Snapshot taken when a frame starts.
#[derive(Debug, Copy, Clone)]
pub struct FrameTick {
    /// Number of the frame being started.
    pub frame_number: u64,

    /// Time since the previous frame started, in seconds. Clamped.
    pub dt: f32,

    /// Monotonic timestamp taken at the start of the frame.
    pub now: Instant,
}

/// Measured duration of one completed frame.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameTime {
    pub frame_number: u64,

    /// Time spent between `begin` and `end`.
    pub elapsed: Duration,
}

impl FrameTime {
    pub fn millis(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1000.0
    }
}

/// Measures update+render work per frame and numbers frames.
///
/// Frame numbers start at 0 and advance by one on every `end`. `dt` is clamped
/// so a debugger pause or a minimized window does not hand the sample a huge
/// step.
#[derive(Debug, Clone)]
pub struct FrameTimer {
    frame_number: u64,
    started: Option<Instant>,
    last_begin: Option<Instant>,
    dt_min: Duration,
    dt_max: Duration,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::with_clamps(Duration::from_micros(100), Duration::from_millis(250))
    }

    /// Creates a timer with custom delta-time clamps.
    pub fn with_clamps(dt_min: Duration, dt_max: Duration) -> Self {
        debug_assert!(dt_min <= dt_max);
        Self {
            frame_number: 0,
            started: None,
            last_begin: None,
            dt_min,
            dt_max,
        }
    }

    /// Number the next completed frame will get.
    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    pub fn begin(&mut self) -> FrameTick {
        self.begin_at(Instant::now())
    }

    pub fn end(&mut self) -> FrameTime {
        self.end_at(Instant::now())
    }

    /// Starts a frame at `now`.
    pub fn begin_at(&mut self, now: Instant) -> FrameTick {
        let dt = match self.last_begin {
            Some(last) => now.saturating_duration_since(last).clamp(self.dt_min, self.dt_max),
            None => self.dt_min,
        };

        self.started = Some(now);
        self.last_begin = Some(now);

        FrameTick {
            frame_number: self.frame_number,
            dt: dt.as_secs_f32(),
            now,
        }
    }

    /// Completes the current frame at `now` and advances the counter.
    ///
    /// Without a matching `begin` the elapsed time is zero.
    pub fn end_at(&mut self, now: Instant) -> FrameTime {
        let elapsed = match self.started.take() {
            Some(start) => now.saturating_duration_since(start),
            None => Duration::ZERO,
        };

        let ft = FrameTime {
            frame_number: self.frame_number,
            elapsed,
        };
        self.frame_number = self.frame_number.wrapping_add(1);
        ft
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
