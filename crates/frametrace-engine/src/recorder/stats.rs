use super::sample::FrameSample;

/// Summary of a set of frame times, in milliseconds.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FrameStats {
    pub count: usize,
    pub mean_ms: f64,
    pub min_ms: f64,
    pub max_ms: f64,
}

impl FrameStats {
    /// Returns `None` for an empty slice.
    pub fn from_samples(samples: &[FrameSample]) -> Option<Self> {
        let first = samples.first()?;

        let mut sum = 0.0;
        let mut min_ms = first.frame_time_ms;
        let mut max_ms = first.frame_time_ms;
        for s in samples {
            sum += s.frame_time_ms;
            min_ms = min_ms.min(s.frame_time_ms);
            max_ms = max_ms.max(s.frame_time_ms);
        }

        Some(Self {
            count: samples.len(),
            mean_ms: sum / samples.len() as f64,
            min_ms,
            max_ms,
        })
    }

    /// Frames per second implied by the mean frame time.
    pub fn mean_fps(&self) -> f64 {
        if self.mean_ms > 0.0 { 1000.0 / self.mean_ms } else { 0.0 }
    }
}
