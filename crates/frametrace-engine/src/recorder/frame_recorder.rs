use std::fs::File;
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use super::csv::write_csv;
use super::error::RecorderError;
use super::sample::FrameSample;
use super::stats::FrameStats;

/// In-memory frame time log.
///
/// Samples are only appended while recording is enabled. Flushing writes a
/// snapshot and leaves the buffer untouched; only `clear` empties it.
#[derive(Debug, Clone)]
pub struct FrameRecorder {
    recording: bool,
    samples: Vec<FrameSample>,
    output_path: PathBuf,
}

impl FrameRecorder {
    /// Creates an idle recorder that saves to `output_path`.
    pub fn new(output_path: impl Into<PathBuf>) -> Self {
        Self {
            recording: false,
            samples: Vec::new(),
            output_path: output_path.into(),
        }
    }

    pub fn is_recording(&self) -> bool {
        self.recording
    }

    pub fn set_recording(&mut self, recording: bool) {
        self.recording = recording;
    }

    /// Flips the recording flag and returns the new state.
    pub fn toggle_recording(&mut self) -> bool {
        self.recording = !self.recording;
        self.recording
    }

    /// Appends a sample if recording. Returns whether the sample was kept.
    pub fn record_frame(&mut self, frame_number: u64, frame_time_ms: f64) -> bool {
        if !self.recording {
            return false;
        }
        self.samples.push(FrameSample::new(frame_number, frame_time_ms));
        true
    }

    /// Writes all current samples to `path`, replacing any existing file.
    ///
    /// The parent directory must exist. Samples are kept on success and on
    /// failure.
    pub fn flush(&self, path: impl AsRef<Path>) -> Result<(), RecorderError> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|e| RecorderError::io(path, e))?;
        let mut out = BufWriter::new(file);
        write_csv(&mut out, &self.samples).map_err(|e| RecorderError::io(path, e))?;

        match self.stats() {
            Some(stats) => log::info!(
                "wrote {} frame samples to {} (mean {:.3} ms, min {:.3} ms, max {:.3} ms, {:.1} fps)",
                stats.count,
                path.display(),
                stats.mean_ms,
                stats.min_ms,
                stats.max_ms,
                stats.mean_fps(),
            ),
            None => log::info!("wrote empty frame log to {}", path.display()),
        }
        Ok(())
    }

    /// `flush` to the configured output path.
    pub fn flush_to_output(&self) -> Result<(), RecorderError> {
        self.flush(&self.output_path)
    }

    pub fn clear(&mut self) {
        self.samples.clear();
    }

    pub fn samples(&self) -> &[FrameSample] {
        &self.samples
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn stats(&self) -> Option<FrameStats> {
        FrameStats::from_samples(&self.samples)
    }
}
