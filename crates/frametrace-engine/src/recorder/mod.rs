//! Frame timing recorder.
//!
//! Captures per-frame durations on demand, keeps them in memory, and writes
//! them to a CSV file when asked. The recorder is an owned value; the shell
//! holds it and passes it nowhere else.

mod csv;
mod error;
mod frame_recorder;
mod sample;
mod stats;

pub use csv::{load, read_csv, write_csv, HEADER};
pub use error::RecorderError;
pub use frame_recorder::FrameRecorder;
pub use sample::FrameSample;
pub use stats::FrameStats;
