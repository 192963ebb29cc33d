use std::fs;
use std::io::{self, Write};
use std::path::Path;

use super::error::RecorderError;
use super::sample::FrameSample;

/// First line of every frame log.
pub const HEADER: &str = "FrameID,FrameTime(ms)";

const DELIMITER: char = ',';

/// Writes the header and one `frame,time` row per sample.
///
/// Frame times use the shortest representation that parses back to the same
/// `f64`, so `12.5` is written as `12.5` and reading the file back is exact.
pub fn write_csv<W: Write>(out: &mut W, samples: &[FrameSample]) -> io::Result<()> {
    writeln!(out, "{HEADER}")?;
    for s in samples {
        writeln!(out, "{}{DELIMITER}{}", s.frame_number, s.frame_time_ms)?;
    }
    out.flush()
}

/// Parses the text of a frame log back into samples.
///
/// Blank lines are ignored. Line numbers in errors are 1-based.
pub fn read_csv(text: &str) -> Result<Vec<FrameSample>, RecorderError> {
    let mut lines = text.lines().enumerate();

    match lines.next() {
        Some((_, header)) if header.trim_end() == HEADER => {}
        Some((_, other)) => {
            return Err(RecorderError::parse(1, format!("unexpected header {other:?}")));
        }
        None => return Err(RecorderError::parse(1, "missing header")),
    }

    let mut samples = Vec::new();
    for (idx, raw) in lines {
        let line_no = idx + 1;
        let line = raw.trim_end();
        if line.is_empty() {
            continue;
        }

        let Some((frame, time)) = line.split_once(DELIMITER) else {
            return Err(RecorderError::parse(line_no, "expected two fields"));
        };
        if time.contains(DELIMITER) {
            return Err(RecorderError::parse(line_no, "too many fields"));
        }

        let frame_number = frame
            .trim()
            .parse::<u64>()
            .map_err(|e| RecorderError::parse(line_no, format!("bad frame id {frame:?}: {e}")))?;
        let frame_time_ms = time
            .trim()
            .parse::<f64>()
            .map_err(|e| RecorderError::parse(line_no, format!("bad frame time {time:?}: {e}")))?;

        samples.push(FrameSample::new(frame_number, frame_time_ms));
    }

    Ok(samples)
}

/// Reads a frame log from disk.
pub fn load(path: impl AsRef<Path>) -> Result<Vec<FrameSample>, RecorderError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| RecorderError::io(path, e))?;
    read_csv(&text)
}
