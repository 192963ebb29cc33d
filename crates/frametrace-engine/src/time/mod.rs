//! Time subsystem.
//!
//! Frame timing without coupling to the runtime:
//! - `begin()` before the sample's update
//! - `end()` after its render, yielding the measured `FrameTime`

mod frame_timer;

pub use frame_timer::{FrameTick, FrameTime, FrameTimer};
