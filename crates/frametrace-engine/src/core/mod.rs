//! Core sample-facing contracts.
//!
//! Defines the interface between the shell and the hosted sample. Nothing in
//! here depends on the window system.

mod app;
mod ctx;

pub use app::{AppControl, Sample};
pub use ctx::FrameCtx;
