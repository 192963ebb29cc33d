//! frametrace engine crate.
//!
//! Hosts a sample in a window, forwards input to it, and records how long
//! each update+render cycle takes.

pub mod config;
pub mod core;
pub mod event;
pub mod input;
pub mod recorder;
pub mod shell;
pub mod time;
pub mod window;

pub mod logging;

pub use crate::config::ShellConfig;
pub use crate::core::{AppControl, FrameCtx, Sample};
pub use crate::event::{EventHandler, ShellEvent};
pub use crate::recorder::{FrameRecorder, FrameSample, RecorderError};
pub use crate::shell::{KeyBindings, Shell, ShellCommand};
pub use crate::window::Runtime;
