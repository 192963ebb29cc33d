//! Window + event loop.
//!
//! Owns the `winit` EventLoop and Window and feeds translated events to the
//! shell.

mod runtime;

pub use runtime::Runtime;
