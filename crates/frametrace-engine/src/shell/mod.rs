//! Shell dispatcher.
//!
//! Sits between the platform adapter, the hosted sample and the frame
//! recorder. It has no window-system dependencies, so it can be driven
//! directly in tests.

mod bindings;
mod dispatcher;

pub use bindings::{KeyBindings, ShellCommand};
pub use dispatcher::Shell;
