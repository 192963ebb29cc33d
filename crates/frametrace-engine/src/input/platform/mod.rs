//! Window-system adapters.

pub mod winit;
