//! GUI input adapter for interactive Julia set exploration.
//!
//! winit owns the window and event loop, pixels holds the framebuffer, and
//! egui draws the control panel on top.

pub mod app;
pub mod commands;
