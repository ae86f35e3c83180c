//! Host-facing input handling: the windowing-independent pointer state
//! machine, and the winit/egui front end behind the `gui` feature.

#[cfg(feature = "gui")]
pub mod gui;
pub mod viewport_input;
