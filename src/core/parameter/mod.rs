//! Ownership of the Julia parameter `c` and the ways a host changes it:
//! direct assignment, presets, the control-plane widget, and animation.

pub mod animation;
pub mod control_plane;
pub mod controller;
pub mod presets;

pub use animation::{ANIMATION_INTERVAL, ParameterAnimation};
pub use control_plane::ControlPlane;
pub use controller::ParameterController;
pub use presets::{JULIA_PRESETS, JuliaPreset, ParameterError, parse_parameter};
