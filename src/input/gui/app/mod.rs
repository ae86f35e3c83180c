pub mod control_plane_view;
pub mod gui_app;
pub mod panel_state;
pub mod ports;
