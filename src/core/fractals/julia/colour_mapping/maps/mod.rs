pub mod hsv_escape;
