//! Default conversion factors (all in CSS pixels)

/// Root font size assumed when none is configured, matching the browser default.
pub const ROOT_FONT_SIZE: f64 = 16.0;
pub const VIEWPORT_WIDTH: f64 = 1920.0;
pub const VIEWPORT_HEIGHT: f64 = 1080.0;
