//! Bevy + egui shell around the image windows.
//!
//! The primary window hosts the control panel; every image window is its own
//! OS window with an egui context that paints the surface.

mod control_panel;
mod image_view;
mod placement;
mod widgets;
mod windows;

pub use control_panel::control_panel_system;
pub use image_view::render_image_windows;
pub use placement::{initial_placement, ScreenInfo};
pub use widgets::{display_name, format_scale, format_size};
pub use windows::{
    open_image_window, open_startup_images, setup, sync_windows, track_window_events, WindowLinks,
};
