use bevy_egui::egui;
use std::path::Path;

/// Format a scale factor: integers show as "2x", fractional as "0.75x"
pub fn format_scale(scale: f32) -> String {
    if scale.fract() == 0.0 {
        format!("{}x", scale as i32)
    } else {
        format!("{:.2}x", scale)
    }
}

/// Short name for a path: the file name, or the whole path if it has none
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.to_string_lossy().into_owned())
}

pub fn format_size(size: egui::Vec2) -> String {
    format!("{}×{}", size.x.round() as i32, size.y.round() as i32)
}
