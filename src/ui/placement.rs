use bevy::window::Monitor;
use bevy_egui::egui;
use rand::Rng;

use crate::state::FALLBACK_SCREEN_SIZE;

/// Size and DPI scale of the screen new windows are placed on
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenInfo {
    pub logical_size: egui::Vec2,
    pub scale_factor: f32,
}

impl Default for ScreenInfo {
    fn default() -> Self {
        Self {
            logical_size: FALLBACK_SCREEN_SIZE,
            scale_factor: 1.0,
        }
    }
}

impl ScreenInfo {
    pub fn from_monitor(monitor: Option<&Monitor>) -> Self {
        let Some(monitor) = monitor else {
            return Self::default();
        };
        let scale_factor = monitor.scale_factor as f32;
        if !(scale_factor.is_finite() && scale_factor > 0.0) {
            return Self::default();
        }
        Self {
            logical_size: egui::vec2(
                monitor.physical_width as f32 / scale_factor,
                monitor.physical_height as f32 / scale_factor,
            ),
            scale_factor,
        }
    }
}

/// Random initial window rectangle in logical screen coordinates.
///
/// The window is 2/5 of the screen wide and half as tall, its left edge
/// lands between a quarter and half of the screen width and its top edge in
/// the upper half.
pub fn initial_placement(screen: egui::Vec2, rng: &mut impl Rng) -> egui::Rect {
    let width = screen.x.max(0.0) as u32;
    let height = screen.y.max(0.0) as u32;

    let x = rng.gen_range(width / 4..=width / 2);
    let y = rng.gen_range(0..=height / 2);
    egui::Rect::from_min_size(
        egui::pos2(x as f32, y as f32),
        egui::vec2((width as f32 / 2.5).floor(), (height / 2) as f32),
    )
}
