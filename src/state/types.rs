use bevy_egui::egui;

/// Default sync tick interval. Fast enough to feel immediate, slow enough not to spin.
pub const DEFAULT_TICK_INTERVAL_MS: u64 = 16;

pub const DEFAULT_SCALE: f32 = 1.0;

/// Range offered by the scale sliders
pub const SCALE_RANGE: std::ops::RangeInclusive<f32> = 0.1..=4.0;

pub const IMAGE_WINDOW_TITLE: &str = "Image Window";

/// Used when no monitor information is available yet
pub const FALLBACK_SCREEN_SIZE: egui::Vec2 = egui::vec2(1920.0, 1080.0);

/// Default tracing filter: keep our logs, quiet the render backend
pub const DEFAULT_LOG_FILTER: &str = "info,wgpu=error,naga=warn";

/// Settings for newly opened windows, merged from config and command line
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchSettings {
    pub scale: f32,
    pub tick_interval: std::time::Duration,
    pub move_with_window: bool,
    pub keep_centered: bool,
}
