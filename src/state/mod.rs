mod app_state;
mod config;
mod types;

pub use app_state::AppState;
pub use config::{AppConfig, MAX_RECENT_IMAGES};
pub use types::{
    LaunchSettings, DEFAULT_LOG_FILTER, DEFAULT_SCALE, DEFAULT_TICK_INTERVAL_MS,
    FALLBACK_SCREEN_SIZE, IMAGE_WINDOW_TITLE, SCALE_RANGE,
};
