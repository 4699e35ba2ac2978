use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use super::types::{DEFAULT_SCALE, DEFAULT_TICK_INTERVAL_MS};

pub const MAX_RECENT_IMAGES: usize = 10;

pub fn default_tick_interval_ms() -> u64 {
    DEFAULT_TICK_INTERVAL_MS
}

pub fn default_scale() -> f32 {
    DEFAULT_SCALE
}

/// App configuration stored on disk
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub recent_images: Vec<String>,
    #[serde(default = "default_tick_interval_ms")]
    pub tick_interval_ms: u64,
    #[serde(default = "default_scale")]
    pub default_scale: f32,
    #[serde(default)]
    pub move_with_window: bool,
    #[serde(default)]
    pub keep_centered: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            recent_images: Vec::new(),
            tick_interval_ms: DEFAULT_TICK_INTERVAL_MS,
            default_scale: DEFAULT_SCALE,
            move_with_window: false,
            keep_centered: false,
        }
    }
}

impl AppConfig {
    pub fn config_path() -> Option<PathBuf> {
        #[cfg(target_os = "windows")]
        {
            std::env::var("APPDATA").ok().map(|appdata| {
                PathBuf::from(appdata)
                    .join("ImageWindowSync")
                    .join("config.json")
            })
        }
        #[cfg(not(target_os = "windows"))]
        {
            std::env::var("HOME").ok().map(|home| {
                PathBuf::from(home)
                    .join(".config")
                    .join("image-window-sync")
                    .join("config.json")
            })
        }
    }

    /// Load from the default location, falling back to defaults
    pub fn load() -> Self {
        Self::config_path()
            .map(|path| Self::load_from(&path))
            .unwrap_or_default()
    }

    pub fn load_from(path: &std::path::Path) -> Self {
        fs::read_to_string(path)
            .ok()
            .and_then(|json| serde_json::from_str(&json).ok())
            .unwrap_or_default()
    }

    pub fn save(&self) {
        if let Some(path) = Self::config_path() {
            self.save_to(&path);
        }
    }

    /// Best effort: a config that cannot be written is simply not persisted
    pub fn save_to(&self, path: &std::path::Path) {
        if let Some(parent) = path.parent() {
            let _ = fs::create_dir_all(parent);
        }
        if let Ok(json) = serde_json::to_string_pretty(self) {
            let _ = fs::write(path, json);
        }
    }

    /// Move `path` to the front of the recent list. Does not save.
    pub fn add_recent(&mut self, path: &str) {
        self.recent_images.retain(|p| p != path);
        self.recent_images.insert(0, path.to_string());
        self.recent_images.truncate(MAX_RECENT_IMAGES);
    }

    pub fn remove_recent(&mut self, path: &str) {
        self.recent_images.retain(|p| p != path);
    }
}
