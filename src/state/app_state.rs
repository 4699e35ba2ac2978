use bevy::prelude::*;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use super::config::AppConfig;
use super::types::LaunchSettings;

/// How long a status message stays visible in the control panel
const STATUS_TIMEOUT: Duration = Duration::from_secs(4);

#[derive(Resource)]
pub struct AppState {
    pub config: AppConfig,
    pub settings: LaunchSettings,

    // Images given on the command line, opened on startup
    pub startup_images: Vec<PathBuf>,

    // Control panel state
    pub open_path_input: String,
    pub scale_all: f32,
    pub status_message: Option<(String, Instant)>, // (message, when set)
}

impl AppState {
    pub fn new(config: AppConfig, settings: LaunchSettings, startup_images: Vec<PathBuf>) -> Self {
        Self {
            scale_all: settings.scale,
            config,
            settings,
            startup_images,
            open_path_input: String::new(),
            status_message: None,
        }
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some((message.into(), Instant::now()));
    }

    /// Current status message, if it has not expired
    pub fn status(&self) -> Option<&str> {
        self.status_message
            .as_ref()
            .filter(|(_, since)| since.elapsed() < STATUS_TIMEOUT)
            .map(|(msg, _)| msg.as_str())
    }

    /// Remember an opened image and persist the config
    pub fn remember_image(&mut self, path: &str) {
        self.config.add_recent(path);
        self.config.save();
    }

    pub fn forget_image(&mut self, path: &str) {
        self.config.remove_recent(path);
        self.config.save();
    }
}
