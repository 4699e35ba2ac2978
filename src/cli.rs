use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

use crate::state::{AppConfig, LaunchSettings, DEFAULT_LOG_FILTER, DEFAULT_SCALE};
use crate::surface::validate_scale;

/// Open images in floating windows that stay aligned with each other.
#[derive(Debug, Parser)]
#[command(name = "image-window-sync", version, about)]
pub struct Cli {
    /// Images to open, one window each (GIFs are animated)
    pub images: Vec<PathBuf>,

    /// Initial scale factor relative to the window size
    #[arg(long)]
    pub scale: Option<f32>,

    /// Sync tick interval in milliseconds
    #[arg(long = "tick-ms", value_parser = clap::value_parser!(u64).range(1..))]
    pub tick_ms: Option<u64>,

    /// Broadcast the image position when a window is dragged
    #[arg(long, overrides_with = "no_move_with_window")]
    pub move_with_window: bool,

    /// Turn off move-with-window even if the config enables it
    #[arg(long, overrides_with = "move_with_window")]
    pub no_move_with_window: bool,

    /// Center the image in the focused window
    #[arg(long, overrides_with = "no_keep_centered")]
    pub keep_centered: bool,

    /// Turn off keep-centered even if the config enables it
    #[arg(long, overrides_with = "keep_centered")]
    pub no_keep_centered: bool,

    /// Tracing filter directives
    #[arg(long, default_value = DEFAULT_LOG_FILTER)]
    pub log_filter: String,
}

impl Cli {
    /// Merge command line flags over the stored config; values given on the
    /// command line win. Unusable scales fall back to the config, then to 1x.
    pub fn settings(&self, config: &AppConfig) -> LaunchSettings {
        let scale = self
            .scale
            .and_then(|s| validate_scale(s).ok())
            .or_else(|| validate_scale(config.default_scale).ok())
            .unwrap_or(DEFAULT_SCALE);
        LaunchSettings {
            scale,
            tick_interval: Duration::from_millis(self.tick_ms.unwrap_or(config.tick_interval_ms)),
            move_with_window: toggle(
                self.move_with_window,
                self.no_move_with_window,
                config.move_with_window,
            ),
            keep_centered: toggle(self.keep_centered, self.no_keep_centered, config.keep_centered),
        }
    }
}

fn toggle(on: bool, off: bool, stored: bool) -> bool {
    if off {
        false
    } else {
        on || stored
    }
}
