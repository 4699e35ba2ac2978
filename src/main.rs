use bevy::log::LogPlugin;
use bevy::prelude::*;
use bevy::window::ExitCondition;
use bevy_egui::EguiPlugin;
use clap::Parser;

use image_window_sync::cli::Cli;
use image_window_sync::events::EventBus;
use image_window_sync::imaging::SurfaceTextures;
use image_window_sync::state::{AppConfig, AppState};
use image_window_sync::sync::PeerRegistry;
use image_window_sync::ui::{
    control_panel_system, open_startup_images, render_image_windows, setup, sync_windows,
    track_window_events, WindowLinks,
};

fn main() {
    let cli = Cli::parse();
    let config = AppConfig::load();
    let settings = cli.settings(&config);

    let bus = EventBus::new();
    let registry = PeerRegistry::new(bus.publisher(), settings.tick_interval);

    App::new()
        .add_plugins(
            DefaultPlugins
                .set(WindowPlugin {
                    primary_window: Some(Window {
                        title: "Image Window Sync".into(),
                        resolution: (440., 640.).into(),
                        resizable: true,
                        ..default()
                    }),
                    exit_condition: ExitCondition::OnPrimaryClosed,
                    // Image windows announce closing before they go away
                    close_when_requested: false,
                })
                .set(LogPlugin {
                    filter: cli.log_filter.clone(),
                    ..default()
                }),
        )
        .add_plugins(EguiPlugin)
        .insert_non_send_resource(bus)
        .insert_resource(registry)
        .insert_resource(AppState::new(config, settings, cli.images))
        .init_resource::<WindowLinks>()
        .init_resource::<SurfaceTextures>()
        .add_systems(Startup, (setup, open_startup_images))
        .add_systems(
            Update,
            (
                track_window_events,
                sync_windows,
                render_image_windows,
                control_panel_system,
            )
                .chain(),
        )
        .run();
}
