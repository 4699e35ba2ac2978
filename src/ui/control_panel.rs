use bevy::prelude::*;
use bevy::window::{Monitor, PrimaryMonitor};
use bevy_egui::{egui, EguiContexts};
use std::path::{Path, PathBuf};

use super::placement::ScreenInfo;
use super::widgets::{display_name, format_scale, format_size};
use super::windows::{open_image_window, WindowLinks};
use crate::file::{has_native_dialogs, pick_image_file};
use crate::state::{AppState, SCALE_RANGE};
use crate::sync::{ImageWindow, PeerRegistry};

/// Control panel in the primary window: open images and drive every image window
pub fn control_panel_system(
    mut contexts: EguiContexts,
    mut state: ResMut<AppState>,
    mut registry: ResMut<PeerRegistry>,
    mut links: ResMut<WindowLinks>,
    monitors: Query<&Monitor, With<PrimaryMonitor>>,
    mut commands: Commands,
) {
    let ctx = contexts.ctx_mut();
    let mut to_open: Option<PathBuf> = None;

    egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
        let status = state.status().unwrap_or("Ready");
        ui.label(egui::RichText::new(status).small());
    });

    egui::CentralPanel::default().show(ctx, |ui| {
        ui.heading("Image Windows");
        ui.separator();

        ui.horizontal(|ui| {
            ui.label("Image:");
            let response = ui.text_edit_singleline(&mut state.open_path_input);
            let submitted =
                response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
            let path = state.open_path_input.trim();
            if (ui.button("Open").clicked() || submitted) && !path.is_empty() {
                to_open = Some(PathBuf::from(path));
            }
            if has_native_dialogs() && ui.button("Browse...").clicked() {
                to_open = pick_image_file();
            }
        });

        if !state.config.recent_images.is_empty() {
            ui.collapsing("Recent", |ui| {
                for path in &state.config.recent_images {
                    if ui
                        .small_button(display_name(Path::new(path)))
                        .on_hover_text(path)
                        .clicked()
                    {
                        to_open = Some(PathBuf::from(path));
                    }
                }
            });
        }

        ui.separator();
        ui.label(egui::RichText::new("All windows").strong());
        ui.horizontal(|ui| {
            if ui
                .checkbox(&mut state.settings.move_with_window, "Move with window")
                .changed()
            {
                let enabled = state.settings.move_with_window;
                registry
                    .iter_mut()
                    .for_each(|w| w.set_move_with_window(enabled));
            }
            if ui
                .checkbox(&mut state.settings.keep_centered, "Keep centered")
                .changed()
            {
                let enabled = state.settings.keep_centered;
                registry.iter_mut().for_each(|w| w.set_keep_centered(enabled));
            }
        });
        ui.horizontal(|ui| {
            ui.label("Scale:");
            if ui
                .add(egui::Slider::new(&mut state.scale_all, SCALE_RANGE).logarithmic(true))
                .changed()
            {
                let scale = state.scale_all;
                state.settings.scale = scale;
                registry.iter_mut().for_each(|w| w.rescale(scale));
            }
            if ui.button("Restart animations").clicked() {
                registry.iter_mut().for_each(ImageWindow::restart);
            }
        });

        ui.separator();
        egui::ScrollArea::vertical().show(ui, |ui| {
            if registry.is_empty() {
                ui.label("No image windows open");
            }
            for window in registry.iter_mut().filter(|w| !w.is_closed()) {
                window_controls(ui, window);
            }
        });
    });

    let Some(path) = to_open else {
        return;
    };
    let screen = ScreenInfo::from_monitor(monitors.get_single().ok());
    let settings = state.settings.clone();
    let (id, loaded) = open_image_window(
        &mut commands,
        &mut registry,
        &mut links,
        screen,
        &settings,
        Some(&path),
    );
    let path_str = path.to_string_lossy().to_string();
    if loaded {
        state.remember_image(&path_str);
        state.open_path_input.clear();
        state.set_status(format!("Opened {} in window {}", display_name(&path), id));
    } else {
        state.forget_image(&path_str);
        state.set_status(format!("Could not load {}", path_str));
    }
}

fn window_controls(ui: &mut egui::Ui, window: &mut ImageWindow) {
    let id = window.id();
    let surface = window
        .surface()
        .map(|s| (s.scale(), s.is_animated(), s.frame_count(), s.bounds()));

    ui.push_id(id.0, |ui| {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(format!("Window {}", id)).strong());
                let name = window
                    .path()
                    .map(display_name)
                    .unwrap_or_else(|| "(no image)".to_string());
                ui.label(name);
            });

            let mut flags = window.sync_state();
            ui.horizontal(|ui| {
                if ui
                    .checkbox(&mut flags.move_with_window, "Move with window")
                    .changed()
                {
                    window.set_move_with_window(flags.move_with_window);
                }
                if ui.checkbox(&mut flags.keep_centered, "Keep centered").changed() {
                    window.set_keep_centered(flags.keep_centered);
                }
            });

            if let Some((mut scale, animated, frames, bounds)) = surface {
                ui.horizontal(|ui| {
                    ui.label("Scale:");
                    if ui
                        .add(
                            egui::Slider::new(&mut scale, SCALE_RANGE)
                                .logarithmic(true)
                                .custom_formatter(|v, _| format_scale(v as f32)),
                        )
                        .changed()
                    {
                        window.rescale(scale);
                    }
                    if ui
                        .add_enabled(animated, egui::Button::new("Restart"))
                        .clicked()
                    {
                        window.restart();
                    }
                });
                ui.label(
                    egui::RichText::new(format!("{} · {} frame(s)", format_size(bounds), frames))
                        .small(),
                );
            }

            if ui.button("Close window").clicked() {
                window.close();
            }
        });
    });
}
