use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};

use super::windows::WindowLinks;
use crate::imaging::SurfaceTextures;
use crate::sync::PeerRegistry;

const BACKGROUND: egui::Color32 = egui::Color32::from_rgb(40, 40, 50);
const FULL_UV: egui::Rect = egui::Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));

/// Draw each image window's surface at its synchronized position
pub fn render_image_windows(
    mut contexts: EguiContexts,
    registry: Res<PeerRegistry>,
    links: Res<WindowLinks>,
    mut textures: ResMut<SurfaceTextures>,
) {
    for (id, entity) in links.iter() {
        let Some(window) = registry.get(id) else {
            continue;
        };
        let Some(ctx) = contexts.try_ctx_for_entity_mut(entity) else {
            continue;
        };

        egui::CentralPanel::default()
            .frame(egui::Frame::none().fill(BACKGROUND))
            .show(ctx, |ui| {
                let (Some(surface), Some(rect)) = (window.surface(), window.surface_rect()) else {
                    ui.centered_and_justified(|ui| {
                        ui.label("No image loaded");
                    });
                    return;
                };

                let texture = textures.texture_for(
                    ui.ctx(),
                    id,
                    window.revision(),
                    surface.frame_index(),
                    surface.current_image(),
                );
                let rect = rect.translate(ui.max_rect().min.to_vec2());
                ui.painter().image(texture, rect, FULL_UV, egui::Color32::WHITE);
            });

        if window.surface().is_some_and(|s| s.is_animated()) {
            ctx.request_repaint();
        }
    }
}
