use bevy::prelude::*;
use bevy_egui::egui;
use std::collections::HashMap;

use crate::sync::WindowId;

/// Calculate scale factor to fit an image within the bounds while preserving aspect ratio
pub fn calculate_fit_scale(image_size: egui::Vec2, bounds: egui::Vec2) -> f32 {
    let scale_x = bounds.x / image_size.x;
    let scale_y = bounds.y / image_size.y;
    scale_x.min(scale_y)
}

struct WindowTextures {
    revision: u64,
    frames: Vec<Option<egui::TextureHandle>>,
}

/// Uploaded surface textures, one set per image window.
///
/// Frames are uploaded lazily the first time they are drawn. A new surface
/// revision (the window loaded another image) drops the old set.
#[derive(Resource, Default)]
pub struct SurfaceTextures {
    windows: HashMap<WindowId, WindowTextures>,
}

impl SurfaceTextures {
    /// Get the texture for a frame, uploading it on first use
    pub fn texture_for(
        &mut self,
        ctx: &egui::Context,
        window: WindowId,
        revision: u64,
        frame: usize,
        image: &egui::ColorImage,
    ) -> egui::TextureId {
        let entry = self
            .windows
            .entry(window)
            .or_insert_with(|| WindowTextures {
                revision,
                frames: Vec::new(),
            });
        if entry.revision != revision {
            entry.revision = revision;
            entry.frames.clear();
        }
        if entry.frames.len() <= frame {
            entry.frames.resize(frame + 1, None);
        }

        entry.frames[frame]
            .get_or_insert_with(|| {
                ctx.load_texture(
                    format!("surface-{}-{}-{}", window.0, revision, frame),
                    image.clone(),
                    egui::TextureOptions::LINEAR,
                )
            })
            .id()
    }

    /// Drop all textures of a closed window
    pub fn forget(&mut self, window: WindowId) {
        self.windows.remove(&window);
    }

    pub fn uploaded_count(&self, window: WindowId) -> usize {
        self.windows
            .get(&window)
            .map(|w| w.frames.iter().filter(|f| f.is_some()).count())
            .unwrap_or(0)
    }
}
