//! Renderable content of an image window.
//!
//! A [`DisplaySurface`] is either a static raster or an animated frame
//! sequence. Its bounding box is always `reference_size * scale`, where the
//! reference size is fixed when the surface is created, so rescaling never
//! compounds.

mod animation;

pub use animation::{AnimatedImage, AnimationFrame, DEFAULT_FRAME_DELAY};

use bevy_egui::egui;
use std::time::Duration;

use crate::error::SurfaceError;
use crate::imaging::calculate_fit_scale;

/// Decoded image data, before it is bound to a window size.
#[derive(Clone)]
pub enum SurfaceContent {
    Static(egui::ColorImage),
    Animated(AnimatedImage),
}

#[derive(Clone)]
pub struct DisplaySurface {
    content: SurfaceContent,
    reference_size: egui::Vec2,
    scale: f32,
}

/// Check that a scale factor is usable
pub fn validate_scale(factor: f32) -> Result<f32, SurfaceError> {
    if factor.is_finite() && factor > 0.0 {
        Ok(factor)
    } else {
        Err(SurfaceError::InvalidScale { factor })
    }
}

/// Largest size with `content`'s aspect ratio that fits inside `bounds`.
pub fn fit_within(content: egui::Vec2, bounds: egui::Vec2) -> egui::Vec2 {
    if content.x <= 0.0 || content.y <= 0.0 {
        return egui::Vec2::ZERO;
    }
    let scale = calculate_fit_scale(content, bounds);
    content * scale
}

impl DisplaySurface {
    /// Bind decoded content to a reference size.
    pub fn new(
        content: SurfaceContent,
        reference_size: egui::Vec2,
        scale: f32,
    ) -> Result<Self, SurfaceError> {
        let scale = validate_scale(scale)?;
        Ok(Self {
            content,
            reference_size,
            scale,
        })
    }

    pub fn is_animated(&self) -> bool {
        matches!(self.content, SurfaceContent::Animated(_))
    }

    pub fn reference_size(&self) -> egui::Vec2 {
        self.reference_size
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Bounding box of the surface: reference size times the current scale
    pub fn bounds(&self) -> egui::Vec2 {
        self.reference_size * self.scale
    }

    /// Size the content is drawn at. Static images keep their aspect ratio
    /// inside the bounds; animations are stretched to fill them.
    pub fn content_size(&self) -> egui::Vec2 {
        match &self.content {
            SurfaceContent::Static(image) => {
                let [w, h] = image.size;
                fit_within(egui::vec2(w as f32, h as f32), self.bounds())
            }
            SurfaceContent::Animated(_) => self.bounds(),
        }
    }

    /// Recompute the bounds from the reference size. Invalid factors leave the
    /// surface untouched.
    pub fn rescale(&mut self, factor: f32) -> Result<(), SurfaceError> {
        self.scale = validate_scale(factor)?;
        Ok(())
    }

    /// Restart an animation from its first frame. Returns false for static
    /// images, which are left alone.
    pub fn restart(&mut self) -> bool {
        match &mut self.content {
            SurfaceContent::Animated(anim) => {
                anim.restart();
                true
            }
            SurfaceContent::Static(_) => false,
        }
    }

    /// Advance animation playback. Returns true if the frame changed.
    pub fn advance(&mut self, delta: Duration) -> bool {
        match &mut self.content {
            SurfaceContent::Animated(anim) => anim.advance(delta),
            SurfaceContent::Static(_) => false,
        }
    }

    pub fn frame_index(&self) -> usize {
        match &self.content {
            SurfaceContent::Animated(anim) => anim.current_frame(),
            SurfaceContent::Static(_) => 0,
        }
    }

    pub fn frame_count(&self) -> usize {
        match &self.content {
            SurfaceContent::Animated(anim) => anim.frame_count(),
            SurfaceContent::Static(_) => 1,
        }
    }

    pub fn current_image(&self) -> &egui::ColorImage {
        match &self.content {
            SurfaceContent::Animated(anim) => anim.current_image(),
            SurfaceContent::Static(image) => image,
        }
    }
}
