use bevy_egui::egui;
use image::codecs::gif::GifDecoder;
use image::{AnimationDecoder, DynamicImage};
use std::fs::{self, File};
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use crate::error::SurfaceError;
use crate::surface::{AnimatedImage, AnimationFrame, SurfaceContent};

/// Largest texture edge we upload; bigger images are downscaled to fit
pub const MAX_TEXTURE_SIZE: u32 = 2048;

/// Animated surfaces are chosen by extension, like the viewer always has.
pub fn is_animated_path(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("gif"))
}

/// Decode an image file into surface content.
pub fn decode_surface(path: &Path) -> Result<SurfaceContent, SurfaceError> {
    if is_animated_path(path) {
        decode_animation(path)
    } else {
        decode_static(path)
    }
}

fn decode_static(path: &Path) -> Result<SurfaceContent, SurfaceError> {
    let bytes = fs::read(path).map_err(|source| SurfaceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let img = image::load_from_memory(&bytes).map_err(|source| SurfaceError::Decode {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(SurfaceContent::Static(to_color_image(clamp_texture_size(img))))
}

fn decode_animation(path: &Path) -> Result<SurfaceContent, SurfaceError> {
    let file = File::open(path).map_err(|source| SurfaceError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let decode_err = |source| SurfaceError::Decode {
        path: path.to_path_buf(),
        source,
    };

    let decoder = GifDecoder::new(BufReader::new(file)).map_err(decode_err)?;
    let frames = decoder
        .into_frames()
        .collect_frames()
        .map_err(decode_err)?
        .into_iter()
        .map(|frame| {
            let (numer, denom) = frame.delay().numer_denom_ms();
            let delay = Duration::from_micros(u64::from(numer) * 1000 / u64::from(denom.max(1)));
            let img = DynamicImage::ImageRgba8(frame.into_buffer());
            AnimationFrame::new(to_color_image(clamp_texture_size(img)), delay)
        })
        .collect();

    AnimatedImage::new(frames)
        .map(SurfaceContent::Animated)
        .ok_or_else(|| SurfaceError::EmptyAnimation {
            path: path.to_path_buf(),
        })
}

/// Downscale images larger than [`MAX_TEXTURE_SIZE`], keeping the aspect ratio
pub fn clamp_texture_size(img: DynamicImage) -> DynamicImage {
    let (width, height) = (img.width(), img.height());
    if width > MAX_TEXTURE_SIZE || height > MAX_TEXTURE_SIZE {
        let scale = (MAX_TEXTURE_SIZE as f32 / width as f32)
            .min(MAX_TEXTURE_SIZE as f32 / height as f32);
        let new_width = ((width as f32 * scale) as u32).max(1);
        let new_height = ((height as f32 * scale) as u32).max(1);
        img.resize(new_width, new_height, image::imageops::FilterType::Triangle)
    } else {
        img
    }
}

fn to_color_image(img: DynamicImage) -> egui::ColorImage {
    let rgba = img.to_rgba8();
    let size = [rgba.width() as usize, rgba.height() as usize];
    let pixels = rgba.into_raw();
    egui::ColorImage::from_rgba_unmultiplied(size, &pixels)
}
