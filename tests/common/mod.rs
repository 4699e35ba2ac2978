//! Fixture helpers shared by the integration tests.
#![allow(dead_code)]

use image::codecs::gif::GifEncoder;
use image::{Delay, Frame, Rgba, RgbaImage};
use std::fs::File;
use std::path::{Path, PathBuf};
use std::time::Duration;

use image_window_sync::events::EventBus;
use image_window_sync::sync::{PeerRegistry, WindowGeometry};

use bevy_egui::egui::{pos2, vec2};

pub const TICK: Duration = Duration::from_millis(16);

/// Write a solid PNG of the given pixel size
pub fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    RgbaImage::from_pixel(width, height, Rgba([200, 40, 40, 255]))
        .save(&path)
        .unwrap();
    path
}

/// Write an animated GIF with one frame per delay
pub fn write_gif(dir: &Path, name: &str, width: u32, height: u32, delays_ms: &[u32]) -> PathBuf {
    let path = dir.join(name);
    let file = File::create(&path).unwrap();
    {
        let mut encoder = GifEncoder::new(file);
        let frames = delays_ms.iter().enumerate().map(|(i, &ms)| {
            let shade = (i * 60 % 256) as u8;
            Frame::from_parts(
                RgbaImage::from_pixel(width, height, Rgba([shade, 0, 255 - shade, 255])),
                0,
                0,
                Delay::from_numer_denom_ms(ms, 1),
            )
        });
        encoder.encode_frames(frames).unwrap();
    }
    path
}

pub fn registry(bus: &EventBus) -> PeerRegistry {
    PeerRegistry::new(bus.publisher(), TICK)
}

/// 400x300 client area at (x, y)
pub fn geometry(x: f32, y: f32) -> WindowGeometry {
    WindowGeometry::new(pos2(x, y), vec2(400.0, 300.0))
}
