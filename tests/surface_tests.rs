//! Loading, scaling and playback of window surfaces.

mod common;

use bevy_egui::egui::{pos2, vec2};
use image_window_sync::events::EventBus;
use image_window_sync::imaging::decode_surface;
use image_window_sync::surface::{SurfaceContent, DEFAULT_FRAME_DELAY};
use image_window_sync::SurfaceError;
use proptest::prelude::*;
use std::fs;
use std::time::Duration;

use common::{geometry, registry, write_gif, write_png};

// === Loading ===

#[test]
fn png_loads_as_static_surface() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "still.png", 64, 32);

    let bus = EventBus::new();
    let mut reg = registry(&bus);
    let id = reg.spawn(geometry(0.0, 0.0));
    let window = reg.get_mut(id).unwrap();

    assert!(window.load_surface(&path, 1.0));
    let surface = window.surface().unwrap();
    assert!(!surface.is_animated());
    assert_eq!(surface.reference_size(), vec2(400.0, 300.0));
    // 64x32 fitted into 400x300
    assert_eq!(surface.content_size(), vec2(400.0, 200.0));
    assert_eq!(window.path(), Some(path.as_path()));
}

#[test]
fn gif_loads_as_animation_with_its_delays() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_gif(dir.path(), "spin.GIF", 8, 8, &[50, 50, 100]);

    let content = decode_surface(&path).unwrap();
    let SurfaceContent::Animated(mut anim) = content else {
        panic!("expected an animation");
    };
    assert_eq!(anim.frame_count(), 3);
    assert!(anim.is_playing());

    anim.advance(Duration::from_millis(49));
    assert_eq!(anim.current_frame(), 0);
    anim.advance(Duration::from_millis(1));
    assert_eq!(anim.current_frame(), 1);
    anim.advance(Duration::from_millis(50));
    assert_eq!(anim.current_frame(), 2);
    anim.advance(Duration::from_millis(99));
    assert_eq!(anim.current_frame(), 2);
    anim.advance(Duration::from_millis(1));
    assert_eq!(anim.current_frame(), 0);
}

#[test]
fn gif_frames_without_delay_play_at_default_rate() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_gif(dir.path(), "fast.gif", 8, 8, &[0, 0]);

    let SurfaceContent::Animated(mut anim) = decode_surface(&path).unwrap() else {
        panic!("expected an animation");
    };

    anim.advance(DEFAULT_FRAME_DELAY - Duration::from_millis(1));
    assert_eq!(anim.current_frame(), 0);
    anim.advance(Duration::from_millis(1));
    assert_eq!(anim.current_frame(), 1);
}

#[test]
fn animated_surface_is_stretched_to_bounds() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_gif(dir.path(), "spin.gif", 8, 4, &[50, 50]);

    let bus = EventBus::new();
    let mut reg = registry(&bus);
    let id = reg.spawn(geometry(0.0, 0.0));
    let window = reg.get_mut(id).unwrap();

    assert!(window.load_surface(&path, 0.5));
    let surface = window.surface().unwrap();
    assert!(surface.is_animated());
    assert_eq!(surface.content_size(), vec2(200.0, 150.0));
}

#[test]
fn failed_load_keeps_previous_surface() {
    let dir = tempfile::tempdir().unwrap();
    let good = write_png(dir.path(), "good.png", 10, 10);
    let corrupt = dir.path().join("corrupt.png");
    fs::write(&corrupt, b"not an image").unwrap();
    let missing = dir.path().join("missing.gif");

    let bus = EventBus::new();
    let mut reg = registry(&bus);
    let id = reg.spawn(geometry(0.0, 0.0));
    let window = reg.get_mut(id).unwrap();
    assert!(window.load_surface(&good, 1.0));
    let revision = window.revision();

    assert!(!window.load_surface(&corrupt, 1.0));
    assert!(!window.load_surface(&missing, 1.0));
    assert!(!window.load_surface(&good, 0.0));

    assert_eq!(window.revision(), revision);
    assert_eq!(window.path(), Some(good.as_path()));
    assert!(window.surface().is_some());
    assert!(bus.drain().is_empty());
}

#[test]
fn failed_first_load_leaves_window_empty_with_window_sized_reference() {
    let bus = EventBus::new();
    let mut reg = registry(&bus);
    let id = reg.spawn(geometry(0.0, 0.0));
    let window = reg.get_mut(id).unwrap();

    assert!(!window.load_surface("/no/such/image.png", 1.0));
    assert!(window.surface().is_none());
    assert_eq!(window.reference_size(), vec2(400.0, 300.0));
}

#[test]
fn decode_errors_are_typed() {
    let dir = tempfile::tempdir().unwrap();
    let corrupt = dir.path().join("corrupt.gif");
    fs::write(&corrupt, b"definitely not a gif").unwrap();

    assert!(matches!(
        decode_surface(&corrupt),
        Err(SurfaceError::Decode { .. })
    ));
    assert!(matches!(
        decode_surface(&dir.path().join("gone.png")),
        Err(SurfaceError::Read { .. })
    ));
}

#[test]
fn reload_keeps_surface_position() {
    let dir = tempfile::tempdir().unwrap();
    let first = write_png(dir.path(), "a.png", 10, 10);
    let second = write_png(dir.path(), "b.png", 20, 10);

    let bus = EventBus::new();
    let mut reg = registry(&bus);
    let id = reg.spawn(geometry(0.0, 0.0));
    let window = reg.get_mut(id).unwrap();
    window.load_surface(&first, 1.0);
    window.on_peer_surface_moved(pos2(30.0, 40.0), None);

    assert!(window.load_surface(&second, 1.0));
    assert_eq!(window.surface_pos(), pos2(30.0, 40.0));
}

// === Restart ===

#[test]
fn restart_resets_animation_to_first_frame() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_gif(dir.path(), "spin.gif", 4, 4, &[20, 20, 20]);

    let bus = EventBus::new();
    let mut reg = registry(&bus);
    let id = reg.spawn(geometry(0.0, 0.0));
    let window = reg.get_mut(id).unwrap();
    window.load_surface(&path, 1.0);

    window.update(Duration::from_millis(45), &[], None);
    assert_eq!(window.surface().unwrap().frame_index(), 2);

    window.restart();
    assert_eq!(window.surface().unwrap().frame_index(), 0);

    window.update(Duration::from_millis(25), &[], None);
    assert_eq!(window.surface().unwrap().frame_index(), 1);
}

#[test]
fn restart_on_static_surface_changes_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_png(dir.path(), "still.png", 10, 10);

    let bus = EventBus::new();
    let mut reg = registry(&bus);
    let id = reg.spawn(geometry(0.0, 0.0));
    let window = reg.get_mut(id).unwrap();
    window.load_surface(&path, 1.5);
    let pos = window.surface_pos();

    window.restart();

    let surface = window.surface().unwrap();
    assert_eq!(surface.frame_index(), 0);
    assert_eq!(surface.scale(), 1.5);
    assert_eq!(window.surface_pos(), pos);
}

// === Rescale ===

#[test]
fn rescale_uses_reference_size_after_window_resize() {
    let bus = EventBus::new();
    let mut reg = registry(&bus);
    let id = reg.spawn(geometry(0.0, 0.0));
    let window = reg.get_mut(id).unwrap();
    window.set_content(
        SurfaceContent::Static(bevy_egui::egui::ColorImage::new(
            [4, 3],
            bevy_egui::egui::Color32::BLACK,
        )),
        1.0,
    );

    window.on_window_resized(vec2(1000.0, 1000.0));
    window.rescale(2.0);

    assert_eq!(window.surface().unwrap().bounds(), vec2(800.0, 600.0));
}

proptest! {
    #[test]
    fn rescale_never_compounds(
        first in 0.05f32..8.0,
        history in proptest::collection::vec(0.05f32..8.0, 0..6),
        last in 0.05f32..8.0,
    ) {
        let bus = EventBus::new();
        let mut reg = registry(&bus);
        let id = reg.spawn(geometry(0.0, 0.0));
        let window = reg.get_mut(id).unwrap();
        window.set_content(
            SurfaceContent::Static(bevy_egui::egui::ColorImage::new(
                [16, 16],
                bevy_egui::egui::Color32::BLACK,
            )),
            first,
        );

        for factor in history {
            window.rescale(factor);
        }
        window.rescale(last);

        let bounds = window.surface().unwrap().bounds();
        prop_assert_eq!(bounds, vec2(400.0, 300.0) * last);
    }

    #[test]
    fn invalid_rescale_keeps_previous_bounds(
        scale in 0.05f32..8.0,
        bad in prop_oneof![Just(0.0f32), Just(f32::NAN), Just(f32::INFINITY), -100.0f32..0.0],
    ) {
        let bus = EventBus::new();
        let mut reg = registry(&bus);
        let id = reg.spawn(geometry(0.0, 0.0));
        let window = reg.get_mut(id).unwrap();
        window.set_content(
            SurfaceContent::Static(bevy_egui::egui::ColorImage::new(
                [16, 16],
                bevy_egui::egui::Color32::BLACK,
            )),
            scale,
        );

        window.rescale(bad);

        prop_assert_eq!(window.surface().unwrap().scale(), scale);
    }
}
