use bevy::prelude::*;
use bevy::render::camera::RenderTarget;
use bevy::window::{
    Monitor, PrimaryMonitor, PrimaryWindow, WindowCloseRequested, WindowMoved, WindowRef,
    WindowResized,
};
use bevy_egui::egui;
use std::collections::HashMap;
use std::path::Path;

use super::placement::{initial_placement, ScreenInfo};
use crate::events::{EventBus, SyncEvent};
use crate::imaging::SurfaceTextures;
use crate::state::{AppState, LaunchSettings, IMAGE_WINDOW_TITLE};
use crate::sync::{PeerRegistry, WindowGeometry, WindowId};

#[derive(Debug, Clone, Copy)]
struct LinkedEntities {
    window: Entity,
    camera: Entity,
}

/// Maps image windows to the Bevy entities that show them
#[derive(Resource, Default)]
pub struct WindowLinks {
    by_entity: HashMap<Entity, WindowId>,
    by_id: HashMap<WindowId, LinkedEntities>,
}

impl WindowLinks {
    pub fn insert(&mut self, id: WindowId, window: Entity, camera: Entity) {
        self.by_entity.insert(window, id);
        self.by_id.insert(id, LinkedEntities { window, camera });
    }

    pub fn id_of(&self, window: Entity) -> Option<WindowId> {
        self.by_entity.get(&window).copied()
    }

    /// Unlink a window, returning its (window, camera) entities
    pub fn remove(&mut self, id: WindowId) -> Option<(Entity, Entity)> {
        let linked = self.by_id.remove(&id)?;
        self.by_entity.remove(&linked.window);
        Some((linked.window, linked.camera))
    }

    pub fn iter(&self) -> impl Iterator<Item = (WindowId, Entity)> + '_ {
        self.by_id.iter().map(|(id, linked)| (*id, linked.window))
    }
}

/// Open a new OS window and register it as an image window.
///
/// Returns the new id and whether `path` loaded. A window whose image fails
/// to load stays open and empty.
pub fn open_image_window(
    commands: &mut Commands,
    registry: &mut PeerRegistry,
    links: &mut WindowLinks,
    screen: ScreenInfo,
    settings: &LaunchSettings,
    path: Option<&Path>,
) -> (WindowId, bool) {
    let placement = initial_placement(screen.logical_size, &mut rand::thread_rng());
    let physical = IVec2::new(
        (placement.min.x * screen.scale_factor) as i32,
        (placement.min.y * screen.scale_factor) as i32,
    );

    let window = commands
        .spawn(Window {
            title: IMAGE_WINDOW_TITLE.into(),
            position: WindowPosition::At(physical),
            resolution: (placement.width(), placement.height()).into(),
            ..default()
        })
        .id();
    let camera = commands
        .spawn((
            Camera2d,
            Camera {
                target: RenderTarget::Window(WindowRef::Entity(window)),
                ..default()
            },
        ))
        .id();

    let id = registry.spawn(WindowGeometry::new(placement.min, placement.size()));
    links.insert(id, window, camera);

    let mut loaded = false;
    if let Some(image_window) = registry.get_mut(id) {
        image_window.set_move_with_window(settings.move_with_window);
        image_window.set_keep_centered(settings.keep_centered);
        if let Some(path) = path {
            loaded = image_window.load_surface(path, settings.scale);
        }
    }
    info!("Opened image window {} at {:?}", id, placement.min);
    (id, loaded)
}

pub fn setup(mut commands: Commands) {
    // Camera for the control panel (primary window)
    commands.spawn(Camera2d);
}

/// Open the images given on the command line
pub fn open_startup_images(
    mut commands: Commands,
    mut state: ResMut<AppState>,
    mut registry: ResMut<PeerRegistry>,
    mut links: ResMut<WindowLinks>,
    monitors: Query<&Monitor, With<PrimaryMonitor>>,
) {
    let screen = ScreenInfo::from_monitor(monitors.get_single().ok());
    let settings = state.settings.clone();
    for path in std::mem::take(&mut state.startup_images) {
        let (_, loaded) = open_image_window(
            &mut commands,
            &mut registry,
            &mut links,
            screen,
            &settings,
            Some(&path),
        );
        if loaded {
            state.remember_image(&path.to_string_lossy());
        }
    }
}

/// Feed OS window events into the image windows
#[allow(clippy::too_many_arguments)]
pub fn track_window_events(
    mut moved: EventReader<WindowMoved>,
    mut resized: EventReader<WindowResized>,
    mut close_requested: EventReader<WindowCloseRequested>,
    windows: Query<&Window>,
    primary: Query<Entity, With<PrimaryWindow>>,
    links: Res<WindowLinks>,
    mut registry: ResMut<PeerRegistry>,
    mut commands: Commands,
) {
    for event in moved.read() {
        let Some(id) = links.id_of(event.window) else {
            continue;
        };
        let scale = windows
            .get(event.window)
            .map(Window::scale_factor)
            .unwrap_or(1.0);
        let origin = egui::pos2(
            event.position.x as f32 / scale,
            event.position.y as f32 / scale,
        );
        if let Some(window) = registry.get_mut(id) {
            window.on_window_moved(origin);
        }
    }

    for event in resized.read() {
        let Some(id) = links.id_of(event.window) else {
            continue;
        };
        if let Some(window) = registry.get_mut(id) {
            window.on_window_resized(egui::vec2(event.width, event.height));
        }
    }

    for event in close_requested.read() {
        if primary.contains(event.window) {
            // Closing the control panel closes everything
            for window in registry.iter_mut() {
                window.close();
            }
            commands.entity(event.window).despawn();
            continue;
        }
        let Some(id) = links.id_of(event.window) else {
            continue;
        };
        if let Some(window) = registry.get_mut(id) {
            window.close();
        }
    }
}

/// Tick every image window, then deliver what they published
pub fn sync_windows(
    time: Res<Time>,
    bus: NonSend<EventBus>,
    windows: Query<(Entity, &Window)>,
    mut registry: ResMut<PeerRegistry>,
    mut links: ResMut<WindowLinks>,
    mut textures: ResMut<SurfaceTextures>,
    mut commands: Commands,
) {
    let focus = windows
        .iter()
        .filter(|(_, window)| window.focused)
        .find_map(|(entity, _)| links.id_of(entity));

    registry.update_all(time.delta(), focus);

    for event in bus.drain() {
        registry.route(&event, focus);
        if let SyncEvent::WindowClosing(id) = event {
            textures.forget(id);
            if let Some((window, camera)) = links.remove(id) {
                commands.entity(camera).despawn();
                if let Some(mut entity) = commands.get_entity(window) {
                    entity.despawn();
                }
            }
        }
    }
}
