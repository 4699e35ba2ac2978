use bevy::log::info;
use bevy::prelude::Resource;
use bevy_egui::egui::Pos2;
use std::time::Duration;

use super::geometry::WindowGeometry;
use super::window::ImageWindow;
use super::WindowId;
use crate::events::{EventPublisher, SyncEvent};

/// Read-only view of a peer, taken right before another window ticks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PeerSnapshot {
    pub id: WindowId,
    pub surface_screen_pos: Pos2,
}

/// All open image windows, in the order they were opened.
///
/// The first window is the default alignment reference for every other one.
#[derive(Resource)]
pub struct PeerRegistry {
    windows: Vec<ImageWindow>,
    next_id: u64,
    publisher: EventPublisher,
    tick_interval: Duration,
}

impl PeerRegistry {
    pub fn new(publisher: EventPublisher, tick_interval: Duration) -> Self {
        Self {
            windows: Vec::new(),
            next_id: 1,
            publisher,
            tick_interval,
        }
    }

    /// Register a new window and return its id
    pub fn spawn(&mut self, geometry: WindowGeometry) -> WindowId {
        let id = WindowId(self.next_id);
        self.next_id += 1;
        self.windows.push(ImageWindow::new(
            id,
            geometry,
            self.publisher.clone(),
            self.tick_interval,
        ));
        id
    }

    pub fn get(&self, id: WindowId) -> Option<&ImageWindow> {
        self.windows.iter().find(|w| w.id() == id)
    }

    pub fn get_mut(&mut self, id: WindowId) -> Option<&mut ImageWindow> {
        self.windows.iter_mut().find(|w| w.id() == id)
    }

    pub fn remove(&mut self, id: WindowId) -> Option<ImageWindow> {
        let index = self.windows.iter().position(|w| w.id() == id)?;
        Some(self.windows.remove(index))
    }

    pub fn ids(&self) -> Vec<WindowId> {
        self.windows.iter().map(ImageWindow::id).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ImageWindow> {
        self.windows.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut ImageWindow> {
        self.windows.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.windows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.windows.is_empty()
    }

    /// Current surface positions of all open windows showing a surface, in
    /// registry order. Empty windows and windows that already announced
    /// closing are left out.
    pub fn snapshots(&self) -> Vec<PeerSnapshot> {
        self.windows
            .iter()
            .filter(|w| !w.is_closed() && w.surface().is_some())
            .map(|w| PeerSnapshot {
                id: w.id(),
                surface_screen_pos: w.surface_screen_pos(),
            })
            .collect()
    }

    /// Advance every window by `delta`. Each window sees its peers as they are
    /// after the windows before it have ticked.
    pub fn update_all(&mut self, delta: Duration, focus: Option<WindowId>) {
        for index in 0..self.windows.len() {
            let peers = self.snapshots();
            self.windows[index].update(delta, &peers, focus);
        }
    }

    /// Deliver an event published by one of the windows.
    pub fn route(&mut self, event: &SyncEvent, focus: Option<WindowId>) {
        match *event {
            SyncEvent::SurfaceMoved { source, screen_pos } => {
                for window in self.windows.iter_mut().filter(|w| w.id() != source) {
                    window.on_peer_surface_moved(screen_pos, focus);
                }
            }
            SyncEvent::WindowClosing(id) => {
                if self.remove(id).is_some() {
                    info!("Window {} removed, {} remaining", id, self.windows.len());
                }
            }
        }
    }
}
