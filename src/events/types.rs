use bevy_egui::egui::Pos2;

use crate::sync::WindowId;

/// Notification emitted by an image window.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SyncEvent {
    /// The window was dragged with move-with-window on; `screen_pos` is the
    /// surface's new top-left corner in screen coordinates.
    SurfaceMoved { source: WindowId, screen_pos: Pos2 },
    /// The window is closing and should be dropped from the peer registry.
    WindowClosing(WindowId),
}

impl SyncEvent {
    /// Window that published the event.
    pub fn source(&self) -> WindowId {
        match *self {
            SyncEvent::SurfaceMoved { source, .. } => source,
            SyncEvent::WindowClosing(id) => id,
        }
    }
}
