use bevy_egui::egui::{Pos2, Rect, Vec2};

/// Client area of a window: its top-left corner in screen coordinates and its size.
///
/// Everything is in logical points.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WindowGeometry {
    pub origin: Pos2,
    pub size: Vec2,
}

impl WindowGeometry {
    pub fn new(origin: Pos2, size: Vec2) -> Self {
        Self { origin, size }
    }

    /// Client area in local coordinates
    pub fn client_rect(&self) -> Rect {
        Rect::from_min_size(Pos2::ZERO, self.size)
    }

    pub fn map_to_global(&self, local: Pos2) -> Pos2 {
        self.origin + local.to_vec2()
    }

    pub fn map_from_global(&self, global: Pos2) -> Pos2 {
        (global - self.origin).to_pos2()
    }

    /// Top-left position that centers a box of `content` size in the client area
    pub fn centered_origin(&self, content: Vec2) -> Pos2 {
        let mut rect = Rect::from_min_size(Pos2::ZERO, content);
        rect.set_center(self.client_rect().center());
        rect.min
    }
}
