use bevy::log::{debug, info, warn};
use bevy::time::{Timer, TimerMode};
use bevy_egui::egui::{Pos2, Rect, Vec2};
use std::path::{Path, PathBuf};
use std::time::Duration;

use super::geometry::WindowGeometry;
use super::registry::PeerSnapshot;
use super::WindowId;
use crate::error::SurfaceError;
use crate::events::{EventPublisher, SyncEvent};
use crate::imaging::decode_surface;
use crate::surface::{validate_scale, DisplaySurface, SurfaceContent};

/// Shortest tick interval accepted; a zero-length repeating timer never settles
const MIN_TICK_INTERVAL: Duration = Duration::from_millis(1);

/// Behavior flags of one window
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SyncState {
    pub move_with_window: bool,
    pub keep_centered: bool,
    /// Set when the window was dragged since the last tick
    pub manual_move_pending: bool,
}

/// What a single tick did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// A manual move happened this interval; the flag is now cleared
    SkippedAfterMove,
    /// Nothing to do (no surface, or no peers)
    Idle,
    Centered,
    AlignedTo(WindowId),
}

/// A floating window showing one surface, kept in place relative to its peers.
///
/// The window does not talk to any toolkit. The shell feeds it geometry
/// changes and frame time; the window publishes [`SyncEvent`]s back.
pub struct ImageWindow {
    id: WindowId,
    geometry: WindowGeometry,
    /// Reference size used until a surface is loaded
    initial_size: Vec2,
    surface: Option<DisplaySurface>,
    /// Top-left of the surface in local coordinates
    surface_pos: Pos2,
    path: Option<PathBuf>,
    /// Bumped on every successful load so renderers can drop stale textures
    revision: u64,
    sync: SyncState,
    publisher: EventPublisher,
    timer: Timer,
    closed: bool,
}

impl ImageWindow {
    /// Create a window with no surface; its tick timer starts running immediately.
    pub fn new(
        id: WindowId,
        geometry: WindowGeometry,
        publisher: EventPublisher,
        tick_interval: Duration,
    ) -> Self {
        let interval = tick_interval.max(MIN_TICK_INTERVAL);
        Self {
            id,
            geometry,
            initial_size: geometry.size,
            surface: None,
            surface_pos: Pos2::ZERO,
            path: None,
            revision: 0,
            sync: SyncState::default(),
            publisher,
            timer: Timer::new(interval, TimerMode::Repeating),
            closed: false,
        }
    }

    pub fn id(&self) -> WindowId {
        self.id
    }

    pub fn geometry(&self) -> WindowGeometry {
        self.geometry
    }

    pub fn surface(&self) -> Option<&DisplaySurface> {
        self.surface.as_ref()
    }

    pub fn surface_pos(&self) -> Pos2 {
        self.surface_pos
    }

    /// Where the surface content is drawn, in local coordinates
    pub fn surface_rect(&self) -> Option<Rect> {
        self.surface
            .as_ref()
            .map(|s| Rect::from_min_size(self.surface_pos, s.content_size()))
    }

    /// Surface top-left in screen coordinates
    pub fn surface_screen_pos(&self) -> Pos2 {
        self.geometry.map_to_global(self.surface_pos)
    }

    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn sync_state(&self) -> SyncState {
        self.sync
    }

    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Size every rescale is computed from
    pub fn reference_size(&self) -> Vec2 {
        self.surface
            .as_ref()
            .map_or(self.initial_size, DisplaySurface::reference_size)
    }

    pub fn tick_interval(&self) -> Duration {
        self.timer.duration()
    }

    pub fn set_move_with_window(&mut self, enabled: bool) {
        self.sync.move_with_window = enabled;
    }

    pub fn set_keep_centered(&mut self, enabled: bool) {
        self.sync.keep_centered = enabled;
    }

    /// Load an image file as the new surface. A `.gif` becomes an animation.
    ///
    /// On failure the error is logged and the previous surface stays.
    /// Returns whether the new surface was installed.
    pub fn load_surface(&mut self, path: impl AsRef<Path>, scale: f32) -> bool {
        let path = path.as_ref();
        let loaded = validate_scale(scale).and_then(|scale| {
            let content = decode_surface(path)?;
            self.install(content, scale)
        });
        match loaded {
            Ok(()) => {
                self.path = Some(path.to_path_buf());
                info!(
                    "Window {} loaded {} ({} frame(s))",
                    self.id,
                    path.display(),
                    self.surface.as_ref().map_or(0, DisplaySurface::frame_count)
                );
                true
            }
            Err(err) => {
                warn!("Window {} kept its previous surface: {}", self.id, err);
                false
            }
        }
    }

    /// Install already decoded content, with the same rules as [`Self::load_surface`].
    pub fn set_content(&mut self, content: SurfaceContent, scale: f32) -> bool {
        match self.install(content, scale) {
            Ok(()) => {
                self.path = None;
                true
            }
            Err(err) => {
                warn!("Window {} kept its previous surface: {}", self.id, err);
                false
            }
        }
    }

    fn install(&mut self, content: SurfaceContent, scale: f32) -> Result<(), SurfaceError> {
        // The reference size is the client size at load time and never changes afterwards
        let surface = DisplaySurface::new(content, self.geometry.size, scale)?;
        self.surface = Some(surface);
        self.revision += 1;
        Ok(())
    }

    /// The window itself was dragged to `new_origin` (screen coordinates).
    pub fn on_window_moved(&mut self, new_origin: Pos2) {
        self.geometry.origin = new_origin;
        if !self.sync.move_with_window || self.surface.is_none() || self.closed {
            return;
        }

        let screen_pos = self.surface_screen_pos();
        self.publisher.publish(SyncEvent::SurfaceMoved {
            source: self.id,
            screen_pos,
        });
        self.sync.manual_move_pending = true;
    }

    /// Client area changed size. The reference size is not affected.
    pub fn on_window_resized(&mut self, size: Vec2) {
        self.geometry.size = size;
    }

    /// A peer broadcast its surface position; follow it unless this window is
    /// the focused keep-centered one.
    pub fn on_peer_surface_moved(&mut self, screen_pos: Pos2, focus: Option<WindowId>) {
        if self.closed || self.surface.is_none() {
            return;
        }
        if focus == Some(self.id) && self.sync.keep_centered {
            return;
        }
        self.surface_pos = self.geometry.map_from_global(screen_pos);
    }

    /// One synchronization step.
    ///
    /// `peers` is the registry in order; `focus` is the image window holding
    /// input focus, if any.
    pub fn tick(&mut self, peers: &[PeerSnapshot], focus: Option<WindowId>) -> TickOutcome {
        if self.sync.manual_move_pending {
            self.sync.manual_move_pending = false;
            return TickOutcome::SkippedAfterMove;
        }
        let Some(surface) = &self.surface else {
            return TickOutcome::Idle;
        };

        if focus == Some(self.id) && self.sync.keep_centered {
            self.surface_pos = self.geometry.centered_origin(surface.content_size());
            return TickOutcome::Centered;
        }

        let focused_peer = match focus {
            Some(focused) if self.sync.keep_centered => peers.iter().find(|p| p.id == focused),
            _ => None,
        };
        let Some(reference) = focused_peer.or_else(|| peers.first()) else {
            return TickOutcome::Idle;
        };

        let local = self.geometry.map_from_global(reference.surface_screen_pos);
        if local != self.surface_pos {
            debug!(
                "Window {} aligning surface to window {} at {:?}",
                self.id, reference.id, local
            );
        }
        self.surface_pos = local;
        TickOutcome::AlignedTo(reference.id)
    }

    /// Advance playback and the tick timer by `delta`, ticking when the timer fires.
    pub fn update(
        &mut self,
        delta: Duration,
        peers: &[PeerSnapshot],
        focus: Option<WindowId>,
    ) -> Option<TickOutcome> {
        if self.closed {
            return None;
        }
        if let Some(surface) = self.surface.as_mut() {
            surface.advance(delta);
        }
        self.timer.tick(delta);
        self.timer.just_finished().then(|| self.tick(peers, focus))
    }

    /// Restart an animated surface from frame 0. No-op for static images.
    pub fn restart(&mut self) {
        if let Some(surface) = self.surface.as_mut() {
            if surface.restart() {
                debug!("Window {} restarted its animation", self.id);
            }
        }
    }

    /// Resize the surface to `reference_size * factor`.
    pub fn rescale(&mut self, factor: f32) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        if let Err(err) = surface.rescale(factor) {
            warn!("Window {} ignored rescale: {}", self.id, err);
        }
    }

    /// Announce that this window is closing, then stop its timer.
    /// Only the first call has any effect.
    pub fn close(&mut self) {
        if self.closed {
            return;
        }
        self.publisher.publish(SyncEvent::WindowClosing(self.id));
        self.timer.pause();
        self.closed = true;
        info!("Window {} closing", self.id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventBus;
    use bevy_egui::egui::{pos2, vec2, Color32, ColorImage};

    fn window(bus: &EventBus, origin: Pos2) -> ImageWindow {
        ImageWindow::new(
            WindowId(1),
            WindowGeometry::new(origin, vec2(400.0, 300.0)),
            bus.publisher(),
            Duration::from_millis(16),
        )
    }

    fn content() -> SurfaceContent {
        SurfaceContent::Static(ColorImage::new([40, 30], Color32::GREEN))
    }

    #[test]
    fn moved_window_without_flag_is_silent() {
        let bus = EventBus::new();
        let mut win = window(&bus, pos2(0.0, 0.0));
        win.set_content(content(), 1.0);

        win.on_window_moved(pos2(50.0, 60.0));

        assert_eq!(win.geometry().origin, pos2(50.0, 60.0));
        assert!(bus.drain().is_empty());
        assert!(!win.sync_state().manual_move_pending);
    }

    #[test]
    fn moved_window_broadcasts_surface_screen_position() {
        let bus = EventBus::new();
        let mut win = window(&bus, pos2(0.0, 0.0));
        win.set_content(content(), 1.0);
        win.set_move_with_window(true);

        win.on_window_moved(pos2(50.0, 60.0));

        assert_eq!(
            bus.drain(),
            vec![SyncEvent::SurfaceMoved {
                source: WindowId(1),
                screen_pos: pos2(50.0, 60.0),
            }]
        );
        assert!(win.sync_state().manual_move_pending);
    }

    #[test]
    fn moved_window_without_surface_is_silent() {
        let bus = EventBus::new();
        let mut win = window(&bus, pos2(0.0, 0.0));
        win.set_move_with_window(true);
        win.on_window_moved(pos2(5.0, 5.0));
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn tick_without_surface_is_idle() {
        let bus = EventBus::new();
        let mut win = window(&bus, pos2(0.0, 0.0));
        let peers = [PeerSnapshot {
            id: WindowId(2),
            surface_screen_pos: pos2(10.0, 10.0),
        }];
        assert_eq!(win.tick(&peers, None), TickOutcome::Idle);
        assert_eq!(win.surface_pos(), Pos2::ZERO);
    }

    #[test]
    fn update_ticks_only_when_timer_fires() {
        let bus = EventBus::new();
        let mut win = window(&bus, pos2(100.0, 100.0));
        win.set_content(content(), 1.0);
        let peers = [PeerSnapshot {
            id: WindowId(2),
            surface_screen_pos: pos2(130.0, 140.0),
        }];

        assert_eq!(win.update(Duration::from_millis(10), &peers, None), None);
        assert_eq!(
            win.update(Duration::from_millis(10), &peers, None),
            Some(TickOutcome::AlignedTo(WindowId(2)))
        );
        assert_eq!(win.surface_pos(), pos2(30.0, 40.0));
    }

    #[test]
    fn zero_interval_is_clamped() {
        let bus = EventBus::new();
        let win = ImageWindow::new(
            WindowId(1),
            WindowGeometry::new(Pos2::ZERO, vec2(10.0, 10.0)),
            bus.publisher(),
            Duration::ZERO,
        );
        assert_eq!(win.tick_interval(), MIN_TICK_INTERVAL);
    }

    #[test]
    fn rescale_without_surface_is_noop() {
        let bus = EventBus::new();
        let mut win = window(&bus, Pos2::ZERO);
        win.rescale(2.0);
        assert!(win.surface().is_none());
        assert_eq!(win.reference_size(), vec2(400.0, 300.0));
    }

    #[test]
    fn closed_window_stops_updating() {
        let bus = EventBus::new();
        let mut win = window(&bus, Pos2::ZERO);
        win.set_content(content(), 1.0);
        win.close();
        assert_eq!(win.update(Duration::from_secs(1), &[], None), None);
    }
}
