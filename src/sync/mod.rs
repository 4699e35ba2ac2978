//! Surface position synchronization between image windows.
//!
//! Each [`ImageWindow`] owns a surface and a periodic tick. On every tick the
//! window either centers its surface (focused, keep-centered) or moves it to
//! where a reference peer's surface sits on screen. Peers are read from a
//! [`PeerRegistry`] owned by the container.

mod geometry;
mod registry;
mod window;

pub use geometry::WindowGeometry;
pub use registry::{PeerRegistry, PeerSnapshot};
pub use window::{ImageWindow, SyncState, TickOutcome};

use std::fmt;

/// Identity of an image window, allocated by the [`PeerRegistry`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WindowId(pub u64);

impl fmt::Display for WindowId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}
