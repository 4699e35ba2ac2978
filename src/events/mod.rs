//! In-process notifications published by image windows.
//!
//! Windows hold an [`EventPublisher`]; the container owns the [`EventBus`] and
//! drains it once per frame.

mod bus;
mod types;

pub use bus::{EventBus, EventPublisher};
pub use types::SyncEvent;
