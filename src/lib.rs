pub mod cli;
pub mod error;
pub mod events;
pub mod file;
pub mod imaging;
pub mod state;
pub mod surface;
pub mod sync;
pub mod ui;

pub use error::SurfaceError;
