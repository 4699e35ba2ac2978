mod decode;
mod texture;

pub use decode::{clamp_texture_size, decode_surface, is_animated_path, MAX_TEXTURE_SIZE};
pub use texture::{calculate_fit_scale, SurfaceTextures};
