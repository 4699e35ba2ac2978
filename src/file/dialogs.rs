use std::path::PathBuf;

#[cfg(target_os = "windows")]
use rfd::FileDialog;

/// Extensions the viewer can open
pub const IMAGE_EXTENSIONS: [&str; 5] = ["png", "jpg", "jpeg", "gif", "bmp"];

// Native file dialog (Windows only)
#[cfg(target_os = "windows")]
pub fn pick_image_file() -> Option<PathBuf> {
    FileDialog::new()
        .add_filter("All Images", &IMAGE_EXTENSIONS)
        .add_filter("Animated GIF", &["gif"])
        .pick_file()
}

// Fallback for non-Windows (returns None, uses text input instead)
#[cfg(not(target_os = "windows"))]
pub fn pick_image_file() -> Option<PathBuf> {
    None
}

/// Whether a native picker exists on this platform
pub fn has_native_dialogs() -> bool {
    cfg!(target_os = "windows")
}
