mod dialogs;

pub use dialogs::{has_native_dialogs, pick_image_file, IMAGE_EXTENSIONS};
