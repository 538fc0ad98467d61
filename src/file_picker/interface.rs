use crate::image_file::ImageFile;

pub const IMAGE_EXTENSIONS: &[&str] = &["png", "jpg", "jpeg", "gif", "webp", "bmp", "avif"];

pub trait FilePicker {
    /// Blocks until the user picks an image or dismisses the dialog.
    fn pick_image(&self) -> Result<Option<ImageFile>, Box<dyn std::error::Error + Send + Sync>>;
}
