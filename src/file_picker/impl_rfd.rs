use crate::file_picker::interface::{FilePicker, IMAGE_EXTENSIONS};
use crate::image_file::ImageFile;

pub struct FilePickerRfd {}

impl FilePickerRfd {
    pub fn new() -> Self {
        Self {}
    }
}

impl FilePicker for FilePickerRfd {
    fn pick_image(&self) -> Result<Option<ImageFile>, Box<dyn std::error::Error + Send + Sync>> {
        match rfd::FileDialog::new()
            .add_filter("Image", IMAGE_EXTENSIONS)
            .pick_file()
        {
            Some(path) => Ok(Some(ImageFile::from_path(&path)?)),
            None => Ok(None),
        }
    }
}
