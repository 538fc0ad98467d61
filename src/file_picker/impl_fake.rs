use crate::file_picker::interface::FilePicker;
use crate::image_file::ImageFile;
use std::sync::Mutex;

/// Hands out the queued files one per call, then behaves like a dismissed dialog.
pub struct FilePickerFake {
    queued: Mutex<Vec<ImageFile>>,
}

impl FilePickerFake {
    pub fn new(queued: Vec<ImageFile>) -> Self {
        Self {
            queued: Mutex::new(queued.into_iter().rev().collect()),
        }
    }
}

impl FilePicker for FilePickerFake {
    fn pick_image(&self) -> Result<Option<ImageFile>, Box<dyn std::error::Error + Send + Sync>> {
        let mut queued = self.queued.lock().map_err(|e| e.to_string())?;
        Ok(queued.pop())
    }
}
