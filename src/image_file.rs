use std::path::Path;
use std::sync::Arc;

/// A user-selected image, held in memory until it is uploaded.
#[derive(Clone, PartialEq)]
pub struct ImageFile {
    pub name: String,
    pub bytes: Arc<Vec<u8>>,
}

impl std::fmt::Debug for ImageFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ImageFile")
            .field("name", &self.name)
            .field("len", &self.bytes.len())
            .finish()
    }
}

impl ImageFile {
    pub fn new(name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            bytes: Arc::new(bytes),
        }
    }

    pub fn from_path(path: &Path) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let bytes = std::fs::read(path)?;
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.to_string_lossy().into_owned());
        Ok(Self::new(name, bytes))
    }

    /// Native drops carry a path, web drops carry the bytes.
    pub fn from_dropped(
        file: &egui::DroppedFile,
    ) -> Result<Option<Self>, Box<dyn std::error::Error + Send + Sync>> {
        if let Some(bytes) = &file.bytes {
            return Ok(Some(Self {
                name: file.name.clone(),
                bytes: Arc::new(bytes.to_vec()),
            }));
        }
        match &file.path {
            Some(path) => Ok(Some(Self::from_path(path)?)),
            None => Ok(None),
        }
    }

    pub fn mime_type(&self) -> &'static str {
        image::ImageFormat::from_path(&self.name)
            .map(|format| format.to_mime_type())
            .unwrap_or("application/octet-stream")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mime_type_from_extension() {
        assert_eq!(ImageFile::new("cat.png", vec![]).mime_type(), "image/png");
        assert_eq!(ImageFile::new("dog.JPG", vec![]).mime_type(), "image/jpeg");
        assert_eq!(
            ImageFile::new("notes", vec![]).mime_type(),
            "application/octet-stream"
        );
    }

    #[test]
    fn test_from_dropped_bytes() {
        let dropped = egui::DroppedFile {
            name: "cat.png".to_string(),
            bytes: Some(Arc::from(vec![1u8, 2, 3])),
            ..Default::default()
        };

        let file = ImageFile::from_dropped(&dropped).unwrap().unwrap();

        assert_eq!(file.name, "cat.png");
        assert_eq!(file.bytes.as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn test_from_dropped_without_content() {
        let dropped = egui::DroppedFile::default();

        assert!(ImageFile::from_dropped(&dropped).unwrap().is_none());
    }
}
