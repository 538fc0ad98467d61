use crate::image_classifier::interface::{ImageClassifier, PredictError, Prediction};
use crate::image_file::ImageFile;
use crate::library::logger::interface::Logger;
use std::sync::{Arc, Mutex};

pub struct ImageClassifierFake {
    logger: Arc<dyn Logger + Send + Sync>,
    result: Result<Prediction, PredictError>,
    classified: Mutex<Vec<String>>,
}

impl ImageClassifierFake {
    pub fn with_result(
        logger: Arc<dyn Logger + Send + Sync>,
        result: Result<Prediction, PredictError>,
    ) -> Self {
        Self {
            logger,
            result,
            classified: Mutex::new(vec![]),
        }
    }

    /// Names of the images passed to `classify`, in call order.
    #[allow(dead_code)]
    pub fn classified(&self) -> Vec<String> {
        self.classified.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl ImageClassifier for ImageClassifierFake {
    fn warm_up(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger.info("ImageClassifierFake::warm_up()")?;
        Ok(())
    }

    fn classify(&self, image: &ImageFile) -> Result<Prediction, PredictError> {
        let _ = self
            .logger
            .info(&format!("ImageClassifierFake::classify({})", image.name));
        if let Ok(mut classified) = self.classified.lock() {
            classified.push(image.name.clone());
        }
        self.result.clone()
    }
}
