use crate::image_classifier::interface::{
    parse_prediction, ImageClassifier, PredictError, Prediction,
};
use crate::image_file::ImageFile;
use crate::library::logger::interface::Logger;
use reqwest::blocking::{multipart, Client};
use std::sync::Arc;
use std::time::Duration;

const IMAGE_FIELD: &str = "image_file";

pub struct ImageClassifierHttp {
    base_url: String,
    client: Client,
    logger: Arc<dyn Logger + Send + Sync>,
}

impl ImageClassifierHttp {
    pub fn new(
        base_url: &str,
        timeout: Duration,
        logger: Arc<dyn Logger + Send + Sync>,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
            logger: logger.with_namespace("image_classifier_http"),
        })
    }

    fn predict_url(&self) -> String {
        format!("{}/predict", self.base_url)
    }
}

impl ImageClassifier for ImageClassifierHttp {
    fn warm_up(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let response = self.client.get(&self.base_url).send()?;
        self.logger
            .info(&format!("warm up {} -> {}", self.base_url, response.status()))?;
        Ok(())
    }

    fn classify(&self, image: &ImageFile) -> Result<Prediction, PredictError> {
        let _ = self.logger.info(&format!(
            "POST {} with {:?}",
            self.predict_url(),
            image
        ));

        let part = multipart::Part::bytes(image.bytes.to_vec())
            .file_name(image.name.clone())
            .mime_str(image.mime_type())
            .map_err(|e| PredictError::Network(e.to_string()))?;
        let form = multipart::Form::new().part(IMAGE_FIELD, part);

        let response = self
            .client
            .post(self.predict_url())
            .multipart(form)
            .send()
            .map_err(|e| PredictError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .map_err(|e| PredictError::Network(e.to_string()))?;

        let _ = self
            .logger
            .info(&format!("response {} ({} bytes)", status, body.len()));

        parse_prediction(&body)
    }
}
