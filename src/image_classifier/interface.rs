use crate::image_file::ImageFile;
use serde::Deserialize;
use std::fmt;

/// Scores as percentages. The two values are independent and need not sum to 100.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    pub cat: f64,
    pub dog: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PredictError {
    Network(String),
    InvalidResponse(String),
}

impl fmt::Display for PredictError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PredictError::Network(message) => write!(f, "{}", message),
            PredictError::InvalidResponse(message) => write!(f, "{}", message),
        }
    }
}

impl std::error::Error for PredictError {}

pub trait ImageClassifier {
    /// Best-effort request that wakes a cold remote service.
    fn warm_up(&self) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;

    fn classify(&self, image: &ImageFile) -> Result<Prediction, PredictError>;
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Score {
    Number(f64),
    Text(String),
}

impl Score {
    fn to_fraction(&self, label: &str) -> Result<f64, PredictError> {
        match self {
            Score::Number(value) => Ok(*value),
            Score::Text(text) => text.trim().parse::<f64>().map_err(|e| {
                PredictError::InvalidResponse(format!("{} score {:?}: {}", label, text, e))
            }),
        }
    }
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    cat: Score,
    dog: Score,
}

/// Parses a `/predict` body and scales both fractions to percentages.
pub fn parse_prediction(body: &str) -> Result<Prediction, PredictError> {
    let response: PredictResponse =
        serde_json::from_str(body).map_err(|e| PredictError::InvalidResponse(e.to_string()))?;

    Ok(Prediction {
        cat: response.cat.to_fraction("cat")? * 100.0,
        dog: response.dog.to_fraction("dog")? * 100.0,
    })
}

/// Two decimals at most, no trailing zeros: `73.0` renders as `73`.
pub fn format_percent(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    format!("{}", rounded)
}
