use chrono::Offset;
use std::time::Duration;

const API_URL_ENV: &str = "API_URL";
const DEFAULT_API_URL: &str = "http://localhost:8000";

#[derive(Debug, Clone)]
pub struct MarqueeConfig {
    pub words: Vec<String>,
    pub rows: usize,
    pub words_length: usize,
}

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub request_timeout: Duration,
    pub window_size: [f32; 2],
    pub image_height: f32,
    pub gallery_size: usize,
    pub scroll_distance: f32,
    pub marquee: MarqueeConfig,
    pub logger_timezone: chrono::FixedOffset,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_URL.to_string(),
            request_timeout: Duration::from_secs(60),
            window_size: [1024.0, 768.0],
            image_height: 136.0,
            gallery_size: 10,
            scroll_distance: 1500.0,
            marquee: MarqueeConfig {
                words: vec!["cat".to_string(), "dogs".to_string()],
                rows: 20,
                words_length: 100,
            },
            logger_timezone: utc(),
        }
    }
}

impl Config {
    /// Defaults, with the endpoint taken from `API_URL` (a `.env` file is honored).
    pub fn from_env() -> Self {
        let _ = dotenvy::dotenv();

        let mut config = Self::default();
        if let Ok(url) = std::env::var(API_URL_ENV) {
            config.api_base_url = url.trim_end_matches('/').to_string();
        }
        config
    }
}

fn utc() -> chrono::FixedOffset {
    chrono::Utc.fix()
}
