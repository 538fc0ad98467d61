use crate::alert::interface::Alert;
use crate::library::logger::interface::Logger;
use std::sync::{Arc, Mutex};

pub struct AlertFake {
    logger: Arc<dyn Logger + Send + Sync>,
    shown: Mutex<Vec<String>>,
}

impl AlertFake {
    pub fn new(logger: Arc<dyn Logger + Send + Sync>) -> Self {
        Self {
            logger,
            shown: Mutex::new(vec![]),
        }
    }

    #[allow(dead_code)]
    pub fn shown(&self) -> Vec<String> {
        self.shown.lock().map(|s| s.clone()).unwrap_or_default()
    }
}

impl Alert for AlertFake {
    fn show(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        self.logger
            .info(&format!("AlertFake::show({})", message))?;
        self.shown.lock().map_err(|e| e.to_string())?.push(message.to_string());
        Ok(())
    }
}
