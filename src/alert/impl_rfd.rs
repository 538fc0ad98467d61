use crate::alert::interface::Alert;

pub struct AlertRfd {
    title: String,
}

impl AlertRfd {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
        }
    }
}

impl Alert for AlertRfd {
    /// Called from an effect thread, which has no window handle to parent the
    /// dialog to. Blocks that thread until the user dismisses it.
    fn show(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        rfd::MessageDialog::new()
            .set_level(rfd::MessageLevel::Error)
            .set_title(self.title.as_str())
            .set_description(message)
            .set_buttons(rfd::MessageButtons::Ok)
            .show();
        Ok(())
    }
}
