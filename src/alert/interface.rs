pub trait Alert {
    /// Shows `message` and blocks until the user acknowledges it.
    fn show(&self, message: &str) -> Result<(), Box<dyn std::error::Error + Send + Sync>>;
}
