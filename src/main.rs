use alert::impl_rfd::AlertRfd;
use app::App;
use config::Config;
use file_picker::impl_rfd::FilePickerRfd;
use image_classifier::impl_http::ImageClassifierHttp;
use library::logger::{impl_console::LoggerConsole, interface::Logger};
use library::random::{impl_rand::RandomSourceRand, interface::RandomSource};
use predictor::main::Predictor;
use std::sync::Arc;

mod alert;
mod app;
mod config;
mod file_picker;
mod image_classifier;
mod image_file;
mod library;
mod paint;
mod predictor;
mod scroll_animation;
mod text_animation;

fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let config = Config::from_env();

    let logger: Arc<dyn Logger + Send + Sync> = Arc::new(LoggerConsole::new(config.logger_timezone));

    logger.info(&format!("classifier endpoint {}", config.api_base_url))?;

    let image_classifier = Arc::new(ImageClassifierHttp::new(
        &config.api_base_url,
        config.request_timeout,
        logger.clone(),
    )?);

    let file_picker = Arc::new(FilePickerRfd::new());

    let alert = Arc::new(AlertRfd::new("Cat Dog Classifier"));

    let random: Arc<dyn RandomSource + Send + Sync> = Arc::new(RandomSourceRand::new()?);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(config.window_size)
            .with_drag_and_drop(true),
        ..Default::default()
    };

    eframe::run_native(
        "Cat Dog Classifier",
        options,
        Box::new(move |cc| {
            let mut predictor = Predictor::new(logger.clone(), image_classifier, file_picker, alert);
            predictor.set_repaint(cc.egui_ctx.clone());
            predictor.start();

            Box::new(App::new(config, logger, random, predictor))
        }),
    )
    .map_err(|e| e.to_string())?;

    Ok(())
}
