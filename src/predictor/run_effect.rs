use crate::alert::interface::Alert;
use crate::file_picker::interface::FilePicker;
use crate::image_classifier::interface::ImageClassifier;
use crate::library::logger::interface::Logger;
use crate::predictor::core::{Effect, Event};
use std::sync::mpsc::Sender;
use std::sync::Arc;

#[derive(Clone)]
pub struct RunEffect {
    logger: Arc<dyn Logger + Send + Sync>,
    image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
    file_picker: Arc<dyn FilePicker + Send + Sync>,
    alert: Arc<dyn Alert + Send + Sync>,
    event_sender: Sender<Event>,
    repaint: Option<egui::Context>,
}

impl RunEffect {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        file_picker: Arc<dyn FilePicker + Send + Sync>,
        alert: Arc<dyn Alert + Send + Sync>,
        event_sender: Sender<Event>,
    ) -> Self {
        Self {
            logger,
            image_classifier,
            file_picker,
            alert,
            event_sender,
            repaint: None,
        }
    }

    /// Wakes the GUI whenever an effect reports back.
    pub fn set_repaint(&mut self, ctx: egui::Context) {
        self.repaint = Some(ctx);
    }

    pub fn run_effect(&self, effect: Effect) {
        let _ = self
            .logger
            .info(&format!("Running effect: {}", effect_name(&effect)));

        match effect {
            Effect::WarmUp => {
                if let Err(e) = self.image_classifier.warm_up() {
                    let _ = self.logger.error(&format!("warm up failed: {}", e));
                }
            }
            Effect::PickFile => {
                let picked = self.file_picker.pick_image();
                self.send(Event::FilePickDone(picked));
            }
            Effect::Classify { image } => {
                let classified = self.image_classifier.classify(&image);
                self.send(Event::ClassifyDone(classified));
            }
            Effect::ShowAlert {
                message,
                finish_loading,
            } => {
                let _ = self.logger.error(&message);
                if let Err(e) = self.alert.show(&message) {
                    let _ = self.logger.error(&format!("alert failed: {}", e));
                }
                self.send(Event::AlertDismissed { finish_loading });
            }
        }
    }

    fn send(&self, event: Event) {
        if self.event_sender.send(event).is_err() {
            return;
        }
        if let Some(ctx) = &self.repaint {
            ctx.request_repaint();
        }
    }
}

fn effect_name(effect: &Effect) -> String {
    match effect {
        Effect::Classify { image } => format!("Classify({})", image.name),
        effect => format!("{:?}", effect),
    }
}
