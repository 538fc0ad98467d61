use crate::alert::interface::Alert;
use crate::file_picker::interface::FilePicker;
use crate::image_classifier::interface::ImageClassifier;
use crate::image_file::ImageFile;
use crate::library::logger::interface::Logger;
use crate::predictor::core::{init, transition, Effect, Event, State};
use crate::predictor::render::Render;
use crate::predictor::run_effect::RunEffect;
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::sync::Arc;
use std::time::Duration;

/// Upload widget: owns the state and feeds effect results back into `transition`.
pub struct Predictor {
    state: State,
    logger: Arc<dyn Logger + Send + Sync>,
    run_effect: RunEffect,
    event_receiver: Receiver<Event>,
    render: Render,
}

impl Predictor {
    pub fn new(
        logger: Arc<dyn Logger + Send + Sync>,
        image_classifier: Arc<dyn ImageClassifier + Send + Sync>,
        file_picker: Arc<dyn FilePicker + Send + Sync>,
        alert: Arc<dyn Alert + Send + Sync>,
    ) -> Self {
        let logger = logger.with_namespace("predictor");
        let (event_sender, event_receiver) = channel();
        let run_effect = RunEffect::new(
            logger.clone(),
            image_classifier,
            file_picker,
            alert,
            event_sender,
        );

        Self {
            state: State::default(),
            logger,
            run_effect,
            event_receiver,
            render: Render::new(),
        }
    }

    pub fn set_repaint(&mut self, ctx: egui::Context) {
        self.run_effect.set_repaint(ctx);
    }

    #[allow(dead_code)]
    pub fn state(&self) -> &State {
        &self.state
    }

    pub fn start(&mut self) {
        let (state, effects) = init();
        self.state = state;
        self.execute_effects(effects);
    }

    pub fn dispatch(&mut self, event: Event) {
        let _ = self.logger.info(&format!(
            "\nold state:\n\t{:?}\n\nevent:\n\t{:?}",
            self.state, event
        ));

        let (new_state, effects) = transition(self.state.clone(), event);

        let _ = self.logger.info(&format!(
            "\nnew state:\n\t{:?}\n\neffects:\n\t{:?}",
            new_state, effects
        ));

        self.state = new_state;
        self.execute_effects(effects);
    }

    /// Applies every event the effects have reported so far.
    pub fn poll(&mut self) {
        while let Ok(event) = self.event_receiver.try_recv() {
            self.dispatch(event);
        }
    }

    /// Waits for one reported event and applies it. Returns false on timeout.
    #[allow(dead_code)]
    pub fn poll_blocking(&mut self, timeout: Duration) -> bool {
        match self.event_receiver.recv_timeout(timeout) {
            Ok(event) => {
                self.dispatch(event);
                true
            }
            Err(RecvTimeoutError::Timeout) | Err(RecvTimeoutError::Disconnected) => false,
        }
    }

    pub fn ui(&mut self, ui: &mut egui::Ui) {
        let dropped = ui.ctx().input(|i| i.raw.dropped_files.clone());
        self.drop_files(&dropped);

        for event in self.render.render(ui, &self.state) {
            self.dispatch(event);
        }
    }

    pub fn drop_files(&mut self, dropped: &[egui::DroppedFile]) {
        if let Some(event) = dropped_event(dropped) {
            self.dispatch(event);
        }
    }

    fn execute_effects(&self, effects: Vec<Effect>) {
        for effect in effects {
            let run_effect = self.run_effect.clone();
            std::thread::spawn(move || run_effect.run_effect(effect));
        }
    }
}

/// Only the first dropped file is read, the rest are ignored.
pub fn dropped_event(dropped: &[egui::DroppedFile]) -> Option<Event> {
    let first = dropped.first()?;
    match ImageFile::from_dropped(first) {
        Ok(Some(image)) => Some(Event::FilesDropped(vec![image])),
        Ok(None) => None,
        Err(e) => Some(Event::DropReadFailed(
            format!("could not read {}: {}", first.name, e).into(),
        )),
    }
}
