use crate::image_classifier::interface::{PredictError, Prediction};
use crate::image_file::ImageFile;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct State {
    pub image: Option<ImageFile>,
    pub loading: bool,
    pub prediction: Option<Prediction>,
}

impl State {
    /// The last prediction, hidden while a request is in flight.
    pub fn visible_prediction(&self) -> Option<Prediction> {
        if self.loading {
            None
        } else {
            self.prediction
        }
    }
}

#[derive(Debug)]
pub enum Event {
    ChooseFileClicked,
    FilePickDone(Result<Option<ImageFile>, Box<dyn std::error::Error + Send + Sync>>),
    FilesDropped(Vec<ImageFile>),
    DropReadFailed(Box<dyn std::error::Error + Send + Sync>),
    ClassifyDone(Result<Prediction, PredictError>),
    AlertDismissed { finish_loading: bool },
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Fire and forget, its outcome is only logged.
    WarmUp,
    PickFile,
    Classify { image: ImageFile },
    /// `finish_loading` clears the busy flag once the user dismisses the alert.
    ShowAlert { message: String, finish_loading: bool },
}

pub fn init() -> (State, Vec<Effect>) {
    (State::default(), vec![Effect::WarmUp])
}

pub fn transition(state: State, event: Event) -> (State, Vec<Effect>) {
    match event {
        Event::ChooseFileClicked => (state, vec![Effect::PickFile]),

        Event::FilePickDone(Ok(Some(image))) => submit(state, image),
        Event::FilePickDone(Ok(None)) => (state, vec![]),
        Event::FilePickDone(Err(e)) | Event::DropReadFailed(e) => (
            state,
            vec![Effect::ShowAlert {
                message: e.to_string(),
                finish_loading: false,
            }],
        ),

        Event::FilesDropped(files) => match files.into_iter().next() {
            Some(image) => submit(state, image),
            None => (state, vec![]),
        },

        Event::ClassifyDone(Ok(prediction)) => (
            State {
                loading: false,
                prediction: Some(prediction),
                ..state
            },
            vec![],
        ),
        // stays busy until the failure has been acknowledged
        Event::ClassifyDone(Err(e)) => (
            state,
            vec![Effect::ShowAlert {
                message: e.to_string(),
                finish_loading: true,
            }],
        ),

        Event::AlertDismissed {
            finish_loading: true,
        } => (
            State {
                loading: false,
                ..state
            },
            vec![],
        ),
        Event::AlertDismissed {
            finish_loading: false,
        } => (state, vec![]),
    }
}

fn submit(state: State, image: ImageFile) -> (State, Vec<Effect>) {
    (
        State {
            image: Some(image.clone()),
            loading: true,
            ..state
        },
        vec![Effect::Classify { image }],
    )
}
