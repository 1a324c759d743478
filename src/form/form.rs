use crate::client::{Classify, ClientError};
use crate::schema::ClassificationResult;

use super::error::FormError;
use super::input::{DocumentFile, InputState};

/// Where the current submission attempt stands. Drives which panel is
/// rendered; exactly one is active at a time.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RequestStatus {
    #[default]
    Idle,
    InFlight,
    Succeeded,
    Failed,
}

/// What goes over the wire for one submission: the raw text, or the
/// selected file's raw bytes. When a file is held its bytes are the
/// payload, never the decoded preview.
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitPayload {
    Text(String),
    File { name: String, bytes: Vec<u8> },
}

/// The classifier form: input capture, submission orchestration, and
/// the state the render layer projects from.
///
/// The component is headless. All transitions live here so any
/// frontend (the bundled CLI, tests, a GUI shell) drives it the same
/// way: mutate the input, call [`submit`](Self::submit), render the
/// [`view`](Self::view).
#[derive(Debug, Default)]
pub struct ClassifierForm {
    input: InputState,
    status: RequestStatus,
    result: Option<ClassificationResult>,
    error: Option<FormError>,
}

impl ClassifierForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the stored text verbatim, discarding any selected file.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.input = InputState::Text(text.into());
    }

    /// Selects a file, discarding any entered text. The file's decoded
    /// preview becomes the visible text.
    pub fn select_file(&mut self, file: DocumentFile) {
        self.input = InputState::File(file);
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn status(&self) -> RequestStatus {
        self.status
    }

    pub fn result(&self) -> Option<&ClassificationResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&FormError> {
        self.error.as_ref()
    }

    /// Whether the submit trigger is enabled. False while a request is
    /// outstanding or when there is nothing to submit; disabling the
    /// trigger is the only guard against concurrent submissions.
    pub fn can_submit(&self) -> bool {
        self.status() != RequestStatus::InFlight && !self.input.is_empty()
    }

    /// Starts a submission attempt.
    ///
    /// Fails fast with the local validation message when the input is
    /// empty; no network call is made in that case. Otherwise previous
    /// result and error are cleared immediately so stale data is never
    /// visible during the new request, the status becomes
    /// [`RequestStatus::InFlight`], and the payload to send is
    /// returned.
    pub fn begin_submit(&mut self) -> Result<SubmitPayload, FormError> {
        if self.status() == RequestStatus::InFlight {
            // Unreachable through a frontend that honors can_submit();
            // rejected here without touching the outstanding attempt.
            return Err(FormError::Unknown(
                "a submission is already in flight".to_string(),
            ));
        }

        if self.input.is_empty() {
            log::info!("Submission rejected: no text or file supplied");
            self.status = RequestStatus::Failed;
            self.result = None;
            self.error = Some(FormError::Validation);
            return Err(FormError::Validation);
        }

        self.status = RequestStatus::InFlight;
        self.result = None;
        self.error = None;

        let payload = match &self.input {
            InputState::File(file) => SubmitPayload::File {
                name: file.name.clone(),
                bytes: file.bytes.clone(),
            },
            InputState::Text(text) => SubmitPayload::Text(text.clone()),
        };
        Ok(payload)
    }

    /// Finishes a submission attempt with the outcome of its single
    /// request. A success replaces the previous result wholesale; a
    /// failure is terminal until the user resubmits.
    pub fn complete_submit(&mut self, outcome: Result<ClassificationResult, ClientError>) {
        match outcome {
            Ok(result) => {
                log::info!(
                    "Classified as '{}' (confidence {:.3})",
                    result.label,
                    result.confidence
                );
                self.status = RequestStatus::Succeeded;
                self.result = Some(result);
                self.error = None;
            }
            Err(err) => {
                log::error!("Classification error: {}", err);
                self.status = RequestStatus::Failed;
                self.result = None;
                self.error = Some(FormError::from(err));
            }
        }
    }

    /// Runs one full submission: validation, exactly one request
    /// through the backend seam, and outcome recording. A validation
    /// failure short-circuits before the network.
    pub async fn submit<C: Classify>(&mut self, backend: &C) {
        let payload = match self.begin_submit() {
            Ok(payload) => payload,
            Err(_) => return,
        };

        let outcome = match payload {
            SubmitPayload::Text(text) => backend.classify_text(&text).await,
            SubmitPayload::File { name, bytes } => backend.classify_file(&name, bytes).await,
        };

        self.complete_submit(outcome);
    }
}
