mod error;
mod form;
mod input;
mod view;

pub use error::{FormError, FALLBACK_MESSAGE, VALIDATION_MESSAGE};
pub use form::{ClassifierForm, RequestStatus, SubmitPayload};
pub use input::{has_accepted_extension, DocumentFile, InputState, ACCEPTED_EXTENSIONS};
pub use view::{format_confidence, ConfidenceBand, Panel};
