//! A headless classifier form and HTTP client for a document
//! classification service.
//!
//! The form holds the user's input (free text or a selected file,
//! mutually exclusive), submits exactly one request per trigger, and
//! exposes the single panel to render for its current state. Any
//! frontend observes identical behavior by driving the same component.
//!
//! # Basic Usage
//!
//! ```rust,no_run
//! # #[tokio::main]
//! # async fn main() {
//! use doclabel::{format_confidence, ClassifierForm, ClassifyClient, Panel};
//!
//! let client = ClassifyClient::new_default();
//! let mut form = ClassifierForm::new();
//!
//! form.set_text("Invoice #1017: amount due EUR 420.00 by March 31");
//! form.submit(&client).await;
//!
//! match form.view() {
//!     Panel::Result(result) => {
//!         println!("{} ({})", result.label, format_confidence(result.confidence));
//!     }
//!     Panel::Error(error) => eprintln!("{}", error),
//!     _ => {}
//! }
//! # }
//! ```
//!
//! # Uploading a file
//!
//! Selecting a file discards any entered text. The file's decoded
//! content becomes the visible preview, while the raw bytes are what
//! actually gets uploaded:
//!
//! ```rust,no_run
//! # #[tokio::main]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! use doclabel::{ClassifierForm, ClassifyClient, DocumentFile};
//!
//! let client = ClassifyClient::new_default();
//! let mut form = ClassifierForm::new();
//!
//! form.select_file(DocumentFile::load("contract.txt").await?);
//! form.submit(&client).await;
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod form;
pub mod schema;

pub use client::{Classify, ClassifyClient, ClientError, DEFAULT_ENDPOINT, ENDPOINT_ENV};
pub use form::{
    format_confidence, has_accepted_extension, ClassifierForm, ConfidenceBand, DocumentFile,
    FormError, InputState, Panel, RequestStatus, SubmitPayload, ACCEPTED_EXTENSIONS,
    FALLBACK_MESSAGE, VALIDATION_MESSAGE,
};
pub use schema::{ClassificationResult, ClassifyRequest, ErrorBody, HealthResponse};

pub fn init_logger() {
    env_logger::init();
}
