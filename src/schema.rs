use serde::{Deserialize, Serialize};

/// Request body for the text classification endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct ClassifyRequest {
    pub text: String,
}

/// A classification outcome returned by the service: the predicted
/// category and a confidence score in `[0, 1]`.
///
/// Results are replaced wholesale by the next successful submission,
/// never merged.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub label: String,
    pub confidence: f32,
}

/// Error body the service may attach to a non-2xx response.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    pub detail: Option<String>,
}

/// Response body of the health endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
