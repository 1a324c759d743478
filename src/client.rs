use std::env;

use reqwest::multipart;

use crate::schema::{ClassificationResult, ClassifyRequest, ErrorBody, HealthResponse};

/// Environment variable that overrides the service endpoint.
pub const ENDPOINT_ENV: &str = "DOCLABEL_ENDPOINT";

/// The service's fixed local address, used when nothing overrides it.
pub const DEFAULT_ENDPOINT: &str = "http://localhost:8000";

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
    #[error("request failed with status {status}")]
    Service {
        status: u16,
        detail: Option<String>,
    },
    #[error("could not decode service response: {0}")]
    Decode(String),
}

/// The submission seam between the form and the network.
///
/// `ClassifyClient` is the production implementation; tests drive the
/// form through stub implementations instead of a live service.
pub trait Classify {
    fn classify_text(
        &self,
        text: &str,
    ) -> impl std::future::Future<Output = Result<ClassificationResult, ClientError>>;

    fn classify_file(
        &self,
        name: &str,
        bytes: Vec<u8>,
    ) -> impl std::future::Future<Output = Result<ClassificationResult, ClientError>>;
}

/// HTTP client for the document classification service.
#[derive(Debug, Clone)]
pub struct ClassifyClient {
    base_url: String,
    http: reqwest::Client,
}

impl ClassifyClient {
    /// Creates a client against the default endpoint.
    pub fn new_default() -> Self {
        Self::new(Self::default_endpoint())
    }

    /// Returns the endpoint the default client will talk to.
    pub fn default_endpoint() -> String {
        // 1. Check environment variable
        if let Ok(url) = env::var(ENDPOINT_ENV) {
            return url;
        }

        // 2. The service's fixed local address
        DEFAULT_ENDPOINT.to_string()
    }

    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        // No request timeout: an unanswered request stays outstanding
        // until the transport gives up on its own.
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Submits raw text for classification via `POST /classify`.
    ///
    /// The service rejects texts shorter than 10 characters with a 400
    /// and truncates anything beyond 2000 characters; neither rule is
    /// enforced here.
    pub async fn classify_text(&self, text: &str) -> Result<ClassificationResult, ClientError> {
        let url = format!("{}/classify", self.base_url);
        log::info!("Submitting text ({} chars) to {}", text.len(), url);

        let response = self
            .http
            .post(&url)
            .json(&ClassifyRequest {
                text: text.to_string(),
            })
            .send()
            .await?;

        self.decode_result(response).await
    }

    /// Uploads a file for classification via `POST /classify/file`.
    ///
    /// The raw bytes go up as the single multipart field `file`, with
    /// the original filename preserved.
    pub async fn classify_file(
        &self,
        name: &str,
        bytes: Vec<u8>,
    ) -> Result<ClassificationResult, ClientError> {
        let url = format!("{}/classify/file", self.base_url);
        log::info!(
            "Uploading file '{}' ({} bytes) to {}",
            name,
            bytes.len(),
            url
        );

        let part = multipart::Part::bytes(bytes).file_name(name.to_string());
        let form = multipart::Form::new().part("file", part);

        let response = self.http.post(&url).multipart(form).send().await?;

        self.decode_result(response).await
    }

    /// Probes the service's health endpoint.
    pub async fn health(&self) -> Result<HealthResponse, ClientError> {
        let url = format!("{}/health", self.base_url);
        log::info!("Checking service health at {}", url);

        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Service {
                status: status.as_u16(),
                detail: None,
            });
        }

        response
            .json::<HealthResponse>()
            .await
            .map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn decode_result(
        &self,
        response: reqwest::Response,
    ) -> Result<ClassificationResult, ClientError> {
        let status = response.status();
        log::info!("Response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let detail = parse_detail(&body);
            if detail.is_none() {
                log::warn!("Service returned {} without a detail message", status);
            }
            return Err(ClientError::Service {
                status: status.as_u16(),
                detail,
            });
        }

        response.json::<ClassificationResult>().await.map_err(|e| {
            if e.is_decode() {
                ClientError::Decode(e.to_string())
            } else {
                ClientError::Request(e)
            }
        })
    }
}

impl Classify for ClassifyClient {
    async fn classify_text(&self, text: &str) -> Result<ClassificationResult, ClientError> {
        ClassifyClient::classify_text(self, text).await
    }

    async fn classify_file(
        &self,
        name: &str,
        bytes: Vec<u8>,
    ) -> Result<ClassificationResult, ClientError> {
        ClassifyClient::classify_file(self, name, bytes).await
    }
}

/// Extracts the service's human-readable `detail` message from an error
/// body, if the body carries one.
fn parse_detail(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_endpoint() {
        // Test with environment variable
        env::set_var(ENDPOINT_ENV, "http://classify.internal:9000");
        assert_eq!(
            ClassifyClient::default_endpoint(),
            "http://classify.internal:9000"
        );
        env::remove_var(ENDPOINT_ENV);

        // Test without environment variable
        assert_eq!(ClassifyClient::default_endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = ClassifyClient::new("http://localhost:8000/");
        assert_eq!(client.base_url(), "http://localhost:8000");
    }

    #[test]
    fn test_parse_detail() {
        assert_eq!(
            parse_detail(r#"{"detail": "file too large"}"#),
            Some("file too large".to_string())
        );
        assert_eq!(parse_detail(r#"{"detail": null}"#), None);
        assert_eq!(parse_detail(r#"{"other": "field"}"#), None);
        assert_eq!(parse_detail("<html>Bad Gateway</html>"), None);
        assert_eq!(parse_detail(""), None);
    }
}
