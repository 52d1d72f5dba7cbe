use crate::dto::{request::UpstreamGenerateRequest, response::UpstreamGenerateResponse};
use async_trait::async_trait;
use reqwest::{header, Client, StatusCode};
use thiserror::Error;
use url::Url;

#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("failed to reach the QR service: {0}")]
    Request(#[source] reqwest::Error),
    #[error("QR service answered with status {0}")]
    Status(StatusCode),
    #[error("failed to parse the QR service response: {0}")]
    Decode(#[source] reqwest::Error),
}

/// Something that turns a url into a QR code.
#[async_trait]
pub trait QrGenerator: Send + Sync {
    async fn generate(&self, url: &str) -> Result<UpstreamGenerateResponse, GeneratorError>;
}

/// Calls the generation service over HTTP.
#[derive(Debug, Clone)]
pub struct HttpQrGenerator {
    client: Client,
    endpoint: Url,
}

impl HttpQrGenerator {
    pub fn new(endpoint: Url) -> Self {
        Self {
            client: Client::new(),
            endpoint,
        }
    }
}

#[async_trait]
impl QrGenerator for HttpQrGenerator {
    async fn generate(&self, url: &str) -> Result<UpstreamGenerateResponse, GeneratorError> {
        let request_body = UpstreamGenerateRequest {
            url: url.to_string(),
        };
        let res = self
            .client
            .post(self.endpoint.clone())
            .header(header::CONTENT_TYPE, "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(GeneratorError::Request)?;

        if !res.status().is_success() {
            return Err(GeneratorError::Status(res.status()));
        }

        res.json::<UpstreamGenerateResponse>()
            .await
            .map_err(GeneratorError::Decode)
    }
}
