use reqwest::header::CACHE_CONTROL;
use reqwest::{RequestBuilder, Response};
use thiserror::Error;

/// Transport failures and rejected requests surface the same way: an
/// operation label plus whatever reason text is at hand (the HTTP status
/// line for server rejections). The server never returns a structured
/// error payload, so nothing more is parsed.
#[derive(Debug, Error)]
#[error("{operation} failed : {reason}")]
pub struct ApiError {
    operation: &'static str,
    reason: String,
}

impl ApiError {
    pub(crate) fn new(operation: &'static str, reason: impl Into<String>) -> Self {
        Self {
            operation,
            reason: reason.into(),
        }
    }

    pub fn operation(&self) -> &str {
        self.operation
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// Sends a request and accepts any 2xx answer. Failed requests are not
/// retried; the caller decides whether the user gets to try again.
pub(crate) async fn send_expecting_success(
    operation: &'static str,
    builder: RequestBuilder,
) -> Result<Response, ApiError> {
    let response = builder
        .header(CACHE_CONTROL, "no-cache")
        .send()
        .await
        .map_err(|err| ApiError::new(operation, err.to_string()))?;
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    Err(ApiError::new(operation, status.to_string()))
}
