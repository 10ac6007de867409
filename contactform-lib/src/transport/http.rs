//! HTTP form-post transport.

use async_trait::async_trait;
use url::Url;

use super::{Submission, SubmissionTransport};
use crate::error::SubmissionError;

/// Posts submissions as `application/x-www-form-urlencoded` to an endpoint.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: reqwest::Client,
    endpoint: Url,
}

impl HttpTransport {
    pub fn new(endpoint: Url) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Use a preconfigured client (timeouts, headers).
    pub fn with_client(client: reqwest::Client, endpoint: Url) -> Self {
        Self { client, endpoint }
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }
}

#[async_trait]
impl SubmissionTransport for HttpTransport {
    async fn submit(&self, submission: &Submission) -> Result<(), SubmissionError> {
        log::debug!(
            "HttpTransport: posting {} fields to {}",
            submission.len(),
            self.endpoint
        );

        let response = self
            .client
            .post(self.endpoint.clone())
            .form(submission.fields())
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        let body = response.text().await.unwrap_or_default();
        let message = rejection_message(status, &body);
        log::warn!("HttpTransport: rejected with {}: {}", status, message);

        Err(SubmissionError::Rejected {
            status: status.as_u16(),
            message,
        })
    }
}

/// Pick the message shown for a rejected submission.
fn rejection_message(status: reqwest::StatusCode, body: &str) -> String {
    let body = body.trim();
    if !body.is_empty() && body.len() <= 200 && !body.starts_with('<') {
        return body.to_string();
    }
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
}
