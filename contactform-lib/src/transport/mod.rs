//! Submission transports.

mod http;

pub use http::HttpTransport;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::SubmissionError;

/// Values sent on submission, in field registration order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Submission {
    fields: Vec<(String, String)>,
}

impl Submission {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Name/value pairs.
    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Value of a field.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

/// Delivers a submission somewhere.
///
/// Implementations own their timeout policy; the form awaits the call
/// without cancelling it.
#[async_trait]
pub trait SubmissionTransport: Send + Sync {
    async fn submit(&self, submission: &Submission) -> Result<(), SubmissionError>;
}
