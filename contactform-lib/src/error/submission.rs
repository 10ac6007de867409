//! Submission transport errors

/// Error reported by a submission transport.
///
/// Every variant carries a human-readable message that can be shown to the
/// user through [`SubmissionError::message`].
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The transport failed with a plain message.
    #[error("{0}")]
    Transport(String),

    /// The receiving end answered with a non-success status.
    #[error("submission rejected with status {status}: {message}")]
    Rejected { status: u16, message: String },

    /// The HTTP request could not be completed.
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),
}

impl SubmissionError {
    /// Creates a transport error from a message.
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport(message.into())
    }

    /// The message suitable for a failure banner.
    pub fn message(&self) -> String {
        match self {
            Self::Transport(message) => message.clone(),
            Self::Rejected { message, .. } => message.clone(),
            Self::Request(err) => err.to_string(),
        }
    }
}
