use crate::error::SubmissionError;
use crate::validation::ValidationReport;

/// Lifecycle phase of a form.
///
/// ```text
/// Idle -> Validating -> Idle                 (rejected, errors shown)
///                    -> Submitting -> Idle   (succeeded and reset, or failed)
/// any  -> Disposed
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FormPhase {
    #[default]
    Idle,
    Validating,
    Submitting,
    Disposed,
}

/// What a call to `submit` did.
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Validation failed; nothing was sent.
    Rejected(ValidationReport),
    /// Another submission is in flight; this call did nothing.
    Busy,
    /// The transport accepted the submission. Values and drafts were cleared.
    Succeeded,
    /// The transport failed. Values were kept for a retry.
    Failed(SubmissionError),
}

impl SubmitOutcome {
    pub fn is_succeeded(&self) -> bool {
        matches!(self, Self::Succeeded)
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Busy)
    }
}
