//! Presentation callback.
//!
//! The form never touches visual styling itself. Everything the user should
//! see goes through a [`Presenter`]: inline field decoration, values pushed
//! back into inputs (phone formatting, restored drafts, reset), the loading
//! state of the submit control and inline banners.

use crate::notify::{Banner, BannerId};
use crate::validation::ValidationResult;

/// Inline decoration of a field.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FieldState {
    /// No decoration.
    #[default]
    Neutral,
    /// The field satisfies its constraints.
    Valid,
    /// The field failed validation with this message.
    Invalid(String),
}

impl From<&ValidationResult> for FieldState {
    fn from(result: &ValidationResult) -> Self {
        if result.is_valid {
            Self::Valid
        } else {
            Self::Invalid(result.message.clone().unwrap_or_default())
        }
    }
}

/// Renders form state for the user.
pub trait Presenter: Send + Sync {
    /// Render or clear the inline decoration of a field.
    fn decorate(&self, field: &str, state: &FieldState);

    /// Show a new value in a field.
    fn set_value(&self, _field: &str, _value: &str) {}

    /// Enter or leave the loading state; `label` is the submit control label to show.
    fn set_loading(&self, _loading: bool, _label: &str) {}

    /// Show an inline banner.
    fn show_banner(&self, _banner: &Banner) {}

    /// Remove an inline banner.
    fn dismiss_banner(&self, _id: BannerId) {}
}
