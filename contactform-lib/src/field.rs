//! Field declarations.

use serde::{Deserialize, Serialize};

/// What kind of value a field holds.
///
/// The kind decides which extra rules apply on top of `required`: email
/// fields are pattern-checked and phone fields are reformatted as the user
/// types. `Submit` marks the submit control itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    #[default]
    Text,
    Email,
    Phone,
    Other,
    Submit,
}

impl FieldKind {
    /// Whether this kind denotes a submit control.
    pub fn is_submit(self) -> bool {
        matches!(self, Self::Submit)
    }
}

/// A named field and its constraints.
///
/// # Example
///
/// ```ignore
/// let email = FieldSpec::new("email", FieldKind::Email).required();
/// let phone = FieldSpec::new("phone", FieldKind::Phone).max_length(20);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    /// Field name, unique within a form.
    pub name: String,
    /// Whether an empty value is rejected.
    pub required: bool,
    /// Kind of value held by the field.
    pub kind: FieldKind,
    /// Value as last entered by the user.
    pub current_value: String,
    /// Maximum length in characters.
    pub max_length: Option<usize>,
    /// Allowed values for choice fields.
    pub choices: Option<Vec<String>>,
}

impl FieldSpec {
    /// Create an optional, empty field.
    pub fn new(name: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            required: false,
            kind,
            current_value: String::new(),
            max_length: None,
            choices: None,
        }
    }

    /// Create a submit control.
    pub fn submit(name: impl Into<String>) -> Self {
        Self::new(name, FieldKind::Submit)
    }

    /// Mark the field as required.
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// Limit the value to `max` characters.
    pub fn max_length(mut self, max: usize) -> Self {
        self.max_length = Some(max);
        self
    }

    /// Restrict the value to one of `choices`.
    pub fn choices<I, S>(mut self, choices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.choices = Some(choices.into_iter().map(Into::into).collect());
        self
    }

    /// Set the initial value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.current_value = value.into();
        self
    }

    /// Whether values of this field are kept as drafts.
    pub fn persists(&self) -> bool {
        !self.kind.is_submit()
    }

    /// Whether the field takes part in validation and submission.
    pub fn is_input(&self) -> bool {
        !self.kind.is_submit()
    }
}
