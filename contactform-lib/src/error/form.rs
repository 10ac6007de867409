//! Form setup and lifecycle errors

/// Error type for operations on a [`FormValidator`](crate::form::FormValidator).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    /// A field with this name is already registered on the form.
    #[error("Field '{name}' is already registered")]
    DuplicateField { name: String },

    /// The event refers to a field the form does not know about.
    #[error("Field '{name}' is not registered")]
    UnknownField { name: String },

    /// The form has been disposed and no longer accepts events.
    #[error("Form has been disposed")]
    Disposed,
}

impl FormError {
    /// Creates a new duplicate field error.
    pub fn duplicate(name: impl Into<String>) -> Self {
        Self::DuplicateField { name: name.into() }
    }

    /// Creates a new unknown field error.
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownField { name: name.into() }
    }
}
