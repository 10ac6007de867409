//! Contact form validation engine
//!
//! Validates named form fields, keeps drafts of in-progress input in a
//! key-value store and submits through a pluggable transport. Rendering is
//! left to a caller-supplied [`presenter::Presenter`].

pub mod config;
pub mod draft;
pub mod error;
pub mod field;
pub mod form;
pub mod notify;
pub mod phone;
pub mod presenter;
pub mod transport;
pub mod validation;

pub use config::FormConfig;
pub use field::{FieldKind, FieldSpec};
pub use form::{FormEvent, FormPhase, FormValidator, SubmitOutcome};
