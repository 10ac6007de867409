//! Field validation.
//!
//! Every validation pass produces a fresh [`ValidationReport`] holding one
//! [`ValidationResult`] per input field. Rules are derived from the
//! [`FieldSpec`](crate::field::FieldSpec) itself; see [`rules::check`] for
//! the order in which they run.
//!
//! # Example
//!
//! ```ignore
//! let report = form.validate();
//!
//! if report.is_valid() {
//!     // Proceed with form submission
//! } else if let Some(field) = report.first_invalid_field() {
//!     log::debug!("first invalid field: {}", field);
//! }
//! ```

mod result;
pub mod rules;

pub use result::{ValidationReport, ValidationResult};
pub use rules::{EMAIL_MESSAGE, REQUIRED_MESSAGE};
