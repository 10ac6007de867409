//! Error types

mod draft;
mod form;
mod submission;
mod validation;

pub use draft::*;
pub use form::*;
pub use submission::*;
pub use validation::*;
