pub mod errors;
pub mod icon;

pub mod blog;
pub mod faq;
pub mod gallery;
pub mod inquiry;
pub mod service;
pub mod testimonial;

use errors::ModelError;

/// Field-presence validation run before any mutation is dispatched.
pub trait Validate {
    fn validate(&self) -> Result<(), ModelError>;
}

pub(crate) fn require(field: &str, value: &str) -> Result<(), ModelError> {
    if value.trim().is_empty() {
        return Err(ModelError::Validation(format!("{field} is required")));
    }
    Ok(())
}
