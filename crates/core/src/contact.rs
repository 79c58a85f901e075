//! Public contact form validation.

use serde::Deserialize;
use validator::Validate;

use crate::error::{field_errors, CoreError, FieldErrors};

/// A contact form submission as posted by the site.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ContactForm {
    #[validate(length(max = 120, message = "Name must be at most 120 characters"))]
    pub name: String,
    #[validate(email(message = "Enter a valid email address"))]
    pub email: String,
    #[validate(length(max = 40, message = "Phone must be at most 40 characters"))]
    pub phone: Option<String>,
    #[validate(length(max = 5000, message = "Message must be at most 5000 characters"))]
    pub message: String,
    /// Free-text vehicle description, usually prefilled from the power checker.
    #[validate(length(max = 200, message = "Vehicle must be at most 200 characters"))]
    pub vehicle: Option<String>,
}

impl ContactForm {
    /// Run all field checks and report every failure at once.
    pub fn check(&self) -> Result<(), CoreError> {
        let mut errors = match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(e) => field_errors(&e),
        };
        for (field, value) in [("name", &self.name), ("message", &self.message)] {
            if value.trim().is_empty() {
                errors
                    .entry(field.to_string())
                    .or_default()
                    .insert(0, "This field is required".to_string());
            }
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(CoreError::InvalidFields(errors))
        }
    }

    /// Trimmed copy for storage; blank optional fields become `None`.
    pub fn normalized(&self) -> Self {
        let opt = |v: &Option<String>| {
            v.as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        Self {
            name: self.name.trim().to_string(),
            email: self.email.trim().to_string(),
            phone: opt(&self.phone),
            message: self.message.trim().to_string(),
            vehicle: opt(&self.vehicle),
        }
    }
}
