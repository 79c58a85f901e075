use std::collections::BTreeMap;

use crate::types::DbId;

/// Per-field validation messages, keyed by field name.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Validation failed for {} field(s)", .0.len())]
    InvalidFields(FieldErrors),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Forbidden: {0}")]
    Forbidden(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Flatten `validator` errors into [`FieldErrors`].
///
/// Uses the rule's message when one is set, otherwise its code.
pub fn field_errors(errors: &validator::ValidationErrors) -> FieldErrors {
    let mut out = FieldErrors::new();
    for (field, errs) in errors.field_errors() {
        let messages = errs
            .iter()
            .map(|e| {
                e.message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string())
            })
            .collect::<Vec<_>>();
        out.entry(field.to_string()).or_default().extend(messages);
    }
    out
}
