use validator::{Validate, ValidationErrors};

use crate::errors::AppError;
use crate::models::response::FieldViolation;

pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), AppError> {
    payload
        .validate()
        .map_err(|err| AppError::Validation(collect_violations(&err)))
}

/// Flattens every field error into `{field, message}` pairs, sorted by field
/// name so the response order is stable.
pub fn collect_violations(err: &ValidationErrors) -> Vec<FieldViolation> {
    let mut violations: Vec<FieldViolation> = err
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldViolation {
                field: field.to_string(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string()),
            })
        })
        .collect();
    violations.sort_by(|a, b| a.field.cmp(&b.field));
    violations
}
