//! Declarative payload validation.
//!
//! Input shapes declare their rules with `#[derive(Validate)]` and
//! `#[validate(...)]` attributes; [`validate_payload`] runs those rules for
//! any such type and flattens the result into an ordered list of
//! [`FieldViolation`]s that can be returned to API clients as-is.

use std::borrow::Cow;

use serde::Serialize;
use validator::{Validate, ValidationError, ValidationErrors, ValidationErrorsKind};

use crate::error::CoreError;

/// Rule code used for missing or blank required text.
pub const REQUIRED: &str = "required";

/// A single broken rule on a single field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldViolation {
    /// Fully-qualified field name, e.g. `CreateNoteInput.title`.
    pub field: String,
    /// Code of the rule that failed, e.g. `required` or `length`.
    pub tag: String,
    /// Rule parameter, e.g. the maximum length. Omitted when the rule has none.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

impl FieldViolation {
    pub fn new(field: impl Into<String>, tag: impl Into<String>, value: Option<String>) -> Self {
        Self {
            field: field.into(),
            tag: tag.into(),
            value,
        }
    }
}

/// Evaluate the declared rules of `payload`.
///
/// Returns `Ok(())` when every rule holds, otherwise the violations sorted by
/// field name and rule code.
pub fn validate_payload<T: Validate>(payload: &T) -> Result<(), Vec<FieldViolation>> {
    match payload.validate() {
        Ok(()) => Ok(()),
        Err(errors) => {
            let mut violations = Vec::new();
            collect(short_type_name::<T>(), &errors, &mut violations);
            violations.sort_by(|a, b| a.field.cmp(&b.field).then_with(|| a.tag.cmp(&b.tag)));
            Err(violations)
        }
    }
}

/// Same as [`validate_payload`] but folded into [`CoreError::Validation`].
pub fn ensure_valid<T: Validate>(payload: &T) -> Result<(), CoreError> {
    validate_payload(payload).map_err(CoreError::Validation)
}

/// Custom rule: text must contain at least one non-whitespace character.
pub fn required_text(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new(REQUIRED));
    }
    Ok(())
}

/// Custom rule for optional updates: an empty string means "not sent", any
/// other value must contain a non-whitespace character.
pub fn present_text(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Ok(());
    }
    required_text(value)
}

fn collect(prefix: &str, errors: &ValidationErrors, out: &mut Vec<FieldViolation>) {
    for (field, kind) in errors.errors() {
        let path = format!("{prefix}.{field}");
        match kind {
            ValidationErrorsKind::Field(field_errors) => {
                for err in field_errors {
                    out.push(FieldViolation::new(
                        path.clone(),
                        err.code.to_string(),
                        rule_param(err),
                    ));
                }
            }
            ValidationErrorsKind::Struct(nested) => collect(&path, nested, out),
            ValidationErrorsKind::List(items) => {
                for (index, nested) in items {
                    collect(&format!("{path}[{index}]"), nested, out);
                }
            }
        }
    }
}

/// The first rule parameter other than the offending value itself.
fn rule_param(err: &ValidationError) -> Option<String> {
    let mut params: Vec<(&Cow<'static, str>, &serde_json::Value)> = err
        .params
        .iter()
        .filter(|&(key, _)| key != "value")
        .collect();
    params.sort_by(|a, b| a.0.cmp(b.0));

    params.first().map(|(_, value)| match value {
        serde_json::Value::String(s) => s.clone(),
        other => other.to_string(),
    })
}

fn short_type_name<T>() -> &'static str {
    let full = std::any::type_name::<T>();
    let base = full.split('<').next().unwrap_or(full);
    base.rsplit("::").next().unwrap_or(base)
}
