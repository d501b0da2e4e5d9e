//! Descriptor-driven form validation.
//!
//! Validation collects every violation instead of stopping at the first, so
//! a form can highlight all bad fields at once.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::descriptor::{FieldDescriptor, OptionItem, OptionSource, Scalar};
use crate::dictionary;
use crate::rules::{RuleKind, RuleViolation, as_integer, is_blank};

/// One rejected field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub field: String,
    /// i18n key of the message.
    pub message: String,
    pub code: String,
}

impl FieldError {
    #[must_use]
    pub fn new(field: &str, message: &str, code: &str) -> Self {
        Self { field: field.to_owned(), message: message.to_owned(), code: code.to_owned() }
    }

    fn from_violation(field: &str, violation: RuleViolation) -> Self {
        Self::new(field, violation.message_key(), violation.code())
    }
}

/// All violations found in one submission.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} field(s) failed validation", .0.len())]
pub struct FormErrors(pub Vec<FieldError>);

impl FormErrors {
    #[must_use]
    pub fn fields(&self) -> Vec<&str> {
        self.0.iter().map(|e| e.field.as_str()).collect()
    }
}

/// Validate submitted values against a form schema.
///
/// Hidden fields are skipped. For each visible field: a blank value fails a
/// required field; a present value must satisfy the field's rule; and
/// `Select`/`RadioButtonGroup` values must be one of the declared options
/// (`DictSelect` values one of the dictionary's).
///
/// # Errors
///
/// Returns [`FormErrors`] listing every violation in field order.
pub fn validate_form(fields: &[FieldDescriptor], values: &Map<String, Value>) -> Result<(), FormErrors> {
    let errors = collect_errors(fields, values);
    if errors.is_empty() { Ok(()) } else { Err(FormErrors(errors)) }
}

pub(crate) fn collect_errors(fields: &[FieldDescriptor], values: &Map<String, Value>) -> Vec<FieldError> {
    let mut errors = Vec::new();
    for desc in fields.iter().filter(|f| f.visible) {
        let value = values.get(desc.field).unwrap_or(&Value::Null);

        if is_blank(value) {
            if desc.required {
                errors.push(FieldError::from_violation(desc.field, RuleViolation::Missing));
            }
            continue;
        }

        if let Some(rule) = desc.rule {
            if let Err(violation) = rule.check(value) {
                errors.push(FieldError::from_violation(desc.field, violation));
                continue;
            }
        }

        if let Some(allowed) = allowed_options(desc) {
            if !allowed.iter().any(|opt| opt.value.matches(value)) {
                errors.push(FieldError::new(desc.field, "form.notAnOption", "not_an_option"));
            }
        }
    }
    errors
}

/// Closed option set a value must come from: static options of a select or
/// radio group, or the dictionary behind a `DictSelect`.
fn allowed_options(desc: &FieldDescriptor) -> Option<&'static [OptionItem]> {
    if desc.component.uses_static_options() && !desc.options.is_empty() {
        return Some(desc.options);
    }
    match desc.source {
        Some(OptionSource::Dictionary { code }) => dictionary::lookup(code),
        _ => None,
    }
}

/// Rewrite whole-number fields to JSON integers.
///
/// Applies to fields under an integer rule and to fields whose options are
/// all integers. Numeric strings become numbers, blank strings become
/// `null`, and list elements are rewritten one by one. Anything else is
/// left for validation to reject.
pub fn coerce_integers(fields: &[FieldDescriptor], values: &mut Map<String, Value>) {
    for desc in fields.iter().filter(|f| holds_integers(f)) {
        if let Some(value) = values.get_mut(desc.field) {
            coerce_integer(value);
        }
    }
}

fn holds_integers(desc: &FieldDescriptor) -> bool {
    desc.rule.is_some_and(|r| r.kind == RuleKind::Integer)
        || (!desc.options.is_empty() && desc.options.iter().all(|o| matches!(o.value, Scalar::Int(_))))
}

fn coerce_integer(value: &mut Value) {
    if let Value::Array(items) = value {
        items.iter_mut().for_each(coerce_integer);
        return;
    }
    let replacement = match &*value {
        Value::String(s) if s.trim().is_empty() => Some(Value::Null),
        Value::String(_) => as_integer(value).map(Value::from),
        _ => None,
    };
    if let Some(replacement) = replacement {
        *value = replacement;
    }
}

#[cfg(test)]
#[path = "form_test.rs"]
mod tests;
