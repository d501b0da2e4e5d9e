//! Create/update payload handling.
//!
//! A payload goes through four steps before it reaches the store: legacy
//! keys are renamed, whole-number fields sent as strings become integers,
//! the edit-form rules run, and the result round-trips through the typed
//! record so defaults and types are enforced. Update then
//! carries server-derived fields over from the stored row.

use schema::{Account, Case, PageObject, Project, Record, ResourceKind, Suite, Task, coerce_integers};
use serde_json::Value;
use time::OffsetDateTime;
use time::macros::format_description;

use crate::response::ApiError;
use crate::state::Row;

/// Old wire names still accepted on input.
const LEGACY_KEYS: &[(ResourceKind, &str, &str)] = &[
    (ResourceKind::Task, "name", "task_name"),
    (ResourceKind::Task, "suite_id", "test_suite"),
    (ResourceKind::Case, "action", "action_type"),
    (ResourceKind::Case, "po_id", "po"),
];

/// Field stamped with the creation time, if the resource has one.
#[must_use]
pub fn timestamp_field(kind: ResourceKind) -> Option<&'static str> {
    match kind {
        ResourceKind::Project => Some("create_time"),
        ResourceKind::PageObject | ResourceKind::Account | ResourceKind::Suite => Some("created_at"),
        ResourceKind::Task | ResourceKind::Case => None,
    }
}

/// Current UTC time as `YYYY-MM-DD HH:MM:SS`.
#[must_use]
pub fn now_stamp() -> String {
    let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
    OffsetDateTime::now_utc().format(&format).unwrap_or_default()
}

/// Rename legacy keys, validate and normalize a payload.
///
/// # Errors
///
/// [`ApiError::BadRequest`] for a non-object body or values of the wrong
/// type; [`ApiError::Validation`] listing every rule violation.
pub fn normalize(kind: ResourceKind, body: Value) -> Result<Row, ApiError> {
    let Value::Object(mut row) = body else {
        return Err(ApiError::BadRequest("expected a JSON object".to_owned()));
    };
    for (_, legacy, current) in LEGACY_KEYS.iter().filter(|(k, _, _)| *k == kind) {
        if let Some(value) = row.remove(*legacy) {
            row.entry(*current).or_insert(value);
        }
    }
    coerce_integers(kind.schema().edit_form, &mut row);
    kind.validate(&row)?;

    let mut typed = match kind {
        ResourceKind::Project => through::<Project>(row)?,
        ResourceKind::Task => through::<Task>(row)?,
        ResourceKind::Account => through::<Account>(row)?,
        ResourceKind::PageObject => through::<PageObject>(row)?,
        ResourceKind::Case => through::<Case>(row)?,
        ResourceKind::Suite => through::<Suite>(row)?,
    };
    typed.remove("id");
    Ok(typed)
}

fn through<R: Record>(row: Row) -> Result<Row, ApiError> {
    let record: R = serde_json::from_value(Value::Object(row)).map_err(|e| ApiError::BadRequest(e.to_string()))?;
    match serde_json::to_value(record) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ApiError::BadRequest("record did not serialize to an object".to_owned())),
        Err(e) => Err(ApiError::BadRequest(e.to_string())),
    }
}

/// Stamp the creation time on a new row.
pub fn stamp_created(kind: ResourceKind, row: &mut Row) {
    if let Some(field) = timestamp_field(kind) {
        row.insert(field.to_owned(), Value::String(now_stamp()));
    }
}

/// Carry derived fields from the stored row into an update. The creation
/// timestamp always wins from `stored`; other derived fields only fill gaps.
pub fn carry_derived(kind: ResourceKind, stored: &Row, row: &mut Row) {
    let stamp = timestamp_field(kind);
    for field in kind.schema().derived_fields {
        let Some(previous) = stored.get(*field) else { continue };
        let missing = row.get(*field).is_none_or(Value::is_null);
        if stamp == Some(*field) || missing {
            row.insert((*field).to_owned(), previous.clone());
        }
    }
}

#[cfg(test)]
#[path = "payload_test.rs"]
mod tests;
