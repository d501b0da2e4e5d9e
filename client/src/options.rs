//! Option lists for dependent form fields.
//!
//! A field's [`OptionSource`] names either another resource's `list` call or
//! a dictionary. Remote records are mapped through the source's
//! `label_field` / `value_field` / `key_field`; dictionary and static options
//! only need their labels translated.

use schema::{FieldDescriptor, OptionItem, OptionSource, Translate, dictionary};
use serde::Serialize;
use serde_json::Value;

use crate::api::{ListParams, RunnerClient};
use crate::error::ApiError;

/// Page size used while collecting a source resource's records.
const SOURCE_PAGE_SIZE: u32 = 100;

/// One option as handed to a select-like component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResolvedOption {
    pub label: String,
    pub value: Value,
    pub key: Value,
}

/// Map source records through a field mapping.
///
/// # Errors
///
/// Returns [`ApiError::UnknownField`] when a record lacks `label_field` or
/// `value_field`. A missing `key_field` maps to `null`.
pub fn map_options(
    records: &[Value],
    label_field: &str,
    value_field: &str,
    key_field: &str,
) -> Result<Vec<ResolvedOption>, ApiError> {
    records
        .iter()
        .map(|record| -> Result<ResolvedOption, ApiError> {
            let pick = |field: &str| record.get(field).cloned();
            let label = pick(label_field).ok_or_else(|| ApiError::UnknownField(label_field.to_owned()))?;
            let value = pick(value_field).ok_or_else(|| ApiError::UnknownField(value_field.to_owned()))?;
            Ok(ResolvedOption { label: label_text(&label), value, key: pick(key_field).unwrap_or(Value::Null) })
        })
        .collect()
}

fn label_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// Translate static option items; the value doubles as the key.
#[must_use]
pub fn translate_items(items: &[OptionItem], t: &impl Translate) -> Vec<ResolvedOption> {
    items
        .iter()
        .map(|item| {
            let value = item.value.to_value();
            ResolvedOption { label: t.t(item.label), key: value.clone(), value }
        })
        .collect()
}

impl RunnerClient {
    /// Resolve the options behind an [`OptionSource`].
    ///
    /// Resource sources page through the whole list.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::UnknownDictionary`] for unregistered codes, and any
    /// list or mapping error for resource sources.
    pub async fn resolve_options(
        &self,
        source: &OptionSource,
        t: &impl Translate,
    ) -> Result<Vec<ResolvedOption>, ApiError> {
        match *source {
            OptionSource::Dictionary { code } => dictionary::lookup(code)
                .map(|items| translate_items(items, t))
                .ok_or_else(|| ApiError::UnknownDictionary(code.to_owned())),
            OptionSource::Resource { resource, label_field, value_field, key_field } => {
                let api = self.dynamic(resource);
                let mut records = Vec::new();
                let mut page = 1;
                loop {
                    let batch = api.list(&ListParams::page(page, SOURCE_PAGE_SIZE)).await?;
                    let fetched = batch.items.len();
                    records.extend(batch.items);
                    if fetched == 0 || records.len() as u64 >= batch.total {
                        break;
                    }
                    page += 1;
                }
                tracing::debug!(%resource, count = records.len(), "resolved option source");
                map_options(&records, label_field, value_field, key_field)
            }
        }
    }

    /// Options for one form field: its source if it has one, else its
    /// static options.
    ///
    /// # Errors
    ///
    /// As [`Self::resolve_options`].
    pub async fn field_options(
        &self,
        field: &FieldDescriptor,
        t: &impl Translate,
    ) -> Result<Vec<ResolvedOption>, ApiError> {
        match &field.source {
            Some(source) => self.resolve_options(source, t).await,
            None => Ok(translate_items(field.options, t)),
        }
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod tests;
