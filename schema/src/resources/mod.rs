//! Resource registry.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each REST resource of the runner API has one descriptor module here. A
//! console page picks a [`ResourceKind`], hands its [`ResourceSchema`] to the
//! table/form layer and talks to `ResourceKind::path_prefix()` over HTTP.

pub mod account;
pub mod case;
pub mod pageobject;
pub mod project;
pub mod suite;
pub mod task;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::descriptor::{CellRender, ColumnDescriptor, ComponentKind, FieldDescriptor, OptionSource, Scalar};
use crate::form::{self, FormErrors};
use crate::i18n::Translate;
use crate::rules::Rule;

/// Path under which every resource prefix lives.
pub const API_ROOT: &str = "/runner/api/v1";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    Project,
    Task,
    Account,
    PageObject,
    Case,
    Suite,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown resource: {0}")]
pub struct UnknownResource(pub String);

impl ResourceKind {
    pub const ALL: [Self; 6] = [Self::Project, Self::Task, Self::Account, Self::PageObject, Self::Case, Self::Suite];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Task => "task",
            Self::Account => "account",
            Self::PageObject => "pageobject",
            Self::Case => "case",
            Self::Suite => "suite",
        }
    }

    /// REST path prefix, e.g. `/runner/api/v1/project`.
    #[must_use]
    pub fn path_prefix(self) -> &'static str {
        match self {
            Self::Project => "/runner/api/v1/project",
            Self::Task => "/runner/api/v1/task",
            Self::Account => "/runner/api/v1/account",
            Self::PageObject => "/runner/api/v1/pageobject",
            Self::Case => "/runner/api/v1/case",
            Self::Suite => "/runner/api/v1/suite",
        }
    }

    #[must_use]
    pub fn schema(self) -> &'static ResourceSchema {
        match self {
            Self::Project => &project::SCHEMA,
            Self::Task => &task::SCHEMA,
            Self::Account => &account::SCHEMA,
            Self::PageObject => &pageobject::SCHEMA,
            Self::Case => &case::SCHEMA,
            Self::Suite => &suite::SCHEMA,
        }
    }

    /// Validate a create/update payload: edit-form field rules first, then
    /// the resource's cross-field rules.
    ///
    /// # Errors
    ///
    /// Returns every violation found.
    pub fn validate(self, values: &Map<String, Value>) -> Result<(), FormErrors> {
        let mut errors = form::collect_errors(self.schema().edit_form, values);
        if self == Self::PageObject {
            errors.extend(pageobject::cross_check(values));
        }
        if errors.is_empty() { Ok(()) } else { Err(FormErrors(errors)) }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceKind {
    type Err = UnknownResource;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "project" => Ok(Self::Project),
            "task" => Ok(Self::Task),
            "account" => Ok(Self::Account),
            "pageobject" | "page-object" | "page_object" => Ok(Self::PageObject),
            "case" | "testcase" => Ok(Self::Case),
            "suite" | "testsuite" => Ok(Self::Suite),
            other => Err(UnknownResource(other.to_owned())),
        }
    }
}

// =============================================================================
// SCHEMA
// =============================================================================

/// The three descriptor tables of one resource.
#[derive(Debug)]
pub struct ResourceSchema {
    pub kind: ResourceKind,
    pub columns: &'static [ColumnDescriptor],
    pub search_form: &'static [FieldDescriptor],
    pub edit_form: &'static [FieldDescriptor],
    /// Fields the server fills in; shown in tables but never edited.
    pub derived_fields: &'static [&'static str],
}

impl ResourceSchema {
    #[must_use]
    pub fn column(&self, data_index: &str) -> Option<&ColumnDescriptor> {
        self.columns.iter().find(|c| c.data_index == data_index)
    }

    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.edit_form.iter().find(|f| f.field == name)
    }

    /// Whether a column is backed by an edit-form field or a derived field.
    #[must_use]
    pub fn is_backed(&self, data_index: &str) -> bool {
        self.field(data_index).is_some() || self.derived_fields.contains(&data_index)
    }

    /// Translate every label into a serializable copy.
    #[must_use]
    pub fn localize(&self, t: &impl Translate) -> LocalizedSchema {
        LocalizedSchema {
            resource: self.kind,
            path_prefix: self.kind.path_prefix(),
            columns: self
                .columns
                .iter()
                .map(|c| LocalizedColumn {
                    title: t.t(c.title),
                    data_index: c.data_index,
                    width: c.width,
                    render: c.render,
                })
                .collect(),
            search_form: localize_fields(self.search_form, t),
            edit_form: localize_fields(self.edit_form, t),
        }
    }
}

fn localize_fields(fields: &[FieldDescriptor], t: &impl Translate) -> Vec<LocalizedField> {
    fields
        .iter()
        .map(|f| LocalizedField {
            field: f.field,
            label: t.t(f.label),
            component: f.component,
            show: f.visible,
            required: f.required,
            default_value: f.default_value,
            options: f
                .options
                .iter()
                .map(|o| LocalizedOption { label: t.t(o.label), value: o.value })
                .collect(),
            rule: f.rule,
            api: f.source,
            col_span: f.span,
        })
        .collect()
}

// =============================================================================
// LOCALIZED EXPORT
// =============================================================================

/// Serializable, translated descriptor set handed to a rendering front end.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedSchema {
    pub resource: ResourceKind,
    pub path_prefix: &'static str,
    pub columns: Vec<LocalizedColumn>,
    pub search_form: Vec<LocalizedField>,
    pub edit_form: Vec<LocalizedField>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedColumn {
    pub title: String,
    pub data_index: &'static str,
    pub width: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub render: Option<CellRender>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalizedField {
    pub field: &'static str,
    pub label: String,
    pub component: ComponentKind,
    pub show: bool,
    pub required: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Scalar>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub options: Vec<LocalizedOption>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rule: Option<Rule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api: Option<OptionSource>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub col_span: Option<u8>,
}

#[derive(Debug, Clone, Serialize)]
pub struct LocalizedOption {
    pub label: String,
    pub value: Scalar,
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
