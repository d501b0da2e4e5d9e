//! Wire shapes of the runner API records.
//!
//! DESIGN
//! ======
//! `id` is absent on records that have not been created yet. Server-derived
//! fields (`create_time`, `created_at`, task timings) are optional on input
//! and filled in by the server. Timestamps travel as `YYYY-MM-DD HH:MM:SS`.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::resources::ResourceKind;

/// Common surface of every resource record.
pub trait Record: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const KIND: ResourceKind;

    fn id(&self) -> Option<i64>;

    fn set_id(&mut self, id: i64);
}

macro_rules! impl_record {
    ($ty:ty, $kind:expr) => {
        impl Record for $ty {
            const KIND: ResourceKind = $kind;

            fn id(&self) -> Option<i64> {
                self.id
            }

            fn set_id(&mut self, id: i64) {
                self.id = Some(id);
            }
        }
    };
}

fn default_true() -> bool {
    true
}

fn default_suite_status() -> String {
    "draft".to_owned()
}

// =============================================================================
// RECORDS
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    /// `1` enabled, `0` disabled; other values render as disabled.
    #[serde(default)]
    pub status: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub create_time: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    #[serde(alias = "name")]
    pub task_name: String,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub report_url: Option<String>,
    #[serde(default)]
    pub start_time: Option<String>,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub executor: Option<String>,
    /// Id of the test suite the task runs.
    #[serde(default, alias = "suite_id")]
    pub test_suite: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageObject {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Parent page object.
    #[serde(default)]
    pub po_id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub locator: Option<String>,
    /// One of `id`, `css`, `xpath`.
    #[serde(default)]
    pub locator_type: Option<String>,
    #[serde(default)]
    pub is_relative: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Case {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    /// Page object the case acts on.
    #[serde(default, alias = "po_id")]
    pub po: Option<i64>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub url_override: i32,
    #[serde(default)]
    pub custom_locator: Option<String>,
    #[serde(default)]
    pub custom_locator_type: Option<String>,
    #[serde(default, alias = "action")]
    pub action_type: Option<String>,
    #[serde(default)]
    pub action_value: Option<String>,
    #[serde(default)]
    pub order: i64,
    #[serde(default)]
    pub assert_type: Option<String>,
    #[serde(default)]
    pub assert_expression: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suite {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub name: String,
    #[serde(default)]
    pub environment: Option<String>,
    #[serde(default = "default_suite_status")]
    pub status: String,
    /// Case ids in run order.
    #[serde(default)]
    pub case_id: Vec<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Default for Suite {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            environment: None,
            status: default_suite_status(),
            case_id: Vec::new(),
            created_at: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub account: String,
    #[serde(default)]
    pub nickname: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub project_id: Option<i64>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default = "default_true")]
    pub status: bool,
    #[serde(default)]
    pub remark: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

impl Default for Account {
    fn default() -> Self {
        Self {
            id: None,
            account: String::new(),
            nickname: None,
            email: None,
            project_id: None,
            role: None,
            status: true,
            remark: None,
            created_at: None,
        }
    }
}

impl_record!(Project, ResourceKind::Project);
impl_record!(Task, ResourceKind::Task);
impl_record!(PageObject, ResourceKind::PageObject);
impl_record!(Case, ResourceKind::Case);
impl_record!(Account, ResourceKind::Account);
impl_record!(Suite, ResourceKind::Suite);

#[cfg(test)]
#[path = "records_test.rs"]
mod tests;
