//! Page-object descriptors.
//!
//! A page object is either a page (`url`) or an element on a page (`locator`
//! plus `locator_type`). `po_id` points at the parent page object.

use serde_json::{Map, Value};

use super::{ResourceKind, ResourceSchema};
use crate::descriptor::{ColumnDescriptor, ComponentKind, FieldDescriptor, OptionItem, Scalar};
use crate::form::FieldError;
use crate::rules::{RuleKind, is_blank, rule};

pub const LOCATOR_TYPE_OPTIONS: &[OptionItem] = &[
    OptionItem::new("common.pageobject.by_id", Scalar::Str("id")),
    OptionItem::new("common.pageobject.by_css", Scalar::Str("css")),
    OptionItem::new("common.pageobject.by_xpath", Scalar::Str("xpath")),
];

const RELATIVE_OPTIONS: &[OptionItem] = &[
    OptionItem::new("common.yes", Scalar::Bool(true)),
    OptionItem::new("common.no", Scalar::Bool(false)),
];

pub const COLUMNS: &[ColumnDescriptor] = &[
    ColumnDescriptor::new("common.pageobject.po_id", "po_id", 110),
    ColumnDescriptor::new("common.pageobject.name", "name", 110),
    ColumnDescriptor::new("common.pageobject.url", "url", 110),
    ColumnDescriptor::new("common.pageobject.locator", "locator", 110),
    ColumnDescriptor::new("common.pageobject.locator_type", "locator_type", 110),
    ColumnDescriptor::new("common.pageobject.create_time", "created_at", 180),
];

pub const SEARCH_FORM: &[FieldDescriptor] = &[FieldDescriptor::input("name", "common.pageobject.name").with_span(6)];

pub const EDIT_FORM: &[FieldDescriptor] = &[
    FieldDescriptor::input("id", "id").hidden(),
    FieldDescriptor::input("po_id", "po_id").with_rule(rule(RuleKind::Integer, false)).hidden(),
    FieldDescriptor::input("name", "common.pageobject.name").with_rule(rule(RuleKind::Required, true)),
    FieldDescriptor::input("url", "common.pageobject.url"),
    FieldDescriptor::input("locator", "common.pageobject.locator"),
    FieldDescriptor::new("locator_type", "common.pageobject.locator_type", ComponentKind::Select)
        .with_options(LOCATOR_TYPE_OPTIONS)
        .with_span(6),
    FieldDescriptor::new("is_relative", "common.pageobject.is_relative", ComponentKind::RadioButtonGroup)
        .with_default(Scalar::Bool(false))
        .with_options(RELATIVE_OPTIONS),
    FieldDescriptor::input("created_at", "created_at").hidden(),
];

pub static SCHEMA: ResourceSchema = ResourceSchema {
    kind: ResourceKind::PageObject,
    columns: COLUMNS,
    search_form: SEARCH_FORM,
    edit_form: EDIT_FORM,
    derived_fields: &["created_at"],
};

/// A page object needs a `url`, or else a `locator` or `locator_type`.
pub(crate) fn cross_check(values: &Map<String, Value>) -> Option<FieldError> {
    let blank = |key: &str| values.get(key).is_none_or(is_blank);
    if blank("url") && blank("locator") && blank("locator_type") {
        return Some(FieldError::new("url", "form.urlOrLocator", "url_or_locator"));
    }
    None
}
