//! UI-automation test case descriptors.

use super::pageobject::LOCATOR_TYPE_OPTIONS;
use super::{ResourceKind, ResourceSchema};
use crate::descriptor::{ColumnDescriptor, ComponentKind, FieldDescriptor, OptionItem, OptionSource, Scalar};
use crate::rules::{RuleKind, rule};

const URL_OVERRIDE_OPTIONS: &[OptionItem] = &[
    OptionItem::new("common.case.keepUrl", Scalar::Int(0)),
    OptionItem::new("common.case.overrideUrl", Scalar::Int(1)),
];

pub const COLUMNS: &[ColumnDescriptor] = &[
    ColumnDescriptor::new("common.case.url", "url", 110),
    ColumnDescriptor::new("common.case.url_override", "url_override", 110),
    ColumnDescriptor::new("common.case.po_id", "po", 110),
    ColumnDescriptor::new("common.case.action_type", "action_type", 110),
    ColumnDescriptor::new("common.case.action_value", "action_value", 110),
    ColumnDescriptor::new("common.case.order", "order", 110),
    ColumnDescriptor::new("common.case.assert_type", "assert_type", 110),
    ColumnDescriptor::new("common.case.assert_expression", "assert_expression", 110),
];

pub const SEARCH_FORM: &[FieldDescriptor] = &[FieldDescriptor::input("url", "common.case.url").with_span(6)];

pub const EDIT_FORM: &[FieldDescriptor] = &[
    FieldDescriptor::input("id", "id").hidden(),
    FieldDescriptor::new("po", "common.case.po_id", ComponentKind::TreeSelect).with_source(OptionSource::Resource {
        resource: ResourceKind::PageObject,
        label_field: "name",
        value_field: "id",
        key_field: "po_id",
    })
    .with_rule(rule(RuleKind::Integer, false)),
    FieldDescriptor::input("url", "common.case.url"),
    FieldDescriptor::new("url_override", "common.case.url_override", ComponentKind::RadioButtonGroup)
        .with_default(Scalar::Int(0))
        .with_options(URL_OVERRIDE_OPTIONS),
    FieldDescriptor::input("custom_locator", "common.case.custom_locator"),
    FieldDescriptor::new("custom_locator_type", "common.case.custom_locator_type", ComponentKind::Select)
        .with_options(LOCATOR_TYPE_OPTIONS)
        .with_span(6),
    FieldDescriptor::new("action_type", "common.case.action_type", ComponentKind::DictSelect)
        .with_source(OptionSource::Dictionary { code: "action_type" }),
    FieldDescriptor::input("action_value", "common.case.action_value"),
    FieldDescriptor::input("order", "common.case.order").with_rule(rule(RuleKind::Integer, true)),
    FieldDescriptor::input("assert_type", "common.case.assert_type"),
    FieldDescriptor::input("assert_expression", "common.case.assert_expression"),
];

pub static SCHEMA: ResourceSchema = ResourceSchema {
    kind: ResourceKind::Case,
    columns: COLUMNS,
    search_form: SEARCH_FORM,
    edit_form: EDIT_FORM,
    derived_fields: &[],
};
