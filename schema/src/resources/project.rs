//! Project descriptors.

use super::{ResourceKind, ResourceSchema};
use crate::descriptor::{CellRender, ColumnDescriptor, ComponentKind, FieldDescriptor, OptionItem, Scalar};
use crate::rules::{RuleKind, rule};

pub const STATUS_OPTIONS: &[OptionItem] = &[
    OptionItem::new("common.enableText", Scalar::Int(1)),
    OptionItem::new("common.disableText", Scalar::Int(0)),
];

pub const COLUMNS: &[ColumnDescriptor] = &[
    ColumnDescriptor::new("common.project.name", "name", 110),
    ColumnDescriptor::new("common.project.status", "status", 110).with_render(CellRender::StatusTag),
    ColumnDescriptor::new("common.project.createTime", "create_time", 180),
];

pub const SEARCH_FORM: &[FieldDescriptor] = &[
    FieldDescriptor::input("name", "common.project.name").with_span(6),
    FieldDescriptor::new("status", "common.project.status", ComponentKind::Select)
        .with_options(STATUS_OPTIONS)
        .with_span(6),
];

pub const EDIT_FORM: &[FieldDescriptor] = &[
    FieldDescriptor::input("id", "id").hidden(),
    FieldDescriptor::input("name", "common.project.name").with_rule(rule(RuleKind::Required, true)),
    FieldDescriptor::new("status", "common.project.status", ComponentKind::Select)
        .with_default(Scalar::Int(1))
        .with_options(STATUS_OPTIONS)
        .with_span(6),
];

pub static SCHEMA: ResourceSchema = ResourceSchema {
    kind: ResourceKind::Project,
    columns: COLUMNS,
    search_form: SEARCH_FORM,
    edit_form: EDIT_FORM,
    derived_fields: &["create_time"],
};
