//! Account descriptors.

use super::{ResourceKind, ResourceSchema};
use crate::descriptor::{
    CellRender, ColumnDescriptor, ComponentKind, FieldDescriptor, OptionItem, OptionSource, Scalar,
};
use crate::rules::{RuleKind, rule};

pub const STATUS_OPTIONS: &[OptionItem] = &[
    OptionItem::new("common.enableText", Scalar::Bool(true)),
    OptionItem::new("common.disableText", Scalar::Bool(false)),
];

pub const COLUMNS: &[ColumnDescriptor] = &[
    ColumnDescriptor::new("common.account.account", "account", 120),
    ColumnDescriptor::new("common.account.nickname", "nickname", 120),
    ColumnDescriptor::new("common.account.email", "email", 160),
    ColumnDescriptor::new("common.account.project", "project_id", 120),
    ColumnDescriptor::new("common.account.role", "role", 120),
    ColumnDescriptor::new("common.account.status", "status", 110).with_render(CellRender::StatusTag),
    ColumnDescriptor::new("common.account.createTime", "created_at", 180),
];

pub const SEARCH_FORM: &[FieldDescriptor] = &[
    FieldDescriptor::input("account", "common.account.account").with_span(6),
    FieldDescriptor::input("nickname", "common.account.nickname").with_span(6),
    FieldDescriptor::new("status", "common.account.status", ComponentKind::Select)
        .with_options(STATUS_OPTIONS)
        .with_span(6),
];

pub const EDIT_FORM: &[FieldDescriptor] = &[
    FieldDescriptor::input("id", "id").hidden(),
    FieldDescriptor::input("account", "common.account.account").with_rule(rule(RuleKind::Required, true)),
    FieldDescriptor::input("nickname", "common.account.nickname"),
    FieldDescriptor::input("email", "common.account.email").with_rule(rule(RuleKind::Email, false)),
    FieldDescriptor::new("project_id", "common.account.project", ComponentKind::ApiSelect).with_source(
        OptionSource::Resource {
            resource: ResourceKind::Project,
            label_field: "name",
            value_field: "id",
            key_field: "id",
        },
    )
    .with_rule(rule(RuleKind::Integer, false)),
    FieldDescriptor::new("role", "common.account.role", ComponentKind::DictSelect)
        .require()
        .with_source(OptionSource::Dictionary { code: "account_role" }),
    FieldDescriptor::new("status", "common.account.status", ComponentKind::RadioButtonGroup)
        .with_default(Scalar::Bool(true))
        .with_options(STATUS_OPTIONS),
    FieldDescriptor::input("remark", "common.account.remark"),
];

pub static SCHEMA: ResourceSchema = ResourceSchema {
    kind: ResourceKind::Account,
    columns: COLUMNS,
    search_form: SEARCH_FORM,
    edit_form: EDIT_FORM,
    derived_fields: &["created_at"],
};
