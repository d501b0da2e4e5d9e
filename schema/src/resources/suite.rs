//! Test suite descriptors.
//!
//! A suite is an ordered list of cases; tasks point at one suite.

use super::{ResourceKind, ResourceSchema};
use crate::descriptor::{ColumnDescriptor, ComponentKind, FieldDescriptor, OptionSource, Scalar};
use crate::rules::{RuleKind, rule};

pub const COLUMNS: &[ColumnDescriptor] = &[
    ColumnDescriptor::new("common.suite.name", "name", 110),
    ColumnDescriptor::new("common.suite.environment", "environment", 110),
    ColumnDescriptor::new("common.suite.status", "status", 110),
    ColumnDescriptor::new("common.suite.case_id", "case_id", 180),
    ColumnDescriptor::new("common.suite.createTime", "created_at", 180),
];

pub const SEARCH_FORM: &[FieldDescriptor] = &[
    FieldDescriptor::input("name", "common.suite.name").with_span(6),
    FieldDescriptor::input("environment", "common.suite.environment").with_span(6),
];

pub const EDIT_FORM: &[FieldDescriptor] = &[
    FieldDescriptor::input("id", "id").hidden(),
    FieldDescriptor::input("name", "common.suite.name").with_rule(rule(RuleKind::Required, true)),
    FieldDescriptor::input("environment", "common.suite.environment"),
    FieldDescriptor::input("status", "common.suite.status").with_default(Scalar::Str("draft")),
    FieldDescriptor::new("case_id", "common.suite.case_id", ComponentKind::ApiSelect)
        .with_rule(rule(RuleKind::Integer, false))
        .with_source(OptionSource::Resource {
            resource: ResourceKind::Case,
            label_field: "id",
            value_field: "id",
            key_field: "id",
        }),
];

pub static SCHEMA: ResourceSchema = ResourceSchema {
    kind: ResourceKind::Suite,
    columns: COLUMNS,
    search_form: SEARCH_FORM,
    edit_form: EDIT_FORM,
    derived_fields: &["created_at"],
};
