//! Task descriptors.
//!
//! Tasks are created from the console but run by the executor, which fills
//! in status, report link and timings.

use super::{ResourceKind, ResourceSchema};
use crate::descriptor::{CellRender, ColumnDescriptor, ComponentKind, FieldDescriptor, OptionSource};
use crate::rules::{RuleKind, rule};

pub const COLUMNS: &[ColumnDescriptor] = &[
    ColumnDescriptor::new("common.tasks.task_name", "task_name", 110),
    ColumnDescriptor::new("common.tasks.status", "status", 110).with_render(CellRender::TaskStatusTag),
    ColumnDescriptor::new("common.tasks.report_url", "report_url", 110),
    ColumnDescriptor::new("common.tasks.start_time", "start_time", 180),
    ColumnDescriptor::new("common.tasks.end_time", "end_time", 180),
    ColumnDescriptor::new("common.tasks.executor", "executor", 180),
];

pub const SEARCH_FORM: &[FieldDescriptor] = &[FieldDescriptor::input("task_name", "common.tasks.task_name").with_span(6)];

pub const EDIT_FORM: &[FieldDescriptor] = &[
    FieldDescriptor::input("id", "id").hidden(),
    FieldDescriptor::input("task_name", "common.tasks.task_name").with_rule(rule(RuleKind::Required, true)),
    FieldDescriptor::input("executor", "common.tasks.executor"),
    FieldDescriptor::new("test_suite", "common.tasks.test_suite", ComponentKind::ApiSelect)
        .with_rule(rule(RuleKind::Integer, false))
        .with_source(OptionSource::Resource {
            resource: ResourceKind::Suite,
            label_field: "name",
            value_field: "id",
            key_field: "id",
        }),
];

pub static SCHEMA: ResourceSchema = ResourceSchema {
    kind: ResourceKind::Task,
    columns: COLUMNS,
    search_form: SEARCH_FORM,
    edit_form: EDIT_FORM,
    derived_fields: &["status", "report_url", "start_time", "end_time"],
};
