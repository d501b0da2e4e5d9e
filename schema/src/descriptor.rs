//! Column and field descriptors.
//!
//! DESIGN
//! ======
//! Every descriptor is built with `const fn` constructors so resource tables
//! can live in `static` items. Labels and titles are i18n keys; literal
//! labels (e.g. `"id"`) pass through translation unchanged.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::i18n::Translate;
use crate::resources::ResourceKind;
use crate::rules::Rule;
use crate::status::{self, DisplayValue};

// =============================================================================
// COMPONENTS
// =============================================================================

/// Form widget used to edit a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ComponentKind {
    Input,
    Select,
    TreeSelect,
    RadioButtonGroup,
    ApiSelect,
    DictSelect,
}

impl ComponentKind {
    /// Whether the widget pulls its choices from an [`OptionSource`].
    #[must_use]
    pub fn uses_source(self) -> bool {
        matches!(self, Self::TreeSelect | Self::ApiSelect | Self::DictSelect)
    }

    /// Whether the widget picks from a static option list.
    #[must_use]
    pub fn uses_static_options(self) -> bool {
        matches!(self, Self::Select | Self::RadioButtonGroup)
    }
}

// =============================================================================
// VALUES AND OPTIONS
// =============================================================================

/// A constant value usable in static descriptors (option values, defaults).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Scalar {
    Int(i64),
    Bool(bool),
    Str(&'static str),
}

impl Scalar {
    /// Whether a submitted JSON value selects this scalar.
    ///
    /// Numeric strings match integers, since form values often arrive as text.
    #[must_use]
    pub fn matches(self, value: &Value) -> bool {
        match (self, value) {
            (Self::Int(i), Value::Number(n)) => n.as_i64() == Some(i),
            (Self::Int(i), Value::String(s)) => s.trim().parse::<i64>() == Ok(i),
            (Self::Bool(b), Value::Bool(v)) => b == *v,
            (Self::Str(s), Value::String(v)) => s == v,
            _ => false,
        }
    }

    #[must_use]
    pub fn to_value(self) -> Value {
        match self {
            Self::Int(i) => Value::from(i),
            Self::Bool(b) => Value::Bool(b),
            Self::Str(s) => Value::from(s),
        }
    }
}

/// One choice of a `Select` or `RadioButtonGroup`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionItem {
    /// i18n key or literal label.
    pub label: &'static str,
    pub value: Scalar,
}

impl OptionItem {
    #[must_use]
    pub const fn new(label: &'static str, value: Scalar) -> Self {
        Self { label, value }
    }
}

/// Where a dependent select field gets its choices.
///
/// The descriptor only names the source and the field mapping; fetching is up
/// to whoever renders the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum OptionSource {
    /// Another resource's `list` call.
    Resource {
        resource: ResourceKind,
        label_field: &'static str,
        value_field: &'static str,
        key_field: &'static str,
    },
    /// A dictionary lookup by code (see [`crate::dictionary`]).
    Dictionary { code: &'static str },
}

// =============================================================================
// COLUMNS
// =============================================================================

/// Pure cell renderers a column may request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CellRender {
    /// Enabled/disabled tag from a `1/0` or boolean flag.
    StatusTag,
    /// Tag whose text and color are both the raw task status.
    TaskStatusTag,
}

impl CellRender {
    /// Render a raw cell value.
    #[must_use]
    pub fn apply(self, raw: Option<&Value>, t: &impl Translate) -> DisplayValue {
        match self {
            Self::StatusTag => {
                let tag = status::render_status(raw.unwrap_or(&Value::Null));
                DisplayValue::Tag { text: t.t(tag.label_key()), color: tag.tone().as_str().to_owned() }
            }
            Self::TaskStatusTag => match raw.and_then(Value::as_str) {
                Some(s) if !s.is_empty() => DisplayValue::Tag { text: s.to_owned(), color: s.to_owned() },
                _ => DisplayValue::Text(String::new()),
            },
        }
    }
}

/// One table column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnDescriptor {
    /// i18n key of the column header.
    pub title: &'static str,
    /// Record field shown in the column.
    pub data_index: &'static str,
    pub width: u16,
    pub render: Option<CellRender>,
}

impl ColumnDescriptor {
    #[must_use]
    pub const fn new(title: &'static str, data_index: &'static str, width: u16) -> Self {
        Self { title, data_index, width, render: None }
    }

    #[must_use]
    pub const fn with_render(self, render: CellRender) -> Self {
        Self { render: Some(render), ..self }
    }

    /// Cell content for one record.
    ///
    /// Columns without a renderer show the raw value as text; missing and
    /// `null` values show as empty text.
    #[must_use]
    pub fn display(&self, record: &Map<String, Value>, t: &impl Translate) -> DisplayValue {
        let raw = record.get(self.data_index);
        match self.render {
            Some(render) => render.apply(raw, t),
            None => DisplayValue::Text(plain_text(raw)),
        }
    }
}

fn plain_text(raw: Option<&Value>) -> String {
    match raw {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => other.to_string(),
    }
}

// =============================================================================
// FIELDS
// =============================================================================

/// One search-form or edit-form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Record key the field reads and writes.
    pub field: &'static str,
    /// i18n key or literal label.
    pub label: &'static str,
    pub component: ComponentKind,
    pub visible: bool,
    pub required: bool,
    pub default_value: Option<Scalar>,
    pub options: &'static [OptionItem],
    pub rule: Option<Rule>,
    pub source: Option<OptionSource>,
    /// Grid column span in the form layout.
    pub span: Option<u8>,
}

impl FieldDescriptor {
    #[must_use]
    pub const fn new(field: &'static str, label: &'static str, component: ComponentKind) -> Self {
        Self {
            field,
            label,
            component,
            visible: true,
            required: false,
            default_value: None,
            options: &[],
            rule: None,
            source: None,
            span: None,
        }
    }

    #[must_use]
    pub const fn input(field: &'static str, label: &'static str) -> Self {
        Self::new(field, label, ComponentKind::Input)
    }

    #[must_use]
    pub const fn hidden(self) -> Self {
        Self { visible: false, ..self }
    }

    #[must_use]
    pub const fn require(self) -> Self {
        Self { required: true, ..self }
    }

    #[must_use]
    pub const fn with_default(self, value: Scalar) -> Self {
        Self { default_value: Some(value), ..self }
    }

    #[must_use]
    pub const fn with_options(self, options: &'static [OptionItem]) -> Self {
        Self { options, ..self }
    }

    /// Attach a validation rule. A required rule also marks the field required.
    #[must_use]
    pub const fn with_rule(self, rule: Rule) -> Self {
        Self { rule: Some(rule), required: self.required || rule.required, ..self }
    }

    #[must_use]
    pub const fn with_source(self, source: OptionSource) -> Self {
        Self { source: Some(source), ..self }
    }

    #[must_use]
    pub const fn with_span(self, span: u8) -> Self {
        Self { span: Some(span), ..self }
    }
}

#[cfg(test)]
#[path = "descriptor_test.rs"]
mod tests;
