//! Table, search-form and edit-form descriptors for the runner console.
//!
//! This crate owns the shape of every console page: which columns a resource
//! table shows, which fields its quick-search and edit forms carry, and how
//! raw status values turn into display tags. It is shared by `client`,
//! `server` and `cli` and performs no I/O.
//!
//! Descriptors are `static` tables of `Copy` structs. Human-readable text is
//! stored as i18n keys and resolved through [`Translate`] at the edge.

pub mod descriptor;
pub mod dictionary;
pub mod form;
pub mod i18n;
pub mod records;
pub mod resources;
pub mod rules;
pub mod status;

pub use descriptor::{CellRender, ColumnDescriptor, ComponentKind, FieldDescriptor, OptionItem, OptionSource, Scalar};
pub use form::{FieldError, FormErrors, coerce_integers, validate_form};
pub use i18n::{Catalog, CatalogError, KeyTranslator, Locale, Translate};
pub use records::{Account, Case, PageObject, Project, Record, Suite, Task};
pub use resources::{API_ROOT, ResourceKind, ResourceSchema, UnknownResource};
pub use rules::{Rule, RuleKind, RuleViolation, as_integer, rule};
pub use status::{DisplayValue, StatusTag, Tone, render_status};
