//! Built-in dictionaries backing `DictSelect` fields.

use crate::descriptor::{OptionItem, Scalar};
use crate::resources::pageobject::LOCATOR_TYPE_OPTIONS;

const ACCOUNT_ROLE: &[OptionItem] = &[
    OptionItem::new("dict.role.admin", Scalar::Str("admin")),
    OptionItem::new("dict.role.tester", Scalar::Str("tester")),
    OptionItem::new("dict.role.viewer", Scalar::Str("viewer")),
];

const ACTION_TYPE: &[OptionItem] = &[
    OptionItem::new("input", Scalar::Str("input")),
    OptionItem::new("hover", Scalar::Str("hover")),
    OptionItem::new("click", Scalar::Str("click")),
];

const DICTIONARIES: &[(&str, &[OptionItem])] = &[
    ("account_role", ACCOUNT_ROLE),
    ("action_type", ACTION_TYPE),
    ("locator_type", LOCATOR_TYPE_OPTIONS),
];

/// Options registered under a dictionary code.
#[must_use]
pub fn lookup(code: &str) -> Option<&'static [OptionItem]> {
    DICTIONARIES.iter().find(|(c, _)| *c == code).map(|(_, items)| *items)
}

/// All registered dictionary codes.
pub fn codes() -> impl Iterator<Item = &'static str> {
    DICTIONARIES.iter().map(|(c, _)| *c)
}

#[cfg(test)]
#[path = "dictionary_test.rs"]
mod tests;
