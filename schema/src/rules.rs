//! Field validation rules.

use serde::Serialize;
use serde_json::Value;

/// Rule kinds offered to form builders through [`rule`]. The built-in
/// resource forms use `Required`, `Email` and `Integer`; the rest serve
/// forms defined by callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RuleKind {
    Required,
    Email,
    Phone,
    Url,
    Number,
    /// Whole number, or a list of them for multi-selects. Numeric strings
    /// such as `"3"` are accepted.
    Integer,
}

/// A validation rule attached to a form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub kind: RuleKind,
    pub required: bool,
}

/// Build a rule of `kind`, optionally rejecting blank values.
#[must_use]
pub const fn rule(kind: RuleKind, required: bool) -> Rule {
    Rule { kind, required }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleViolation {
    Missing,
    Invalid(RuleKind),
}

impl RuleViolation {
    /// i18n key of the message shown next to the field.
    #[must_use]
    pub fn message_key(self) -> &'static str {
        match self {
            Self::Missing | Self::Invalid(RuleKind::Required) => "form.required",
            Self::Invalid(RuleKind::Email) => "form.invalidEmail",
            Self::Invalid(RuleKind::Phone) => "form.invalidPhone",
            Self::Invalid(RuleKind::Url) => "form.invalidUrl",
            Self::Invalid(RuleKind::Number) => "form.invalidNumber",
            Self::Invalid(RuleKind::Integer) => "form.invalidInteger",
        }
    }

    /// Machine-readable violation code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Missing | Self::Invalid(RuleKind::Required) => "missing",
            Self::Invalid(RuleKind::Email) => "invalid_email",
            Self::Invalid(RuleKind::Phone) => "invalid_phone",
            Self::Invalid(RuleKind::Url) => "invalid_url",
            Self::Invalid(RuleKind::Number) => "invalid_number",
            Self::Invalid(RuleKind::Integer) => "invalid_integer",
        }
    }
}

impl Rule {
    /// Check one submitted value.
    ///
    /// # Errors
    ///
    /// Returns [`RuleViolation::Missing`] for a blank value under a required
    /// rule, and [`RuleViolation::Invalid`] when a present value does not
    /// match the rule kind. Blank values pass optional rules.
    pub fn check(&self, value: &Value) -> Result<(), RuleViolation> {
        if is_blank(value) {
            return if self.required { Err(RuleViolation::Missing) } else { Ok(()) };
        }
        let ok = match self.kind {
            RuleKind::Required => true,
            RuleKind::Email => value.as_str().is_some_and(is_email),
            RuleKind::Phone => value.as_str().is_some_and(is_phone),
            RuleKind::Url => value.as_str().is_some_and(is_url),
            RuleKind::Number => match value {
                Value::Number(_) => true,
                Value::String(s) => s.trim().parse::<f64>().is_ok(),
                _ => false,
            },
            RuleKind::Integer => match value {
                Value::Array(items) => items.iter().all(|item| as_integer(item).is_some()),
                other => as_integer(other).is_some(),
            },
        };
        if ok { Ok(()) } else { Err(RuleViolation::Invalid(self.kind)) }
    }
}

/// `null`, empty or whitespace-only strings, and empty arrays count as blank.
#[must_use]
pub fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.trim().is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Integer behind a JSON number or a trimmed numeric string.
#[must_use]
pub fn as_integer(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn is_email(raw: &str) -> bool {
    let email = raw.trim();
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let parts = email.split('@').collect::<Vec<_>>();
    if parts.len() != 2 || parts[0].is_empty() {
        return false;
    }
    let domain = parts[1];
    domain.contains('.') && !domain.starts_with('.') && !domain.ends_with('.')
}

fn is_phone(raw: &str) -> bool {
    let digits = raw.trim().strip_prefix('+').unwrap_or(raw.trim());
    let digits = digits.replace(['-', ' '], "");
    (7..=15).contains(&digits.len()) && digits.chars().all(|c| c.is_ascii_digit())
}

fn is_url(raw: &str) -> bool {
    url::Url::parse(raw.trim()).is_ok_and(|url| {
        matches!(url.scheme(), "http" | "https") && url.host_str().is_some_and(|host| !host.is_empty())
    })
}

#[cfg(test)]
#[path = "rules_test.rs"]
mod tests;
