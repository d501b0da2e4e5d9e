//! Status-to-tag rendering.
//!
//! A raw status flag (`1/0`, `true/false`, or whatever the server sent) maps
//! to a two-state tag. The mapping is total: anything that does not coerce to
//! integer `1` renders as disabled.

use serde::Serialize;
use serde_json::Value;

/// Rendered cell content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DisplayValue {
    Text(String),
    Tag { text: String, color: String },
}

/// Visual tone of a status tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    Success,
    Error,
}

impl Tone {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

/// Result of [`render_status`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusTag {
    pub enabled: bool,
}

impl StatusTag {
    #[must_use]
    pub fn label_key(self) -> &'static str {
        if self.enabled { "common.enableText" } else { "common.disableText" }
    }

    #[must_use]
    pub fn tone(self) -> Tone {
        if self.enabled { Tone::Success } else { Tone::Error }
    }
}

/// Map a raw status value to an enabled/disabled tag.
///
/// Enabled iff the value coerces to integer `1` the way JavaScript's `~~v`
/// does: numbers truncate toward zero and wrap modulo 2^32, strings parse
/// as decimal or `0x`/`0o`/`0b` literals, and a one-element array stands for
/// its element. So `true`, `1.9`, `"1"`, `"0x1"`, `[1]` and `4294967297` are
/// enabled; `null`, `2`, `"yes"` and objects are not.
#[must_use]
pub fn render_status(value: &Value) -> StatusTag {
    StatusTag { enabled: to_int32(value) == 1 }
}

fn to_int32(value: &Value) -> i32 {
    wrap_int32(to_number(value))
}

fn to_number(value: &Value) -> f64 {
    match value {
        Value::Null => 0.0,
        Value::Bool(b) => f64::from(u8::from(*b)),
        Value::Number(n) => n.as_f64().unwrap_or(f64::NAN),
        Value::String(s) => parse_number(s),
        Value::Array(items) => match items.as_slice() {
            [] => 0.0,
            [only] => element_to_number(only),
            _ => f64::NAN,
        },
        Value::Object(_) => f64::NAN,
    }
}

/// An array converts through its joined text, so a lone element only keeps
/// its numeric meaning when its text is numeric.
fn element_to_number(item: &Value) -> f64 {
    match item {
        Value::Null => 0.0,
        Value::Bool(_) | Value::Object(_) => f64::NAN,
        other => to_number(other),
    }
}

fn parse_number(raw: &str) -> f64 {
    let text = raw.trim();
    if text.is_empty() {
        return 0.0;
    }
    let radix = match text.get(..2) {
        Some("0x" | "0X") => 16,
        Some("0o" | "0O") => 8,
        Some("0b" | "0B") => 2,
        _ => return text.parse().unwrap_or(f64::NAN),
    };
    let digits = &text[2..];
    if digits.is_empty() {
        return f64::NAN;
    }
    digits
        .chars()
        .try_fold(0.0, |acc, c| c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d)))
        .unwrap_or(f64::NAN)
}

#[allow(clippy::cast_possible_truncation)]
fn wrap_int32(number: f64) -> i32 {
    const TWO_32: f64 = 4_294_967_296.0;
    if !number.is_finite() {
        return 0;
    }
    let wrapped = number.trunc().rem_euclid(TWO_32);
    let signed = if wrapped >= TWO_32 / 2.0 { wrapped - TWO_32 } else { wrapped };
    signed as i32
}

#[cfg(test)]
#[path = "status_test.rs"]
mod tests;
