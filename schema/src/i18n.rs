//! Translation catalogs.
//!
//! Locale files are nested YAML maps flattened into dotted keys
//! (`common: { enableText: Enabled }` becomes `common.enableText`). Unknown
//! keys translate to themselves, so literal labels need no catalog entry.

use std::collections::HashMap;
use std::str::FromStr;

use serde_yaml::Value as YamlValue;

const EN_YAML: &str = include_str!("../locales/en.yaml");
const ZH_CN_YAML: &str = include_str!("../locales/zh-CN.yaml");

/// Key-to-text lookup used when rendering descriptors.
pub trait Translate {
    fn t(&self, key: &str) -> String;
}

/// Translator that returns every key unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyTranslator;

impl Translate for KeyTranslator {
    fn t(&self, key: &str) -> String {
        key.to_owned()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    #[error("locale YAML parse failed: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid catalog entry at `{0}`")]
    InvalidEntry(String),
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
}

/// Locales shipped with the crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    En,
    ZhCn,
}

impl Locale {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::En => "en",
            Self::ZhCn => "zh-CN",
        }
    }

    fn source(self) -> &'static str {
        match self {
            Self::En => EN_YAML,
            Self::ZhCn => ZH_CN_YAML,
        }
    }
}

impl FromStr for Locale {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "en" | "en-US" => Ok(Self::En),
            "zh-CN" | "zh_CN" | "zh" => Ok(Self::ZhCn),
            other => Err(CatalogError::UnknownLocale(other.to_owned())),
        }
    }
}

/// Flattened translation table for one locale.
#[derive(Debug, Clone)]
pub struct Catalog {
    locale: String,
    entries: HashMap<String, String>,
}

impl Catalog {
    /// Load one of the bundled locales.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the bundled file is malformed.
    pub fn builtin(locale: Locale) -> Result<Self, CatalogError> {
        Self::from_yaml(locale.as_str(), locale.source())
    }

    /// Parse a nested YAML map into a catalog.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError::Parse`] for invalid YAML and
    /// [`CatalogError::InvalidEntry`] for non-string keys or list values.
    pub fn from_yaml(locale: &str, source: &str) -> Result<Self, CatalogError> {
        let root: YamlValue = serde_yaml::from_str(source)?;
        let mut entries = HashMap::new();
        flatten("", &root, &mut entries)?;
        Ok(Self { locale: locale.to_owned(), entries })
    }

    #[must_use]
    pub fn locale(&self) -> &str {
        &self.locale
    }

    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }
}

impl Translate for Catalog {
    fn t(&self, key: &str) -> String {
        self.entries.get(key).cloned().unwrap_or_else(|| key.to_owned())
    }
}

fn flatten(prefix: &str, node: &YamlValue, out: &mut HashMap<String, String>) -> Result<(), CatalogError> {
    match node {
        YamlValue::Mapping(map) => {
            for (k, v) in map {
                let Some(k) = k.as_str() else {
                    return Err(CatalogError::InvalidEntry(prefix.to_owned()));
                };
                let key = if prefix.is_empty() { k.to_owned() } else { format!("{prefix}.{k}") };
                flatten(&key, v, out)?;
            }
            Ok(())
        }
        YamlValue::String(s) => {
            out.insert(prefix.to_owned(), s.clone());
            Ok(())
        }
        YamlValue::Number(n) => {
            out.insert(prefix.to_owned(), n.to_string());
            Ok(())
        }
        YamlValue::Bool(b) => {
            out.insert(prefix.to_owned(), b.to_string());
            Ok(())
        }
        YamlValue::Null => Ok(()),
        YamlValue::Sequence(_) | YamlValue::Tagged(_) => Err(CatalogError::InvalidEntry(prefix.to_owned())),
    }
}

#[cfg(test)]
#[path = "i18n_test.rs"]
mod tests;
