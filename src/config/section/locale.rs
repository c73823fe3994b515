//! `[locales]` configuration.
//!
//! Maps a URL path prefix to the language served under it.
//!
//! ```toml
//! [locales."/"]
//! lang = "zh-CN"
//!
//! [locales."/en/"]
//! lang = "en-US"
//! title = "Young sun"
//! ```

use regex::Regex;
use serde::de::{MapAccess, Visitor};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::sync::LazyLock;

use crate::config::{ConfigDiagnostics, FieldPath};

/// Per-locale metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocaleConfig {
    /// BCP-47 language tag, e.g. `zh-CN`.
    pub lang: String,

    /// Site title override for this locale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Site description override for this locale.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl LocaleConfig {
    pub fn new(lang: impl Into<String>) -> Self {
        Self {
            lang: lang.into(),
            title: None,
            description: None,
        }
    }
}

/// Path prefix → locale, kept sorted by prefix.
///
/// Deserialization rejects a prefix that appears twice; TOML already does,
/// JSON objects would otherwise keep the last one silently.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Locales(BTreeMap<String, LocaleConfig>);

impl Locales {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a locale, returning the one previously under `prefix`.
    pub fn insert(&mut self, prefix: impl Into<String>, locale: LocaleConfig) -> Option<LocaleConfig> {
        self.0.insert(prefix.into(), locale)
    }

    pub fn get(&self, prefix: &str) -> Option<&LocaleConfig> {
        self.0.get(prefix)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &LocaleConfig)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Language serving `path`: the entry with the longest matching prefix.
    ///
    /// ```ignore
    /// // locales: "/" → zh-CN, "/en/" → en-US
    /// locales.lang_for("/en/about/") -> Some("en-US")
    /// locales.lang_for("/about/")    -> Some("zh-CN")
    /// ```
    pub fn lang_for(&self, path: &str) -> Option<&str> {
        self.locale_for(path).map(|locale| locale.lang.as_str())
    }

    pub fn locale_for(&self, path: &str) -> Option<&LocaleConfig> {
        self.0
            .iter()
            .filter(|(prefix, _)| path.starts_with(prefix.as_str()))
            .max_by_key(|(prefix, _)| prefix.len())
            .map(|(_, locale)| locale)
    }

    /// Validate prefixes and language tags.
    pub fn validate(&self, field: &FieldPath, diag: &mut ConfigDiagnostics) {
        for (prefix, locale) in &self.0 {
            let path = field.key(prefix);

            if prefix.is_empty() {
                diag.error_with_hint(path, "locale prefix is empty", "use \"/\" for the root locale");
                continue;
            }
            if !prefix.starts_with('/') {
                diag.error_with_hint(
                    path.clone(),
                    format!("locale prefix {prefix:?} must start with `/`"),
                    format!("use \"/{}/\"", prefix.trim_matches('/')),
                );
            }
            if !is_language_tag(&locale.lang) {
                diag.warn(
                    path.key("lang"),
                    format!("{:?} does not look like a BCP-47 language tag", locale.lang),
                );
            }
        }
    }
}

impl FromIterator<(String, LocaleConfig)> for Locales {
    fn from_iter<I: IntoIterator<Item = (String, LocaleConfig)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl<'de> Deserialize<'de> for Locales {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct LocalesVisitor;

        impl<'de> Visitor<'de> for LocalesVisitor {
            type Value = Locales;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of path prefix to locale")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Locales, A::Error> {
                let mut locales = BTreeMap::new();
                while let Some((prefix, locale)) = map.next_entry::<String, LocaleConfig>()? {
                    if locales.contains_key(&prefix) {
                        return Err(serde::de::Error::custom(format!(
                            "duplicate locale prefix {prefix:?}"
                        )));
                    }
                    locales.insert(prefix, locale);
                }
                Ok(Locales(locales))
            }
        }

        deserializer.deserialize_map(LocalesVisitor)
    }
}

/// Loose BCP-47 shape check: a 2-8 letter primary subtag followed by
/// alphanumeric subtags of up to 8 characters.
fn is_language_tag(tag: &str) -> bool {
    static RE_LANGUAGE_TAG: LazyLock<Regex> =
        LazyLock::new(|| Regex::new(r"^[A-Za-z]{2,8}(-[A-Za-z0-9]{1,8})*$").unwrap());
    RE_LANGUAGE_TAG.is_match(tag)
}
